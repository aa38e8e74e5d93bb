//! Handlers for the tag endpoints.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use pressroom_core::error::CoreError;
use pressroom_core::types::DbId;
use pressroom_db::models::tag::{CreateTag, TagFilter, UpdateTag};
use pressroom_db::repositories::TagRepo;
use pressroom_db::services::TagService;

use crate::error::{AppError, AppResult};
use crate::handlers::AutocompleteParams;
use crate::middleware::auth::CurrentActor;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/tags
pub async fn create_tag(
    CurrentActor(actor): CurrentActor,
    State(state): State<AppState>,
    Json(input): Json<CreateTag>,
) -> AppResult<impl IntoResponse> {
    let tag = TagService::create(&state.pool, &actor, &input).await?;

    tracing::info!(tag_id = %tag.id, actor_id = ?actor.id, "Tag created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: tag })))
}

/// GET /api/v1/tags
pub async fn list_tags(
    _actor: CurrentActor,
    State(state): State<AppState>,
    Query(filter): Query<TagFilter>,
) -> AppResult<impl IntoResponse> {
    let mut conn = state.pool.acquire().await?;
    let page = TagRepo::find_all(&mut conn, &filter).await?;

    Ok(Json(DataResponse { data: page }))
}

/// GET /api/v1/tags/autocomplete
pub async fn autocomplete_tags(
    _actor: CurrentActor,
    State(state): State<AppState>,
    Query(params): Query<AutocompleteParams>,
) -> AppResult<impl IntoResponse> {
    let mut conn = state.pool.acquire().await?;
    let items = TagRepo::autocomplete(&mut conn, params.query.as_deref(), params.limit).await?;

    Ok(Json(DataResponse { data: items }))
}

/// GET /api/v1/tags/{id}
pub async fn get_tag(
    _actor: CurrentActor,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let mut conn = state.pool.acquire().await?;
    let tag = TagRepo::find_by_id(&mut conn, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "tag", id }))?;

    Ok(Json(DataResponse { data: tag }))
}

/// PUT /api/v1/tags/{id}
pub async fn update_tag(
    CurrentActor(actor): CurrentActor,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateTag>,
) -> AppResult<impl IntoResponse> {
    let tag = TagService::update(&state.pool, &actor, id, &input).await?;

    tracing::info!(tag_id = %id, actor_id = ?actor.id, "Tag updated");

    Ok(Json(DataResponse { data: tag }))
}

/// DELETE /api/v1/tags/{id}
///
/// Soft delete; rejected with 403 unless the caller is an admin.
pub async fn delete_tag(
    CurrentActor(actor): CurrentActor,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    TagService::remove(&state.pool, &actor, id).await?;

    tracing::info!(tag_id = %id, actor_id = ?actor.id, "Tag deleted");

    Ok(Json(DataResponse { data: id }))
}
