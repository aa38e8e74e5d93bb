//! Handlers for the comment endpoints.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use pressroom_core::error::CoreError;
use pressroom_core::types::DbId;
use pressroom_db::models::comment::{CommentFilter, CreateComment, UpdateComment};
use pressroom_db::repositories::CommentRepo;
use pressroom_db::services::CommentService;

use crate::error::{AppError, AppResult};
use crate::handlers::AutocompleteParams;
use crate::middleware::auth::CurrentActor;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/comments
pub async fn create_comment(
    CurrentActor(actor): CurrentActor,
    State(state): State<AppState>,
    Json(input): Json<CreateComment>,
) -> AppResult<impl IntoResponse> {
    let comment = CommentService::create(&state.pool, &actor, &input).await?;

    tracing::info!(comment_id = %comment.comment.id, actor_id = ?actor.id, "Comment created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: comment })))
}

/// GET /api/v1/comments
pub async fn list_comments(
    _actor: CurrentActor,
    State(state): State<AppState>,
    Query(filter): Query<CommentFilter>,
) -> AppResult<impl IntoResponse> {
    let mut conn = state.pool.acquire().await?;
    let page = CommentRepo::find_all(&mut conn, &filter).await?;

    Ok(Json(DataResponse { data: page }))
}

/// GET /api/v1/comments/autocomplete
pub async fn autocomplete_comments(
    _actor: CurrentActor,
    State(state): State<AppState>,
    Query(params): Query<AutocompleteParams>,
) -> AppResult<impl IntoResponse> {
    let mut conn = state.pool.acquire().await?;
    let items =
        CommentRepo::autocomplete(&mut conn, params.query.as_deref(), params.limit).await?;

    Ok(Json(DataResponse { data: items }))
}

/// GET /api/v1/comments/{id}
pub async fn get_comment(
    _actor: CurrentActor,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let mut conn = state.pool.acquire().await?;
    let comment = CommentRepo::find_by_id(&mut conn, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "comment",
            id,
        }))?;

    Ok(Json(DataResponse { data: comment }))
}

/// PUT /api/v1/comments/{id}
pub async fn update_comment(
    CurrentActor(actor): CurrentActor,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateComment>,
) -> AppResult<impl IntoResponse> {
    let comment = CommentService::update(&state.pool, &actor, id, &input).await?;

    tracing::info!(comment_id = %id, actor_id = ?actor.id, "Comment updated");

    Ok(Json(DataResponse { data: comment }))
}

/// DELETE /api/v1/comments/{id}
///
/// Soft delete; rejected with 403 unless the caller is an admin.
pub async fn delete_comment(
    CurrentActor(actor): CurrentActor,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    CommentService::remove(&state.pool, &actor, id).await?;

    tracing::info!(comment_id = %id, actor_id = ?actor.id, "Comment deleted");

    Ok(Json(DataResponse { data: id }))
}
