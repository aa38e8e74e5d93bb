//! Handlers for the category endpoints.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use pressroom_core::error::CoreError;
use pressroom_core::types::DbId;
use pressroom_db::models::category::{CategoryFilter, CreateCategory, UpdateCategory};
use pressroom_db::repositories::CategoryRepo;
use pressroom_db::services::CategoryService;

use crate::error::{AppError, AppResult};
use crate::handlers::AutocompleteParams;
use crate::middleware::auth::CurrentActor;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/categories
pub async fn create_category(
    CurrentActor(actor): CurrentActor,
    State(state): State<AppState>,
    Json(input): Json<CreateCategory>,
) -> AppResult<impl IntoResponse> {
    let category = CategoryService::create(&state.pool, &actor, &input).await?;

    tracing::info!(category_id = %category.id, actor_id = ?actor.id, "Category created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: category })))
}

/// GET /api/v1/categories
pub async fn list_categories(
    _actor: CurrentActor,
    State(state): State<AppState>,
    Query(filter): Query<CategoryFilter>,
) -> AppResult<impl IntoResponse> {
    let mut conn = state.pool.acquire().await?;
    let page = CategoryRepo::find_all(&mut conn, &filter).await?;

    Ok(Json(DataResponse { data: page }))
}

/// GET /api/v1/categories/autocomplete
pub async fn autocomplete_categories(
    _actor: CurrentActor,
    State(state): State<AppState>,
    Query(params): Query<AutocompleteParams>,
) -> AppResult<impl IntoResponse> {
    let mut conn = state.pool.acquire().await?;
    let items =
        CategoryRepo::autocomplete(&mut conn, params.query.as_deref(), params.limit).await?;

    Ok(Json(DataResponse { data: items }))
}

/// GET /api/v1/categories/{id}
pub async fn get_category(
    _actor: CurrentActor,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let mut conn = state.pool.acquire().await?;
    let category = CategoryRepo::find_by_id(&mut conn, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "category",
            id,
        }))?;

    Ok(Json(DataResponse { data: category }))
}

/// PUT /api/v1/categories/{id}
pub async fn update_category(
    CurrentActor(actor): CurrentActor,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCategory>,
) -> AppResult<impl IntoResponse> {
    let category = CategoryService::update(&state.pool, &actor, id, &input).await?;

    tracing::info!(category_id = %id, actor_id = ?actor.id, "Category updated");

    Ok(Json(DataResponse { data: category }))
}

/// DELETE /api/v1/categories/{id}
///
/// Soft delete; rejected with 403 unless the caller is an admin.
pub async fn delete_category(
    CurrentActor(actor): CurrentActor,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    CategoryService::remove(&state.pool, &actor, id).await?;

    tracing::info!(category_id = %id, actor_id = ?actor.id, "Category deleted");

    Ok(Json(DataResponse { data: id }))
}
