//! Handlers for the article endpoints.
//!
//! Reads go straight to [`ArticleRepo`] on a pooled connection; mutations
//! go through [`ArticleService`], which owns the transaction and the
//! admin gate on delete.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use pressroom_core::error::CoreError;
use pressroom_core::types::DbId;
use pressroom_db::models::article::{ArticleFilter, CreateArticle, UpdateArticle};
use pressroom_db::repositories::ArticleRepo;
use pressroom_db::services::ArticleService;

use crate::error::{AppError, AppResult};
use crate::handlers::AutocompleteParams;
use crate::middleware::auth::CurrentActor;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/articles
pub async fn create_article(
    CurrentActor(actor): CurrentActor,
    State(state): State<AppState>,
    Json(input): Json<CreateArticle>,
) -> AppResult<impl IntoResponse> {
    let article = ArticleService::create(&state.pool, &actor, &input).await?;

    tracing::info!(article_id = %article.article.id, actor_id = ?actor.id, "Article created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: article })))
}

/// GET /api/v1/articles
///
/// Filtered, sorted, paginated list with the total match count.
pub async fn list_articles(
    _actor: CurrentActor,
    State(state): State<AppState>,
    Query(filter): Query<ArticleFilter>,
) -> AppResult<impl IntoResponse> {
    let mut conn = state.pool.acquire().await?;
    let page = ArticleRepo::find_all(&mut conn, &filter).await?;

    Ok(Json(DataResponse { data: page }))
}

/// GET /api/v1/articles/autocomplete
pub async fn autocomplete_articles(
    _actor: CurrentActor,
    State(state): State<AppState>,
    Query(params): Query<AutocompleteParams>,
) -> AppResult<impl IntoResponse> {
    let mut conn = state.pool.acquire().await?;
    let items =
        ArticleRepo::autocomplete(&mut conn, params.query.as_deref(), params.limit).await?;

    Ok(Json(DataResponse { data: items }))
}

/// GET /api/v1/articles/{id}
pub async fn get_article(
    _actor: CurrentActor,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let mut conn = state.pool.acquire().await?;
    let article = ArticleRepo::find_by_id(&mut conn, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "article",
            id,
        }))?;

    Ok(Json(DataResponse { data: article }))
}

/// PUT /api/v1/articles/{id}
pub async fn update_article(
    CurrentActor(actor): CurrentActor,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateArticle>,
) -> AppResult<impl IntoResponse> {
    let article = ArticleService::update(&state.pool, &actor, id, &input).await?;

    tracing::info!(article_id = %id, actor_id = ?actor.id, "Article updated");

    Ok(Json(DataResponse { data: article }))
}

/// DELETE /api/v1/articles/{id}
///
/// Soft delete; rejected with 403 unless the caller is an admin.
pub async fn delete_article(
    CurrentActor(actor): CurrentActor,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    ArticleService::remove(&state.pool, &actor, id).await?;

    tracing::info!(article_id = %id, actor_id = ?actor.id, "Article deleted");

    Ok(Json(DataResponse { data: id }))
}
