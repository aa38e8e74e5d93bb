//! Handlers for the user reference endpoints.
//!
//! Users have no CRUD surface here; the API only needs them for author
//! pickers, so autocomplete is the whole module.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use pressroom_db::repositories::UserRepo;

use crate::error::AppResult;
use crate::handlers::AutocompleteParams;
use crate::middleware::auth::CurrentActor;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/users/autocomplete
pub async fn autocomplete_users(
    _actor: CurrentActor,
    State(state): State<AppState>,
    Query(params): Query<AutocompleteParams>,
) -> AppResult<impl IntoResponse> {
    let mut conn = state.pool.acquire().await?;
    let items = UserRepo::autocomplete(&mut conn, params.query.as_deref(), params.limit).await?;

    Ok(Json(DataResponse { data: items }))
}
