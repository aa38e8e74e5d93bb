//! Route definitions for users, mounted at `/users`.

use axum::routing::get;
use axum::Router;

use crate::handlers::users;
use crate::state::AppState;

/// ```text
/// GET /autocomplete -> autocomplete_users
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/autocomplete", get(users::autocomplete_users))
}
