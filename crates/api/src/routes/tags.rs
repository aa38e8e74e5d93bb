//! Route definitions for tags, mounted at `/tags`.

use axum::routing::get;
use axum::Router;

use crate::handlers::tags;
use crate::state::AppState;

/// ```text
/// POST   /                  -> create_tag
/// GET    /                  -> list_tags
/// GET    /autocomplete      -> autocomplete_tags
/// GET    /{id}              -> get_tag
/// PUT    /{id}              -> update_tag
/// DELETE /{id}              -> delete_tag (admin only)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(tags::list_tags).post(tags::create_tag))
        .route("/autocomplete", get(tags::autocomplete_tags))
        .route(
            "/{id}",
            get(tags::get_tag).put(tags::update_tag).delete(tags::delete_tag),
        )
}
