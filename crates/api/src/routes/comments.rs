//! Route definitions for comments, mounted at `/comments`.

use axum::routing::get;
use axum::Router;

use crate::handlers::comments;
use crate::state::AppState;

/// ```text
/// POST   /                  -> create_comment
/// GET    /                  -> list_comments
/// GET    /autocomplete      -> autocomplete_comments
/// GET    /{id}              -> get_comment
/// PUT    /{id}              -> update_comment
/// DELETE /{id}              -> delete_comment (admin only)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(comments::list_comments).post(comments::create_comment),
        )
        .route("/autocomplete", get(comments::autocomplete_comments))
        .route(
            "/{id}",
            get(comments::get_comment)
                .put(comments::update_comment)
                .delete(comments::delete_comment),
        )
}
