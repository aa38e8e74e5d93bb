//! Route definitions for categories, mounted at `/categories`.

use axum::routing::get;
use axum::Router;

use crate::handlers::categories;
use crate::state::AppState;

/// ```text
/// POST   /                  -> create_category
/// GET    /                  -> list_categories
/// GET    /autocomplete      -> autocomplete_categories
/// GET    /{id}              -> get_category
/// PUT    /{id}              -> update_category
/// DELETE /{id}              -> delete_category (admin only)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(categories::list_categories).post(categories::create_category),
        )
        .route("/autocomplete", get(categories::autocomplete_categories))
        .route(
            "/{id}",
            get(categories::get_category)
                .put(categories::update_category)
                .delete(categories::delete_category),
        )
}
