//! Route definitions for articles, mounted at `/articles`.

use axum::routing::get;
use axum::Router;

use crate::handlers::articles;
use crate::state::AppState;

/// ```text
/// POST   /                  -> create_article
/// GET    /                  -> list_articles
/// GET    /autocomplete      -> autocomplete_articles
/// GET    /{id}              -> get_article
/// PUT    /{id}              -> update_article
/// DELETE /{id}              -> delete_article (admin only)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(articles::list_articles).post(articles::create_article),
        )
        .route("/autocomplete", get(articles::autocomplete_articles))
        .route(
            "/{id}",
            get(articles::get_article)
                .put(articles::update_article)
                .delete(articles::delete_article),
        )
}
