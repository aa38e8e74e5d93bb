pub mod articles;
pub mod categories;
pub mod comments;
pub mod health;
pub mod tags;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy (every entity exposes the same six operations):
///
/// ```text
/// /articles                  create (POST), list (GET)
/// /articles/autocomplete     id-or-label lookup (GET)
/// /articles/{id}             get, update (PUT), soft delete (DELETE, admin)
///
/// /comments                  create (POST), list (GET)
/// /comments/autocomplete     id-or-label lookup (GET)
/// /comments/{id}             get, update (PUT), soft delete (DELETE, admin)
///
/// /tags                      create (POST), list (GET)
/// /tags/autocomplete         id-or-label lookup (GET)
/// /tags/{id}                 get, update (PUT), soft delete (DELETE, admin)
///
/// /categories                create (POST), list (GET)
/// /categories/autocomplete   id-or-label lookup (GET)
/// /categories/{id}           get, update (PUT), soft delete (DELETE, admin)
///
/// /users/autocomplete        author picker lookup (GET); users have no
///                            CRUD surface here
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/articles", articles::router())
        .nest("/comments", comments::router())
        .nest("/tags", tags::router())
        .nest("/categories", categories::router())
        .nest("/users", users::router())
}
