//! HTTP-level integration tests for the article endpoints.
//!
//! Uses tower::ServiceExt to send requests directly to the router
//! without a TCP listener.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json, put_json, seed_user_with_token};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Create / read
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_article_returns_201(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/articles",
        None,
        serde_json::json!({"title": "Hello World"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["data"]["title"], "Hello World");
    assert_eq!(json["data"]["featured"], false);
    assert!(json["data"]["id"].is_string());
    assert!(json["data"]["tags"].as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_authenticated_create_stamps_actor(pool: PgPool) {
    let (user_id, token) = seed_user_with_token(&pool, "writer@example.com", "user").await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/articles",
        Some(&token),
        serde_json::json!({"title": "Signed"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["data"]["created_by"], user_id.to_string());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_get_article_by_id(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(
            app,
            "/api/v1/articles",
            None,
            serde_json::json!({"title": "Get Me"}),
        )
        .await,
    )
    .await;
    let id = created["data"]["id"].as_str().unwrap().to_string();

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/articles/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["title"], "Get Me");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_get_nonexistent_article_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(
        app,
        "/api/v1/articles/00000000-0000-0000-0000-000000000000",
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
}

// ---------------------------------------------------------------------------
// List / filter
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_articles_with_filter_and_count(pool: PgPool) {
    for i in 0..3 {
        let app = common::build_test_app(pool.clone());
        post_json(
            app,
            "/api/v1/articles",
            None,
            serde_json::json!({"title": format!("match {i}")}),
        )
        .await;
    }
    let app = common::build_test_app(pool.clone());
    post_json(
        app,
        "/api/v1/articles",
        None,
        serde_json::json!({"title": "other"}),
    )
    .await;

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/articles?title=match&page=0&limit=2").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["rows"].as_array().unwrap().len(), 2);
    assert_eq!(json["data"]["count"], 3);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_malformed_filter_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/articles?author=not-a-uuid").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_autocomplete_articles(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    post_json(
        app,
        "/api/v1/articles",
        None,
        serde_json::json!({"title": "Searchable Headline"}),
    )
    .await;

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/articles/autocomplete?query=searchable").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let items = json["data"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["label"], "Searchable Headline");
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_article(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(
            app,
            "/api/v1/articles",
            None,
            serde_json::json!({"title": "Original"}),
        )
        .await,
    )
    .await;
    let id = created["data"]["id"].as_str().unwrap().to_string();

    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        &format!("/api/v1/articles/{id}"),
        None,
        serde_json::json!({"title": "Updated", "featured": true}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["title"], "Updated");
    assert_eq!(json["data"]["featured"], true);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_nonexistent_article_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        "/api/v1/articles/00000000-0000-0000-0000-000000000000",
        None,
        serde_json::json!({"title": "Ghost"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Conflict
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_duplicate_import_hash_returns_409(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let first = post_json(
        app,
        "/api/v1/articles",
        None,
        serde_json::json!({"title": "First", "import_hash": "dup"}),
    )
    .await;
    assert_eq!(first.status(), StatusCode::CREATED);

    let app = common::build_test_app(pool);
    let second = post_json(
        app,
        "/api/v1/articles",
        None,
        serde_json::json!({"title": "Second", "import_hash": "dup"}),
    )
    .await;
    assert_eq!(second.status(), StatusCode::CONFLICT);

    let json = body_json(second).await;
    assert_eq!(json["code"], "CONFLICT");
}

// ---------------------------------------------------------------------------
// Delete (admin gate)
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_anonymous_delete_returns_403(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(
            app,
            "/api/v1/articles",
            None,
            serde_json::json!({"title": "Protected"}),
        )
        .await,
    )
    .await;
    let id = created["data"]["id"].as_str().unwrap().to_string();

    let app = common::build_test_app(pool);
    let response = delete(app, &format!("/api/v1/articles/{id}"), None).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_non_admin_delete_returns_403(pool: PgPool) {
    let (_user_id, token) = seed_user_with_token(&pool, "user@example.com", "user").await;

    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(
            app,
            "/api/v1/articles",
            Some(&token),
            serde_json::json!({"title": "Still Protected"}),
        )
        .await,
    )
    .await;
    let id = created["data"]["id"].as_str().unwrap().to_string();

    let app = common::build_test_app(pool);
    let response = delete(app, &format!("/api/v1/articles/{id}"), Some(&token)).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_admin_delete_soft_deletes(pool: PgPool) {
    let (_admin_id, token) = seed_user_with_token(&pool, "admin@example.com", "admin").await;

    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(
            app,
            "/api/v1/articles",
            Some(&token),
            serde_json::json!({"title": "Removable"}),
        )
        .await,
    )
    .await;
    let id = created["data"]["id"].as_str().unwrap().to_string();

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/api/v1/articles/{id}"), Some(&token)).await;
    assert_eq!(response.status(), StatusCode::OK);

    // Gone from reads afterwards.
    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/articles/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Auth edge cases
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_invalid_token_returns_401(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = delete(
        app,
        "/api/v1/articles/00000000-0000-0000-0000-000000000000",
        Some("garbage-token"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
