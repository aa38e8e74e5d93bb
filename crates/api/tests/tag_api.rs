//! HTTP-level integration tests for the tag endpoints.
//!
//! Tags are the simplest entity; these tests cover the envelope shape,
//! the autocomplete contract, and the delete gate on a second entity to
//! make sure the pattern holds beyond articles.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json, put_json, seed_user_with_token};
use sqlx::PgPool;

#[sqlx::test(migrations = "../db/migrations")]
async fn test_tag_crud_round_trip(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(
            app,
            "/api/v1/tags",
            None,
            serde_json::json!({"name": "breaking"}),
        )
        .await,
    )
    .await;
    let id = created["data"]["id"].as_str().unwrap().to_string();
    assert_eq!(created["data"]["name"], "breaking");

    let app = common::build_test_app(pool.clone());
    let updated = put_json(
        app,
        &format!("/api/v1/tags/{id}"),
        None,
        serde_json::json!({"name": "exclusive"}),
    )
    .await;
    assert_eq!(updated.status(), StatusCode::OK);

    let app = common::build_test_app(pool);
    let json = body_json(get(app, &format!("/api/v1/tags/{id}")).await).await;
    assert_eq!(json["data"]["name"], "exclusive");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_tag_list_envelope(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    post_json(app, "/api/v1/tags", None, serde_json::json!({"name": "a"})).await;
    let app = common::build_test_app(pool.clone());
    post_json(app, "/api/v1/tags", None, serde_json::json!({"name": "b"})).await;

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/v1/tags").await).await;
    assert_eq!(json["data"]["count"], 2);
    assert_eq!(json["data"]["rows"].as_array().unwrap().len(), 2);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_tag_autocomplete_orders_by_label(pool: PgPool) {
    for name in ["zebra", "azure"] {
        let app = common::build_test_app(pool.clone());
        post_json(app, "/api/v1/tags", None, serde_json::json!({"name": name})).await;
    }

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/v1/tags/autocomplete?query=z").await).await;
    let labels: Vec<&str> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["label"].as_str().unwrap())
        .collect();
    assert_eq!(labels, vec!["azure", "zebra"]);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_user_autocomplete_matches_email(pool: PgPool) {
    let (user_id, _token) = seed_user_with_token(&pool, "editor@example.com", "user").await;
    seed_user_with_token(&pool, "reader@example.com", "user").await;

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/v1/users/autocomplete?query=editor").await).await;
    let items = json["data"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["id"].as_str().unwrap(), user_id.to_string());
    assert_eq!(items[0]["label"], "editor@example.com");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_tag_delete_requires_admin(pool: PgPool) {
    let (_admin_id, admin_token) = seed_user_with_token(&pool, "admin@example.com", "admin").await;

    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(
            app,
            "/api/v1/tags",
            None,
            serde_json::json!({"name": "doomed"}),
        )
        .await,
    )
    .await;
    let id = created["data"]["id"].as_str().unwrap().to_string();

    let app = common::build_test_app(pool.clone());
    let forbidden = delete(app, &format!("/api/v1/tags/{id}"), None).await;
    assert_eq!(forbidden.status(), StatusCode::FORBIDDEN);

    let app = common::build_test_app(pool.clone());
    let ok = delete(app, &format!("/api/v1/tags/{id}"), Some(&admin_token)).await;
    assert_eq!(ok.status(), StatusCode::OK);

    let app = common::build_test_app(pool);
    let gone = get(app, &format!("/api/v1/tags/{id}")).await;
    assert_eq!(gone.status(), StatusCode::NOT_FOUND);
}
