//! Integration tests for soft-delete behaviour.
//!
//! Verifies that:
//! - Soft delete stamps the deleting actor and the deletion time
//! - Deleted rows disappear from find_by_id, lists, and autocomplete
//! - The row itself survives (visible via the unscoped lookup)
//! - Soft delete is idempotent (second call returns `false`)
//! - Deleted relation targets drop out of hydrated rows

use pressroom_core::actor::Actor;
use pressroom_db::models::article::{ArticleFilter, CreateArticle};
use pressroom_db::models::tag::{CreateTag, TagFilter};
use pressroom_db::models::user::CreateUser;
use pressroom_db::repositories::{ArticleRepo, TagRepo, UserRepo};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_article(title: &str) -> CreateArticle {
    CreateArticle {
        title: Some(title.to_string()),
        ..Default::default()
    }
}

fn new_tag(name: &str) -> CreateTag {
    CreateTag {
        id: None,
        name: Some(name.to_string()),
        import_hash: None,
    }
}

// ---------------------------------------------------------------------------
// Test: soft delete stamps actor and timestamp, keeps the row
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_soft_delete_stamps_and_keeps_row(pool: PgPool) {
    let mut conn = pool.acquire().await.unwrap();

    let admin = UserRepo::create(
        &mut conn,
        &Actor::anonymous(),
        &CreateUser {
            id: None,
            email: "admin@example.com".to_string(),
            full_name: None,
            role: Some("admin".to_string()),
            import_hash: None,
        },
    )
    .await
    .unwrap();
    let actor = Actor::admin(admin.id);

    let article = ArticleRepo::create(&mut conn, &actor, &new_article("Doomed"))
        .await
        .unwrap();

    let deleted = ArticleRepo::soft_delete(&mut conn, &actor, article.id)
        .await
        .unwrap();
    assert!(deleted, "first soft_delete should return true");

    let row = ArticleRepo::find_by_id_any(&mut conn, article.id)
        .await
        .unwrap()
        .expect("row should still exist after soft delete");
    assert_eq!(row.deleted_by, Some(admin.id));
    assert!(row.deleted_at.is_some());
}

// ---------------------------------------------------------------------------
// Test: deleted rows are hidden from reads
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_soft_delete_hides_from_reads(pool: PgPool) {
    let mut conn = pool.acquire().await.unwrap();
    let actor = Actor::anonymous();

    let article = ArticleRepo::create(&mut conn, &actor, &new_article("Hidden"))
        .await
        .unwrap();
    ArticleRepo::soft_delete(&mut conn, &actor, article.id)
        .await
        .unwrap();

    assert!(
        ArticleRepo::find_by_id(&mut conn, article.id)
            .await
            .unwrap()
            .is_none(),
        "find_by_id should not see a deleted article"
    );

    let listed = ArticleRepo::find_all(&mut conn, &ArticleFilter::default())
        .await
        .unwrap();
    assert_eq!(listed.count, 0);
    assert!(listed.rows.is_empty());
}

// ---------------------------------------------------------------------------
// Test: soft delete is idempotent
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_soft_delete_is_idempotent(pool: PgPool) {
    let mut conn = pool.acquire().await.unwrap();
    let actor = Actor::anonymous();

    let tag = TagRepo::create(&mut conn, &actor, &new_tag("once")).await.unwrap();

    assert!(TagRepo::soft_delete(&mut conn, &actor, tag.id).await.unwrap());
    assert!(
        !TagRepo::soft_delete(&mut conn, &actor, tag.id).await.unwrap(),
        "second soft_delete should report nothing to do"
    );
}

// ---------------------------------------------------------------------------
// Test: deleted tags drop out of hydrated articles and autocomplete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_deleted_tag_drops_out_of_relations(pool: PgPool) {
    let mut conn = pool.acquire().await.unwrap();
    let actor = Actor::anonymous();

    let tag = TagRepo::create(&mut conn, &actor, &new_tag("fleeting")).await.unwrap();
    let article = ArticleRepo::create(
        &mut conn,
        &actor,
        &CreateArticle {
            title: Some("Tagged".to_string()),
            tags: Some(vec![tag.id]),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    TagRepo::soft_delete(&mut conn, &actor, tag.id).await.unwrap();

    let found = ArticleRepo::find_by_id(&mut conn, article.id)
        .await
        .unwrap()
        .unwrap();
    assert!(
        found.tags.is_empty(),
        "hydration should skip soft-deleted tags"
    );

    let items = TagRepo::autocomplete(&mut conn, Some("fleeting"), None)
        .await
        .unwrap();
    assert!(items.is_empty(), "autocomplete should skip deleted tags");

    let listed = TagRepo::find_all(&mut conn, &TagFilter::default()).await.unwrap();
    assert_eq!(listed.count, 0);
}

// ---------------------------------------------------------------------------
// Test: deleted author drops out of hydrated rows, reference survives
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_deleted_author_hidden_from_hydration(pool: PgPool) {
    let mut conn = pool.acquire().await.unwrap();
    let actor = Actor::anonymous();

    let author = UserRepo::create(
        &mut conn,
        &actor,
        &CreateUser {
            id: None,
            email: "gone@example.com".to_string(),
            full_name: None,
            role: None,
            import_hash: None,
        },
    )
    .await
    .unwrap();
    let article = ArticleRepo::create(
        &mut conn,
        &actor,
        &CreateArticle {
            title: Some("Orphaned".to_string()),
            author: Some(author.id),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    sqlx::query("UPDATE users SET deleted_at = NOW() WHERE id = $1")
        .bind(author.id)
        .execute(&mut *conn)
        .await
        .unwrap();

    let found = ArticleRepo::find_by_id(&mut conn, article.id)
        .await
        .unwrap()
        .unwrap();
    assert!(found.author.is_none(), "deleted author should not hydrate");
    assert_eq!(
        found.article.author_id,
        Some(author.id),
        "the raw reference column is untouched"
    );
}
