//! Article persistence and relation management.
//!
//! Articles carry two belongs-to relations (author, category), a
//! many-to-many tag set, and a polymorphic `images` attachment set. The
//! relation sets are replaced wholesale on every create/update; hydration
//! for list pages is batched so a page costs a fixed number of queries
//! regardless of its size.

use std::collections::HashMap;

use pressroom_core::actor::Actor;
use pressroom_core::types::DbId;
use pressroom_core::validation::parse_uuid_list;
use sqlx::{FromRow, PgConnection};
use uuid::Uuid;

use crate::error::DbResult;
use crate::filter::{
    bind_conditions, bind_conditions_scalar, page_bounds, resolve_sort, BindValue, Conditions,
    RowsAndCount,
};
use crate::models::article::{
    Article, ArticleFilter, ArticleWithRelations, CreateArticle, UpdateArticle,
};
use crate::models::attachment::{
    Attachment, AttachmentOwner, OWNER_FIELD_IMAGES, OWNER_TYPE_ARTICLES,
};
use crate::models::tag::TagRef;
use crate::models::AutocompleteItem;
use crate::repositories::{autocomplete_query, AttachmentRepo, CategoryRepo, UserRepo};

const COLUMNS: &str = "id, title, body, featured, author_id, category_id, import_hash, \
                       created_by, updated_by, deleted_by, created_at, updated_at, deleted_at";

const SORT_FIELDS: &[&str] = &["created_at", "updated_at", "title", "featured"];

/// One article<->tag link row joined with the tag name.
#[derive(FromRow)]
struct ArticleTagRow {
    article_id: DbId,
    id: DbId,
    name: Option<String>,
}

pub struct ArticleRepo;

impl ArticleRepo {
    /// Insert an article and set its relation sets.
    ///
    /// An absent `tags`/`images` means an empty set, matching the update
    /// contract.
    pub async fn create(
        conn: &mut PgConnection,
        actor: &Actor,
        input: &CreateArticle,
    ) -> DbResult<Article> {
        let sql = format!(
            "INSERT INTO articles \
             (id, title, body, featured, author_id, category_id, import_hash, \
              created_by, updated_by) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $8) \
             RETURNING {COLUMNS}"
        );
        let article = sqlx::query_as::<_, Article>(&sql)
            .bind(input.id.unwrap_or_else(Uuid::new_v4))
            .bind(input.title.as_deref())
            .bind(input.body.as_deref())
            .bind(input.featured.unwrap_or(false))
            .bind(input.author)
            .bind(input.category)
            .bind(input.import_hash.as_deref())
            .bind(actor.id)
            .fetch_one(&mut *conn)
            .await?;

        Self::set_tags(conn, article.id, input.tags.as_deref().unwrap_or(&[])).await?;
        AttachmentRepo::replace_for_owner(
            conn,
            actor,
            &AttachmentOwner::article_images(article.id),
            input.images.as_deref().unwrap_or(&[]),
        )
        .await?;

        Ok(article)
    }

    /// Update a live article and replace its relation sets.
    ///
    /// Returns `None` when the id is unknown or soft-deleted, leaving the
    /// relations untouched.
    pub async fn update(
        conn: &mut PgConnection,
        actor: &Actor,
        id: DbId,
        input: &UpdateArticle,
    ) -> DbResult<Option<Article>> {
        let sql = format!(
            "UPDATE articles \
             SET title = $1, body = $2, featured = $3, author_id = $4, category_id = $5, \
                 updated_by = $6, updated_at = NOW() \
             WHERE id = $7 AND deleted_at IS NULL \
             RETURNING {COLUMNS}"
        );
        let Some(article) = sqlx::query_as::<_, Article>(&sql)
            .bind(input.title.as_deref())
            .bind(input.body.as_deref())
            .bind(input.featured.unwrap_or(false))
            .bind(input.author)
            .bind(input.category)
            .bind(actor.id)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?
        else {
            return Ok(None);
        };

        Self::set_tags(conn, article.id, input.tags.as_deref().unwrap_or(&[])).await?;
        AttachmentRepo::replace_for_owner(
            conn,
            actor,
            &AttachmentOwner::article_images(article.id),
            input.images.as_deref().unwrap_or(&[]),
        )
        .await?;

        Ok(Some(article))
    }

    /// Stamp the deleting actor and retire the row from normal queries.
    ///
    /// Tag links and attachments are left in place; the soft-delete scope
    /// on the article hides them along with it.
    pub async fn soft_delete(conn: &mut PgConnection, actor: &Actor, id: DbId) -> DbResult<bool> {
        let result = sqlx::query(
            "UPDATE articles SET deleted_by = $1, deleted_at = NOW(), updated_at = NOW() \
             WHERE id = $2 AND deleted_at IS NULL",
        )
        .bind(actor.id)
        .bind(id)
        .execute(conn)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn find_by_id(
        conn: &mut PgConnection,
        id: DbId,
    ) -> DbResult<Option<ArticleWithRelations>> {
        let sql = format!("SELECT {COLUMNS} FROM articles WHERE id = $1 AND deleted_at IS NULL");
        let Some(article) = sqlx::query_as::<_, Article>(&sql)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?
        else {
            return Ok(None);
        };
        let mut hydrated = Self::hydrate(conn, vec![article]).await?;
        Ok(hydrated.pop())
    }

    /// Lookup without the soft-delete scope (existence checks, tests).
    pub async fn find_by_id_any(conn: &mut PgConnection, id: DbId) -> DbResult<Option<Article>> {
        let sql = format!("SELECT {COLUMNS} FROM articles WHERE id = $1");
        let article = sqlx::query_as::<_, Article>(&sql)
            .bind(id)
            .fetch_optional(conn)
            .await?;
        Ok(article)
    }

    pub async fn find_all(
        conn: &mut PgConnection,
        filter: &ArticleFilter,
    ) -> DbResult<RowsAndCount<ArticleWithRelations>> {
        let mut conditions = Conditions::new();
        conditions.raw("deleted_at IS NULL");
        if let Some(id) = filter.id {
            conditions.eq_id("id", id);
        }
        if let Some(ref title) = filter.title {
            conditions.contains("title", title);
        }
        if let Some(ref body) = filter.body {
            conditions.contains("body", body);
        }
        if let Some(featured) = filter.featured {
            conditions.eq_bool("featured", featured);
        }
        if let Some(ref raw) = filter.author {
            conditions.id_in("author_id", parse_uuid_list(raw)?);
        }
        if let Some(ref raw) = filter.category {
            conditions.id_in("category_id", parse_uuid_list(raw)?);
        }
        if let Some(ref raw) = filter.tags {
            // At-least-one semantics via a join-table subquery, so the
            // count stays row-accurate without a DISTINCT page query.
            let ids = parse_uuid_list(raw)?;
            conditions.push_with(BindValue::IdList(ids), |idx| {
                format!(
                    "EXISTS (SELECT 1 FROM article_tags at \
                     WHERE at.article_id = articles.id AND at.tag_id = ANY(${idx}))"
                )
            });
        }
        if let Some(from) = filter.created_from {
            conditions.gte("created_at", from);
        }
        if let Some(to) = filter.created_to {
            conditions.lte("created_at", to);
        }

        let sort = resolve_sort(filter.field.as_deref(), filter.sort.as_deref(), SORT_FIELDS)?;
        let bounds = page_bounds(filter.page, filter.limit)?;
        let where_clause = conditions.where_clause();

        let count_sql = format!("SELECT COUNT(*) FROM articles {where_clause}");
        let count = bind_conditions_scalar(sqlx::query_scalar(&count_sql), conditions.values())
            .fetch_one(&mut *conn)
            .await?;

        let mut sql = format!(
            "SELECT {COLUMNS} FROM articles {where_clause} {}",
            sort.order_by_sql()
        );
        if bounds.is_some() {
            let idx = conditions.next_index();
            sql.push_str(&format!(" LIMIT ${idx} OFFSET ${}", idx + 1));
        }
        let mut q = bind_conditions(sqlx::query_as::<_, Article>(&sql), conditions.values());
        if let Some((limit, offset)) = bounds {
            q = q.bind(limit).bind(offset);
        }
        let articles = q.fetch_all(&mut *conn).await?;

        let rows = Self::hydrate(conn, articles).await?;
        Ok(RowsAndCount { rows, count })
    }

    pub async fn autocomplete(
        conn: &mut PgConnection,
        query: Option<&str>,
        limit: Option<i64>,
    ) -> DbResult<Vec<AutocompleteItem>> {
        autocomplete_query(conn, "articles", "title", query, limit).await
    }

    /// Replace the article's tag set wholesale.
    async fn set_tags(conn: &mut PgConnection, article_id: DbId, tag_ids: &[DbId]) -> DbResult<()> {
        sqlx::query("DELETE FROM article_tags WHERE article_id = $1")
            .bind(article_id)
            .execute(&mut *conn)
            .await?;
        if !tag_ids.is_empty() {
            sqlx::query(
                "INSERT INTO article_tags (article_id, tag_id) \
                 SELECT $1, UNNEST($2::uuid[]) \
                 ON CONFLICT DO NOTHING",
            )
            .bind(article_id)
            .bind(tag_ids)
            .execute(&mut *conn)
            .await?;
        }
        Ok(())
    }

    /// Attach authors, categories, tags, and images to a batch of rows.
    ///
    /// One query per relation over the whole batch, results re-assembled
    /// in the input order.
    async fn hydrate(
        conn: &mut PgConnection,
        articles: Vec<Article>,
    ) -> DbResult<Vec<ArticleWithRelations>> {
        if articles.is_empty() {
            return Ok(Vec::new());
        }

        let article_ids: Vec<DbId> = articles.iter().map(|a| a.id).collect();
        let author_ids: Vec<DbId> = articles.iter().filter_map(|a| a.author_id).collect();
        let category_ids: Vec<DbId> = articles.iter().filter_map(|a| a.category_id).collect();

        let authors: HashMap<DbId, _> = UserRepo::find_refs(&mut *conn, &author_ids)
            .await?
            .into_iter()
            .map(|u| (u.id, u))
            .collect();
        let categories: HashMap<DbId, _> = CategoryRepo::find_refs(&mut *conn, &category_ids)
            .await?
            .into_iter()
            .map(|c| (c.id, c))
            .collect();

        let mut tags_by_article: HashMap<DbId, Vec<TagRef>> = HashMap::new();
        let tag_rows = sqlx::query_as::<_, ArticleTagRow>(
            "SELECT at.article_id, t.id, t.name \
             FROM article_tags at \
             JOIN tags t ON t.id = at.tag_id AND t.deleted_at IS NULL \
             WHERE at.article_id = ANY($1) \
             ORDER BY t.name ASC",
        )
        .bind(&article_ids)
        .fetch_all(&mut *conn)
        .await?;
        for row in tag_rows {
            tags_by_article
                .entry(row.article_id)
                .or_default()
                .push(TagRef {
                    id: row.id,
                    name: row.name,
                });
        }

        let mut images_by_article: HashMap<DbId, Vec<Attachment>> = HashMap::new();
        let images = AttachmentRepo::list_for_owners(
            conn,
            OWNER_TYPE_ARTICLES,
            OWNER_FIELD_IMAGES,
            &article_ids,
        )
        .await?;
        for image in images {
            images_by_article
                .entry(image.owner_id)
                .or_default()
                .push(image);
        }

        Ok(articles
            .into_iter()
            .map(|article| {
                let author = article.author_id.and_then(|id| authors.get(&id).cloned());
                let category = article
                    .category_id
                    .and_then(|id| categories.get(&id).cloned());
                let tags = tags_by_article.remove(&article.id).unwrap_or_default();
                let images = images_by_article.remove(&article.id).unwrap_or_default();
                ArticleWithRelations {
                    article,
                    author,
                    category,
                    tags,
                    images,
                }
            })
            .collect())
    }
}
