//! Comment persistence.
//!
//! Comments carry two belongs-to relations (author, article) and no
//! collection relations, so mutations are single statements and hydration
//! is two batched ref lookups.

use std::collections::HashMap;

use pressroom_core::actor::Actor;
use pressroom_core::types::DbId;
use pressroom_core::validation::parse_uuid_list;
use sqlx::PgConnection;
use uuid::Uuid;

use crate::error::DbResult;
use crate::filter::{
    bind_conditions, bind_conditions_scalar, page_bounds, resolve_sort, Conditions, RowsAndCount,
};
use crate::models::article::ArticleRef;
use crate::models::comment::{
    Comment, CommentFilter, CommentWithRelations, CreateComment, UpdateComment,
};
use crate::models::AutocompleteItem;
use crate::repositories::{autocomplete_query, UserRepo};

const COLUMNS: &str = "id, content, moderated, author_id, article_id, import_hash, \
                       created_by, updated_by, deleted_by, created_at, updated_at, deleted_at";

const SORT_FIELDS: &[&str] = &["created_at", "updated_at", "content", "moderated"];

pub struct CommentRepo;

impl CommentRepo {
    pub async fn create(
        conn: &mut PgConnection,
        actor: &Actor,
        input: &CreateComment,
    ) -> DbResult<Comment> {
        let sql = format!(
            "INSERT INTO comments \
             (id, content, moderated, author_id, article_id, import_hash, \
              created_by, updated_by) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $7) \
             RETURNING {COLUMNS}"
        );
        let comment = sqlx::query_as::<_, Comment>(&sql)
            .bind(input.id.unwrap_or_else(Uuid::new_v4))
            .bind(input.content.as_deref())
            .bind(input.moderated.unwrap_or(false))
            .bind(input.author)
            .bind(input.article)
            .bind(input.import_hash.as_deref())
            .bind(actor.id)
            .fetch_one(conn)
            .await?;
        Ok(comment)
    }

    /// Update a live comment; returns `None` when the id is unknown or deleted.
    pub async fn update(
        conn: &mut PgConnection,
        actor: &Actor,
        id: DbId,
        input: &UpdateComment,
    ) -> DbResult<Option<Comment>> {
        let sql = format!(
            "UPDATE comments \
             SET content = $1, moderated = $2, author_id = $3, article_id = $4, \
                 updated_by = $5, updated_at = NOW() \
             WHERE id = $6 AND deleted_at IS NULL \
             RETURNING {COLUMNS}"
        );
        let comment = sqlx::query_as::<_, Comment>(&sql)
            .bind(input.content.as_deref())
            .bind(input.moderated.unwrap_or(false))
            .bind(input.author)
            .bind(input.article)
            .bind(actor.id)
            .bind(id)
            .fetch_optional(conn)
            .await?;
        Ok(comment)
    }

    pub async fn soft_delete(conn: &mut PgConnection, actor: &Actor, id: DbId) -> DbResult<bool> {
        let result = sqlx::query(
            "UPDATE comments SET deleted_by = $1, deleted_at = NOW(), updated_at = NOW() \
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
    ) -> DbResult<Option<CommentWithRelations>> {
        let sql = format!("SELECT {COLUMNS} FROM comments WHERE id = $1 AND deleted_at IS NULL");
        let Some(comment) = sqlx::query_as::<_, Comment>(&sql)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?
        else {
            return Ok(None);
        };
        let mut hydrated = Self::hydrate(conn, vec![comment]).await?;
        Ok(hydrated.pop())
    }

    /// Lookup without the soft-delete scope (existence checks, tests).
    pub async fn find_by_id_any(conn: &mut PgConnection, id: DbId) -> DbResult<Option<Comment>> {
        let sql = format!("SELECT {COLUMNS} FROM comments WHERE id = $1");
        let comment = sqlx::query_as::<_, Comment>(&sql)
            .bind(id)
            .fetch_optional(conn)
            .await?;
        Ok(comment)
    }

    pub async fn find_all(
        conn: &mut PgConnection,
        filter: &CommentFilter,
    ) -> DbResult<RowsAndCount<CommentWithRelations>> {
        let mut conditions = Conditions::new();
        conditions.raw("deleted_at IS NULL");
        if let Some(id) = filter.id {
            conditions.eq_id("id", id);
        }
        if let Some(ref content) = filter.content {
            conditions.contains("content", content);
        }
        if let Some(moderated) = filter.moderated {
            conditions.eq_bool("moderated", moderated);
        }
        if let Some(ref raw) = filter.author {
            conditions.id_in("author_id", parse_uuid_list(raw)?);
        }
        if let Some(ref raw) = filter.article {
            conditions.id_in("article_id", parse_uuid_list(raw)?);
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

        let count_sql = format!("SELECT COUNT(*) FROM comments {where_clause}");
        let count = bind_conditions_scalar(sqlx::query_scalar(&count_sql), conditions.values())
            .fetch_one(&mut *conn)
            .await?;

        let mut sql = format!(
            "SELECT {COLUMNS} FROM comments {where_clause} {}",
            sort.order_by_sql()
        );
        if bounds.is_some() {
            let idx = conditions.next_index();
            sql.push_str(&format!(" LIMIT ${idx} OFFSET ${}", idx + 1));
        }
        let mut q = bind_conditions(sqlx::query_as::<_, Comment>(&sql), conditions.values());
        if let Some((limit, offset)) = bounds {
            q = q.bind(limit).bind(offset);
        }
        let comments = q.fetch_all(&mut *conn).await?;

        let rows = Self::hydrate(conn, comments).await?;
        Ok(RowsAndCount { rows, count })
    }

    pub async fn autocomplete(
        conn: &mut PgConnection,
        query: Option<&str>,
        limit: Option<i64>,
    ) -> DbResult<Vec<AutocompleteItem>> {
        autocomplete_query(conn, "comments", "content", query, limit).await
    }

    async fn hydrate(
        conn: &mut PgConnection,
        comments: Vec<Comment>,
    ) -> DbResult<Vec<CommentWithRelations>> {
        if comments.is_empty() {
            return Ok(Vec::new());
        }

        let author_ids: Vec<DbId> = comments.iter().filter_map(|c| c.author_id).collect();
        let article_ids: Vec<DbId> = comments.iter().filter_map(|c| c.article_id).collect();

        let authors: HashMap<DbId, _> = UserRepo::find_refs(&mut *conn, &author_ids)
            .await?
            .into_iter()
            .map(|u| (u.id, u))
            .collect();

        let articles: HashMap<DbId, ArticleRef> = if article_ids.is_empty() {
            HashMap::new()
        } else {
            sqlx::query_as::<_, ArticleRef>(
                "SELECT id, title FROM articles WHERE id = ANY($1) AND deleted_at IS NULL",
            )
            .bind(&article_ids)
            .fetch_all(&mut *conn)
            .await?
            .into_iter()
            .map(|a| (a.id, a))
            .collect()
        };

        Ok(comments
            .into_iter()
            .map(|comment| {
                let author = comment.author_id.and_then(|id| authors.get(&id).cloned());
                let article = comment.article_id.and_then(|id| articles.get(&id).cloned());
                CommentWithRelations {
                    comment,
                    author,
                    article,
                }
            })
            .collect())
    }
}
