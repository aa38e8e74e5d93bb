//! Tag persistence.

use pressroom_core::actor::Actor;
use pressroom_core::types::DbId;
use sqlx::PgConnection;
use uuid::Uuid;

use crate::error::DbResult;
use crate::filter::{
    bind_conditions, bind_conditions_scalar, page_bounds, resolve_sort, Conditions, RowsAndCount,
};
use crate::models::tag::{CreateTag, Tag, TagFilter, UpdateTag};
use crate::models::AutocompleteItem;
use crate::repositories::autocomplete_query;

const COLUMNS: &str = "id, name, import_hash, \
                       created_by, updated_by, deleted_by, created_at, updated_at, deleted_at";

const SORT_FIELDS: &[&str] = &["created_at", "updated_at", "name"];

pub struct TagRepo;

impl TagRepo {
    pub async fn create(conn: &mut PgConnection, actor: &Actor, input: &CreateTag) -> DbResult<Tag> {
        let sql = format!(
            "INSERT INTO tags (id, name, import_hash, created_by, updated_by) \
             VALUES ($1, $2, $3, $4, $4) \
             RETURNING {COLUMNS}"
        );
        let tag = sqlx::query_as::<_, Tag>(&sql)
            .bind(input.id.unwrap_or_else(Uuid::new_v4))
            .bind(input.name.as_deref())
            .bind(input.import_hash.as_deref())
            .bind(actor.id)
            .fetch_one(conn)
            .await?;
        Ok(tag)
    }

    /// Update a live tag; returns `None` when the id is unknown or deleted.
    pub async fn update(
        conn: &mut PgConnection,
        actor: &Actor,
        id: DbId,
        input: &UpdateTag,
    ) -> DbResult<Option<Tag>> {
        let sql = format!(
            "UPDATE tags SET name = $1, updated_by = $2, updated_at = NOW() \
             WHERE id = $3 AND deleted_at IS NULL \
             RETURNING {COLUMNS}"
        );
        let tag = sqlx::query_as::<_, Tag>(&sql)
            .bind(input.name.as_deref())
            .bind(actor.id)
            .bind(id)
            .fetch_optional(conn)
            .await?;
        Ok(tag)
    }

    /// Stamp the deleting actor and retire the row from normal queries.
    pub async fn soft_delete(conn: &mut PgConnection, actor: &Actor, id: DbId) -> DbResult<bool> {
        let result = sqlx::query(
            "UPDATE tags SET deleted_by = $1, deleted_at = NOW(), updated_at = NOW() \
             WHERE id = $2 AND deleted_at IS NULL",
        )
        .bind(actor.id)
        .bind(id)
        .execute(conn)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn find_by_id(conn: &mut PgConnection, id: DbId) -> DbResult<Option<Tag>> {
        let sql = format!("SELECT {COLUMNS} FROM tags WHERE id = $1 AND deleted_at IS NULL");
        let tag = sqlx::query_as::<_, Tag>(&sql)
            .bind(id)
            .fetch_optional(conn)
            .await?;
        Ok(tag)
    }

    /// Lookup without the soft-delete scope (existence checks, tests).
    pub async fn find_by_id_any(conn: &mut PgConnection, id: DbId) -> DbResult<Option<Tag>> {
        let sql = format!("SELECT {COLUMNS} FROM tags WHERE id = $1");
        let tag = sqlx::query_as::<_, Tag>(&sql)
            .bind(id)
            .fetch_optional(conn)
            .await?;
        Ok(tag)
    }

    pub async fn find_all(
        conn: &mut PgConnection,
        filter: &TagFilter,
    ) -> DbResult<RowsAndCount<Tag>> {
        let mut conditions = Conditions::new();
        conditions.raw("deleted_at IS NULL");
        if let Some(id) = filter.id {
            conditions.eq_id("id", id);
        }
        if let Some(ref name) = filter.name {
            conditions.contains("name", name);
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

        let count_sql = format!("SELECT COUNT(*) FROM tags {where_clause}");
        let count = bind_conditions_scalar(sqlx::query_scalar(&count_sql), conditions.values())
            .fetch_one(&mut *conn)
            .await?;

        let mut sql = format!(
            "SELECT {COLUMNS} FROM tags {where_clause} {}",
            sort.order_by_sql()
        );
        if bounds.is_some() {
            let idx = conditions.next_index();
            sql.push_str(&format!(" LIMIT ${idx} OFFSET ${}", idx + 1));
        }
        let mut q = bind_conditions(sqlx::query_as::<_, Tag>(&sql), conditions.values());
        if let Some((limit, offset)) = bounds {
            q = q.bind(limit).bind(offset);
        }
        let rows = q.fetch_all(conn).await?;

        Ok(RowsAndCount { rows, count })
    }

    pub async fn autocomplete(
        conn: &mut PgConnection,
        query: Option<&str>,
        limit: Option<i64>,
    ) -> DbResult<Vec<AutocompleteItem>> {
        autocomplete_query(conn, "tags", "name", query, limit).await
    }
}
