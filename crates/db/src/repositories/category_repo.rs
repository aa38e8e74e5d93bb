//! Category persistence.

use pressroom_core::actor::Actor;
use pressroom_core::types::DbId;
use sqlx::PgConnection;
use uuid::Uuid;

use crate::error::DbResult;
use crate::filter::{
    bind_conditions, bind_conditions_scalar, page_bounds, resolve_sort, Conditions, RowsAndCount,
};
use crate::models::category::{
    Category, CategoryFilter, CategoryRef, CreateCategory, UpdateCategory,
};
use crate::models::AutocompleteItem;
use crate::repositories::autocomplete_query;

const COLUMNS: &str = "id, name, import_hash, \
                       created_by, updated_by, deleted_by, created_at, updated_at, deleted_at";

const SORT_FIELDS: &[&str] = &["created_at", "updated_at", "name"];

pub struct CategoryRepo;

impl CategoryRepo {
    pub async fn create(
        conn: &mut PgConnection,
        actor: &Actor,
        input: &CreateCategory,
    ) -> DbResult<Category> {
        let sql = format!(
            "INSERT INTO categories (id, name, import_hash, created_by, updated_by) \
             VALUES ($1, $2, $3, $4, $4) \
             RETURNING {COLUMNS}"
        );
        let category = sqlx::query_as::<_, Category>(&sql)
            .bind(input.id.unwrap_or_else(Uuid::new_v4))
            .bind(input.name.as_deref())
            .bind(input.import_hash.as_deref())
            .bind(actor.id)
            .fetch_one(conn)
            .await?;
        Ok(category)
    }

    /// Update a live category; returns `None` when the id is unknown or deleted.
    pub async fn update(
        conn: &mut PgConnection,
        actor: &Actor,
        id: DbId,
        input: &UpdateCategory,
    ) -> DbResult<Option<Category>> {
        let sql = format!(
            "UPDATE categories SET name = $1, updated_by = $2, updated_at = NOW() \
             WHERE id = $3 AND deleted_at IS NULL \
             RETURNING {COLUMNS}"
        );
        let category = sqlx::query_as::<_, Category>(&sql)
            .bind(input.name.as_deref())
            .bind(actor.id)
            .bind(id)
            .fetch_optional(conn)
            .await?;
        Ok(category)
    }

    pub async fn soft_delete(conn: &mut PgConnection, actor: &Actor, id: DbId) -> DbResult<bool> {
        let result = sqlx::query(
            "UPDATE categories SET deleted_by = $1, deleted_at = NOW(), updated_at = NOW() \
             WHERE id = $2 AND deleted_at IS NULL",
        )
        .bind(actor.id)
        .bind(id)
        .execute(conn)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn find_by_id(conn: &mut PgConnection, id: DbId) -> DbResult<Option<Category>> {
        let sql = format!("SELECT {COLUMNS} FROM categories WHERE id = $1 AND deleted_at IS NULL");
        let category = sqlx::query_as::<_, Category>(&sql)
            .bind(id)
            .fetch_optional(conn)
            .await?;
        Ok(category)
    }

    /// Lookup without the soft-delete scope (existence checks, tests).
    pub async fn find_by_id_any(conn: &mut PgConnection, id: DbId) -> DbResult<Option<Category>> {
        let sql = format!("SELECT {COLUMNS} FROM categories WHERE id = $1");
        let category = sqlx::query_as::<_, Category>(&sql)
            .bind(id)
            .fetch_optional(conn)
            .await?;
        Ok(category)
    }

    /// Lightweight refs for relation hydration, batched over `ids`.
    pub async fn find_refs(conn: &mut PgConnection, ids: &[DbId]) -> DbResult<Vec<CategoryRef>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let refs = sqlx::query_as::<_, CategoryRef>(
            "SELECT id, name FROM categories WHERE id = ANY($1) AND deleted_at IS NULL",
        )
        .bind(ids)
        .fetch_all(conn)
        .await?;
        Ok(refs)
    }

    pub async fn find_all(
        conn: &mut PgConnection,
        filter: &CategoryFilter,
    ) -> DbResult<RowsAndCount<Category>> {
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

        let count_sql = format!("SELECT COUNT(*) FROM categories {where_clause}");
        let count = bind_conditions_scalar(sqlx::query_scalar(&count_sql), conditions.values())
            .fetch_one(&mut *conn)
            .await?;

        let mut sql = format!(
            "SELECT {COLUMNS} FROM categories {where_clause} {}",
            sort.order_by_sql()
        );
        if bounds.is_some() {
            let idx = conditions.next_index();
            sql.push_str(&format!(" LIMIT ${idx} OFFSET ${}", idx + 1));
        }
        let mut q = bind_conditions(sqlx::query_as::<_, Category>(&sql), conditions.values());
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
        autocomplete_query(conn, "categories", "name", query, limit).await
    }
}
