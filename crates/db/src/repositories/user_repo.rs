//! User reference data.
//!
//! Users are a reference entity here: the content API needs them for
//! author relations, attribution stamps, and autocomplete, not for
//! account management.

use pressroom_core::actor::Actor;
use pressroom_core::roles::ROLE_USER;
use pressroom_core::types::DbId;
use sqlx::PgConnection;
use uuid::Uuid;

use crate::error::DbResult;
use crate::models::user::{CreateUser, User, UserRef};
use crate::models::AutocompleteItem;
use crate::repositories::autocomplete_query;

const COLUMNS: &str = "id, email, full_name, role, import_hash, \
                       created_by, updated_by, deleted_by, created_at, updated_at, deleted_at";

pub struct UserRepo;

impl UserRepo {
    pub async fn create(
        conn: &mut PgConnection,
        actor: &Actor,
        input: &CreateUser,
    ) -> DbResult<User> {
        let sql = format!(
            "INSERT INTO users (id, email, full_name, role, import_hash, created_by, updated_by) \
             VALUES ($1, $2, $3, $4, $5, $6, $6) \
             RETURNING {COLUMNS}"
        );
        let user = sqlx::query_as::<_, User>(&sql)
            .bind(input.id.unwrap_or_else(Uuid::new_v4))
            .bind(input.email.as_str())
            .bind(input.full_name.as_deref())
            .bind(input.role.as_deref().unwrap_or(ROLE_USER))
            .bind(input.import_hash.as_deref())
            .bind(actor.id)
            .fetch_one(conn)
            .await?;
        Ok(user)
    }

    pub async fn find_by_id(conn: &mut PgConnection, id: DbId) -> DbResult<Option<User>> {
        let sql = format!("SELECT {COLUMNS} FROM users WHERE id = $1 AND deleted_at IS NULL");
        let user = sqlx::query_as::<_, User>(&sql)
            .bind(id)
            .fetch_optional(conn)
            .await?;
        Ok(user)
    }

    /// Lightweight refs for relation hydration, batched over `ids`.
    pub async fn find_refs(conn: &mut PgConnection, ids: &[DbId]) -> DbResult<Vec<UserRef>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let refs = sqlx::query_as::<_, UserRef>(
            "SELECT id, email, full_name FROM users \
             WHERE id = ANY($1) AND deleted_at IS NULL",
        )
        .bind(ids)
        .fetch_all(conn)
        .await?;
        Ok(refs)
    }

    pub async fn autocomplete(
        conn: &mut PgConnection,
        query: Option<&str>,
        limit: Option<i64>,
    ) -> DbResult<Vec<AutocompleteItem>> {
        autocomplete_query(conn, "users", "email", query, limit).await
    }
}
