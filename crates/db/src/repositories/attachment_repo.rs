//! Attachment persistence, keyed by the typed owner triple.

use pressroom_core::actor::Actor;
use pressroom_core::types::DbId;
use sqlx::PgConnection;
use uuid::Uuid;

use crate::error::DbResult;
use crate::models::attachment::{Attachment, AttachmentInput, AttachmentOwner};

const COLUMNS: &str = "id, owner_type, owner_field, owner_id, name, path, size_bytes, \
                       created_by, updated_by, deleted_by, created_at, updated_at, deleted_at";

pub struct AttachmentRepo;

impl AttachmentRepo {
    /// Live attachments of one owner, oldest first.
    pub async fn list_for_owner(
        conn: &mut PgConnection,
        owner: &AttachmentOwner,
    ) -> DbResult<Vec<Attachment>> {
        let sql = format!(
            "SELECT {COLUMNS} FROM attachments \
             WHERE owner_type = $1 AND owner_field = $2 AND owner_id = $3 \
               AND deleted_at IS NULL \
             ORDER BY created_at ASC"
        );
        let rows = sqlx::query_as::<_, Attachment>(&sql)
            .bind(owner.owner_type)
            .bind(owner.owner_field)
            .bind(owner.owner_id)
            .fetch_all(conn)
            .await?;
        Ok(rows)
    }

    /// Live attachments for a batch of owner ids sharing one type/field.
    ///
    /// Used to hydrate list pages in a single query instead of one per row.
    pub async fn list_for_owners(
        conn: &mut PgConnection,
        owner_type: &str,
        owner_field: &str,
        owner_ids: &[DbId],
    ) -> DbResult<Vec<Attachment>> {
        if owner_ids.is_empty() {
            return Ok(Vec::new());
        }
        let sql = format!(
            "SELECT {COLUMNS} FROM attachments \
             WHERE owner_type = $1 AND owner_field = $2 AND owner_id = ANY($3) \
               AND deleted_at IS NULL \
             ORDER BY created_at ASC"
        );
        let rows = sqlx::query_as::<_, Attachment>(&sql)
            .bind(owner_type)
            .bind(owner_field)
            .bind(owner_ids)
            .fetch_all(conn)
            .await?;
        Ok(rows)
    }

    /// Replace an owner's attachment set with `inputs`.
    ///
    /// Existing rows absent from the new list are soft-deleted (stamped
    /// with the acting user), entries without an id are inserted, and
    /// entries whose id already exists are kept untouched. Returns the
    /// resulting live set.
    pub async fn replace_for_owner(
        conn: &mut PgConnection,
        actor: &Actor,
        owner: &AttachmentOwner,
        inputs: &[AttachmentInput],
    ) -> DbResult<Vec<Attachment>> {
        let existing: Vec<DbId> = sqlx::query_scalar(
            "SELECT id FROM attachments \
             WHERE owner_type = $1 AND owner_field = $2 AND owner_id = $3 \
               AND deleted_at IS NULL",
        )
        .bind(owner.owner_type)
        .bind(owner.owner_field)
        .bind(owner.owner_id)
        .fetch_all(&mut *conn)
        .await?;

        let kept: Vec<DbId> = inputs.iter().filter_map(|input| input.id).collect();

        let removed: Vec<DbId> = existing
            .iter()
            .filter(|id| !kept.contains(id))
            .copied()
            .collect();
        if !removed.is_empty() {
            sqlx::query(
                "UPDATE attachments \
                 SET deleted_by = $1, deleted_at = NOW(), updated_at = NOW() \
                 WHERE id = ANY($2) AND deleted_at IS NULL",
            )
            .bind(actor.id)
            .bind(&removed)
            .execute(&mut *conn)
            .await?;
        }

        for input in inputs {
            if input.id.is_some_and(|id| existing.contains(&id)) {
                continue;
            }
            sqlx::query(
                "INSERT INTO attachments \
                 (id, owner_type, owner_field, owner_id, name, path, size_bytes, \
                  created_by, updated_by) \
                 VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $8)",
            )
            .bind(input.id.unwrap_or_else(Uuid::new_v4))
            .bind(owner.owner_type)
            .bind(owner.owner_field)
            .bind(owner.owner_id)
            .bind(input.name.as_str())
            .bind(input.path.as_deref())
            .bind(input.size_bytes)
            .bind(actor.id)
            .execute(&mut *conn)
            .await?;
        }

        Self::list_for_owner(conn, owner).await
    }
}
