//! Comment mutations.

use pressroom_core::actor::Actor;
use pressroom_core::error::CoreError;
use pressroom_core::types::DbId;

use crate::error::DbResult;
use crate::models::comment::{CommentWithRelations, CreateComment, UpdateComment};
use crate::repositories::CommentRepo;
use crate::DbPool;

pub struct CommentService;

impl CommentService {
    pub async fn create(
        pool: &DbPool,
        actor: &Actor,
        input: &CreateComment,
    ) -> DbResult<CommentWithRelations> {
        let mut tx = pool.begin().await?;
        let comment = CommentRepo::create(&mut tx, actor, input).await?;
        let hydrated = CommentRepo::find_by_id(&mut tx, comment.id)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "comment",
                id: comment.id,
            })?;
        tx.commit().await?;
        Ok(hydrated)
    }

    pub async fn update(
        pool: &DbPool,
        actor: &Actor,
        id: DbId,
        input: &UpdateComment,
    ) -> DbResult<CommentWithRelations> {
        let mut tx = pool.begin().await?;
        if CommentRepo::update(&mut tx, actor, id, input).await?.is_none() {
            return Err(CoreError::NotFound {
                entity: "comment",
                id,
            }
            .into());
        }
        let hydrated = CommentRepo::find_by_id(&mut tx, id)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "comment",
                id,
            })?;
        tx.commit().await?;
        Ok(hydrated)
    }

    /// Soft-delete a comment. Admin only.
    pub async fn remove(pool: &DbPool, actor: &Actor, id: DbId) -> DbResult<()> {
        if !actor.is_admin() {
            return Err(CoreError::Forbidden("removing records requires the admin role".into()).into());
        }
        let mut tx = pool.begin().await?;
        if !CommentRepo::soft_delete(&mut tx, actor, id).await? {
            return Err(CoreError::NotFound {
                entity: "comment",
                id,
            }
            .into());
        }
        tx.commit().await?;
        tracing::debug!(comment_id = %id, deleted_by = ?actor.id, "Comment soft-deleted");
        Ok(())
    }
}
