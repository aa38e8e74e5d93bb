//! Tag mutations.

use pressroom_core::actor::Actor;
use pressroom_core::error::CoreError;
use pressroom_core::types::DbId;

use crate::error::DbResult;
use crate::models::tag::{CreateTag, Tag, UpdateTag};
use crate::repositories::TagRepo;
use crate::DbPool;

pub struct TagService;

impl TagService {
    pub async fn create(pool: &DbPool, actor: &Actor, input: &CreateTag) -> DbResult<Tag> {
        let mut tx = pool.begin().await?;
        let tag = TagRepo::create(&mut tx, actor, input).await?;
        tx.commit().await?;
        Ok(tag)
    }

    pub async fn update(
        pool: &DbPool,
        actor: &Actor,
        id: DbId,
        input: &UpdateTag,
    ) -> DbResult<Tag> {
        let mut tx = pool.begin().await?;
        let tag = TagRepo::update(&mut tx, actor, id, input)
            .await?
            .ok_or(CoreError::NotFound { entity: "tag", id })?;
        tx.commit().await?;
        Ok(tag)
    }

    /// Soft-delete a tag. Admin only.
    pub async fn remove(pool: &DbPool, actor: &Actor, id: DbId) -> DbResult<()> {
        if !actor.is_admin() {
            return Err(CoreError::Forbidden("removing records requires the admin role".into()).into());
        }
        let mut tx = pool.begin().await?;
        if !TagRepo::soft_delete(&mut tx, actor, id).await? {
            return Err(CoreError::NotFound { entity: "tag", id }.into());
        }
        tx.commit().await?;
        tracing::debug!(tag_id = %id, deleted_by = ?actor.id, "Tag soft-deleted");
        Ok(())
    }
}
