//! Category mutations.

use pressroom_core::actor::Actor;
use pressroom_core::error::CoreError;
use pressroom_core::types::DbId;

use crate::error::DbResult;
use crate::models::category::{Category, CreateCategory, UpdateCategory};
use crate::repositories::CategoryRepo;
use crate::DbPool;

pub struct CategoryService;

impl CategoryService {
    pub async fn create(
        pool: &DbPool,
        actor: &Actor,
        input: &CreateCategory,
    ) -> DbResult<Category> {
        let mut tx = pool.begin().await?;
        let category = CategoryRepo::create(&mut tx, actor, input).await?;
        tx.commit().await?;
        Ok(category)
    }

    pub async fn update(
        pool: &DbPool,
        actor: &Actor,
        id: DbId,
        input: &UpdateCategory,
    ) -> DbResult<Category> {
        let mut tx = pool.begin().await?;
        let category = CategoryRepo::update(&mut tx, actor, id, input)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "category",
                id,
            })?;
        tx.commit().await?;
        Ok(category)
    }

    /// Soft-delete a category. Admin only.
    pub async fn remove(pool: &DbPool, actor: &Actor, id: DbId) -> DbResult<()> {
        if !actor.is_admin() {
            return Err(CoreError::Forbidden("removing records requires the admin role".into()).into());
        }
        let mut tx = pool.begin().await?;
        if !CategoryRepo::soft_delete(&mut tx, actor, id).await? {
            return Err(CoreError::NotFound {
                entity: "category",
                id,
            }
            .into());
        }
        tx.commit().await?;
        tracing::debug!(category_id = %id, deleted_by = ?actor.id, "Category soft-deleted");
        Ok(())
    }
}
