//! Article mutations: create/update with relation sets, soft delete.

use pressroom_core::actor::Actor;
use pressroom_core::error::CoreError;
use pressroom_core::types::DbId;

use crate::error::DbResult;
use crate::models::article::{ArticleWithRelations, CreateArticle, UpdateArticle};
use crate::repositories::ArticleRepo;
use crate::DbPool;

pub struct ArticleService;

impl ArticleService {
    /// Create an article with its relation sets in one transaction.
    pub async fn create(
        pool: &DbPool,
        actor: &Actor,
        input: &CreateArticle,
    ) -> DbResult<ArticleWithRelations> {
        let mut tx = pool.begin().await?;
        let article = ArticleRepo::create(&mut tx, actor, input).await?;
        let hydrated = ArticleRepo::find_by_id(&mut tx, article.id)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "article",
                id: article.id,
            })?;
        tx.commit().await?;
        Ok(hydrated)
    }

    /// Update an article and replace its relation sets in one transaction.
    pub async fn update(
        pool: &DbPool,
        actor: &Actor,
        id: DbId,
        input: &UpdateArticle,
    ) -> DbResult<ArticleWithRelations> {
        let mut tx = pool.begin().await?;
        if ArticleRepo::update(&mut tx, actor, id, input).await?.is_none() {
            return Err(CoreError::NotFound {
                entity: "article",
                id,
            }
            .into());
        }
        let hydrated = ArticleRepo::find_by_id(&mut tx, id)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "article",
                id,
            })?;
        tx.commit().await?;
        Ok(hydrated)
    }

    /// Soft-delete an article. Admin only; a non-admin actor is rejected
    /// before any write happens.
    pub async fn remove(pool: &DbPool, actor: &Actor, id: DbId) -> DbResult<()> {
        if !actor.is_admin() {
            return Err(CoreError::Forbidden("removing records requires the admin role".into()).into());
        }
        let mut tx = pool.begin().await?;
        if !ArticleRepo::soft_delete(&mut tx, actor, id).await? {
            return Err(CoreError::NotFound {
                entity: "article",
                id,
            }
            .into());
        }
        tx.commit().await?;
        tracing::debug!(article_id = %id, deleted_by = ?actor.id, "Article soft-deleted");
        Ok(())
    }
}
