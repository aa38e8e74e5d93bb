//! Category model and DTOs.

use pressroom_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `categories` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Category {
    pub id: DbId,
    pub name: Option<String>,
    pub import_hash: Option<String>,
    pub created_by: Option<DbId>,
    pub updated_by: Option<DbId>,
    pub deleted_by: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub deleted_at: Option<Timestamp>,
}

/// Lightweight category info attached to hydrated article rows.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CategoryRef {
    pub id: DbId,
    pub name: Option<String>,
}

/// DTO for creating a category.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateCategory {
    pub id: Option<DbId>,
    pub name: Option<String>,
    pub import_hash: Option<String>,
}

/// DTO for updating a category.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateCategory {
    pub name: Option<String>,
}

/// Filter params for `GET /categories`.
///
/// Each present field contributes one predicate; see the repository for
/// the predicate each field maps to.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CategoryFilter {
    pub id: Option<DbId>,
    /// Case-insensitive substring match on `name`.
    pub name: Option<String>,
    /// Inclusive lower bound on `created_at`.
    pub created_from: Option<Timestamp>,
    /// Inclusive upper bound on `created_at`.
    pub created_to: Option<Timestamp>,
    pub page: Option<i64>,
    pub limit: Option<i64>,
    pub field: Option<String>,
    pub sort: Option<String>,
}
