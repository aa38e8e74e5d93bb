//! Tag model and DTOs.

use pressroom_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `tags` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Tag {
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

/// Lightweight tag info attached to hydrated article rows.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TagRef {
    pub id: DbId,
    pub name: Option<String>,
}

/// DTO for creating a tag.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateTag {
    pub id: Option<DbId>,
    pub name: Option<String>,
    pub import_hash: Option<String>,
}

/// DTO for updating a tag.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTag {
    pub name: Option<String>,
}

/// Filter params for `GET /tags`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TagFilter {
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
