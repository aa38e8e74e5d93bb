//! User model (reference entity for attribution and author relations).
//!
//! User lifecycle (signup, passwords, sessions) is owned by the external
//! auth system; this model only covers what the content entities need.

use pressroom_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `users` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    pub id: DbId,
    pub email: String,
    pub full_name: Option<String>,
    pub role: String,
    pub import_hash: Option<String>,
    pub created_by: Option<DbId>,
    pub updated_by: Option<DbId>,
    pub deleted_by: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub deleted_at: Option<Timestamp>,
}

/// Lightweight user info attached to hydrated rows (author relations).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct UserRef {
    pub id: DbId,
    pub email: String,
    pub full_name: Option<String>,
}

/// DTO for creating a user record.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUser {
    pub id: Option<DbId>,
    pub email: String,
    pub full_name: Option<String>,
    pub role: Option<String>,
    pub import_hash: Option<String>,
}
