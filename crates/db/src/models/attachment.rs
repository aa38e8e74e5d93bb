//! Polymorphic attachment model (files/images owned by another entity).
//!
//! Attachments are scoped by a typed owner triple instead of a raw table
//! name string: `(owner_type, owner_field, owner_id)` identifies "the
//! `images` field of article X". Replacing an owner's attachment set is
//! a diff: rows missing from the new list are soft-deleted, new entries
//! inserted, surviving ids left alone.

use pressroom_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Owner type for article rows.
pub const OWNER_TYPE_ARTICLES: &str = "articles";
/// Owner field for article images.
pub const OWNER_FIELD_IMAGES: &str = "images";

/// A row from the `attachments` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Attachment {
    pub id: DbId,
    pub owner_type: String,
    pub owner_field: String,
    pub owner_id: DbId,
    pub name: String,
    pub path: Option<String>,
    pub size_bytes: Option<i64>,
    pub created_by: Option<DbId>,
    pub updated_by: Option<DbId>,
    pub deleted_by: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub deleted_at: Option<Timestamp>,
}

/// The typed owner key scoping a set of attachments.
#[derive(Debug, Clone, Copy)]
pub struct AttachmentOwner {
    pub owner_type: &'static str,
    pub owner_field: &'static str,
    pub owner_id: DbId,
}

impl AttachmentOwner {
    /// The `images` attachment set of an article.
    pub fn article_images(article_id: DbId) -> Self {
        Self {
            owner_type: OWNER_TYPE_ARTICLES,
            owner_field: OWNER_FIELD_IMAGES,
            owner_id: article_id,
        }
    }
}

/// One entry in a replace-attachments payload.
///
/// An entry with an `id` refers to an already-stored attachment that
/// should survive the replace; an entry without one is a new upload.
#[derive(Debug, Clone, Deserialize)]
pub struct AttachmentInput {
    pub id: Option<DbId>,
    pub name: String,
    pub path: Option<String>,
    pub size_bytes: Option<i64>,
}
