//! Article model, DTOs, and list filter.

use pressroom_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::attachment::{Attachment, AttachmentInput};
use crate::models::category::CategoryRef;
use crate::models::tag::TagRef;
use crate::models::user::UserRef;

/// A row from the `articles` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Article {
    pub id: DbId,
    pub title: Option<String>,
    pub body: Option<String>,
    pub featured: bool,
    pub author_id: Option<DbId>,
    pub category_id: Option<DbId>,
    pub import_hash: Option<String>,
    pub created_by: Option<DbId>,
    pub updated_by: Option<DbId>,
    pub deleted_by: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub deleted_at: Option<Timestamp>,
}

/// Lightweight article info attached to hydrated comment rows.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ArticleRef {
    pub id: DbId,
    pub title: Option<String>,
}

/// An article with every declared relation hydrated.
///
/// Returned by both `find_by_id` and `find_all` so callers never need a
/// second round-trip for the author/category/tags/images.
#[derive(Debug, Clone, Serialize)]
pub struct ArticleWithRelations {
    #[serde(flatten)]
    pub article: Article,
    pub author: Option<UserRef>,
    pub category: Option<CategoryRef>,
    pub tags: Vec<TagRef>,
    pub images: Vec<Attachment>,
}

/// DTO for creating an article.
///
/// Relations are set wholesale: an absent `tags`/`images` clears the
/// corresponding set, an absent `author`/`category` leaves the reference
/// NULL.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateArticle {
    pub id: Option<DbId>,
    pub title: Option<String>,
    pub body: Option<String>,
    pub featured: Option<bool>,
    pub author: Option<DbId>,
    pub category: Option<DbId>,
    pub tags: Option<Vec<DbId>>,
    pub images: Option<Vec<AttachmentInput>>,
    pub import_hash: Option<String>,
}

/// DTO for updating an article. Same relation contract as create.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateArticle {
    pub title: Option<String>,
    pub body: Option<String>,
    pub featured: Option<bool>,
    pub author: Option<DbId>,
    pub category: Option<DbId>,
    pub tags: Option<Vec<DbId>>,
    pub images: Option<Vec<AttachmentInput>>,
}

/// Filter params for `GET /articles`.
///
/// `author`, `category`, and `tags` are pipe-delimited UUID lists
/// (OR-matched within the field, ANDed with everything else).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ArticleFilter {
    pub id: Option<DbId>,
    /// Case-insensitive substring match on `title`.
    pub title: Option<String>,
    /// Case-insensitive substring match on `body`.
    pub body: Option<String>,
    pub featured: Option<bool>,
    /// Pipe-delimited author id list.
    pub author: Option<String>,
    /// Pipe-delimited category id list.
    pub category: Option<String>,
    /// Pipe-delimited tag id list; matches articles carrying at least one.
    pub tags: Option<String>,
    /// Inclusive lower bound on `created_at`.
    pub created_from: Option<Timestamp>,
    /// Inclusive upper bound on `created_at`.
    pub created_to: Option<Timestamp>,
    pub page: Option<i64>,
    pub limit: Option<i64>,
    pub field: Option<String>,
    pub sort: Option<String>,
}
