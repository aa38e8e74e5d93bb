//! Comment model, DTOs, and list filter.

use pressroom_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::article::ArticleRef;
use crate::models::user::UserRef;

/// A row from the `comments` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Comment {
    pub id: DbId,
    pub content: Option<String>,
    pub moderated: bool,
    pub author_id: Option<DbId>,
    pub article_id: Option<DbId>,
    pub import_hash: Option<String>,
    pub created_by: Option<DbId>,
    pub updated_by: Option<DbId>,
    pub deleted_by: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub deleted_at: Option<Timestamp>,
}

/// A comment with its author and article hydrated.
#[derive(Debug, Clone, Serialize)]
pub struct CommentWithRelations {
    #[serde(flatten)]
    pub comment: Comment,
    pub author: Option<UserRef>,
    pub article: Option<ArticleRef>,
}

/// DTO for creating a comment.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateComment {
    pub id: Option<DbId>,
    pub content: Option<String>,
    pub moderated: Option<bool>,
    pub author: Option<DbId>,
    pub article: Option<DbId>,
    pub import_hash: Option<String>,
}

/// DTO for updating a comment. Same relation contract as create.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateComment {
    pub content: Option<String>,
    pub moderated: Option<bool>,
    pub author: Option<DbId>,
    pub article: Option<DbId>,
}

/// Filter params for `GET /comments`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CommentFilter {
    pub id: Option<DbId>,
    /// Case-insensitive substring match on `content`.
    pub content: Option<String>,
    pub moderated: Option<bool>,
    /// Pipe-delimited author id list.
    pub author: Option<String>,
    /// Pipe-delimited article id list.
    pub article: Option<String>,
    /// Inclusive lower bound on `created_at`.
    pub created_from: Option<Timestamp>,
    /// Inclusive upper bound on `created_at`.
    pub created_to: Option<Timestamp>,
    pub page: Option<i64>,
    pub limit: Option<i64>,
    pub field: Option<String>,
    pub sort: Option<String>,
}
