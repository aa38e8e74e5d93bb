//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async query/mutation
//! primitives that accept `&mut PgConnection` as the first argument, so
//! the same method runs against a pooled connection (handlers) or inside
//! an ambient transaction (services). Repositories never open or commit
//! transactions and never check authorization; both belong to the
//! service layer.

pub mod article_repo;
pub mod attachment_repo;
pub mod category_repo;
pub mod comment_repo;
pub mod tag_repo;
pub mod user_repo;

pub use article_repo::ArticleRepo;
pub use attachment_repo::AttachmentRepo;
pub use category_repo::CategoryRepo;
pub use comment_repo::CommentRepo;
pub use tag_repo::TagRepo;
pub use user_repo::UserRepo;

use pressroom_core::error::CoreError;
use pressroom_core::validation::parse_uuid;
use sqlx::PgConnection;

use crate::error::DbResult;
use crate::models::AutocompleteItem;

/// Upper bound on autocomplete result size.
const MAX_AUTOCOMPLETE_LIMIT: i64 = 100;

/// Shared autocomplete lookup: `{id, label}` pairs ordered by label.
///
/// A query that parses as a UUID matches the exact id or a label
/// substring; any other query matches the label substring only; an
/// absent/empty query returns the unfiltered (limited) list. An absent or
/// zero `limit` means no limit, same as list pagination; positive values
/// are capped at [`MAX_AUTOCOMPLETE_LIMIT`]. Soft-deleted rows never
/// appear.
pub(crate) async fn autocomplete_query(
    conn: &mut PgConnection,
    table: &str,
    label_column: &str,
    query: Option<&str>,
    limit: Option<i64>,
) -> DbResult<Vec<AutocompleteItem>> {
    let query = query.map(str::trim).filter(|q| !q.is_empty());
    let limit = match limit {
        None | Some(0) => None,
        Some(l) if l < 0 => {
            return Err(CoreError::Validation("limit must not be negative".into()).into())
        }
        Some(l) => Some(l.min(MAX_AUTOCOMPLETE_LIMIT)),
    };

    let mut sql = format!(
        "SELECT id, COALESCE({label_column}, '') AS label \
         FROM {table} WHERE deleted_at IS NULL"
    );

    // Placeholder layout depends on which predicates apply; bind in the
    // same order the SQL is assembled.
    let id_match = query.and_then(|q| parse_uuid(q).ok());
    let mut next_idx = 1u32;

    if query.is_some() {
        if id_match.is_some() {
            sql.push_str(&format!(
                " AND (id = ${} OR {label_column} ILIKE ${})",
                next_idx,
                next_idx + 1
            ));
            next_idx += 2;
        } else {
            sql.push_str(&format!(" AND {label_column} ILIKE ${next_idx}"));
            next_idx += 1;
        }
    }

    sql.push_str(" ORDER BY label ASC");

    if limit.is_some() {
        sql.push_str(&format!(" LIMIT ${next_idx}"));
    }

    let mut q = sqlx::query_as::<_, AutocompleteItem>(&sql);
    let pattern = query.map(|q| format!("%{q}%"));
    if let Some(id) = id_match {
        q = q.bind(id);
    }
    if let Some(ref pattern) = pattern {
        q = q.bind(pattern.as_str());
    }
    if let Some(limit) = limit {
        q = q.bind(limit);
    }

    Ok(q.fetch_all(conn).await?)
}
