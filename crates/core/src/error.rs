//! Domain errors shared by the data layer and the HTTP surface.

use crate::types::DbId;

/// Outcome of a domain rule: a missing record, bad caller input, or an
/// authorization check that failed before any write happened.
///
/// Soft-deleted rows count as absent, so a lookup that only finds a
/// deleted record still reports [`CoreError::NotFound`].
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// No live record of `entity` with this id.
    #[error("no {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    /// Caller input failed a parse or range check (malformed UUID list,
    /// unknown sort field, negative pagination, ...).
    #[error("invalid input: {0}")]
    Validation(String),

    /// The caller presented credentials that could not be verified.
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// The caller is known but lacks the role the operation requires.
    #[error("forbidden: {0}")]
    Forbidden(String),
}
