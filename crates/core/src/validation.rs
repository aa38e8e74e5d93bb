//! Pure validation helpers used before query construction.
//!
//! Filter values arrive as loosely-typed query-string fragments; these
//! helpers turn them into typed values or a [`CoreError::Validation`],
//! so an unparsable id fails loudly instead of silently matching nothing.

use uuid::Uuid;

use crate::error::CoreError;

/// Sort direction for list queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_sql(self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

/// Parse a single UUID, rejecting malformed input with a validation error.
pub fn parse_uuid(raw: &str) -> Result<Uuid, CoreError> {
    Uuid::parse_str(raw.trim())
        .map_err(|_| CoreError::Validation(format!("'{raw}' is not a valid UUID")))
}

/// Parse a pipe-delimited (`|`) list of UUIDs.
///
/// Empty tokens are skipped; any non-empty token that fails to parse
/// aborts the whole filter with a validation error.
pub fn parse_uuid_list(raw: &str) -> Result<Vec<Uuid>, CoreError> {
    let mut ids = Vec::new();
    for token in raw.split('|') {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }
        ids.push(parse_uuid(token)?);
    }
    if ids.is_empty() {
        return Err(CoreError::Validation(
            "id list filter contains no valid ids".to_string(),
        ));
    }
    Ok(ids)
}

/// Parse a sort direction (`asc` / `desc`, case-insensitive).
pub fn parse_sort_direction(raw: &str) -> Result<SortDirection, CoreError> {
    match raw.to_ascii_lowercase().as_str() {
        "asc" => Ok(SortDirection::Asc),
        "desc" => Ok(SortDirection::Desc),
        other => Err(CoreError::Validation(format!(
            "'{other}' is not a valid sort direction (expected 'asc' or 'desc')"
        ))),
    }
}
