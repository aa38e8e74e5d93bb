//! Request handlers, one module per entity.

pub mod articles;
pub mod categories;
pub mod comments;
pub mod tags;
pub mod users;

use serde::Deserialize;

/// Query params shared by every autocomplete endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct AutocompleteParams {
    /// UUID or label substring to match; absent means "everything".
    pub query: Option<String>,
    pub limit: Option<i64>,
}
