//! Database models: row structs, mutation DTOs, and list-filter params.
//!
//! Row structs mirror table columns (`FromRow` + the shared audit
//! columns). `Create*`/`Update*` DTOs are the mutation payloads;
//! `*Filter` structs are the typed list-query schemas consumed by the
//! predicate builder in [`crate::filter`].

pub mod article;
pub mod attachment;
pub mod category;
pub mod comment;
pub mod tag;
pub mod user;

use pressroom_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// `{id, label}` pair returned by every autocomplete lookup.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AutocompleteItem {
    pub id: DbId,
    pub label: String,
}
