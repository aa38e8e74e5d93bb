//! Shared domain types for the Pressroom backend.
//!
//! Everything here is store-agnostic: id/timestamp aliases, the common
//! error enum, caller identity, role constants, and pure validation
//! helpers used by the data layer before any query is built.

pub mod actor;
pub mod error;
pub mod roles;
pub mod types;
pub mod validation;
