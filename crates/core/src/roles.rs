//! Well-known role name constants.
//!
//! These must match the `role` values seeded for users; `admin` is the
//! only role allowed to remove (soft-delete) records.

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_USER: &str = "user";
