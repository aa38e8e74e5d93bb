//! HTTP layer for the Pressroom backend.
//!
//! Thin axum handlers over the data layer: extract the caller identity,
//! deserialize the payload or query params, call a repository (reads) or
//! service (mutations), and wrap the result in the standard response
//! envelope. No business logic lives here.

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod routes;
pub mod state;
