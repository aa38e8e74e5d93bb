use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all axum handlers via `State<AppState>`.
///
/// Cheaply cloneable (the pool is an `Arc` internally, the config is wrapped
/// in one).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: pressroom_db::DbPool,
    /// Server configuration (JWT validation, timeouts, CORS).
    pub config: Arc<ServerConfig>,
}
