//! Liveness endpoint, mounted at the root (not under `/api/v1`).

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
struct HealthReport {
    status: &'static str,
    service: &'static str,
    version: &'static str,
    database: &'static str,
}

/// GET /health
///
/// Pings the database and reports `ok`/`degraded`. A degraded report is
/// served with 503 so load balancers can act on the status line alone.
async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthReport>) {
    let db_up = pressroom_db::health_check(&state.pool).await.is_ok();

    let (http_status, status, database) = if db_up {
        (StatusCode::OK, "ok", "up")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "degraded", "down")
    };

    (
        http_status,
        Json(HealthReport {
            status,
            service: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            database,
        }),
    )
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
