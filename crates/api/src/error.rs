//! Error-to-HTTP mapping.
//!
//! Handlers return [`AppResult`]; every failure renders as
//! `{ "error": <message>, "code": <stable machine code> }` so clients can
//! branch on `code` without parsing prose.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use pressroom_core::error::CoreError;
use pressroom_db::error::DbError;
use serde::Serialize;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl From<DbError> for AppError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::Core(core) => AppError::Core(core),
            DbError::Database(db) => AppError::Database(db),
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    code: &'static str,
}

impl AppError {
    /// Status and wire body for this error. Database internals never
    /// leak: anything unclassified becomes a generic 500.
    fn classify(&self) -> (StatusCode, ErrorBody) {
        let (status, code, message) = match self {
            AppError::Core(CoreError::NotFound { entity, id }) => (
                StatusCode::NOT_FOUND,
                "NOT_FOUND",
                format!("{entity} {id} not found"),
            ),
            AppError::Core(CoreError::Validation(msg)) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
            }
            AppError::Core(CoreError::Unauthorized(msg)) => {
                (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg.clone())
            }
            AppError::Core(CoreError::Forbidden(msg)) => {
                (StatusCode::FORBIDDEN, "FORBIDDEN", msg.clone())
            }
            AppError::Database(err) => classify_sqlx_error(err),
        };
        (status, ErrorBody { error: message, code })
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = self.classify();
        (status, Json(body)).into_response()
    }
}

/// Map a sqlx error onto the wire contract.
///
/// Unique-constraint violations are the one database failure a client can
/// act on (a duplicate import hash), so `23505` on a `uq_*` constraint
/// becomes a 409; `RowNotFound` a 404; the rest log at error level and
/// surface as a sanitized 500.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "record not found".to_string(),
        ),
        sqlx::Error::Database(db_err)
            if db_err.code().as_deref() == Some("23505")
                && db_err.constraint().is_some_and(|c| c.starts_with("uq_")) =>
        {
            let constraint = db_err.constraint().unwrap_or_default();
            (
                StatusCode::CONFLICT,
                "CONFLICT",
                format!("duplicate value violates {constraint}"),
            )
        }
        other => {
            tracing::error!(error = %other, "Unhandled database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "an internal error occurred".to_string(),
            )
        }
    }
}
