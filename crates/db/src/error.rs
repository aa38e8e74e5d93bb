use pressroom_core::error::CoreError;

/// Error type for the data layer.
///
/// Repositories surface both domain failures (filter validation, missing
/// records, forbidden mutations) and raw store failures; the API crate
/// maps each side to an HTTP response.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

pub type DbResult<T> = Result<T, DbError>;
