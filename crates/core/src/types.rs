/// All entity primary keys are UUIDs (v4, generated on create when the
/// caller does not supply one for idempotent import).
pub type DbId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
