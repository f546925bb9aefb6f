use thiserror::Error;

/// Failure raised by a task store.
///
/// Not-found is not a failure: reads return `Option` and writes report the
/// affected-row count, so the only category here is the driver itself.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        StoreError::Database(err.to_string())
    }
}
