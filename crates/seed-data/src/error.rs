//! Error taxonomy for seeding operations.

use thiserror::Error;

/// Errors surfaced by the seeder.
///
/// Store errors are classified on the way out of sqlx: connection-level
/// failures become [`SeedError::StoreUnavailable`], unique index breaches
/// become [`SeedError::ConstraintViolation`], everything else stays a
/// plain database error.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("store unavailable: {0}")]
    StoreUnavailable(#[source] sqlx::Error),

    #[error("unique constraint violated: {0}")]
    ConstraintViolation(#[source] sqlx::Error),

    #[error("malformed record: {0}")]
    MalformedRecord(String),

    #[error("database error: {0}")]
    Database(#[source] sqlx::Error),
}

impl From<sqlx::Error> for SeedError {
    fn from(err: sqlx::Error) -> Self {
        if let Some(db_err) = err.as_database_error() {
            if db_err.is_unique_violation() {
                return SeedError::ConstraintViolation(err);
            }
        }

        match err {
            sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed => SeedError::StoreUnavailable(err),
            other => SeedError::Database(other),
        }
    }
}
