//! Error types for chanboard.

use thiserror::Error;

/// Common error type for chanboard.
#[derive(Error, Debug)]
pub enum ChanError {
    /// Lookup, update or delete target does not exist.
    #[error("{0} not found")]
    NotFound(String),

    /// Uniqueness violation on create.
    #[error("conflict: {0}")]
    Conflict(String),

    /// Transient store or connectivity failure.
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// Database error.
    ///
    /// Any store failure that is neither a conflict nor a connectivity problem.
    #[error("database error: {0}")]
    Database(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

impl ChanError {
    /// Not-found error for the board with the given slug.
    pub fn board_not_found(slug: &str) -> Self {
        ChanError::NotFound(format!("board '{slug}'"))
    }

    /// Check whether this is a not-found error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ChanError::NotFound(_))
    }

    /// Check whether this is a conflict error.
    pub fn is_conflict(&self) -> bool {
        matches!(self, ChanError::Conflict(_))
    }
}

// Conversion from sqlx errors
impl From<sqlx::Error> for ChanError {
    fn from(e: sqlx::Error) -> Self {
        match e {
            sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                ChanError::Conflict(db_err.message().to_string())
            }
            sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::WorkerCrashed
            | sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::Protocol(_) => ChanError::Unavailable(e.to_string()),
            _ => ChanError::Database(e.to_string()),
        }
    }
}

/// Result type alias for chanboard operations.
pub type Result<T> = std::result::Result<T, ChanError>;
