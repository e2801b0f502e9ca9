use thiserror::Error;

/// Result type for content operations
pub type Result<T> = std::result::Result<T, ContentError>;

/// Error types for content catalogue operations
#[derive(Debug, Error)]
pub enum ContentError {
    /// Invalid configuration, e.g. a malformed connection string
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Database unreachable or authentication failure
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// Requested document does not exist
    #[error("Not found: {0}")]
    NotFoundError(String),

    /// SQL errors, constraint violations
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// Connection pool issues
    #[error("Pool error: {0}")]
    PoolError(String),

    /// A stored document does not match its expected shape
    #[error("Invalid document: {0}")]
    DocumentError(String),
}

impl From<tokio_postgres::Error> for ContentError {
    fn from(err: tokio_postgres::Error) -> Self {
        if let Some(db_error) = err.as_db_error() {
            return ContentError::DatabaseError(format!(
                "{}: {}",
                db_error.code().code(),
                db_error.message()
            ));
        }
        ContentError::DatabaseError(err.to_string())
    }
}

impl From<deadpool_postgres::PoolError> for ContentError {
    fn from(err: deadpool_postgres::PoolError) -> Self {
        ContentError::PoolError(err.to_string())
    }
}

impl From<deadpool_postgres::BuildError> for ContentError {
    fn from(err: deadpool_postgres::BuildError) -> Self {
        ContentError::ConnectionError(err.to_string())
    }
}

impl From<serde_json::Error> for ContentError {
    fn from(err: serde_json::Error) -> Self {
        ContentError::DocumentError(err.to_string())
    }
}
