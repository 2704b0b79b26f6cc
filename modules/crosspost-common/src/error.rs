use thiserror::Error;

/// Result type alias for crosspost operations.
pub type Result<T> = std::result::Result<T, CrosspostError>;

/// What went wrong talking to a destination platform. Shared by every
/// `Publisher` implementation so the job layer can treat platforms uniformly.
#[derive(Debug, Error)]
pub enum PublishError {
    /// The platform answered, but refused the post. Absorbed by the job
    /// (logged, reported as an outcome), never fatal.
    #[error("Remote rejected the post (status {status}): {message}")]
    Rejected {
        status: u16,
        message: serde_json::Value,
    },

    /// Connection refused, DNS failure, timeout. Fatal to the job.
    #[error("Transport error: {0}")]
    Transport(String),

    /// Response body could not be decoded. Fatal to the job.
    #[error("Parse error: {0}")]
    Parse(String),
}

#[derive(Debug, Error)]
pub enum CrosspostError {
    #[error("No stored post with id: {0}")]
    PostNotFound(i64),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Publish failed: {0}")]
    Publish(#[from] PublishError),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
