use thiserror::Error;

#[derive(Error, Debug)]
pub enum CleanerError {
    #[error("{field}: {reason}")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Malformed request body: {message}")]
    MalformedBody { message: String },

    #[error("Unsupported media type")]
    UnsupportedMediaType,

    #[error("{message}")]
    Unauthorized { message: String },

    #[error("Execution {id} not found")]
    NotFound { id: i64 },

    #[error("Resource already exists")]
    DuplicateRecord,

    #[error("Storage unavailable: {message}")]
    StorageUnavailable { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl CleanerError {
    /// Transient failures are worth retrying with backoff; everything else
    /// surfaces immediately.
    pub fn is_transient(&self) -> bool {
        matches!(self, CleanerError::StorageUnavailable { .. })
    }
}

pub type Result<T> = std::result::Result<T, CleanerError>;
