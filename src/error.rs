use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShelfError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Transport/backend failure on a read or write.
    #[error("Store access error: {0}")]
    Access(String),

    /// Rejected input (blank, duplicate, or malformed shelf name).
    #[error("Validation error: {0}")]
    Validation(String),
}

pub type Result<T> = std::result::Result<T, ShelfError>;
