use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    /// Rejected submission, e.g. non-positive hours.
    #[error("validation error: {0}")]
    Validation(String),
    /// Import payload is not an array of well-formed entries.
    #[error("invalid backup format: {0}")]
    Format(String),
    /// Stored entries could not be read or decoded.
    #[error("could not read stored entries: {0}")]
    PersistenceRead(String),
    #[error("could not save entries: {0}")]
    Persistence(#[from] anyhow::Error),
}
