use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Not found")]
    NotFound,

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("Precondition failed: {0}")]
    PreconditionFailed(String),
}

pub type Result<T> = std::result::Result<T, StorageError>;
