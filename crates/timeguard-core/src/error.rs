use thiserror::Error;

/// Core error type with minimal dependencies
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Unknown temporal kind: {0}")]
    UnknownKind(String),
}

pub type CoreResult<T> = std::result::Result<T, CoreError>;
