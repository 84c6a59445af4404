use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Error)]
pub enum DomainError {
    /// A value object rejected its input (slug, sha, path, id).
    #[error("validation error: {0}")]
    Validation(String),
    #[error("not found: {0}")]
    NotFound(String),
    /// The backing store could not be read or holds inconsistent rows.
    #[error("persistence error: {0}")]
    Persistence(String),
}
