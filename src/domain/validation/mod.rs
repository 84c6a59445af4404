use crate::domain::content::{ContentSummary, VersionSha};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ValidationId(pub i64);

impl ValidationId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation(
                "validation id must be positive".into(),
            ))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<ValidationId> for i64 {
    fn from(value: ValidationId) -> Self {
        value.0
    }
}

impl fmt::Display for ValidationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A pending request to publish one version of a content.
#[derive(Debug, Clone)]
pub struct Validation {
    pub id: ValidationId,
    pub content: ContentSummary,
    pub version: VersionSha,
}

#[async_trait]
pub trait ValidationReadRepository: Send + Sync {
    async fn find_by_id(&self, id: ValidationId) -> DomainResult<Option<Validation>>;
}
