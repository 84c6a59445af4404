use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChoiceId(pub i64);

impl ChoiceId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("choice id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<ChoiceId> for i64 {
    fn from(value: ChoiceId) -> Self {
        value.0
    }
}

impl fmt::Display for ChoiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One selectable row of a reference table (subcategory, licence, help
/// category).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub id: ChoiceId,
    pub label: String,
}

impl Choice {
    pub fn new(id: ChoiceId, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
        }
    }
}

#[async_trait]
pub trait CatalogRepository: Send + Sync {
    async fn subcategories(&self) -> DomainResult<Vec<Choice>>;
    async fn licences(&self) -> DomainResult<Vec<Choice>>;
    async fn help_categories(&self) -> DomainResult<Vec<Choice>>;
}
