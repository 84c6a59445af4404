use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MemberId(pub i64);

impl MemberId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("member id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<MemberId> for i64 {
    fn from(value: MemberId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    pub id: MemberId,
    pub username: String,
    /// Members who are banned or inactive cannot be reached (added as
    /// authors, sent private messages).
    pub contactable: bool,
}

#[async_trait]
pub trait MemberDirectory: Send + Sync {
    /// Case-insensitive lookup restricted to contactable members.
    async fn find_contactable(&self, username: &str) -> DomainResult<Option<Member>>;
}
