use async_trait::async_trait;

use super::entity::{ContentSummary, Reaction};
use super::value_objects::{ContentId, ReactionId};
use crate::domain::errors::DomainResult;
use crate::domain::member::MemberId;

#[async_trait]
pub trait ContentReadRepository: Send + Sync {
    async fn find_by_id(&self, id: ContentId) -> DomainResult<Option<ContentSummary>>;
}

#[async_trait]
pub trait ReactionReadRepository: Send + Sync {
    async fn find_by_id(&self, id: ReactionId) -> DomainResult<Option<Reaction>>;

    /// Most recent reaction on `content`, whoever wrote it.
    async fn latest(&self, content: ContentId) -> DomainResult<Option<Reaction>>;

    /// Most recent reaction of `author` on `content`.
    async fn last_by_author(
        &self,
        content: ContentId,
        author: MemberId,
    ) -> DomainResult<Option<Reaction>>;
}
