use async_trait::async_trait;
use std::collections::BTreeMap;

use super::fixtures::Fixtures;
use crate::domain::catalog::{CatalogRepository, Choice};
use crate::domain::content::{
    ContentId, ContentReadRepository, ContentSummary, Reaction, ReactionId, ReactionReadRepository,
    VersionSha,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::member::{Member, MemberDirectory, MemberId};
use crate::domain::validation::{Validation, ValidationId, ValidationReadRepository};

/// Read-only store backing every repository port, seeded once at startup.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    members: Vec<Member>,
    subcategories: Vec<Choice>,
    licences: Vec<Choice>,
    help_categories: Vec<Choice>,
    contents: BTreeMap<ContentId, ContentSummary>,
    reactions: Vec<Reaction>,
    validations: BTreeMap<ValidationId, (ContentId, VersionSha)>,
}

fn choices(rows: Vec<super::fixtures::ChoiceRow>) -> DomainResult<Vec<Choice>> {
    rows.into_iter().map(Choice::try_from).collect()
}

impl InMemoryStore {
    pub fn from_fixtures(fixtures: Fixtures) -> DomainResult<Self> {
        let members = fixtures
            .members
            .into_iter()
            .map(Member::try_from)
            .collect::<DomainResult<Vec<_>>>()?;

        let mut contents = BTreeMap::new();
        for row in fixtures.contents {
            let content = row.into_summary(&members)?;
            contents.insert(content.id, content);
        }

        let reactions = fixtures
            .reactions
            .into_iter()
            .map(Reaction::try_from)
            .collect::<DomainResult<Vec<_>>>()?;

        let mut validations = BTreeMap::new();
        for row in fixtures.validations {
            let content = ContentId::new(row.content)?;
            if !contents.contains_key(&content) {
                return Err(DomainError::NotFound(format!(
                    "content {content} of validation {}",
                    row.id
                )));
            }
            validations.insert(ValidationId::new(row.id)?, (content, VersionSha::new(row.version)?));
        }

        let store = Self {
            members,
            subcategories: choices(fixtures.subcategories)?,
            licences: choices(fixtures.licences)?,
            help_categories: choices(fixtures.help_categories)?,
            contents,
            reactions,
            validations,
        };
        tracing::info!(
            contents = store.contents.len(),
            members = store.members.len(),
            reactions = store.reactions.len(),
            validations = store.validations.len(),
            "in-memory store seeded"
        );
        Ok(store)
    }

    /// Reactions of `content`, oldest first.
    fn reactions_on(&self, content: ContentId) -> impl Iterator<Item = &Reaction> {
        self.reactions
            .iter()
            .filter(move |reaction| reaction.content_id == content)
    }
}

#[async_trait]
impl ContentReadRepository for InMemoryStore {
    async fn find_by_id(&self, id: ContentId) -> DomainResult<Option<ContentSummary>> {
        Ok(self.contents.get(&id).cloned())
    }
}

#[async_trait]
impl ReactionReadRepository for InMemoryStore {
    async fn find_by_id(&self, id: ReactionId) -> DomainResult<Option<Reaction>> {
        Ok(self.reactions.iter().find(|reaction| reaction.id == id).cloned())
    }

    async fn latest(&self, content: ContentId) -> DomainResult<Option<Reaction>> {
        Ok(self
            .reactions_on(content)
            .max_by_key(|reaction| (reaction.posted_at, reaction.id.0))
            .cloned())
    }

    async fn last_by_author(
        &self,
        content: ContentId,
        author: MemberId,
    ) -> DomainResult<Option<Reaction>> {
        Ok(self
            .reactions_on(content)
            .filter(|reaction| reaction.author_id == author)
            .max_by_key(|reaction| (reaction.posted_at, reaction.id.0))
            .cloned())
    }
}

#[async_trait]
impl ValidationReadRepository for InMemoryStore {
    async fn find_by_id(&self, id: ValidationId) -> DomainResult<Option<Validation>> {
        let Some((content, version)) = self.validations.get(&id) else {
            return Ok(None);
        };
        let content = self.contents.get(content).cloned().ok_or_else(|| {
            DomainError::Persistence(format!("validation {id} points to a missing content"))
        })?;
        Ok(Some(Validation {
            id,
            content,
            version: version.clone(),
        }))
    }
}

#[async_trait]
impl MemberDirectory for InMemoryStore {
    async fn find_contactable(&self, username: &str) -> DomainResult<Option<Member>> {
        let username = username.to_lowercase();
        Ok(self
            .members
            .iter()
            .find(|member| member.contactable && member.username.to_lowercase() == username)
            .cloned())
    }
}

#[async_trait]
impl CatalogRepository for InMemoryStore {
    async fn subcategories(&self) -> DomainResult<Vec<Choice>> {
        Ok(self.subcategories.clone())
    }

    async fn licences(&self) -> DomainResult<Vec<Choice>> {
        Ok(self.licences.clone())
    }

    async fn help_categories(&self) -> DomainResult<Vec<Choice>> {
        Ok(self.help_categories.clone())
    }
}
