//! JSON seed of the in-memory store.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::path::Path;

use crate::domain::catalog::{Choice, ChoiceId};
use crate::domain::content::{
    ContainerPath, ContainerSummary, ContentId, ContentKind, ContentSlug, ContentSummary, Reaction,
    ReactionId, VersionSha,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::member::{Member, MemberId};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Fixtures {
    pub members: Vec<MemberRow>,
    pub subcategories: Vec<ChoiceRow>,
    pub licences: Vec<ChoiceRow>,
    pub help_categories: Vec<ChoiceRow>,
    pub contents: Vec<ContentRow>,
    pub reactions: Vec<ReactionRow>,
    pub validations: Vec<ValidationRow>,
}

impl Fixtures {
    pub async fn from_path(path: impl AsRef<Path>) -> DomainResult<Self> {
        let path = path.as_ref();
        let raw = tokio::fs::read_to_string(path).await.map_err(|err| {
            DomainError::Persistence(format!("cannot read fixtures {}: {err}", path.display()))
        })?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> DomainResult<Self> {
        serde_json::from_str(raw)
            .map_err(|err| DomainError::Persistence(format!("invalid fixtures: {err}")))
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct MemberRow {
    pub id: i64,
    pub username: String,
    #[serde(default = "default_true")]
    pub contactable: bool,
}

fn default_true() -> bool {
    true
}

impl TryFrom<MemberRow> for Member {
    type Error = DomainError;

    fn try_from(row: MemberRow) -> Result<Self, Self::Error> {
        Ok(Member {
            id: MemberId::new(row.id)?,
            username: row.username,
            contactable: row.contactable,
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChoiceRow {
    pub id: i64,
    pub label: String,
}

impl TryFrom<ChoiceRow> for Choice {
    type Error = DomainError;

    fn try_from(row: ChoiceRow) -> Result<Self, Self::Error> {
        Ok(Choice::new(ChoiceId::new(row.id)?, row.label))
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContainerRow {
    pub path: String,
    pub title: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContentRow {
    pub id: i64,
    pub slug: String,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: ContentKind,
    pub current_version: String,
    #[serde(default)]
    pub sha_beta: Option<String>,
    #[serde(default)]
    pub sha_public: Option<String>,
    /// Member ids.
    #[serde(default)]
    pub authors: Vec<i64>,
    #[serde(default)]
    pub is_locked: bool,
    #[serde(default)]
    pub js_support: bool,
    #[serde(default)]
    pub containers: Vec<ContainerRow>,
}

impl ContentRow {
    /// Authors are resolved against the already loaded `members`.
    pub fn into_summary(self, members: &[Member]) -> DomainResult<ContentSummary> {
        let authors = self
            .authors
            .iter()
            .map(|id| {
                members
                    .iter()
                    .find(|member| member.id.0 == *id)
                    .cloned()
                    .ok_or_else(|| DomainError::NotFound(format!("author {id} of content {}", self.id)))
            })
            .collect::<DomainResult<Vec<_>>>()?;

        let containers = self
            .containers
            .into_iter()
            .map(|row| {
                Ok(ContainerSummary {
                    path: ContainerPath::parse(&row.path)?,
                    title: row.title,
                })
            })
            .collect::<DomainResult<Vec<_>>>()?;

        Ok(ContentSummary {
            id: ContentId::new(self.id)?,
            slug: ContentSlug::new(self.slug)?,
            title: self.title,
            kind: self.kind,
            current_version: VersionSha::new(self.current_version)?,
            sha_beta: self.sha_beta.map(VersionSha::new).transpose()?,
            sha_public: self.sha_public.map(VersionSha::new).transpose()?,
            authors,
            is_locked: self.is_locked,
            js_support: self.js_support,
            containers,
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReactionRow {
    pub id: i64,
    pub content: i64,
    pub author: i64,
    pub text: String,
    pub posted_at: DateTime<Utc>,
}

impl TryFrom<ReactionRow> for Reaction {
    type Error = DomainError;

    fn try_from(row: ReactionRow) -> Result<Self, Self::Error> {
        Ok(Reaction {
            id: ReactionId::new(row.id)?,
            content_id: ContentId::new(row.content)?,
            author_id: MemberId::new(row.author)?,
            text: row.text,
            posted_at: row.posted_at,
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ValidationRow {
    pub id: i64,
    pub content: i64,
    pub version: String,
}
