use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContentId(pub i64);

impl ContentId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation(
                "content id must be positive".into(),
            ))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<ContentId> for i64 {
    fn from(value: ContentId) -> Self {
        value.0
    }
}

impl fmt::Display for ContentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReactionId(pub i64);

impl ReactionId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation(
                "reaction id must be positive".into(),
            ))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<ReactionId> for i64 {
    fn from(value: ReactionId) -> Self {
        value.0
    }
}

impl fmt::Display for ReactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// URL fragment naming a content or one of its containers. Only canonical
/// slugs are accepted: lowercase ASCII words joined by single hyphens.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContentSlug(String);

impl ContentSlug {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("slug cannot be empty".into()));
        }
        if slug::slugify(&value) != value {
            return Err(DomainError::Validation(format!(
                "'{value}' is not a canonical slug"
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContentSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<ContentSlug> for String {
    fn from(value: ContentSlug) -> Self {
        value.0
    }
}

/// Path of a container inside a content tree, e.g. `partie-1/chapitre-2`.
/// The empty path designates the content itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ContainerPath(Vec<ContentSlug>);

impl ContainerPath {
    pub fn root() -> Self {
        Self(Vec::new())
    }

    pub fn parse(value: &str) -> DomainResult<Self> {
        value
            .split('/')
            .filter(|segment| !segment.is_empty())
            .map(ContentSlug::new)
            .collect::<DomainResult<Vec<_>>>()
            .map(Self)
    }

    /// Number of containers between the content root and the target.
    pub fn depth(&self) -> usize {
        self.0.len()
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ContainerPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .0
            .iter()
            .map(ContentSlug::as_str)
            .collect::<Vec<_>>()
            .join("/");
        f.write_str(&joined)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContentKind {
    Tutorial,
    Article,
}

impl ContentKind {
    pub const ALL: [ContentKind; 2] = [ContentKind::Tutorial, ContentKind::Article];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContentKind::Tutorial => "TUTORIAL",
            ContentKind::Article => "ARTICLE",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ContentKind::Tutorial => "Tutoriel",
            ContentKind::Article => "Article",
        }
    }

    /// Noun with its definite article, as used inside sentences.
    pub fn with_article(&self) -> &'static str {
        match self {
            ContentKind::Tutorial => "le tutoriel",
            ContentKind::Article => "l'article",
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "TUTORIAL" => Ok(ContentKind::Tutorial),
            "ARTICLE" => Ok(ContentKind::Article),
            other => Err(DomainError::Validation(format!(
                "unknown content type '{other}'"
            ))),
        }
    }
}

/// Identifier of one version of a content tree (a commit hash).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VersionSha(String);

impl VersionSha {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("version cannot be empty".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VersionSha {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
