use super::value_objects::{
    ContainerPath, ContentId, ContentKind, ContentSlug, ReactionId, VersionSha,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::member::{Member, MemberId};
use chrono::{DateTime, Utc};

/// A container (part or chapter) of a content tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerSummary {
    pub path: ContainerPath,
    pub title: String,
}

/// What the forms need to know about a publishable content. The tree itself
/// lives in the versioned repository and is never loaded here.
#[derive(Debug, Clone)]
pub struct ContentSummary {
    pub id: ContentId,
    pub slug: ContentSlug,
    pub title: String,
    pub kind: ContentKind,
    pub current_version: VersionSha,
    pub sha_beta: Option<VersionSha>,
    pub sha_public: Option<VersionSha>,
    pub authors: Vec<Member>,
    pub is_locked: bool,
    pub js_support: bool,
    pub containers: Vec<ContainerSummary>,
}

impl ContentSummary {
    /// Resolve the element a reader points at: the content itself for the
    /// root path, one of its containers otherwise.
    pub fn target(&self, path: ContainerPath) -> DomainResult<Targeted> {
        if path.is_root() {
            return Ok(Targeted {
                title: self.title.clone(),
                path,
            });
        }

        self.containers
            .iter()
            .find(|container| container.path == path)
            .map(|container| Targeted {
                title: container.title.clone(),
                path: container.path.clone(),
            })
            .ok_or_else(|| DomainError::NotFound(format!("container '{path}' in content {}", self.id)))
    }
}

/// Element of a content tree targeted by a typo report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Targeted {
    pub title: String,
    pub path: ContainerPath,
}

impl Targeted {
    pub fn tree_depth(&self) -> usize {
        self.path.depth()
    }
}

/// A note left by a reader below a content.
#[derive(Debug, Clone)]
pub struct Reaction {
    pub id: ReactionId,
    pub content_id: ContentId,
    pub author_id: MemberId,
    pub text: String,
    pub posted_at: DateTime<Utc>,
}
