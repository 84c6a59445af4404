pub mod entity;
pub mod repository;
pub mod specifications;
pub mod value_objects;

pub use entity::{ContainerSummary, ContentSummary, Reaction, Targeted};
pub use repository::{ContentReadRepository, ReactionReadRepository};
pub use specifications::AntispamSpec;
pub use value_objects::{
    ContainerPath, ContentId, ContentKind, ContentSlug, ReactionId, VersionSha,
};
