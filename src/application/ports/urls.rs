// src/application/ports/urls.rs
use crate::domain::content::{ContainerPath, ContentId, ContentKind, ContentSlug};
use crate::domain::validation::ValidationId;

/// Named pages the forms link to or post to.
#[derive(Debug, Clone, Copy)]
pub enum Route<'a> {
    /// Draft view of a content, as seen by its authors.
    ContentView {
        id: ContentId,
        slug: &'a ContentSlug,
    },
    /// Published view of a content or of one of its containers.
    ContentOnline {
        kind: ContentKind,
        id: ContentId,
        slug: &'a ContentSlug,
        path: &'a ContainerPath,
    },
    /// Beta view of a content or of one of its containers.
    ContentBeta {
        id: ContentId,
        slug: &'a ContentSlug,
        path: &'a ContainerPath,
    },
    AddReaction,
    UpdateReaction,
    AskValidation {
        id: ContentId,
        slug: &'a ContentSlug,
    },
    AcceptValidation {
        id: ValidationId,
    },
    CancelValidation {
        id: ValidationId,
    },
    RejectValidation {
        id: ValidationId,
    },
    RevokeValidation {
        id: ContentId,
        slug: &'a ContentSlug,
    },
    ActivateJsFiddle,
    MoveElement,
    WarnTypo,
    NewPrivateTopic,
    HelpWriting,
}

/// Reverse routing: turns a [`Route`] into a site-relative URL.
pub trait UrlResolver: Send + Sync {
    fn reverse(&self, route: Route<'_>) -> String;
}

/// Append an url-encoded query string to `url`.
pub fn with_query(url: &str, params: &[(&str, &str)]) -> String {
    if params.is_empty() {
        return url.to_string();
    }
    match serde_urlencoded::to_string(params) {
        Ok(query) => format!("{url}?{query}"),
        Err(err) => {
            tracing::warn!(error = %err, url, "failed to encode query string");
            url.to_string()
        }
    }
}
