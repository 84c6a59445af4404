use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use super::common;
use crate::application::ports::urls::{Route, UrlResolver};
use crate::domain::content::{ContainerPath, ContentSlug};
use crate::domain::errors::DomainError;
use crate::domain::form::{ErrorCode, FieldError, Form, FormElement, FormErrors, Submission, messages};

/// Where to move a child inside its container tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveMethod {
    Up,
    Down,
    After(ContainerPath),
    Before(ContainerPath),
}

impl FromStr for MoveMethod {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "up" => return Ok(Self::Up),
            "down" => return Ok(Self::Down),
            _ => {}
        }

        let (method, target) = value
            .split_once(':')
            .ok_or_else(|| DomainError::Validation(format!("unknown moving method '{value}'")))?;
        let path = ContainerPath::parse(target)?;
        if path.is_root() {
            return Err(DomainError::Validation("moving target is empty".into()));
        }

        match method {
            "after" => Ok(Self::After(path)),
            "before" => Ok(Self::Before(path)),
            other => Err(DomainError::Validation(format!(
                "unknown moving method '{other}'"
            ))),
        }
    }
}

impl fmt::Display for MoveMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Up => f.write_str("up"),
            Self::Down => f.write_str("down"),
            Self::After(path) => write!(f, "after:{path}"),
            Self::Before(path) => write!(f, "before:{path}"),
        }
    }
}

impl Serialize for MoveMethod {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveElementData {
    pub child_slug: String,
    pub container_slug: String,
    pub first_level_slug: Option<String>,
    pub moving_method: MoveMethod,
    pub pk: Option<i64>,
}

/// Reorders a part, chapter or extract. Rendered once per element with
/// every value hidden.
pub struct MoveElementForm<'a> {
    urls: &'a dyn UrlResolver,
}

impl<'a> MoveElementForm<'a> {
    pub const NAME: &'static str = "move-element";

    pub fn new(urls: &'a dyn UrlResolver) -> Self {
        Self { urls }
    }

    pub fn build(&self) -> Form {
        Form::new(Self::NAME)
            .action(self.urls.reverse(Route::MoveElement))
            .element("child_slug", FormElement::hidden().required())
            .element("container_slug", FormElement::hidden().required())
            .element("first_level_slug", FormElement::hidden())
            .element("moving_method", FormElement::hidden().required())
            .element("pk", FormElement::hidden())
    }

    pub fn clean(&self, submission: &Submission) -> Result<MoveElementData, FormErrors> {
        let mut errors = FormErrors::new();
        let child_slug = slug(submission, "child_slug", true, &mut errors);
        let container_slug = slug(submission, "container_slug", true, &mut errors);
        let first_level_slug = slug(submission, "first_level_slug", false, &mut errors);
        let moving_method = moving_method(submission, &mut errors);

        match (child_slug, container_slug, moving_method) {
            (Some(child_slug), Some(container_slug), Some(moving_method)) => {
                errors.into_result(MoveElementData {
                    child_slug,
                    container_slug,
                    first_level_slug,
                    moving_method,
                    pk: common::digits(submission, "pk"),
                })
            }
            _ => Err(errors),
        }
    }
}

fn slug(
    submission: &Submission,
    name: &str,
    required: bool,
    errors: &mut FormErrors,
) -> Option<String> {
    let Some(value) = submission.text(name).filter(|value| !value.is_empty()) else {
        if required {
            errors.push(FieldError::field(name, ErrorCode::Required, messages::REQUIRED));
        }
        return None;
    };

    match ContentSlug::new(value) {
        Ok(slug) => Some(slug.into()),
        Err(_) => {
            errors.push(FieldError::field(name, ErrorCode::InvalidSlug, messages::INVALID_SLUG));
            None
        }
    }
}

fn moving_method(submission: &Submission, errors: &mut FormErrors) -> Option<MoveMethod> {
    let Some(value) = submission.text("moving_method").filter(|value| !value.is_empty()) else {
        errors.push(FieldError::field(
            "moving_method",
            ErrorCode::Required,
            messages::REQUIRED,
        ));
        return None;
    };

    match value.parse() {
        Ok(method) => Some(method),
        Err(err) => {
            tracing::debug!(error = %err, "rejected moving method");
            errors.push(FieldError::field(
                "moving_method",
                ErrorCode::InvalidMove,
                messages::INVALID_MOVE,
            ));
            None
        }
    }
}
