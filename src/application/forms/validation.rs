//! Modal forms of the validation workflow. Each one only gathers the
//! justification of a transition; applying it is the caller's business.

use serde::Serialize;

use super::common::{self, CONFIRM};
use crate::application::ports::urls::{Route, UrlResolver, with_query};
use crate::domain::content::{ContainerPath, ContentSummary};
use crate::domain::form::{Form, FormElement, FormErrors, Submission, fields, messages};
use crate::domain::validation::Validation;

const CANCEL_CONFIRMATION: &str =
    "<p>Êtes-vous certain d'annuler la validation de ce contenu ?</p>";

/// Cleaned justification shared by the cancel and reject forms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommentData {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AskValidationData {
    pub text: String,
    pub source: Option<String>,
    pub version: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AcceptValidationData {
    pub text: String,
    pub is_major: bool,
    pub source: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RevokeValidationData {
    pub version: String,
    pub text: String,
}

/// Draft page of the validated version.
fn validated_version_url(urls: &dyn UrlResolver, validation: &Validation) -> String {
    let content = &validation.content;
    with_query(
        &urls.reverse(Route::ContentView {
            id: content.id,
            slug: &content.slug,
        }),
        &[("version", validation.version.as_str())],
    )
}

/// Asks the validators to review the current version of a content.
pub struct AskValidationForm<'a> {
    urls: &'a dyn UrlResolver,
    content: &'a ContentSummary,
}

impl<'a> AskValidationForm<'a> {
    pub const NAME: &'static str = "ask-validation";

    pub fn new(urls: &'a dyn UrlResolver, content: &'a ContentSummary) -> Self {
        Self { urls, content }
    }

    pub fn previous_page_url(&self) -> String {
        with_query(
            &self.urls.reverse(Route::ContentView {
                id: self.content.id,
                slug: &self.content.slug,
            }),
            &[("version", self.content.current_version.as_str())],
        )
    }

    pub fn build(&self) -> Form {
        Form::new(Self::NAME)
            .action(self.urls.reverse(Route::AskValidation {
                id: self.content.id,
                slug: &self.content.slug,
            }))
            .element("text", common::modal_text("Commentaire pour votre demande.", 3))
            .element("source", common::source_field())
            .element(
                "version",
                FormElement::hidden()
                    .required()
                    .default_value(self.content.current_version.as_str()),
            )
            .element("submit", FormElement::button(CONFIRM))
    }

    pub fn clean(&self, submission: &Submission) -> Result<AskValidationData, FormErrors> {
        let mut errors = FormErrors::new();
        let source = fields::optional_text(submission, "source", None, &mut errors);
        let version = fields::required_text(submission, "version", None, &mut errors);
        let text = fields::comment(
            submission,
            "text",
            messages::VALIDATORS_COMMENT_BLANK,
            &mut errors,
        );

        match (text, version) {
            (Some(text), Some(version)) => errors.into_result(AskValidationData {
                text,
                source,
                version,
            }),
            _ => Err(errors),
        }
    }
}

/// Publishes the version under validation.
pub struct AcceptValidationForm<'a> {
    urls: &'a dyn UrlResolver,
    validation: &'a Validation,
}

impl<'a> AcceptValidationForm<'a> {
    pub const NAME: &'static str = "accept-validation";

    pub fn new(urls: &'a dyn UrlResolver, validation: &'a Validation) -> Self {
        Self { urls, validation }
    }

    pub fn previous_page_url(&self) -> String {
        validated_version_url(self.urls, self.validation)
    }

    pub fn build(&self) -> Form {
        Form::new(Self::NAME)
            .action(self.urls.reverse(Route::AcceptValidation {
                id: self.validation.id,
            }))
            .element(
                "text",
                common::modal_text("Commentaire de publication.", 2).required(),
            )
            .element("source", common::source_field())
            .element(
                "is_major",
                FormElement::checkbox()
                    .label("Version majeure ?")
                    .default_value(true),
            )
            .element("submit", FormElement::button("Publier"))
    }

    pub fn clean(&self, submission: &Submission) -> Result<AcceptValidationData, FormErrors> {
        let mut errors = FormErrors::new();
        let source = fields::optional_text(submission, "source", None, &mut errors);
        let text = fields::comment(
            submission,
            "text",
            messages::VALIDATORS_COMMENT_BLANK,
            &mut errors,
        );

        match text {
            Some(text) => errors.into_result(AcceptValidationData {
                text,
                is_major: submission.flag("is_major"),
                source,
            }),
            None => Err(errors),
        }
    }
}

/// Withdraws a pending validation request.
pub struct CancelValidationForm<'a> {
    urls: &'a dyn UrlResolver,
    validation: &'a Validation,
}

impl<'a> CancelValidationForm<'a> {
    pub const NAME: &'static str = "cancel-validation";

    pub fn new(urls: &'a dyn UrlResolver, validation: &'a Validation) -> Self {
        Self { urls, validation }
    }

    pub fn previous_page_url(&self) -> String {
        validated_version_url(self.urls, self.validation)
    }

    pub fn build(&self) -> Form {
        Form::new(Self::NAME)
            .action(self.urls.reverse(Route::CancelValidation {
                id: self.validation.id,
            }))
            .element("confirmation", FormElement::markup(CANCEL_CONFIRMATION))
            .element(
                "text",
                common::modal_text("Pourquoi annuler la validation ?", 4).required(),
            )
            .element("submit", FormElement::button(CONFIRM))
    }

    pub fn clean(&self, submission: &Submission) -> Result<CommentData, FormErrors> {
        clean_comment(submission, messages::CANCEL_BLANK)
    }
}

/// Sends a content back to its authors.
pub struct RejectValidationForm<'a> {
    urls: &'a dyn UrlResolver,
    validation: &'a Validation,
}

impl<'a> RejectValidationForm<'a> {
    pub const NAME: &'static str = "reject-validation";

    pub fn new(urls: &'a dyn UrlResolver, validation: &'a Validation) -> Self {
        Self { urls, validation }
    }

    pub fn previous_page_url(&self) -> String {
        validated_version_url(self.urls, self.validation)
    }

    pub fn build(&self) -> Form {
        Form::new(Self::NAME)
            .action(self.urls.reverse(Route::RejectValidation {
                id: self.validation.id,
            }))
            .element(
                "text",
                common::modal_text("Commentaire de rejet.", 6).required(),
            )
            .element("submit", FormElement::button("Rejeter"))
    }

    pub fn clean(&self, submission: &Submission) -> Result<CommentData, FormErrors> {
        clean_comment(submission, messages::REJECT_BLANK)
    }
}

/// Takes a published content offline.
pub struct RevokeValidationForm<'a> {
    urls: &'a dyn UrlResolver,
    content: &'a ContentSummary,
}

impl<'a> RevokeValidationForm<'a> {
    pub const NAME: &'static str = "revoke-validation";

    pub fn new(urls: &'a dyn UrlResolver, content: &'a ContentSummary) -> Self {
        Self { urls, content }
    }

    pub fn previous_page_url(&self) -> String {
        self.urls.reverse(Route::ContentOnline {
            kind: self.content.kind,
            id: self.content.id,
            slug: &self.content.slug,
            path: &ContainerPath::root(),
        })
    }

    pub fn build(&self) -> Form {
        let mut version = FormElement::hidden().required();
        if let Some(sha) = &self.content.sha_public {
            version = version.default_value(sha.as_str());
        }

        Form::new(Self::NAME)
            .action(self.urls.reverse(Route::RevokeValidation {
                id: self.content.id,
                slug: &self.content.slug,
            }))
            .element(
                "text",
                common::modal_text("Pourquoi dépublier ce contenu ?", 6).required(),
            )
            .element("version", version)
            .element("submit", FormElement::button("Dépublier"))
    }

    pub fn clean(&self, submission: &Submission) -> Result<RevokeValidationData, FormErrors> {
        let mut errors = FormErrors::new();
        let version = fields::required_text(submission, "version", None, &mut errors);
        let text = fields::comment(submission, "text", messages::REVOKE_BLANK, &mut errors);

        match (version, text) {
            (Some(version), Some(text)) => {
                errors.into_result(RevokeValidationData { version, text })
            }
            _ => Err(errors),
        }
    }
}

fn clean_comment(submission: &Submission, blank_message: &str) -> Result<CommentData, FormErrors> {
    let mut errors = FormErrors::new();
    match fields::comment(submission, "text", blank_message, &mut errors) {
        Some(text) => Ok(CommentData { text }),
        None => Err(errors),
    }
}
