use serde::Serialize;

use super::common::{self, FORM_CLASS};
use super::settings::FormSettings;
use super::title::FormWithTitle;
use crate::domain::form::{Form, FormElement, FormErrors, Submission, fields};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractData {
    pub title: String,
    pub text: Option<String>,
    pub msg_commit: Option<String>,
    pub last_hash: Option<String>,
}

/// Creates or edits an extract, the leaf of a content tree.
pub struct ExtractForm<'a> {
    settings: &'a FormSettings,
}

impl<'a> ExtractForm<'a> {
    pub const NAME: &'static str = "extract";

    pub fn new(settings: &'a FormSettings) -> Self {
        Self { settings }
    }

    pub fn build(&self) -> Form {
        Form::new(Self::NAME)
            .css_class(FORM_CLASS)
            .element(FormWithTitle::FIELD, FormWithTitle::new(self.settings).element())
            .element("last_hash", FormElement::hidden())
            .element("text", common::markdown_area("Texte"))
            .element("msg_commit", common::commit_message(self.settings))
            .element("submit", FormElement::button(common::VALIDATE))
    }

    pub fn clean(&self, submission: &Submission) -> Result<ExtractData, FormErrors> {
        let mut errors = FormErrors::new();
        let title = FormWithTitle::new(self.settings).clean(submission, &mut errors);
        let text = fields::optional_text(submission, "text", None, &mut errors);
        let msg_commit = common::clean_commit_message(self.settings, submission, &mut errors);
        let last_hash = fields::optional_text(submission, "last_hash", None, &mut errors);

        match title {
            Some(title) => errors.into_result(ExtractData {
                title,
                text,
                msg_commit,
                last_hash,
            }),
            None => Err(errors),
        }
    }
}
