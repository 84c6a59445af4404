use serde::Serialize;

use super::common::{self, FORM_CLASS};
use super::settings::FormSettings;
use super::title::FormWithTitle;
use crate::domain::form::{Form, FormElement, FormErrors, Submission, fields};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContainerData {
    pub title: String,
    pub introduction: Option<String>,
    pub conclusion: Option<String>,
    pub msg_commit: Option<String>,
    pub last_hash: Option<String>,
}

/// Creates or edits a container (part or chapter) of a content tree.
pub struct ContainerForm<'a> {
    settings: &'a FormSettings,
}

impl<'a> ContainerForm<'a> {
    pub const NAME: &'static str = "container";

    pub fn new(settings: &'a FormSettings) -> Self {
        Self { settings }
    }

    pub fn build(&self) -> Form {
        Form::new(Self::NAME)
            .css_class(FORM_CLASS)
            .element(FormWithTitle::FIELD, FormWithTitle::new(self.settings).element())
            .element("introduction", common::markdown_area("Introduction"))
            .element("conclusion", common::markdown_area("Conclusion"))
            .element("msg_commit", common::commit_message(self.settings))
            .element("last_hash", FormElement::hidden())
            .element("submit", FormElement::button(common::VALIDATE))
    }

    pub fn clean(&self, submission: &Submission) -> Result<ContainerData, FormErrors> {
        let mut errors = FormErrors::new();
        let data = self.clean_into(submission, &mut errors);
        match data {
            Some(data) => errors.into_result(data),
            None => Err(errors),
        }
    }

    /// Cleans the container fields, leaving errors in `errors` so that
    /// [`super::content::ContentForm`] can keep checking its own fields.
    pub(crate) fn clean_into(
        &self,
        submission: &Submission,
        errors: &mut FormErrors,
    ) -> Option<ContainerData> {
        let title = FormWithTitle::new(self.settings).clean(submission, errors);
        let introduction = fields::optional_text(submission, "introduction", None, errors);
        let conclusion = fields::optional_text(submission, "conclusion", None, errors);
        let msg_commit = common::clean_commit_message(self.settings, submission, errors);
        let last_hash = fields::optional_text(submission, "last_hash", None, errors);

        Some(ContainerData {
            title: title?,
            introduction,
            conclusion,
            msg_commit,
            last_hash,
        })
    }
}
