use super::settings::FormSettings;
use crate::domain::form::{ErrorCode, FormElement, FormErrors, Submission, fields, messages};

/// Title handling shared by every form that names a container or extract.
pub struct FormWithTitle<'a> {
    settings: &'a FormSettings,
}

impl<'a> FormWithTitle<'a> {
    pub const FIELD: &'static str = "title";

    pub fn new(settings: &'a FormSettings) -> Self {
        Self { settings }
    }

    pub fn element(&self) -> FormElement {
        FormElement::textfield()
            .label("Titre")
            .max_length(self.settings.title_max_length)
            .required()
    }

    /// Required, bounded, and not made of whitespace only.
    pub fn clean(&self, submission: &Submission, errors: &mut FormErrors) -> Option<String> {
        let title = fields::required_text(
            submission,
            Self::FIELD,
            Some(self.settings.title_max_length),
            errors,
        )?;

        if title.trim().is_empty() {
            errors.replace(Self::FIELD, ErrorCode::Blank, messages::TITLE_BLANK);
            return None;
        }
        Some(title)
    }
}
