//! Building blocks shared by several forms.

use super::settings::FormSettings;
use crate::domain::form::{FormElement, FormErrors, Submission, fields};

pub const FORM_CLASS: &str = "content-wrapper";
pub const MARKDOWN_PLACEHOLDER: &str = "Votre message au format Markdown.";
pub const MARKDOWN_EDITOR: &str = "md-editor";
pub const SOURCE_PLACEHOLDER: &str = "URL de la version originale";

pub const VALIDATE: &str = "Valider";
pub const CONFIRM: &str = "Confirmer";
pub const SEND: &str = "Envoyer";

/// Optional markdown body with the editor toolbar.
pub fn markdown_area(label: &str) -> FormElement {
    FormElement::textarea()
        .label(label)
        .placeholder(MARKDOWN_PLACEHOLDER)
        .css_class(MARKDOWN_EDITOR)
}

/// "Message de suivi": the commit message recorded with a new version.
pub fn commit_message(settings: &FormSettings) -> FormElement {
    FormElement::textfield()
        .label("Message de suivi")
        .max_length(settings.commit_message_max_length)
        .placeholder("Un résumé de vos ajouts et modifications")
}

pub fn clean_commit_message(
    settings: &FormSettings,
    submission: &Submission,
    errors: &mut FormErrors,
) -> Option<String> {
    fields::optional_text(
        submission,
        "msg_commit",
        Some(settings.commit_message_max_length),
        errors,
    )
}

/// Unlabelled text area of the modal forms.
pub fn modal_text(placeholder: &str, rows: u32) -> FormElement {
    FormElement::textarea().placeholder(placeholder).rows(rows)
}

pub fn source_field() -> FormElement {
    FormElement::textfield().placeholder(SOURCE_PLACEHOLDER)
}

/// Hidden field that parses as a number, as set by templates from
/// `{{ content.pk }}`. Anything that is not made of ASCII digits yields `None`.
pub fn digits(submission: &Submission, name: &str) -> Option<i64> {
    submission
        .text(name)
        .filter(|value| !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit()))
        .and_then(|value| value.parse().ok())
}
