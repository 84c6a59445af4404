//! Field-level cleaners shared by every form.
//!
//! Each cleaner reads one field of a [`Submission`], records problems into a
//! [`FormErrors`] and returns the cleaned value when the field is valid.

use super::errors::{ErrorCode, FieldError, FormErrors};
use super::messages;
use super::submission::{Submission, UploadedFile};
use crate::domain::catalog::{Choice, ChoiceId};

/// Shortest justification accepted by the moderation and feedback forms.
pub const MIN_COMMENT_LENGTH: usize = 3;

/// Length as a reader counts it: characters, not bytes.
pub fn char_len(value: &str) -> usize {
    value.chars().count()
}

/// Required text: missing or empty values are rejected, and so are values
/// longer than `max_length` characters.
pub fn required_text(
    submission: &Submission,
    name: &str,
    max_length: Option<usize>,
    errors: &mut FormErrors,
) -> Option<String> {
    match submission.text(name) {
        Some(value) if !value.is_empty() => bounded(name, value, max_length, errors),
        _ => {
            errors.push(FieldError::field(name, ErrorCode::Required, messages::REQUIRED));
            None
        }
    }
}

/// Optional text: empty values are treated as absent.
pub fn optional_text(
    submission: &Submission,
    name: &str,
    max_length: Option<usize>,
    errors: &mut FormErrors,
) -> Option<String> {
    submission
        .text(name)
        .filter(|value| !value.is_empty())
        .and_then(|value| bounded(name, value, max_length, errors))
}

fn bounded(
    name: &str,
    value: String,
    max_length: Option<usize>,
    errors: &mut FormErrors,
) -> Option<String> {
    let length = char_len(&value);
    match max_length {
        Some(max) if length > max => {
            errors.push(FieldError::field(
                name,
                ErrorCode::TooLong,
                messages::too_long(max, length),
            ));
            None
        }
        _ => Some(value),
    }
}

/// Justification comment: must contain at least [`MIN_COMMENT_LENGTH`]
/// characters once trimmed. `blank_message` is the form-specific wording used
/// when nothing was written; it replaces any earlier error on the field.
pub fn comment(
    submission: &Submission,
    name: &str,
    blank_message: &str,
    errors: &mut FormErrors,
) -> Option<String> {
    let text = submission.text(name).unwrap_or_default();
    let trimmed = text.trim();

    if trimmed.is_empty() {
        errors.replace(name, ErrorCode::Blank, blank_message);
        None
    } else if char_len(trimmed) < MIN_COMMENT_LENGTH {
        errors.replace(name, ErrorCode::TooShort, messages::COMMENT_TOO_SHORT);
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// File field restricted to one extension.
pub fn file_with_extension(
    submission: &Submission,
    name: &str,
    required: bool,
    extension: &str,
    message: &str,
    errors: &mut FormErrors,
) -> Option<UploadedFile> {
    let Some(file) = submission.file(name) else {
        if required {
            errors.push(FieldError::field(name, ErrorCode::Required, messages::REQUIRED));
        }
        return None;
    };

    if file.has_extension(extension) {
        Some(file)
    } else {
        errors.replace(name, ErrorCode::InvalidExtension, message);
        None
    }
}

/// Single choice among reference rows.
pub fn choice(
    submission: &Submission,
    name: &str,
    options: &[Choice],
    required: bool,
    errors: &mut FormErrors,
) -> Option<ChoiceId> {
    let raw = submission.text(name).filter(|value| !value.is_empty());
    let Some(raw) = raw else {
        if required {
            errors.push(FieldError::field(name, ErrorCode::Required, messages::REQUIRED));
        }
        return None;
    };

    match lookup(options, &raw) {
        Some(id) => Some(id),
        None => {
            errors.push(FieldError::field(
                name,
                ErrorCode::InvalidChoice,
                messages::invalid_choice(&raw),
            ));
            None
        }
    }
}

/// Multiple choices among reference rows. Duplicates are collapsed and the
/// submitted order is kept.
pub fn choices(
    submission: &Submission,
    name: &str,
    options: &[Choice],
    required: bool,
    errors: &mut FormErrors,
) -> Vec<ChoiceId> {
    let raw = submission.list(name);
    if raw.is_empty() {
        if required {
            errors.push(FieldError::field(name, ErrorCode::Required, messages::REQUIRED));
        }
        return Vec::new();
    }

    let mut selected = Vec::with_capacity(raw.len());
    for value in &raw {
        match lookup(options, value) {
            Some(id) if !selected.contains(&id) => selected.push(id),
            Some(_) => {}
            None => {
                errors.push(FieldError::field(
                    name,
                    ErrorCode::InvalidChoice,
                    messages::invalid_choice(value),
                ));
                return Vec::new();
            }
        }
    }
    selected
}

fn lookup(options: &[Choice], raw: &str) -> Option<ChoiceId> {
    let id = raw.trim().parse::<i64>().ok()?;
    options
        .iter()
        .find(|choice| choice.id.0 == id)
        .map(|choice| choice.id)
}

/// Options rendered by a select element.
pub fn select_options(options: &[Choice]) -> Vec<(String, String)> {
    options
        .iter()
        .map(|choice| (choice.id.to_string(), choice.label.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn licences() -> Vec<Choice> {
        vec![
            Choice::new(ChoiceId(1), "CC BY"),
            Choice::new(ChoiceId(2), "Tous droits réservés"),
        ]
    }

    #[test]
    fn required_text_rejects_missing_and_empty_values() {
        let mut errors = FormErrors::new();
        let submission = Submission::new().with("title", "");
        assert_eq!(required_text(&submission, "title", None, &mut errors), None);
        assert_eq!(required_text(&submission, "other", None, &mut errors), None);
        assert_eq!(errors.codes("title"), vec![ErrorCode::Required]);
        assert_eq!(errors.codes("other"), vec![ErrorCode::Required]);
    }

    #[test]
    fn max_length_counts_characters() {
        let mut errors = FormErrors::new();
        let submission = Submission::new().with("msg", "ééééé");
        assert_eq!(
            optional_text(&submission, "msg", Some(5), &mut errors).as_deref(),
            Some("ééééé")
        );
        assert!(errors.is_empty());

        assert_eq!(optional_text(&submission, "msg", Some(4), &mut errors), None);
        assert_eq!(errors.codes("msg"), vec![ErrorCode::TooLong]);
    }

    #[test]
    fn comment_is_trimmed_and_length_checked() {
        let mut errors = FormErrors::new();
        let ok = Submission::new().with("text", "  Bien relu.  ");
        assert_eq!(
            comment(&ok, "text", "vide", &mut errors).as_deref(),
            Some("Bien relu.")
        );

        let short = Submission::new().with("text", "  ok ");
        assert_eq!(comment(&short, "text", "vide", &mut errors), None);
        assert_eq!(errors.codes("text"), vec![ErrorCode::TooShort]);

        let blank = Submission::new().with("text", "   ");
        assert_eq!(comment(&blank, "text", "vide", &mut errors), None);
        assert_eq!(errors.codes("text"), vec![ErrorCode::Blank]);
        assert_eq!(errors.for_field("text").next().map(|e| e.message.as_str()), Some("vide"));
    }

    #[test]
    fn file_extension_is_checked() {
        let mut errors = FormErrors::new();
        let submission = Submission::new().with("file", json!({ "name": "cours.zip", "size": 3 }));
        assert!(
            file_with_extension(&submission, "file", true, "tuto", "bad", &mut errors).is_none()
        );
        assert_eq!(errors.codes("file"), vec![ErrorCode::InvalidExtension]);

        let mut errors = FormErrors::new();
        assert!(
            file_with_extension(&Submission::new(), "file", false, "tuto", "bad", &mut errors)
                .is_none()
        );
        assert!(errors.is_empty());
    }

    #[test]
    fn choice_must_belong_to_the_options() {
        let mut errors = FormErrors::new();
        let submission = Submission::new().with("licence", "2").with("other", "9");
        assert_eq!(
            choice(&submission, "licence", &licences(), true, &mut errors),
            Some(ChoiceId(2))
        );
        assert_eq!(choice(&submission, "other", &licences(), true, &mut errors), None);
        assert_eq!(errors.codes("other"), vec![ErrorCode::InvalidChoice]);
    }

    #[test]
    fn choices_collapse_duplicates() {
        let mut errors = FormErrors::new();
        let submission = Submission::new().with("subcategory", json!(["2", "1", 2]));
        assert_eq!(
            choices(&submission, "subcategory", &licences(), true, &mut errors),
            vec![ChoiceId(2), ChoiceId(1)]
        );
        assert!(errors.is_empty());

        assert!(choices(&Submission::new(), "subcategory", &licences(), true, &mut errors).is_empty());
        assert_eq!(errors.codes("subcategory"), vec![ErrorCode::Required]);
    }
}
