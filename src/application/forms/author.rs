use serde::Serialize;

use super::common::FORM_CLASS;
use crate::domain::form::{
    ErrorCode, FieldError, Form, FormElement, FormErrors, Submission, fields, messages,
};
use crate::domain::member::Member;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthorRef {
    pub id: i64,
    pub username: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthorData {
    pub users: Vec<AuthorRef>,
}

/// Adds co-authors to a content from a comma separated list of usernames.
#[derive(Debug, Default)]
pub struct AuthorForm;

impl AuthorForm {
    pub const NAME: &'static str = "author";
    const FIELD: &'static str = "username";

    pub fn build(&self) -> Form {
        Form::new(Self::NAME)
            .css_class(FORM_CLASS)
            .element(
                Self::FIELD,
                FormElement::textfield()
                    .label("Auteurs à ajouter séparés d'une virgule")
                    .required(),
            )
            .element("submit", FormElement::button("Ajouter"))
    }

    /// Usernames to look up: trimmed, lowercased, without blanks or
    /// duplicates.
    pub fn usernames(&self, submission: &Submission) -> Result<Vec<String>, FormErrors> {
        let mut errors = FormErrors::new();
        let Some(raw) = fields::required_text(submission, Self::FIELD, None, &mut errors) else {
            return Err(errors);
        };

        let mut usernames: Vec<String> = Vec::new();
        for name in raw.split(',').map(|name| name.trim().to_lowercase()) {
            if !name.is_empty() && !usernames.contains(&name) {
                usernames.push(name);
            }
        }
        Ok(usernames)
    }

    /// The form is valid once at least one username resolved to a member.
    pub fn resolve(&self, members: Vec<Member>) -> Result<AuthorData, FormErrors> {
        if members.is_empty() {
            let mut errors = FormErrors::new();
            errors.push(FieldError::field(
                Self::FIELD,
                ErrorCode::UnknownMembers,
                messages::UNKNOWN_MEMBERS,
            ));
            return Err(errors);
        }

        Ok(AuthorData {
            users: members
                .into_iter()
                .map(|member| AuthorRef {
                    id: member.id.into(),
                    username: member.username,
                })
                .collect(),
        })
    }
}
