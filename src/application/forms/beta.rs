use serde::Serialize;

use crate::domain::form::{Form, FormElement, FormErrors, Submission, fields};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BetaData {
    pub version: String,
}

/// Puts one version of a content in beta.
#[derive(Debug, Default)]
pub struct BetaForm;

impl BetaForm {
    pub const NAME: &'static str = "beta";

    pub fn build(&self) -> Form {
        Form::new(Self::NAME).element("version", FormElement::hidden().required())
    }

    pub fn clean(&self, submission: &Submission) -> Result<BetaData, FormErrors> {
        let mut errors = FormErrors::new();
        match fields::required_text(submission, "version", None, &mut errors) {
            Some(version) => Ok(BetaData { version }),
            None => Err(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::form::ErrorCode;

    #[test]
    fn version_is_required() {
        let errors = BetaForm.clean(&Submission::new()).expect_err("submission should be rejected");
        assert_eq!(errors.codes("version"), vec![ErrorCode::Required]);

        let data = BetaForm.clean(&Submission::new().with("version", "f00d"));
        assert_eq!(data, Ok(BetaData { version: "f00d".into() }));
    }
}
