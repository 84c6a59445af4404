use serde::Serialize;

use super::common::{self, VALIDATE};
use crate::application::ports::urls::{Route, UrlResolver};
use crate::domain::content::ContentSummary;
use crate::domain::form::{Form, FormElement, FormErrors, Submission};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JsFiddleData {
    pub js_support: bool,
    /// Content to update. `0` when the posted value is not a number.
    pub pk: i64,
}

/// Toggles JSFiddle embeds on a content.
pub struct JsFiddleActivationForm<'a> {
    urls: &'a dyn UrlResolver,
    content: Option<&'a ContentSummary>,
}

impl<'a> JsFiddleActivationForm<'a> {
    pub const NAME: &'static str = "js-fiddle";

    pub fn new(urls: &'a dyn UrlResolver) -> Self {
        Self { urls, content: None }
    }

    pub fn for_content(mut self, content: &'a ContentSummary) -> Self {
        self.content = Some(content);
        self
    }

    pub fn build(&self) -> Form {
        let mut js_support = FormElement::checkbox().label("Cocher pour activer JSFiddle");
        let mut pk = FormElement::hidden();
        match self.content {
            Some(content) => {
                js_support = js_support.default_value(content.js_support);
                pk = pk.default_value(i64::from(content.id));
            }
            None => js_support = js_support.default_value(true),
        }

        Form::new(Self::NAME)
            .action(self.urls.reverse(Route::ActivateJsFiddle))
            .element("js_support", js_support)
            .element("submit", FormElement::button(VALIDATE))
            .element("pk", pk)
    }

    /// Never fails: a missing checkbox means "off".
    pub fn clean(&self, submission: &Submission) -> Result<JsFiddleData, FormErrors> {
        Ok(JsFiddleData {
            js_support: submission.flag("js_support"),
            pk: common::digits(submission, "pk").unwrap_or(0),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::urls::SiteUrlResolver;

    #[test]
    fn missing_values_fall_back_to_defaults() {
        let urls = SiteUrlResolver::default();
        let form = JsFiddleActivationForm::new(&urls);

        assert_eq!(
            form.clean(&Submission::new()),
            Ok(JsFiddleData {
                js_support: false,
                pk: 0
            })
        );
        assert_eq!(
            form.clean(&Submission::new().with("js_support", true).with("pk", "x12")),
            Ok(JsFiddleData {
                js_support: true,
                pk: 0
            })
        );
        assert_eq!(
            form.clean(&Submission::new().with("pk", "12")).map(|data| data.pk),
            Ok(12)
        );
    }

    #[test]
    fn posts_to_the_activation_page() {
        let urls = SiteUrlResolver::default();
        let form = JsFiddleActivationForm::new(&urls).build();
        assert_eq!(form.action, "/contenus/activation-js/");
        assert_eq!(form.layout(), vec!["js_support", "submit", "pk"]);
    }
}
