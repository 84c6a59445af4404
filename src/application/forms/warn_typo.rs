use serde::Serialize;

use super::common::{self, SEND};
use crate::application::ports::urls::{Route, UrlResolver, with_query};
use crate::domain::content::{ContentSummary, Targeted};
use crate::domain::form::{Form, FormElement, FormErrors, Submission, fields, messages};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WarnTypoData {
    pub text: String,
    pub target: Option<String>,
    pub version: String,
    pub pk: Option<i64>,
}

/// Reports a typo in a published or beta content to its authors.
pub struct WarnTypoForm<'a> {
    urls: &'a dyn UrlResolver,
    content: &'a ContentSummary,
    targeted: &'a Targeted,
    public: bool,
}

impl<'a> WarnTypoForm<'a> {
    pub const NAME: &'static str = "warn-typo";

    /// `public` selects the published version, otherwise the beta one.
    pub fn new(
        urls: &'a dyn UrlResolver,
        content: &'a ContentSummary,
        targeted: &'a Targeted,
        public: bool,
    ) -> Self {
        Self {
            urls,
            content,
            targeted,
            public,
        }
    }

    pub fn previous_page_url(&self) -> String {
        let route = if self.public {
            Route::ContentOnline {
                kind: self.content.kind,
                id: self.content.id,
                slug: &self.content.slug,
                path: &self.targeted.path,
            }
        } else {
            Route::ContentBeta {
                id: self.content.id,
                slug: &self.content.slug,
                path: &self.targeted.path,
            }
        };
        self.urls.reverse(route)
    }

    fn pm_title(&self) -> String {
        if self.targeted.tree_depth() == 0 {
            format!(
                "J'ai trouvé une faute dans {} « {} »",
                self.content.kind.with_article(),
                self.targeted.title
            )
        } else {
            format!(
                "J'ai trouvé une faute dans le chapitre « {} »",
                self.targeted.title
            )
        }
    }

    /// Link to a new private message addressed to every author.
    fn pm_markup(&self) -> String {
        let title = self.pm_title();
        let mut params = vec![("title", title.as_str())];
        params.extend(
            self.content
                .authors
                .iter()
                .map(|author| ("username", author.username.as_str())),
        );
        let url = with_query(&self.urls.reverse(Route::NewPrivateTopic), &params);

        let recipients = if self.content.authors.len() == 1 {
            "à l'auteur"
        } else {
            "aux auteurs"
        };
        format!("<p>Pas assez de place ? <a href=\"{url}\">Envoyez un MP {recipients}</a> !</p>")
    }

    fn version(&self) -> Option<&str> {
        let sha = if self.public {
            self.content.sha_public.as_ref()
        } else {
            self.content.sha_beta.as_ref()
        };
        sha.map(|sha| sha.as_str())
    }

    pub fn build(&self) -> Form {
        let content_pk = self.content.id.to_string();

        let mut target = FormElement::hidden();
        if !self.targeted.path.is_root() {
            target = target.default_value(self.targeted.path.to_string());
        }
        let mut version = FormElement::hidden().required();
        if let Some(sha) = self.version() {
            version = version.default_value(sha);
        }

        Form::new(Self::NAME)
            .action(with_query(
                &self.urls.reverse(Route::WarnTypo),
                &[("pk", &content_pk)],
            ))
            .element("target", target)
            .element("text", common::modal_text("Expliquez la faute", 3).required())
            .element("pm", FormElement::markup(self.pm_markup()))
            .element("pk", FormElement::hidden().default_value(i64::from(self.content.id)))
            .element("version", version)
            .element("submit", FormElement::button(SEND))
    }

    pub fn clean(&self, submission: &Submission) -> Result<WarnTypoData, FormErrors> {
        let mut errors = FormErrors::new();
        let target = fields::optional_text(submission, "target", None, &mut errors);
        let version = fields::required_text(submission, "version", None, &mut errors);
        let text = fields::comment(submission, "text", messages::TYPO_BLANK, &mut errors);

        match (text, version) {
            (Some(text), Some(version)) => errors.into_result(WarnTypoData {
                text,
                target,
                version,
                pk: common::digits(submission, "pk"),
            }),
            _ => Err(errors),
        }
    }
}
