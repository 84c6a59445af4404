use serde::Serialize;

use super::common::{self, FORM_CLASS};
use super::container::ContainerForm;
use super::settings::FormSettings;
use super::title::FormWithTitle;
use crate::application::ports::urls::{Route, UrlResolver};
use crate::domain::catalog::Choice;
use crate::domain::content::ContentKind;
use crate::domain::form::{
    ErrorCode, FieldError, Form, FormElement, FormErrors, Submission, UploadedFile, fields,
    messages,
};

const IMAGE_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "gif", "webp"];

/// Reference rows offered by the content form.
#[derive(Debug, Clone, Default)]
pub struct ContentChoices {
    pub subcategories: Vec<Choice>,
    pub licences: Vec<Choice>,
    pub help_categories: Vec<Choice>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContentData {
    pub title: String,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<ContentKind>,
    pub image: Option<UploadedFile>,
    pub introduction: Option<String>,
    pub conclusion: Option<String>,
    pub licence: i64,
    pub subcategories: Vec<i64>,
    pub helps: Vec<i64>,
    pub msg_commit: Option<String>,
    pub last_hash: Option<String>,
}

/// Creates a content or edits its metadata.
pub struct ContentForm<'a> {
    settings: &'a FormSettings,
    urls: &'a dyn UrlResolver,
    choices: &'a ContentChoices,
    locked_kind: Option<ContentKind>,
}

impl<'a> ContentForm<'a> {
    pub const NAME: &'static str = "content";

    pub fn new(
        settings: &'a FormSettings,
        urls: &'a dyn UrlResolver,
        choices: &'a ContentChoices,
    ) -> Self {
        Self {
            settings,
            urls,
            choices,
            locked_kind: None,
        }
    }

    /// Editing an existing content: its type can no longer change.
    pub fn with_locked_kind(mut self, kind: ContentKind) -> Self {
        self.locked_kind = Some(kind);
        self
    }

    pub fn build(&self) -> Form {
        let settings = self.settings;

        let mut kind = FormElement::select(
            ContentKind::ALL
                .iter()
                .map(|kind| (kind.as_str().to_string(), kind.label().to_string()))
                .collect(),
        );
        if let Some(locked) = self.locked_kind {
            kind = kind.default_value(locked.as_str()).disabled();
        }

        let image_label = format!(
            "Sélectionnez le logo du tutoriel (max. {} Ko)",
            settings.image_max_size / 1024
        );
        let licence_label = format!(
            "Licence de votre publication (<a href=\"{}\" alt=\"{}\">En savoir plus sur les licences et {}</a>)",
            settings.licence_info_url, settings.licence_info_label, settings.site_name
        );
        let help = format!(
            "<p>Demander de l'aide à la communauté !<br>Si vous avez besoin d'un coup de main, \
             sélectionnez une ou plusieurs catégories d'aide ci-dessous et votre tutoriel \
             apparaitra alors sur <a href=\"{}\" alt=\"aider les auteurs\">la page d'aide</a>.</p>",
            self.urls.reverse(Route::HelpWriting)
        );

        Form::new(Self::NAME)
            .css_class(FORM_CLASS)
            .element(FormWithTitle::FIELD, FormWithTitle::new(settings).element())
            .element(
                "description",
                FormElement::textfield()
                    .label("Description")
                    .max_length(settings.description_max_length),
            )
            .element("type", kind)
            .element("image", FormElement::file().label(image_label))
            .element("introduction", common::markdown_area("Introduction"))
            .element("conclusion", common::markdown_area("Conclusion"))
            .element("last_hash", FormElement::hidden())
            .element(
                "licence",
                FormElement::select(fields::select_options(&self.choices.licences))
                    .label(licence_label)
                    .required(),
            )
            .element(
                "subcategory",
                FormElement::multi_select(fields::select_options(&self.choices.subcategories))
                    .label(
                        "Sous catégories de votre tutoriel. Si aucune catégorie ne convient \
                         n'hésitez pas à en demander une nouvelle lors de la validation !",
                    )
                    .required(),
            )
            .element("help", FormElement::markup(help))
            .element(
                "helps",
                FormElement::multi_select(fields::select_options(&self.choices.help_categories))
                    .label("Pour m'aider je cherche un..."),
            )
            .element("msg_commit", common::commit_message(settings))
            .element("submit", FormElement::button(common::VALIDATE))
    }

    pub fn clean(&self, submission: &Submission) -> Result<ContentData, FormErrors> {
        let mut errors = FormErrors::new();

        let container = ContainerForm::new(self.settings).clean_into(submission, &mut errors);
        let description = fields::optional_text(
            submission,
            "description",
            Some(self.settings.description_max_length),
            &mut errors,
        );
        let kind = self.clean_kind(submission, &mut errors);
        let image = self.clean_image(submission, &mut errors);
        let licence = fields::choice(submission, "licence", &self.choices.licences, true, &mut errors);
        let subcategories = fields::choices(
            submission,
            "subcategory",
            &self.choices.subcategories,
            true,
            &mut errors,
        );
        let helps = fields::choices(
            submission,
            "helps",
            &self.choices.help_categories,
            false,
            &mut errors,
        );

        let (Some(container), Some(licence)) = (container, licence) else {
            return Err(errors);
        };

        errors.into_result(ContentData {
            title: container.title,
            description,
            kind,
            image,
            introduction: container.introduction,
            conclusion: container.conclusion,
            licence: licence.into(),
            subcategories: subcategories.into_iter().map(Into::into).collect(),
            helps: helps.into_iter().map(Into::into).collect(),
            msg_commit: container.msg_commit,
            last_hash: container.last_hash,
        })
    }

    /// A locked type ignores whatever was posted.
    fn clean_kind(&self, submission: &Submission, errors: &mut FormErrors) -> Option<ContentKind> {
        if self.locked_kind.is_some() {
            return self.locked_kind;
        }

        let raw = submission.text("type").filter(|value| !value.is_empty())?;
        match raw.parse::<ContentKind>() {
            Ok(kind) => Some(kind),
            Err(_) => {
                errors.push(FieldError::field(
                    "type",
                    ErrorCode::InvalidChoice,
                    messages::invalid_choice(&raw),
                ));
                None
            }
        }
    }

    fn clean_image(&self, submission: &Submission, errors: &mut FormErrors) -> Option<UploadedFile> {
        let image = submission.file("image")?;

        let is_image = image
            .extension()
            .is_some_and(|ext| IMAGE_EXTENSIONS.iter().any(|known| ext.eq_ignore_ascii_case(known)));
        if !is_image {
            errors.push(FieldError::field(
                "image",
                ErrorCode::InvalidImage,
                messages::INVALID_IMAGE,
            ));
            return None;
        }

        if image.size > self.settings.image_max_size {
            errors.push(FieldError::field(
                "image",
                ErrorCode::FileTooLarge,
                messages::image_too_large(self.settings.image_max_size),
            ));
            return None;
        }

        Some(image)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::ChoiceId;
    use crate::domain::form::ElementType;
    use crate::infrastructure::urls::SiteUrlResolver;
    use serde_json::json;

    fn choices() -> ContentChoices {
        ContentChoices {
            subcategories: vec![
                Choice::new(ChoiceId(1), "Programmation"),
                Choice::new(ChoiceId(2), "Systèmes"),
            ],
            licences: vec![Choice::new(ChoiceId(7), "CC BY-SA")],
            help_categories: vec![Choice::new(ChoiceId(3), "Correcteur")],
        }
    }

    fn valid() -> Submission {
        Submission::new()
            .with("title", "Apprenez Rust")
            .with("licence", "7")
            .with("subcategory", json!(["1", "2"]))
    }

    #[test]
    fn cleans_a_minimal_submission() {
        let settings = FormSettings::default();
        let urls = SiteUrlResolver::default();
        let choices = choices();

        let data = ContentForm::new(&settings, &urls, &choices).clean(&valid());
        let data = data.ok();
        assert_eq!(data.as_ref().map(|d| d.licence), Some(7));
        assert_eq!(data.as_ref().map(|d| d.subcategories.clone()), Some(vec![1, 2]));
        assert_eq!(data.and_then(|d| d.kind), None);
    }

    #[test]
    fn licence_and_subcategory_are_required() {
        let settings = FormSettings::default();
        let urls = SiteUrlResolver::default();
        let choices = choices();

        let errors = ContentForm::new(&settings, &urls, &choices)
            .clean(&Submission::new().with("title", "Apprenez Rust"))
            .expect_err("submission should be rejected");
        assert_eq!(errors.codes("licence"), vec![ErrorCode::Required]);
        assert_eq!(errors.codes("subcategory"), vec![ErrorCode::Required]);
    }

    #[test]
    fn locked_kind_wins_over_the_submission() {
        let settings = FormSettings::default();
        let urls = SiteUrlResolver::default();
        let choices = choices();
        let form = ContentForm::new(&settings, &urls, &choices).with_locked_kind(ContentKind::Article);

        let data = form.clean(&valid().with("type", "TUTORIAL")).ok();
        assert_eq!(data.and_then(|d| d.kind), Some(ContentKind::Article));

        let schema = form.build();
        let kind = schema.get_element("type");
        assert_eq!(kind.map(|el| el.disabled), Some(true));
        assert_eq!(kind.and_then(|el| el.default_value.clone()), Some(json!("ARTICLE")));
    }

    #[test]
    fn unknown_kind_is_rejected() {
        let settings = FormSettings::default();
        let urls = SiteUrlResolver::default();
        let choices = choices();

        let errors = ContentForm::new(&settings, &urls, &choices)
            .clean(&valid().with("type", "OPINION"))
            .expect_err("submission should be rejected");
        assert_eq!(errors.codes("type"), vec![ErrorCode::InvalidChoice]);
    }

    #[test]
    fn image_must_be_a_small_picture() {
        let settings = FormSettings::default();
        let urls = SiteUrlResolver::default();
        let choices = choices();
        let form = ContentForm::new(&settings, &urls, &choices);

        let too_big = valid().with_file("image", &UploadedFile::new("logo.png", 2 * 1024 * 1024));
        let errors = form.clean(&too_big).expect_err("submission should be rejected");
        assert_eq!(errors.codes("image"), vec![ErrorCode::FileTooLarge]);

        let not_image = valid().with_file("image", &UploadedFile::new("logo.pdf", 10));
        let errors = form.clean(&not_image).expect_err("submission should be rejected");
        assert_eq!(errors.codes("image"), vec![ErrorCode::InvalidImage]);
    }

    #[test]
    fn schema_lists_catalog_options() {
        let settings = FormSettings::default();
        let urls = SiteUrlResolver::default();
        let choices = choices();
        let form = ContentForm::new(&settings, &urls, &choices).build();

        let subcategory = form.get_element("subcategory").map(|el| el.element_type.clone());
        assert_eq!(
            subcategory,
            Some(ElementType::Select {
                options: vec![
                    ("1".into(), "Programmation".into()),
                    ("2".into(), "Systèmes".into())
                ],
                multiple: true,
            })
        );
        assert_eq!(form.layout().last().copied(), Some("submit"));
    }
}
