use serde::Serialize;

use super::common::{self, FORM_CLASS};
use super::settings::FormSettings;
use crate::domain::catalog::Choice;
use crate::domain::form::{Form, FormElement, FormErrors, Submission, UploadedFile, fields, messages};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImportData {
    pub file: UploadedFile,
    pub images: Option<UploadedFile>,
}

/// Legacy import of a `.tuto` file with an optional image archive.
#[derive(Debug, Default)]
pub struct ImportForm;

impl ImportForm {
    pub const NAME: &'static str = "import";

    pub fn build(&self) -> Form {
        Form::new(Self::NAME)
            .css_class(FORM_CLASS)
            .element(
                "file",
                FormElement::file()
                    .label("Sélectionnez le tutoriel à importer")
                    .required(),
            )
            .element(
                "images",
                FormElement::file().label("Fichier zip contenant les images du tutoriel"),
            )
            .element("import-tuto", FormElement::button("Importer le .tuto"))
    }

    pub fn clean(&self, submission: &Submission) -> Result<ImportData, FormErrors> {
        let mut errors = FormErrors::new();
        let file = fields::file_with_extension(
            submission,
            "file",
            true,
            "tuto",
            messages::TUTO_EXTENSION,
            &mut errors,
        );
        let images = fields::file_with_extension(
            submission,
            "images",
            false,
            "zip",
            messages::ZIP_EXTENSION,
            &mut errors,
        );

        match file {
            Some(file) => errors.into_result(ImportData { file, images }),
            None => Err(errors),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImportContentData {
    pub archive: UploadedFile,
    pub image_archive: Option<UploadedFile>,
    pub subcategories: Vec<i64>,
    pub msg_commit: Option<String>,
}

/// Replaces an existing content by the tree found in a ZIP archive.
pub struct ImportContentForm<'a> {
    settings: &'a FormSettings,
}

impl<'a> ImportContentForm<'a> {
    pub const NAME: &'static str = "import-content";

    pub fn new(settings: &'a FormSettings) -> Self {
        Self { settings }
    }

    pub fn build(&self) -> Form {
        Form::new(Self::NAME)
            .css_class(FORM_CLASS)
            .element("archive", archive_element())
            .element(
                "image_archive",
                FormElement::file().label("Sélectionnez l'archive des images"),
            )
            .element("msg_commit", common::commit_message(self.settings))
            .element("submit", FormElement::button("Importer l'archive"))
    }

    pub fn clean(&self, submission: &Submission) -> Result<ImportContentData, FormErrors> {
        let mut errors = FormErrors::new();
        let data = clean_archive(self.settings, submission, &mut errors);
        match data {
            Some(data) => errors.into_result(data),
            None => Err(errors),
        }
    }
}

/// Creates a new content from a ZIP archive.
pub struct ImportNewContentForm<'a> {
    settings: &'a FormSettings,
    subcategories: &'a [Choice],
}

impl<'a> ImportNewContentForm<'a> {
    pub const NAME: &'static str = "import-new-content";

    pub fn new(settings: &'a FormSettings, subcategories: &'a [Choice]) -> Self {
        Self {
            settings,
            subcategories,
        }
    }

    /// The image archive is still accepted but not offered.
    pub fn build(&self) -> Form {
        Form::new(Self::NAME)
            .css_class(FORM_CLASS)
            .element("archive", archive_element())
            .element(
                "subcategory",
                FormElement::multi_select(fields::select_options(self.subcategories))
                    .label(
                        "Sous catégories de votre contenu. Si aucune catégorie ne convient \
                         n'hésitez pas à en demander une nouvelle lors de la validation !",
                    )
                    .required(),
            )
            .element("msg_commit", common::commit_message(self.settings))
            .element("submit", FormElement::button("Importer l'archive"))
    }

    pub fn clean(&self, submission: &Submission) -> Result<ImportContentData, FormErrors> {
        let mut errors = FormErrors::new();
        let data = clean_archive(self.settings, submission, &mut errors);
        let subcategories =
            fields::choices(submission, "subcategory", self.subcategories, true, &mut errors);

        match data {
            Some(data) => errors.into_result(ImportContentData {
                subcategories: subcategories.into_iter().map(Into::into).collect(),
                ..data
            }),
            None => Err(errors),
        }
    }
}

fn archive_element() -> FormElement {
    FormElement::file()
        .label("Sélectionnez l'archive de votre tutoriel")
        .required()
}

fn clean_archive(
    settings: &FormSettings,
    submission: &Submission,
    errors: &mut FormErrors,
) -> Option<ImportContentData> {
    let archive = fields::file_with_extension(
        submission,
        "archive",
        true,
        "zip",
        messages::ARCHIVE_EXTENSION,
        errors,
    );
    let image_archive = submission.file("image_archive");
    let msg_commit = common::clean_commit_message(settings, submission, errors);

    Some(ImportContentData {
        archive: archive?,
        image_archive,
        subcategories: Vec::new(),
        msg_commit,
    })
}
