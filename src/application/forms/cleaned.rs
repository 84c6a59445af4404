use serde::Serialize;

use super::author::AuthorData;
use super::beta::BetaData;
use super::container::ContainerData;
use super::content::ContentData;
use super::extract::ExtractData;
use super::import::{ImportContentData, ImportData};
use super::jsfiddle::JsFiddleData;
use super::move_element::MoveElementData;
use super::note::NoteData;
use super::validation::{AcceptValidationData, AskValidationData, CommentData, RevokeValidationData};
use super::warn_typo::WarnTypoData;

/// Data handed back once a submission is valid, tagged with the form name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "form", content = "data", rename_all = "kebab-case")]
pub enum CleanedForm {
    Author(AuthorData),
    Container(ContainerData),
    Content(ContentData),
    Extract(ExtractData),
    Import(ImportData),
    ImportContent(ImportContentData),
    ImportNewContent(ImportContentData),
    Beta(BetaData),
    JsFiddle(JsFiddleData),
    MoveElement(MoveElementData),
    Note(NoteData),
    NoteEdit(NoteData),
    AskValidation(AskValidationData),
    AcceptValidation(AcceptValidationData),
    CancelValidation(CommentData),
    RejectValidation(CommentData),
    RevokeValidation(RevokeValidationData),
    WarnTypo(WarnTypoData),
}
