//! Form schemas and their cleaning rules.

pub mod author;
pub mod beta;
pub mod cleaned;
pub mod common;
pub mod container;
pub mod content;
pub mod extract;
pub mod import;
pub mod jsfiddle;
pub mod kind;
pub mod move_element;
pub mod note;
pub mod settings;
pub mod title;
pub mod validation;
pub mod warn_typo;

pub use author::{AuthorData, AuthorForm};
pub use beta::{BetaData, BetaForm};
pub use cleaned::CleanedForm;
pub use container::{ContainerData, ContainerForm};
pub use content::{ContentChoices, ContentData, ContentForm};
pub use extract::{ExtractData, ExtractForm};
pub use import::{ImportContentData, ImportContentForm, ImportData, ImportForm, ImportNewContentForm};
pub use jsfiddle::{JsFiddleActivationForm, JsFiddleData};
pub use kind::{ContentBoundForm, StandaloneForm, ValidationBoundForm};
pub use move_element::{MoveElementData, MoveElementForm, MoveMethod};
pub use note::{NoteData, NoteForm};
pub use settings::FormSettings;
pub use title::FormWithTitle;
pub use validation::{
    AcceptValidationData, AcceptValidationForm, AskValidationData, AskValidationForm,
    CancelValidationForm, CommentData, RejectValidationForm, RevokeValidationData,
    RevokeValidationForm,
};
pub use warn_typo::{WarnTypoData, WarnTypoForm};
