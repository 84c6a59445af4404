use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::content::ContentKind;
use crate::domain::form::Form;

/// Optional context carried by a form request, as parsed from the query
/// string and headers.
#[derive(Debug, Clone, Default)]
pub struct FormRequest {
    /// Type of an existing content, which the content form must not change.
    pub kind: Option<ContentKind>,
    /// Reaction quoted by a new note.
    pub quote: Option<i64>,
    /// Reaction edited by the note-edit form.
    pub reaction: Option<i64>,
    /// Container targeted by a typo report, as a slug path.
    pub target: Option<String>,
    /// Typo report on the published version rather than the beta one.
    pub public: Option<bool>,
    /// Member on whose behalf the form is displayed.
    pub member: Option<i64>,
}

/// A form schema ready to be rendered.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct FormView {
    #[schema(value_type = Object)]
    pub form: Form,
    /// Where a modal form sends the reader back.
    pub previous_page_url: Option<String>,
}

impl FormView {
    pub fn new(form: Form) -> Self {
        Self {
            form,
            previous_page_url: None,
        }
    }

    pub fn with_previous_page(mut self, url: String) -> Self {
        self.previous_page_url = Some(url);
        self
    }
}
