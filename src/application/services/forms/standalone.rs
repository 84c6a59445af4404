use super::FormService;
use crate::application::{
    dto::forms::{FormRequest, FormView},
    error::ApplicationResult,
    forms::{
        AuthorForm, BetaForm, CleanedForm, ContainerForm, ContentForm, ExtractForm, ImportContentForm,
        ImportForm, ImportNewContentForm, JsFiddleActivationForm, MoveElementForm, StandaloneForm,
    },
};
use crate::domain::form::{Form, Submission};

impl FormService {
    /// Schema of a form that needs no content or validation.
    pub async fn standalone_form(
        &self,
        form: StandaloneForm,
        request: &FormRequest,
    ) -> ApplicationResult<FormView> {
        let schema = self.build_standalone(form, request).await?;
        tracing::debug!(form = %form, "built form");
        Ok(FormView::new(schema))
    }

    async fn build_standalone(
        &self,
        form: StandaloneForm,
        request: &FormRequest,
    ) -> ApplicationResult<Form> {
        let settings = &self.settings;
        let urls = self.urls.as_ref();

        let schema = match form {
            StandaloneForm::Author => AuthorForm.build(),
            StandaloneForm::Container => ContainerForm::new(settings).build(),
            StandaloneForm::Content => {
                let choices = self.content_choices().await?;
                let content = ContentForm::new(settings, urls, &choices);
                match request.kind {
                    Some(kind) => content.with_locked_kind(kind).build(),
                    None => content.build(),
                }
            }
            StandaloneForm::Extract => ExtractForm::new(settings).build(),
            StandaloneForm::Import => ImportForm.build(),
            StandaloneForm::ImportContent => ImportContentForm::new(settings).build(),
            StandaloneForm::ImportNewContent => {
                let subcategories = self.catalog.subcategories().await?;
                ImportNewContentForm::new(settings, &subcategories).build()
            }
            StandaloneForm::Beta => BetaForm.build(),
            StandaloneForm::JsFiddle => JsFiddleActivationForm::new(urls).build(),
            StandaloneForm::MoveElement => MoveElementForm::new(urls).build(),
        };
        Ok(schema)
    }

    /// Clean a submission of a form that needs no content or validation.
    pub async fn clean_standalone(
        &self,
        form: StandaloneForm,
        request: &FormRequest,
        submission: &Submission,
    ) -> ApplicationResult<CleanedForm> {
        let result = self.clean_standalone_inner(form, request, submission).await;
        log_outcome(form.as_str(), &result);
        result
    }

    async fn clean_standalone_inner(
        &self,
        form: StandaloneForm,
        request: &FormRequest,
        submission: &Submission,
    ) -> ApplicationResult<CleanedForm> {
        let settings = &self.settings;
        let urls = self.urls.as_ref();

        let cleaned = match form {
            StandaloneForm::Author => CleanedForm::Author(self.clean_authors(submission).await?),
            StandaloneForm::Container => {
                CleanedForm::Container(ContainerForm::new(settings).clean(submission)?)
            }
            StandaloneForm::Content => {
                let choices = self.content_choices().await?;
                let mut content = ContentForm::new(settings, urls, &choices);
                if let Some(kind) = request.kind {
                    content = content.with_locked_kind(kind);
                }
                CleanedForm::Content(content.clean(submission)?)
            }
            StandaloneForm::Extract => {
                CleanedForm::Extract(ExtractForm::new(settings).clean(submission)?)
            }
            StandaloneForm::Import => CleanedForm::Import(ImportForm.clean(submission)?),
            StandaloneForm::ImportContent => {
                CleanedForm::ImportContent(ImportContentForm::new(settings).clean(submission)?)
            }
            StandaloneForm::ImportNewContent => {
                let subcategories = self.catalog.subcategories().await?;
                CleanedForm::ImportNewContent(
                    ImportNewContentForm::new(settings, &subcategories).clean(submission)?,
                )
            }
            StandaloneForm::Beta => CleanedForm::Beta(BetaForm.clean(submission)?),
            StandaloneForm::JsFiddle => {
                CleanedForm::JsFiddle(JsFiddleActivationForm::new(urls).clean(submission)?)
            }
            StandaloneForm::MoveElement => {
                CleanedForm::MoveElement(MoveElementForm::new(urls).clean(submission)?)
            }
        };
        Ok(cleaned)
    }

    /// Usernames that match no contactable member are dropped silently.
    async fn clean_authors(
        &self,
        submission: &Submission,
    ) -> ApplicationResult<crate::application::forms::AuthorData> {
        let usernames = AuthorForm.usernames(submission)?;

        let mut members = Vec::with_capacity(usernames.len());
        for username in &usernames {
            match self.members.find_contactable(username).await? {
                Some(member) => members.push(member),
                None => tracing::debug!(username = %username, "unknown or unreachable member"),
            }
        }

        Ok(AuthorForm.resolve(members)?)
    }
}

/// Outcome of a clean, logged the same way for every form.
pub(super) fn log_outcome<T>(form: &str, result: &ApplicationResult<T>) {
    match result {
        Ok(_) => tracing::info!(form, "submission accepted"),
        Err(crate::application::error::ApplicationError::Invalid(errors)) => {
            tracing::info!(form, errors = errors.len(), "submission rejected")
        }
        Err(err) => tracing::warn!(form, error = %err, "submission could not be cleaned"),
    }
}
