use super::FormService;
use super::standalone::log_outcome;
use crate::application::{
    dto::forms::FormView,
    error::ApplicationResult,
    forms::{
        AcceptValidationForm, CancelValidationForm, CleanedForm, RejectValidationForm,
        ValidationBoundForm,
    },
};
use crate::domain::form::Submission;

impl FormService {
    /// Schema of a form built around validation `pk`.
    pub async fn validation_form(
        &self,
        pk: i64,
        form: ValidationBoundForm,
    ) -> ApplicationResult<FormView> {
        let validation = self.validation(pk).await?;
        let urls = self.urls.as_ref();

        let view = match form {
            ValidationBoundForm::AcceptValidation => {
                let accept = AcceptValidationForm::new(urls, &validation);
                FormView::new(accept.build()).with_previous_page(accept.previous_page_url())
            }
            ValidationBoundForm::CancelValidation => {
                let cancel = CancelValidationForm::new(urls, &validation);
                FormView::new(cancel.build()).with_previous_page(cancel.previous_page_url())
            }
            ValidationBoundForm::RejectValidation => {
                let reject = RejectValidationForm::new(urls, &validation);
                FormView::new(reject.build()).with_previous_page(reject.previous_page_url())
            }
        };

        tracing::debug!(form = %form, validation_id = pk, "built form");
        Ok(view)
    }

    /// Clean a submission of a form built around validation `pk`.
    pub async fn clean_validation_form(
        &self,
        pk: i64,
        form: ValidationBoundForm,
        submission: &Submission,
    ) -> ApplicationResult<CleanedForm> {
        let result = self.clean_validation_inner(pk, form, submission).await;
        log_outcome(form.as_str(), &result);
        result
    }

    async fn clean_validation_inner(
        &self,
        pk: i64,
        form: ValidationBoundForm,
        submission: &Submission,
    ) -> ApplicationResult<CleanedForm> {
        let validation = self.validation(pk).await?;
        let urls = self.urls.as_ref();

        let cleaned = match form {
            ValidationBoundForm::AcceptValidation => CleanedForm::AcceptValidation(
                AcceptValidationForm::new(urls, &validation).clean(submission)?,
            ),
            ValidationBoundForm::CancelValidation => CleanedForm::CancelValidation(
                CancelValidationForm::new(urls, &validation).clean(submission)?,
            ),
            ValidationBoundForm::RejectValidation => CleanedForm::RejectValidation(
                RejectValidationForm::new(urls, &validation).clean(submission)?,
            ),
        };
        Ok(cleaned)
    }
}
