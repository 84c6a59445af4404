use super::FormService;
use super::standalone::log_outcome;
use crate::application::{
    dto::forms::{FormRequest, FormView},
    error::{ApplicationError, ApplicationResult},
    forms::{
        AskValidationForm, CleanedForm, ContentBoundForm, JsFiddleActivationForm, NoteForm,
        RevokeValidationForm, WarnTypoForm,
    },
};
use crate::domain::{
    content::{AntispamSpec, ContainerPath, ContentSummary, Reaction, ReactionId},
    form::Submission,
    member::MemberId,
};

/// Context gathered for the note forms.
struct NoteContext {
    reaction: Option<Reaction>,
    last_note: Option<ReactionId>,
    antispam: bool,
}

impl FormService {
    /// Schema of a form built around content `pk`.
    pub async fn content_form(
        &self,
        pk: i64,
        form: ContentBoundForm,
        request: &FormRequest,
    ) -> ApplicationResult<FormView> {
        let content = self.content(pk).await?;
        let urls = self.urls.as_ref();

        let view = match form {
            ContentBoundForm::Note | ContentBoundForm::NoteEdit => {
                let context = self.note_context(&content, form, request).await?;
                let note = match (form, context.reaction.as_ref()) {
                    (ContentBoundForm::NoteEdit, Some(reaction)) => {
                        NoteForm::edit(&self.settings, urls, &content, reaction)
                    }
                    (_, reaction) => NoteForm::new(&self.settings, urls, &content, reaction),
                };
                FormView::new(
                    note.with_antispam(context.antispam)
                        .with_last_note(context.last_note)
                        .build(),
                )
            }
            ContentBoundForm::AskValidation => {
                let ask = AskValidationForm::new(urls, &content);
                FormView::new(ask.build()).with_previous_page(ask.previous_page_url())
            }
            ContentBoundForm::RevokeValidation => {
                let revoke = RevokeValidationForm::new(urls, &content);
                FormView::new(revoke.build()).with_previous_page(revoke.previous_page_url())
            }
            ContentBoundForm::WarnTypo => {
                let path = ContainerPath::parse(request.target.as_deref().unwrap_or_default())?;
                let targeted = content.target(path)?;
                let typo =
                    WarnTypoForm::new(urls, &content, &targeted, request.public.unwrap_or(true));
                FormView::new(typo.build()).with_previous_page(typo.previous_page_url())
            }
            ContentBoundForm::JsFiddle => {
                FormView::new(JsFiddleActivationForm::new(urls).for_content(&content).build())
            }
        };

        tracing::debug!(form = %form, content_id = pk, "built form");
        Ok(view)
    }

    /// Clean a submission of a form built around content `pk`.
    pub async fn clean_content_form(
        &self,
        pk: i64,
        form: ContentBoundForm,
        request: &FormRequest,
        submission: &Submission,
    ) -> ApplicationResult<CleanedForm> {
        let result = self.clean_content_inner(pk, form, request, submission).await;
        log_outcome(form.as_str(), &result);
        result
    }

    async fn clean_content_inner(
        &self,
        pk: i64,
        form: ContentBoundForm,
        request: &FormRequest,
        submission: &Submission,
    ) -> ApplicationResult<CleanedForm> {
        let content = self.content(pk).await?;
        let urls = self.urls.as_ref();

        let cleaned = match form {
            ContentBoundForm::Note => CleanedForm::Note(
                NoteForm::new(&self.settings, urls, &content, None).clean(submission)?,
            ),
            ContentBoundForm::NoteEdit => {
                let reaction = self.edited_reaction(&content, request).await?;
                CleanedForm::NoteEdit(
                    NoteForm::edit(&self.settings, urls, &content, &reaction).clean(submission)?,
                )
            }
            ContentBoundForm::AskValidation => CleanedForm::AskValidation(
                AskValidationForm::new(urls, &content).clean(submission)?,
            ),
            ContentBoundForm::RevokeValidation => CleanedForm::RevokeValidation(
                RevokeValidationForm::new(urls, &content).clean(submission)?,
            ),
            ContentBoundForm::WarnTypo => {
                let targeted = content.target(ContainerPath::root())?;
                CleanedForm::WarnTypo(
                    WarnTypoForm::new(urls, &content, &targeted, request.public.unwrap_or(true))
                        .clean(submission)?,
                )
            }
            ContentBoundForm::JsFiddle => CleanedForm::JsFiddle(
                JsFiddleActivationForm::new(urls)
                    .for_content(&content)
                    .clean(submission)?,
            ),
        };
        Ok(cleaned)
    }

    async fn note_context(
        &self,
        content: &ContentSummary,
        form: ContentBoundForm,
        request: &FormRequest,
    ) -> ApplicationResult<NoteContext> {
        let reaction = match form {
            ContentBoundForm::NoteEdit => Some(self.edited_reaction(content, request).await?),
            _ => match request.quote {
                Some(pk) => Some(self.reaction_of(content, pk).await?),
                None => None,
            },
        };

        let antispam = match request.member {
            Some(member) => {
                let last = self
                    .reactions
                    .last_by_author(content.id, MemberId::new(member)?)
                    .await?;
                AntispamSpec::new(last.as_ref(), self.clock.now(), self.settings.antispam_delay)
                    .is_satisfied()
            }
            None => false,
        };

        let last_note = self.reactions.latest(content.id).await?.map(|r| r.id);

        Ok(NoteContext {
            reaction,
            last_note,
            antispam,
        })
    }

    async fn edited_reaction(
        &self,
        content: &ContentSummary,
        request: &FormRequest,
    ) -> ApplicationResult<Reaction> {
        let pk = request
            .reaction
            .ok_or_else(|| ApplicationError::validation("the reaction to edit is missing"))?;
        self.reaction_of(content, pk).await
    }

    /// Reaction `pk`, provided it was posted on `content`.
    async fn reaction_of(&self, content: &ContentSummary, pk: i64) -> ApplicationResult<Reaction> {
        let id = ReactionId::new(pk)?;
        self.reactions
            .find_by_id(id)
            .await?
            .filter(|reaction| reaction.content_id == content.id)
            .ok_or_else(|| ApplicationError::not_found(format!("reaction {pk} on content {}", content.id)))
    }
}
