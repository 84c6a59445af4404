use serde::Serialize;

use super::common::{self, MARKDOWN_EDITOR, MARKDOWN_PLACEHOLDER};
use super::settings::FormSettings;
use crate::application::ports::urls::{Route, UrlResolver, with_query};
use crate::domain::content::{ContentSummary, Reaction, ReactionId};
use crate::domain::form::{ErrorCode, Form, FormElement, FormErrors, Submission, fields, messages};

const LOCKED_PLACEHOLDER: &str = "Ce tutoriel est verrouillé.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoteData {
    pub text: String,
    pub last_note: Option<i64>,
}

/// Whether the note is new or replaces an existing reaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NoteMode {
    New,
    Edit,
}

/// Posts a note below a content. A quoted reaction pre-fills the text.
pub struct NoteForm<'a> {
    settings: &'a FormSettings,
    urls: &'a dyn UrlResolver,
    content: &'a ContentSummary,
    reaction: Option<&'a Reaction>,
    last_note: Option<ReactionId>,
    antispam: bool,
    mode: NoteMode,
}

impl<'a> NoteForm<'a> {
    pub const NAME: &'static str = "note";
    pub const EDIT_NAME: &'static str = "note-edit";

    pub fn new(
        settings: &'a FormSettings,
        urls: &'a dyn UrlResolver,
        content: &'a ContentSummary,
        reaction: Option<&'a Reaction>,
    ) -> Self {
        Self {
            settings,
            urls,
            content,
            reaction,
            last_note: None,
            antispam: false,
            mode: NoteMode::New,
        }
    }

    /// Edits `reaction` in place instead of posting a new note.
    pub fn edit(
        settings: &'a FormSettings,
        urls: &'a dyn UrlResolver,
        content: &'a ContentSummary,
        reaction: &'a Reaction,
    ) -> Self {
        Self {
            mode: NoteMode::Edit,
            ..Self::new(settings, urls, content, Some(reaction))
        }
    }

    /// The member posted too recently and must wait.
    pub fn with_antispam(mut self, antispam: bool) -> Self {
        self.antispam = antispam;
        self
    }

    /// Latest note known when the form was displayed, used to detect notes
    /// posted in the meantime.
    pub fn with_last_note(mut self, last_note: Option<ReactionId>) -> Self {
        self.last_note = last_note;
        self
    }

    pub fn name(&self) -> &'static str {
        match self.mode {
            NoteMode::New => Self::NAME,
            NoteMode::Edit => Self::EDIT_NAME,
        }
    }

    fn action(&self) -> String {
        let content_pk = self.content.id.to_string();
        match (self.mode, self.reaction) {
            (NoteMode::Edit, Some(reaction)) => with_query(
                &self.urls.reverse(Route::UpdateReaction),
                &[("message", &reaction.id.to_string()), ("pk", &content_pk)],
            ),
            _ => with_query(
                &self.urls.reverse(Route::AddReaction),
                &[("pk", &content_pk)],
            ),
        }
    }

    pub fn build(&self) -> Form {
        let mut text = FormElement::textarea()
            .placeholder(MARKDOWN_PLACEHOLDER)
            .css_class(MARKDOWN_EDITOR)
            .required();
        if let Some(reaction) = self.reaction {
            text = text.default_value(reaction.text.as_str());
        }

        if self.antispam && self.reaction.is_none() {
            text = text
                .placeholder(messages::flood_wait(self.settings.antispam_delay))
                .disabled();
        } else if self.content.is_locked {
            text = text.placeholder(LOCKED_PLACEHOLDER).disabled();
        }

        let mut last_note = FormElement::hidden();
        if let Some(id) = self.last_note {
            last_note = last_note.default_value(i64::from(id));
        }

        Form::new(self.name())
            .action(self.action())
            .element("text", text)
            .element("last_note", last_note)
            .element("submit", FormElement::button(common::SEND))
    }

    pub fn clean(&self, submission: &Submission) -> Result<NoteData, FormErrors> {
        let mut errors = FormErrors::new();
        let text = submission.text("text").unwrap_or_default();

        if text.trim().is_empty() {
            errors.replace("text", ErrorCode::Blank, messages::NOTE_BLANK);
            return Err(errors);
        }

        let max = self.settings.max_post_length;
        if fields::char_len(&text) > max {
            errors.replace("text", ErrorCode::TooLong, messages::note_too_long(max));
            return Err(errors);
        }

        Ok(NoteData {
            text,
            last_note: common::digits(submission, "last_note"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::content::{ContentId, ContentKind, ContentSlug, VersionSha};
    use crate::domain::member::MemberId;
    use crate::infrastructure::urls::SiteUrlResolver;
    use chrono::Utc;

    fn content(is_locked: bool) -> ContentSummary {
        ContentSummary {
            id: ContentId(12),
            slug: ContentSlug::new("apprenez-rust").expect("valid test value"),
            title: "Apprenez Rust".into(),
            kind: ContentKind::Tutorial,
            current_version: VersionSha::new("abc").expect("valid test value"),
            sha_beta: None,
            sha_public: None,
            authors: Vec::new(),
            is_locked,
            js_support: false,
            containers: Vec::new(),
        }
    }

    fn reaction() -> Reaction {
        Reaction {
            id: ReactionId(5),
            content_id: ContentId(12),
            author_id: MemberId(3),
            text: "> Citation".into(),
            posted_at: Utc::now(),
        }
    }

    #[test]
    fn posts_to_the_add_reaction_page() {
        let settings = FormSettings::default();
        let urls = SiteUrlResolver::default();
        let content = content(false);

        let form = NoteForm::new(&settings, &urls, &content, None).build();
        assert_eq!(form.action, "/contenus/reactions/ajouter/?pk=12");
        assert_eq!(form.get_element("text").map(|el| el.disabled), Some(false));
    }

    #[test]
    fn edit_targets_the_reaction() {
        let settings = FormSettings::default();
        let urls = SiteUrlResolver::default();
        let content = content(false);
        let reaction = reaction();

        let form = NoteForm::edit(&settings, &urls, &content, &reaction).build();
        assert_eq!(form.form_id, "note-edit");
        assert_eq!(form.action, "/contenus/reactions/editer/?message=5&pk=12");
        assert_eq!(
            form.get_element("text").and_then(|el| el.default_value.clone()),
            Some(serde_json::json!("> Citation"))
        );
    }

    #[test]
    fn antispam_and_lock_disable_the_text() {
        let settings = FormSettings::default();
        let urls = SiteUrlResolver::default();

        let open = content(false);
        let form = NoteForm::new(&settings, &urls, &open, None)
            .with_antispam(true)
            .build();
        let text = form.get_element("text");
        assert_eq!(text.map(|el| el.disabled), Some(true));
        assert_eq!(
            text.and_then(|el| el.placeholder.clone()),
            Some(messages::flood_wait(chrono::Duration::minutes(15)))
        );

        let locked = content(true);
        let form = NoteForm::new(&settings, &urls, &locked, None).build();
        let text = form.get_element("text");
        assert_eq!(text.and_then(|el| el.placeholder.as_deref()), Some(LOCKED_PLACEHOLDER));
    }

    #[test]
    fn quoting_bypasses_antispam() {
        let settings = FormSettings::default();
        let urls = SiteUrlResolver::default();
        let content = content(false);
        let reaction = reaction();

        let form = NoteForm::new(&settings, &urls, &content, Some(&reaction))
            .with_antispam(true)
            .build();
        assert_eq!(form.get_element("text").map(|el| el.disabled), Some(false));
    }

    #[test]
    fn locked_content_stays_disabled_when_quoting() {
        let settings = FormSettings::default();
        let urls = SiteUrlResolver::default();
        let locked = content(true);
        let reaction = reaction();

        for antispam in [false, true] {
            let form = NoteForm::new(&settings, &urls, &locked, Some(&reaction))
                .with_antispam(antispam)
                .build();
            let text = form.get_element("text");
            assert_eq!(text.map(|el| el.disabled), Some(true));
            assert_eq!(text.and_then(|el| el.placeholder.as_deref()), Some(LOCKED_PLACEHOLDER));
        }
    }

    #[test]
    fn flood_placeholder_uses_the_configured_delay() {
        let settings = FormSettings {
            antispam_delay: chrono::Duration::minutes(5),
            ..FormSettings::default()
        };
        let urls = SiteUrlResolver::default();
        let content = content(false);

        let form = NoteForm::new(&settings, &urls, &content, None)
            .with_antispam(true)
            .build();
        let placeholder = form.get_element("text").and_then(|el| el.placeholder.clone());
        assert!(placeholder.is_some_and(|text| text.contains("au moins 5 minutes")));
    }

    #[test]
    fn text_must_be_present_and_bounded() {
        let settings = FormSettings {
            max_post_length: 10,
            ..FormSettings::default()
        };
        let urls = SiteUrlResolver::default();
        let content = content(false);
        let form = NoteForm::new(&settings, &urls, &content, None);

        let errors = form.clean(&Submission::new().with("text", " \n ")).expect_err("submission should be rejected");
        assert_eq!(errors.codes("text"), vec![ErrorCode::Blank]);

        let errors = form
            .clean(&Submission::new().with("text", "a".repeat(11)))
            .expect_err("submission should be rejected");
        assert_eq!(errors.codes("text"), vec![ErrorCode::TooLong]);

        let data = form.clean(&Submission::new().with("text", "Merci !").with("last_note", "41"));
        assert_eq!(
            data,
            Ok(NoteData {
                text: "Merci !".into(),
                last_note: Some(41)
            })
        );
    }
}
