use std::sync::Arc;

use crate::application::{
    error::{ApplicationError, ApplicationResult},
    forms::{ContentChoices, FormSettings},
    ports::{time::Clock, urls::UrlResolver},
};
use crate::domain::{
    catalog::CatalogRepository,
    content::{ContentId, ContentReadRepository, ContentSummary, ReactionReadRepository},
    member::MemberDirectory,
    validation::{Validation, ValidationId, ValidationReadRepository},
};

mod content_bound;
mod standalone;
mod validation_bound;

/// Resolves the context a form is built around, then builds or cleans it.
pub struct FormService {
    contents: Arc<dyn ContentReadRepository>,
    reactions: Arc<dyn ReactionReadRepository>,
    validations: Arc<dyn ValidationReadRepository>,
    members: Arc<dyn MemberDirectory>,
    catalog: Arc<dyn CatalogRepository>,
    clock: Arc<dyn Clock>,
    urls: Arc<dyn UrlResolver>,
    settings: FormSettings,
}

impl FormService {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        contents: Arc<dyn ContentReadRepository>,
        reactions: Arc<dyn ReactionReadRepository>,
        validations: Arc<dyn ValidationReadRepository>,
        members: Arc<dyn MemberDirectory>,
        catalog: Arc<dyn CatalogRepository>,
        clock: Arc<dyn Clock>,
        urls: Arc<dyn UrlResolver>,
        settings: FormSettings,
    ) -> Self {
        Self {
            contents,
            reactions,
            validations,
            members,
            catalog,
            clock,
            urls,
            settings,
        }
    }

    async fn content(&self, pk: i64) -> ApplicationResult<ContentSummary> {
        let id = ContentId::new(pk)?;
        self.contents
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found(format!("content {pk}")))
    }

    async fn validation(&self, pk: i64) -> ApplicationResult<Validation> {
        let id = ValidationId::new(pk)?;
        self.validations
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found(format!("validation {pk}")))
    }

    async fn content_choices(&self) -> ApplicationResult<ContentChoices> {
        Ok(ContentChoices {
            subcategories: self.catalog.subcategories().await?,
            licences: self.catalog.licences().await?,
            help_categories: self.catalog.help_categories().await?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{
        dto::forms::FormRequest,
        forms::{CleanedForm, ContentBoundForm, StandaloneForm, ValidationBoundForm},
    };
    use crate::domain::form::{ElementType, ErrorCode, Submission};
    use crate::infrastructure::{
        repositories::{Fixtures, InMemoryStore},
        time::FixedClock,
        urls::SiteUrlResolver,
    };
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    const FIXTURES: &str = r#"{
        "members": [
            { "id": 1, "username": "alice" },
            { "id": 2, "username": "bob" }
        ],
        "subcategories": [{ "id": 4, "label": "Programmation" }],
        "licences": [{ "id": 1, "label": "CC BY" }],
        "contents": [{
            "id": 3, "slug": "mon-tuto", "title": "Mon tuto", "type": "TUTORIAL",
            "current_version": "abc", "sha_public": "pub", "authors": [1],
            "containers": [{ "path": "partie-1", "title": "Partie 1" }]
        }, {
            "id": 6, "slug": "autre", "title": "Autre", "type": "ARTICLE",
            "current_version": "def", "authors": [2]
        }],
        "reactions": [
            { "id": 10, "content": 3, "author": 2, "text": "Super !", "posted_at": "2026-01-01T11:00:00Z" },
            { "id": 11, "content": 3, "author": 1, "text": "Merci", "posted_at": "2026-01-01T12:00:00Z" },
            { "id": 12, "content": 6, "author": 1, "text": "Ailleurs", "posted_at": "2026-01-01T09:00:00Z" }
        ],
        "validations": [{ "id": 5, "content": 3, "version": "abc" }]
    }"#;

    fn service() -> FormService {
        let fixtures = Fixtures::from_json(FIXTURES).expect("fixtures parse");
        let store = Arc::new(InMemoryStore::from_fixtures(fixtures).expect("fixtures are consistent"));
        let now = Utc
            .with_ymd_and_hms(2026, 1, 1, 12, 5, 0)
            .single()
            .expect("valid test value");
        FormService::new(
            store.clone(),
            store.clone(),
            store.clone(),
            store.clone(),
            store,
            Arc::new(FixedClock(now)),
            Arc::new(SiteUrlResolver),
            FormSettings::default(),
        )
    }

    #[tokio::test]
    async fn content_form_lists_catalog_choices() {
        let view = service()
            .standalone_form(StandaloneForm::Content, &FormRequest::default())
            .await
            .expect("form builds");
        let subcategory = view.form.get_element("subcategory").map(|el| el.element_type.clone());
        assert_eq!(
            subcategory,
            Some(ElementType::Select {
                options: vec![("4".into(), "Programmation".into())],
                multiple: true,
            })
        );
        assert!(view.previous_page_url.is_none());
    }

    #[tokio::test]
    async fn authors_are_resolved_against_the_directory() {
        let service = service();
        let cleaned = service
            .clean_standalone(
                StandaloneForm::Author,
                &FormRequest::default(),
                &Submission::new().with("username", "Alice, inconnu"),
            )
            .await
            .expect("submission accepted");
        let value = serde_json::to_value(cleaned).expect("serializable");
        assert_eq!(value["form"], json!("author"));
        assert_eq!(value["data"]["users"].as_array().map(Vec::len), Some(1));

        let err = service
            .clean_standalone(
                StandaloneForm::Author,
                &FormRequest::default(),
                &Submission::new().with("username", "personne"),
            )
            .await
            .expect_err("submission should be rejected");
        assert!(matches!(err, ApplicationError::Invalid(errors) if errors.codes("username") == vec![ErrorCode::UnknownMembers]));
    }

    #[tokio::test]
    async fn recent_poster_gets_a_disabled_note() {
        let service = service();
        let request = FormRequest {
            member: Some(1),
            ..FormRequest::default()
        };
        let view = service
            .content_form(3, ContentBoundForm::Note, &request)
            .await
            .expect("form builds");
        let text = view.form.get_element("text").expect("text element");
        assert!(text.disabled);
        assert_eq!(
            view.form.get_element("last_note").and_then(|el| el.default_value.clone()),
            Some(json!(11))
        );

        let request = FormRequest {
            member: Some(2),
            ..FormRequest::default()
        };
        let view = service
            .content_form(3, ContentBoundForm::Note, &request)
            .await
            .expect("form builds");
        assert_eq!(view.form.get_element("text").map(|el| el.disabled), Some(false));
    }

    #[tokio::test]
    async fn quoted_reaction_must_belong_to_the_content() {
        let service = service();
        let request = FormRequest {
            quote: Some(10),
            ..FormRequest::default()
        };
        let view = service
            .content_form(3, ContentBoundForm::Note, &request)
            .await
            .expect("form builds");
        assert_eq!(
            view.form.get_element("text").and_then(|el| el.default_value.clone()),
            Some(json!("Super !"))
        );

        let request = FormRequest {
            quote: Some(12),
            ..FormRequest::default()
        };
        let err = service
            .content_form(3, ContentBoundForm::Note, &request)
            .await
            .expect_err("foreign reaction");
        assert!(matches!(err, ApplicationError::NotFound(_)));
    }

    #[tokio::test]
    async fn editing_a_note_needs_the_reaction() {
        let service = service();
        let err = service
            .content_form(3, ContentBoundForm::NoteEdit, &FormRequest::default())
            .await
            .expect_err("missing reaction");
        assert!(matches!(err, ApplicationError::Validation(_)));

        let request = FormRequest {
            reaction: Some(11),
            ..FormRequest::default()
        };
        let view = service
            .content_form(3, ContentBoundForm::NoteEdit, &request)
            .await
            .expect("form builds");
        assert_eq!(view.form.form_id, "note-edit");
        assert_eq!(view.form.action, "/contenus/reactions/editer/?message=11&pk=3");
    }

    #[tokio::test]
    async fn unknown_content_is_not_found() {
        let err = service()
            .content_form(99, ContentBoundForm::AskValidation, &FormRequest::default())
            .await
            .expect_err("unknown content");
        assert!(matches!(err, ApplicationError::NotFound(_)));
    }

    #[tokio::test]
    async fn warn_typo_targets_a_chapter() {
        let request = FormRequest {
            target: Some("partie-1".into()),
            public: Some(false),
            ..FormRequest::default()
        };
        let view = service()
            .content_form(3, ContentBoundForm::WarnTypo, &request)
            .await
            .expect("form builds");
        assert_eq!(
            view.previous_page_url.as_deref(),
            Some("/contenus/beta/3/mon-tuto/partie-1/")
        );
    }

    #[tokio::test]
    async fn validation_forms_are_built_and_cleaned() {
        let service = service();
        let view = service
            .validation_form(5, ValidationBoundForm::RejectValidation)
            .await
            .expect("form builds");
        assert_eq!(view.form.action, "/validations/refuser/5/");

        let cleaned = service
            .clean_validation_form(
                5,
                ValidationBoundForm::CancelValidation,
                &Submission::new().with("text", "  Plus besoin  "),
            )
            .await
            .expect("submission accepted");
        assert!(matches!(cleaned, CleanedForm::CancelValidation(data) if data.text == "Plus besoin"));

        let err = service
            .clean_validation_form(5, ValidationBoundForm::CancelValidation, &Submission::new().with("text", "ok"))
            .await
            .expect_err("too short");
        assert!(matches!(err, ApplicationError::Invalid(errors) if errors.codes("text") == vec![ErrorCode::TooShort]));
    }
}
