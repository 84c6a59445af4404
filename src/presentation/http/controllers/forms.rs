use crate::application::{
    dto::forms::{FormRequest, FormView},
    forms::{CleanedForm, ContentBoundForm, StandaloneForm, ValidationBoundForm},
};
use crate::domain::{content::ContentKind, form::Submission};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{JsonBody, MaybeMember, PathParams, QueryParams};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};
use serde::Deserialize;
use utoipa::IntoParams;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct FormParams {
    /// Type of an existing content (`TUTORIAL` or `ARTICLE`); locks the type field.
    #[param(value_type = Option<String>)]
    pub kind: Option<ContentKind>,
    /// Reaction quoted by a new note.
    pub quote: Option<i64>,
    /// Reaction edited by `note-edit`.
    pub reaction: Option<i64>,
    /// Container path targeted by a typo report.
    pub target: Option<String>,
    /// Typo report on the published version (default) or on the beta.
    pub public: Option<bool>,
}

impl FormParams {
    fn into_request(self, member: MaybeMember) -> FormRequest {
        FormRequest {
            kind: self.kind,
            quote: self.quote,
            reaction: self.reaction,
            target: self.target,
            public: self.public,
            member: member.0,
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/forms/{form}",
    params(("form" = String, Path, description = "Form name"), FormParams),
    responses(
        (status = 200, description = "Form schema.", body = FormView),
        (status = 404, description = "Unknown form.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Forms"
)]
pub async fn show_form(
    Extension(state): Extension<HttpState>,
    member: MaybeMember,
    PathParams(form): PathParams<String>,
    QueryParams(params): QueryParams<FormParams>,
) -> HttpResult<Json<FormView>> {
    let form: StandaloneForm = form.parse().into_http()?;
    let view = state
        .services
        .forms
        .standalone_form(form, &params.into_request(member))
        .await
        .into_http()?;
    Ok(Json(view))
}

#[utoipa::path(
    post,
    path = "/api/v1/forms/{form}",
    params(("form" = String, Path, description = "Form name"), FormParams),
    request_body(content = serde_json::Value, description = "Submitted values keyed by field name"),
    responses(
        (status = 200, description = "Cleaned data.", body = serde_json::Value),
        (status = 404, description = "Unknown form.", body = crate::presentation::http::error::ErrorResponse),
        (status = 400, description = "Malformed path, query or body.", body = crate::presentation::http::error::ErrorResponse),
        (status = 413, description = "Body larger than the configured limit.", body = crate::presentation::http::error::ErrorResponse),
        (status = 422, description = "Invalid submission.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Forms"
)]
pub async fn submit_form(
    Extension(state): Extension<HttpState>,
    member: MaybeMember,
    PathParams(form): PathParams<String>,
    QueryParams(params): QueryParams<FormParams>,
    JsonBody(submission): JsonBody<Submission>,
) -> HttpResult<Json<CleanedForm>> {
    let form: StandaloneForm = form.parse().into_http()?;
    let cleaned = state
        .services
        .forms
        .clean_standalone(form, &params.into_request(member), &submission)
        .await
        .into_http()?;
    Ok(Json(cleaned))
}

#[utoipa::path(
    get,
    path = "/api/v1/contents/{pk}/forms/{form}",
    params(
        ("pk" = i64, Path, description = "Content id"),
        ("form" = String, Path, description = "Form name"),
        FormParams
    ),
    responses(
        (status = 200, description = "Form schema.", body = FormView),
        (status = 404, description = "Unknown form, content, reaction or container.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Forms"
)]
pub async fn show_content_form(
    Extension(state): Extension<HttpState>,
    member: MaybeMember,
    PathParams((pk, form)): PathParams<(i64, String)>,
    QueryParams(params): QueryParams<FormParams>,
) -> HttpResult<Json<FormView>> {
    let form: ContentBoundForm = form.parse().into_http()?;
    let view = state
        .services
        .forms
        .content_form(pk, form, &params.into_request(member))
        .await
        .into_http()?;
    Ok(Json(view))
}

#[utoipa::path(
    post,
    path = "/api/v1/contents/{pk}/forms/{form}",
    params(
        ("pk" = i64, Path, description = "Content id"),
        ("form" = String, Path, description = "Form name"),
        FormParams
    ),
    request_body(content = serde_json::Value, description = "Submitted values keyed by field name"),
    responses(
        (status = 200, description = "Cleaned data.", body = serde_json::Value),
        (status = 404, description = "Unknown form or content.", body = crate::presentation::http::error::ErrorResponse),
        (status = 400, description = "Malformed path, query or body.", body = crate::presentation::http::error::ErrorResponse),
        (status = 413, description = "Body larger than the configured limit.", body = crate::presentation::http::error::ErrorResponse),
        (status = 422, description = "Invalid submission.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Forms"
)]
pub async fn submit_content_form(
    Extension(state): Extension<HttpState>,
    member: MaybeMember,
    PathParams((pk, form)): PathParams<(i64, String)>,
    QueryParams(params): QueryParams<FormParams>,
    JsonBody(submission): JsonBody<Submission>,
) -> HttpResult<Json<CleanedForm>> {
    let form: ContentBoundForm = form.parse().into_http()?;
    let cleaned = state
        .services
        .forms
        .clean_content_form(pk, form, &params.into_request(member), &submission)
        .await
        .into_http()?;
    Ok(Json(cleaned))
}

#[utoipa::path(
    get,
    path = "/api/v1/validations/{pk}/forms/{form}",
    params(
        ("pk" = i64, Path, description = "Validation id"),
        ("form" = String, Path, description = "Form name")
    ),
    responses(
        (status = 200, description = "Form schema.", body = FormView),
        (status = 404, description = "Unknown form or validation.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Forms"
)]
pub async fn show_validation_form(
    Extension(state): Extension<HttpState>,
    PathParams((pk, form)): PathParams<(i64, String)>,
) -> HttpResult<Json<FormView>> {
    let form: ValidationBoundForm = form.parse().into_http()?;
    let view = state
        .services
        .forms
        .validation_form(pk, form)
        .await
        .into_http()?;
    Ok(Json(view))
}

#[utoipa::path(
    post,
    path = "/api/v1/validations/{pk}/forms/{form}",
    params(
        ("pk" = i64, Path, description = "Validation id"),
        ("form" = String, Path, description = "Form name")
    ),
    request_body(content = serde_json::Value, description = "Submitted values keyed by field name"),
    responses(
        (status = 200, description = "Cleaned data.", body = serde_json::Value),
        (status = 404, description = "Unknown form or validation.", body = crate::presentation::http::error::ErrorResponse),
        (status = 400, description = "Malformed path, query or body.", body = crate::presentation::http::error::ErrorResponse),
        (status = 413, description = "Body larger than the configured limit.", body = crate::presentation::http::error::ErrorResponse),
        (status = 422, description = "Invalid submission.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Forms"
)]
pub async fn submit_validation_form(
    Extension(state): Extension<HttpState>,
    PathParams((pk, form)): PathParams<(i64, String)>,
    JsonBody(submission): JsonBody<Submission>,
) -> HttpResult<Json<CleanedForm>> {
    let form: ValidationBoundForm = form.parse().into_http()?;
    let cleaned = state
        .services
        .forms
        .clean_validation_form(pk, form, &submission)
        .await
        .into_http()?;
    Ok(Json(cleaned))
}
