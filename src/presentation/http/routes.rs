use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::forms,
    openapi::{self, StatusResponse},
};
use axum::{
    Extension, Router,
    extract::DefaultBodyLimit,
    http::{HeaderName, HeaderValue, Method, header},
    routing::get,
};
use std::time::Duration;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

/// `body_limit` caps submissions in bytes; see [`AppConfig::request_body_limit`].
///
/// [`AppConfig::request_body_limit`]: crate::config::AppConfig::request_body_limit
pub fn build_router(state: HttpState, allowed_origins: &[String], body_limit: usize) -> Router {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(err) => {
                tracing::warn!(origin = %origin, error = %err, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, HeaderName::from_static("x-member-id")])
        .max_age(Duration::from_secs(3600));

    Router::new()
        .route("/health", get(health))
        .route("/openapi.json", get(openapi::serve_openapi))
        .route(
            "/api/v1/forms/{form}",
            get(forms::show_form).post(forms::submit_form),
        )
        .route(
            "/api/v1/contents/{pk}/forms/{form}",
            get(forms::show_content_form).post(forms::submit_content_form),
        )
        .route(
            "/api/v1/validations/{pk}/forms/{form}",
            get(forms::show_validation_form).post(forms::submit_validation_form),
        )
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors)
        .layer(Extension(state))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = crate::presentation::http::openapi::StatusResponse)
    ),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}
