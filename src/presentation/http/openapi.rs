use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::forms::show_form,
        crate::presentation::http::controllers::forms::submit_form,
        crate::presentation::http::controllers::forms::show_content_form,
        crate::presentation::http::controllers::forms::submit_content_form,
        crate::presentation::http::controllers::forms::show_validation_form,
        crate::presentation::http::controllers::forms::submit_validation_form,
        crate::presentation::http::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::application::dto::forms::FormView
        )
    ),
    tags(
        (name = "Forms", description = "Form schemas and submission cleaning"),
        (name = "System", description = "System level endpoints")
    ),
    info(
        title = "Tutorial forms API",
        description = "Form schemas and validation rules of the publishing platform",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

pub async fn serve_openapi() -> axum::Json<utoipa::openapi::OpenApi> {
    axum::Json(ApiDoc::openapi())
}
