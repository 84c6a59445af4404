use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode};
use chrono::{DateTime, TimeZone, Utc};
use once_cell::sync::Lazy;
use serde_json::Value;
use std::sync::Arc;
use tower::util::ServiceExt as _;
use tutorial_forms::application::forms::FormSettings;
use tutorial_forms::application::services::{ApplicationServices, ServicePorts};
use tutorial_forms::config::AppConfig;
use tutorial_forms::infrastructure::{
    repositories::{Fixtures, InMemoryStore},
    time::FixedClock,
    urls::SiteUrlResolver,
};
use tutorial_forms::presentation::http::{routes::build_router, state::HttpState};

/// Five minutes after alice's last reaction on content 3.
pub static NOW: Lazy<DateTime<Utc>> = Lazy::new(|| {
    Utc.with_ymd_and_hms(2026, 1, 1, 12, 5, 0)
        .single()
        .expect("valid fixed instant")
});

pub const FIXTURES: &str = r#"{
    "members": [
        { "id": 1, "username": "alice" },
        { "id": 2, "username": "bob" },
        { "id": 3, "username": "carol", "contactable": false }
    ],
    "subcategories": [
        { "id": 1, "label": "Programmation" },
        { "id": 2, "label": "Systèmes" }
    ],
    "licences": [
        { "id": 1, "label": "Tous droits réservés" },
        { "id": 2, "label": "CC BY" }
    ],
    "help_categories": [{ "id": 1, "label": "Besoin de relecteurs" }],
    "contents": [{
        "id": 3, "slug": "mon-tuto", "title": "Mon tuto", "type": "TUTORIAL",
        "current_version": "abc", "sha_beta": "bet", "sha_public": "pub",
        "authors": [1, 2],
        "containers": [{ "path": "partie-1", "title": "Partie 1" }]
    }, {
        "id": 4, "slug": "verrouille", "title": "Verrouillé", "type": "ARTICLE",
        "current_version": "def", "authors": [2], "is_locked": true, "js_support": true
    }],
    "reactions": [
        { "id": 10, "content": 3, "author": 2, "text": "Super !", "posted_at": "2026-01-01T11:00:00Z" },
        { "id": 11, "content": 3, "author": 1, "text": "Merci", "posted_at": "2026-01-01T12:00:00Z" }
    ],
    "validations": [{ "id": 5, "content": 3, "version": "abc" }]
}"#;

pub fn build_test_state() -> HttpState {
    let fixtures = Fixtures::from_json(FIXTURES).expect("fixtures parse");
    let store = Arc::new(InMemoryStore::from_fixtures(fixtures).expect("fixtures are consistent"));

    let services = Arc::new(ApplicationServices::new(
        ServicePorts {
            contents: store.clone(),
            reactions: store.clone(),
            validations: store.clone(),
            members: store.clone(),
            catalog: store,
            clock: Arc::new(FixedClock(*NOW)),
            urls: Arc::new(SiteUrlResolver),
        },
        FormSettings::default(),
    ));

    HttpState { services }
}

pub fn make_test_router() -> axum::Router {
    let config = AppConfig::from_lookup(|_| None).expect("default configuration");
    build_router(
        build_test_state(),
        config.allowed_origins(),
        config.request_body_limit(),
    )
}

pub async fn get(uri: &str, member: Option<i64>) -> (StatusCode, Value) {
    let mut req = Request::builder().method(Method::GET).uri(uri);
    if let Some(member) = member {
        req = req.header("x-member-id", member.to_string());
    }
    send(req.body(Body::empty()).expect("request builds")).await
}

pub async fn post(uri: &str, body: Value) -> (StatusCode, Value) {
    let req = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("request builds");
    send(req).await
}

pub async fn post_raw(uri: &str, content_type: &str, body: impl Into<Body>) -> (StatusCode, Value) {
    let req = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", content_type)
        .body(body.into())
        .expect("request builds");
    send(req).await
}

pub async fn send(req: Request<Body>) -> (StatusCode, Value) {
    let resp = make_test_router().oneshot(req).await.expect("router responds");
    let status = resp.status();
    let bytes = body::to_bytes(resp.into_body(), 16 * 1024 * 1024)
        .await
        .expect("read body");
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("json body")
    };
    (status, json)
}

/// Assert that a response is an ErrorResponse with the expected status and error string.
pub fn assert_error_response(
    (status, json): &(StatusCode, Value),
    expected_status: StatusCode,
    expected_error: &str,
) {
    assert_eq!(*status, expected_status, "unexpected body: {json}");
    assert_eq!(json["error"], expected_error);
    let message = json["message"].as_str().unwrap_or_default();
    assert!(!message.is_empty(), "expected non-empty message field in ErrorResponse");
}

/// Error codes reported on `field` by a rejected submission.
pub fn field_codes(json: &Value, field: &str) -> Vec<String> {
    json["errors"]
        .as_array()
        .map(|errors| {
            errors
                .iter()
                .filter(|error| error["field"] == field)
                .filter_map(|error| error["code"].as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}
