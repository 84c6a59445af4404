use axum::http::StatusCode;
use serde_json::json;

mod support;

#[tokio::test]
async fn e2e_health_and_openapi_are_served() {
    let (status, body) = support::get("/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");

    let (status, body) = support::get("/openapi.json", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/api/v1/forms/{form}"].is_object());
}

#[tokio::test]
async fn e2e_standalone_schema_lists_its_elements() {
    let (status, body) = support::get("/api/v1/forms/container", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["form"]["form_id"], "container");
    assert_eq!(body["form"]["elements"]["title"]["type"], "textfield");
    assert_eq!(body["form"]["elements"]["title"]["required"], true);
    assert!(body.get("previous_page_url").is_none() || body["previous_page_url"].is_null());
}

#[tokio::test]
async fn e2e_content_schema_offers_catalog_choices() {
    let (status, body) = support::get("/api/v1/forms/content?kind=ARTICLE", None).await;
    assert_eq!(status, StatusCode::OK);
    let options = body["form"]["elements"]["licence"]["options"]
        .as_array()
        .map(Vec::len);
    assert_eq!(options, Some(2));
}

#[tokio::test]
async fn e2e_unknown_form_is_not_found() {
    let res = support::get("/api/v1/forms/inexistant", None).await;
    support::assert_error_response(&res, StatusCode::NOT_FOUND, "Not Found");

    let res = support::get("/api/v1/contents/3/forms/container", None).await;
    support::assert_error_response(&res, StatusCode::NOT_FOUND, "Not Found");
}

#[tokio::test]
async fn e2e_rejected_submission_lists_field_errors() {
    let res = support::post("/api/v1/forms/container", json!({ "title": "" })).await;
    support::assert_error_response(&res, StatusCode::UNPROCESSABLE_ENTITY, "Unprocessable Entity");
    assert!(!support::field_codes(&res.1, "title").is_empty());
}

#[tokio::test]
async fn e2e_accepted_submission_returns_cleaned_data() {
    let (status, body) = support::post(
        "/api/v1/forms/move-element",
        json!({
            "child_slug": "chapitre-2",
            "container_slug": "partie-1",
            "moving_method": "after:partie-1/chapitre-3",
            "pk": "3"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "unexpected body: {body}");
    assert_eq!(body["form"], "move-element");
    assert_eq!(body["data"]["moving_method"], "after:partie-1/chapitre-3");
    assert_eq!(body["data"]["pk"], 3);
}

#[tokio::test]
async fn e2e_authors_must_match_a_contactable_member() {
    let (status, body) =
        support::post("/api/v1/forms/author", json!({ "username": "Alice, carol" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["users"], json!([{ "id": 1, "username": "alice" }]));

    let res = support::post("/api/v1/forms/author", json!({ "username": "carol" })).await;
    assert_eq!(res.0, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(support::field_codes(&res.1, "username"), vec!["unknown_members"]);
}

#[tokio::test]
async fn e2e_recent_poster_cannot_write_a_note() {
    let (status, body) = support::get("/api/v1/contents/3/forms/note", Some(1)).await;
    assert_eq!(status, StatusCode::OK);
    let text = &body["form"]["elements"]["text"];
    assert_eq!(text["disabled"], true);
    assert_eq!(body["form"]["elements"]["last_note"]["default_value"], 11);
    assert_eq!(body["form"]["action"], "/contenus/reactions/ajouter/?pk=3");

    let (_, body) = support::get("/api/v1/contents/3/forms/note", Some(2)).await;
    assert_eq!(body["form"]["elements"]["text"]["disabled"], false);
}

#[tokio::test]
async fn e2e_locked_content_disables_the_note() {
    let (status, body) = support::get("/api/v1/contents/4/forms/note", None).await;
    assert_eq!(status, StatusCode::OK);
    let text = &body["form"]["elements"]["text"];
    assert_eq!(text["disabled"], true);
    assert_eq!(text["placeholder"], "Ce tutoriel est verrouillé.");
}

#[tokio::test]
async fn e2e_malformed_member_header_is_a_bad_request() {
    let res = support::get("/api/v1/contents/3/forms/note", Some(-4)).await;
    support::assert_error_response(&res, StatusCode::BAD_REQUEST, "Bad Request");
}

#[tokio::test]
async fn e2e_quoting_a_reaction_prefills_the_note() {
    let (status, body) = support::get("/api/v1/contents/3/forms/note?quote=10", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["form"]["elements"]["text"]["default_value"], "Super !");

    let res = support::get("/api/v1/contents/4/forms/note?quote=10", None).await;
    support::assert_error_response(&res, StatusCode::NOT_FOUND, "Not Found");
}

#[tokio::test]
async fn e2e_blank_note_is_rejected() {
    let res = support::post("/api/v1/contents/3/forms/note", json!({ "text": "" })).await;
    assert_eq!(res.0, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(support::field_codes(&res.1, "text"), vec!["blank"]);
}

#[tokio::test]
async fn e2e_warn_typo_on_the_beta() {
    let (status, body) =
        support::get("/api/v1/contents/3/forms/warn-typo?target=partie-1&public=false", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["previous_page_url"], "/contenus/beta/3/mon-tuto/partie-1/");
    assert_eq!(body["form"]["elements"]["version"]["default_value"], "bet");

    let res = support::get("/api/v1/contents/3/forms/warn-typo?target=inconnu", None).await;
    assert_eq!(res.0, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn e2e_ask_validation_round_trip() {
    let (status, body) = support::get("/api/v1/contents/3/forms/ask-validation", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["form"]["action"], "/validations/proposer/3/mon-tuto/");
    assert_eq!(body["previous_page_url"], "/contenus/3/mon-tuto/?version=abc");

    let (status, body) = support::post(
        "/api/v1/contents/3/forms/ask-validation",
        json!({ "text": "  Prêt pour relecture  ", "version": "abc" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "unexpected body: {body}");
    assert_eq!(body["form"], "ask-validation");
    assert_eq!(body["data"]["text"], "Prêt pour relecture");
}

#[tokio::test]
async fn e2e_validation_bound_forms() {
    let (status, body) = support::get("/api/v1/validations/5/forms/accept-validation", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["form"]["elements"]["is_major"]["default_value"], true);

    let res = support::post(
        "/api/v1/validations/5/forms/reject-validation",
        json!({ "text": "no" }),
    )
    .await;
    assert_eq!(res.0, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(support::field_codes(&res.1, "text"), vec!["too_short"]);

    let res = support::get("/api/v1/validations/99/forms/accept-validation", None).await;
    support::assert_error_response(&res, StatusCode::NOT_FOUND, "Not Found");
}

#[tokio::test]
async fn e2e_long_multibyte_note_is_cleaned() {
    let text = "€".repeat(700_000);
    let (status, body) =
        support::post("/api/v1/contents/3/forms/note", json!({ "text": text })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["form"], "note");
    assert_eq!(body["data"]["text"].as_str().map(|t| t.chars().count()), Some(700_000));
}

#[tokio::test]
async fn e2e_note_over_the_post_length_is_too_long() {
    let text = "a".repeat(1_000_001);
    let res = support::post("/api/v1/contents/3/forms/note", json!({ "text": text })).await;
    assert_eq!(res.0, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(support::field_codes(&res.1, "text"), vec!["too_long"]);
}

#[tokio::test]
async fn e2e_oversized_body_is_a_json_error() {
    let body = format!("{{\"text\": \"{}\"}}", "a".repeat(8 * 1024 * 1024));
    let res = support::post_raw("/api/v1/contents/3/forms/note", "application/json", body).await;
    support::assert_error_response(&res, StatusCode::PAYLOAD_TOO_LARGE, "Payload Too Large");
}

#[tokio::test]
async fn e2e_malformed_requests_are_json_errors() {
    let res = support::get("/api/v1/contents/abc/forms/note", None).await;
    support::assert_error_response(&res, StatusCode::BAD_REQUEST, "Bad Request");

    let res = support::get("/api/v1/forms/content?kind=FOO", None).await;
    support::assert_error_response(&res, StatusCode::BAD_REQUEST, "Bad Request");

    let res = support::get("/api/v1/contents/3/forms/warn-typo?public=maybe", None).await;
    support::assert_error_response(&res, StatusCode::BAD_REQUEST, "Bad Request");

    let res = support::post_raw("/api/v1/forms/container", "application/json", "{ not json").await;
    support::assert_error_response(&res, StatusCode::BAD_REQUEST, "Bad Request");

    let res = support::post_raw("/api/v1/forms/container", "text/plain", "title=x").await;
    support::assert_error_response(
        &res,
        StatusCode::UNSUPPORTED_MEDIA_TYPE,
        "Unsupported Media Type",
    );
}
