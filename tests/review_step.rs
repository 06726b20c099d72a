//! Review step behaviour over HTTP.

use axum::http::StatusCode;

use emergency_note::session::keys;
use emergency_note::session::SessionStore;

mod common;
use common::*;

async fn post_review(fields: Vec<(&'static str, String)>) -> (axum::http::Response<axum::body::Body>, std::sync::Arc<dyn SessionStore>, emergency_note::session::SessionId) {
    let server = server();
    let store = server.sessions();
    let id = seeded_session(&store);
    let request = form_request("POST", "/review", Some(id), encode_form(&fields));
    let response = send(&server, request).await;
    (response, store, id)
}

fn assert_rejected_to(response: &axum::http::Response<axum::body::Body>, target: &str) {
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(response), Some(target));
    assert!(set_cookie(response).unwrap().contains("Max-Age=0"));
}

#[tokio::test]
async fn test_valid_submission_advances() {
    let (response, store, id) = post_review(valid_fields()).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(location(&response), None);
    assert_eq!(store.get(&id, keys::SUBJECT).as_deref(), Some("Test"));
    assert_eq!(store.get(&id, keys::NOTE).as_deref(), Some("Body"));
    assert_eq!(store.get(&id, keys::PRIMARY_EMAIL).as_deref(), Some("a@x.com"));
    assert_eq!(store.get(&id, keys::SECONDARY_EMAIL).as_deref(), Some("none"));
    assert_eq!(store.get(&id, keys::INACTIVITY_TIME).as_deref(), Some("10"));
    assert_eq!(store.get(&id, keys::EXPIRATION_DATE).as_deref(), Some("none"));
    assert_eq!(store.get(&id, keys::PAGE_TOKEN).as_deref(), Some("review_page"));
    assert_eq!(store.get(&id, keys::CSRF_TOKEN).as_deref(), Some(TOKEN));

    let html = body_text(response).await;
    assert!(html.contains("No second recipient has been set."));
    assert!(html.contains("after 10 days"));
    assert!(html.contains("The note never expires."));
    assert_eq!(extract_token(&html).as_deref(), Some(TOKEN));
}

#[tokio::test]
async fn test_duplicate_emails_rejected() {
    let fields = with_field(valid_fields(), "secondary_email", "a@x.com");
    let (response, store, id) = post_review(fields).await;
    assert_rejected_to(&response, "/start");
    assert!(!store.exists(&id));
}

#[tokio::test]
async fn test_duplicate_detected_after_normalization() {
    let fields = with_field(valid_fields(), "secondary_email", "<i>a@x.com</i> ");
    let (response, store, id) = post_review(fields).await;
    assert_rejected_to(&response, "/start");
    assert!(!store.exists(&id));
}

#[tokio::test]
async fn test_inactivity_out_of_range_rejected() {
    for value in ["31", "0", "abc"] {
        let fields = with_field(valid_fields(), "inactivity_time", value);
        let (response, store, id) = post_review(fields).await;
        assert_rejected_to(&response, "/start");
        assert!(!store.exists(&id), "inactivity {value}");
    }
}

#[tokio::test]
async fn test_missing_token_rejected_to_entry() {
    let fields = without_field(valid_fields(), "csrf_token");
    let (response, store, id) = post_review(fields).await;
    assert_rejected_to(&response, "/");
    assert!(!store.exists(&id));
}

#[tokio::test]
async fn test_wrong_token_rejected_to_entry() {
    let fields = with_field(valid_fields(), "csrf_token", "forged");
    let (response, store, id) = post_review(fields).await;
    assert_rejected_to(&response, "/");
    assert!(!store.exists(&id));
}

#[tokio::test]
async fn test_session_without_token_rejected() {
    let server = server();
    let store = server.sessions();
    let id = store.create();
    let request = form_request("POST", "/review", Some(id), encode_form(&valid_fields()));
    let response = send(&server, request).await;
    assert_rejected_to(&response, "/");
    assert!(store.is_empty());
}

#[tokio::test]
async fn test_no_session_cookie_rejected() {
    let server = server();
    let request = form_request("POST", "/review", None, encode_form(&valid_fields()));
    let response = send(&server, request).await;
    assert_rejected_to(&response, "/");
}

#[tokio::test]
async fn test_non_post_methods_rejected_to_entry() {
    for method in ["GET", "PUT", "DELETE"] {
        let server = server();
        let store = server.sessions();
        let id = seeded_session(&store);
        let request = form_request(method, "/review", Some(id), String::new());
        let response = send(&server, request).await;
        assert_rejected_to(&response, "/");
        assert!(!store.exists(&id), "{method}");
    }
}

#[tokio::test]
async fn test_non_form_body_rejected_to_entry() {
    let server = server();
    let store = server.sessions();
    let id = seeded_session(&store);
    let request = axum::http::Request::builder()
        .method("POST")
        .uri("/review")
        .header("content-type", "application/json")
        .header("cookie", cookie(id))
        .body(axum::body::Body::from(
            serde_json::json!({ "csrf_token": TOKEN, "subject": "Test" }).to_string(),
        ))
        .unwrap();
    let response = send(&server, request).await;
    assert_rejected_to(&response, "/");
    assert!(!store.exists(&id));
}

#[tokio::test]
async fn test_early_expiration_cascades_into_mandatory_rejection() {
    // today 2024-01-01 + 5 days → minimum 2024-01-06
    let fields = with_field(valid_fields(), "inactivity_time", "5");
    let fields = with_field(fields, "expiration_date", "2024-01-03");
    let (response, store, id) = post_review(fields).await;
    assert_rejected_to(&response, "/start");
    assert!(!store.exists(&id));
}

#[tokio::test]
async fn test_expiration_at_minimum_accepted() {
    let fields = with_field(valid_fields(), "inactivity_time", "5");
    let fields = with_field(fields, "expiration_date", "2024-01-06");
    let (response, store, id) = post_review(fields).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(store.get(&id, keys::EXPIRATION_DATE).as_deref(), Some("2024-01-06"));

    let html = body_text(response).await;
    assert!(html.contains("The note expires on 2024-01-06."));
}

#[tokio::test]
async fn test_empty_expiration_field_is_rejected() {
    let fields = with_field(valid_fields(), "expiration_date", "");
    let (response, _, _) = post_review(fields).await;
    assert_rejected_to(&response, "/start");
}

#[tokio::test]
async fn test_missing_mandatory_field_rejected() {
    for name in ["subject", "note", "primary_email"] {
        let fields = with_field(valid_fields(), "secondary_email", "b@x.com");
        let fields = without_field(fields, name);
        let (response, store, id) = post_review(fields).await;
        assert_rejected_to(&response, "/start");
        assert!(!store.exists(&id), "{name}");
    }
}

#[tokio::test]
async fn test_markup_only_subject_counts_as_empty() {
    let fields = with_field(valid_fields(), "subject", "<b></b>");
    let (response, _, _) = post_review(fields).await;
    assert_rejected_to(&response, "/start");
}

#[tokio::test]
async fn test_fields_are_normalized_before_storage() {
    let long_subject = format!("<h1>{}</h1>", "x".repeat(150));
    let fields = with_field(valid_fields(), "subject", &long_subject);
    let fields = with_field(fields, "note", "<script>alert(1)</script> hello");
    let fields = with_field(fields, "secondary_email", "b (at) <b>y.org</b>");
    let fields = with_field(fields, "inactivity_time", "1");
    let (response, store, id) = post_review(fields).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(store.get(&id, keys::SUBJECT), Some("x".repeat(100)));
    assert_eq!(store.get(&id, keys::NOTE).as_deref(), Some("alert(1) hello"));
    assert_eq!(store.get(&id, keys::SECONDARY_EMAIL).as_deref(), Some("baty.org"));

    let html = body_text(response).await;
    assert!(html.contains("A copy will also be delivered to baty.org."));
    assert!(html.contains("after 1 day "));
    assert!(!html.contains("<script>"));
}

#[tokio::test]
async fn test_rejection_reason_not_disclosed() {
    let fields = with_field(valid_fields(), "csrf_token", "forged");
    let (response, _, _) = post_review(fields).await;
    let body = body_text(response).await;
    assert!(!body.contains("forged"));
    assert!(!body.contains(TOKEN));
}
