//! Shared helpers for the workflow integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, Response};
use chrono::NaiveDate;
use tower::ServiceExt;

use emergency_note::config::AppConfig;
use emergency_note::session::keys;
use emergency_note::session::{SessionId, SessionStore};
use emergency_note::workflow::FixedClock;
use emergency_note::HttpServer;

pub const TOKEN: &str = "test-csrf-token";

pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

/// Server pinned to 2024-01-01.
pub fn server() -> HttpServer {
    HttpServer::with_clock(AppConfig::default(), Arc::new(FixedClock(today()))).unwrap()
}

/// A session as the entry page would have left it.
pub fn seeded_session(store: &Arc<dyn SessionStore>) -> SessionId {
    let id = store.create();
    store.set(&id, keys::CSRF_TOKEN, TOKEN.into());
    id
}

pub fn cookie(id: SessionId) -> String {
    format!("en_session={}", id)
}

/// Fields of a submission that passes every rule.
pub fn valid_fields() -> Vec<(&'static str, String)> {
    vec![
        ("csrf_token", TOKEN.to_string()),
        ("subject", "Test".to_string()),
        ("note", "Body".to_string()),
        ("primary_email", "a@x.com".to_string()),
        ("secondary_email", String::new()),
        ("inactivity_time", "10".to_string()),
    ]
}

/// Replace (or add) one field.
pub fn with_field(
    mut fields: Vec<(&'static str, String)>,
    name: &'static str,
    value: &str,
) -> Vec<(&'static str, String)> {
    fields.retain(|(n, _)| *n != name);
    fields.push((name, value.to_string()));
    fields
}

pub fn without_field(
    mut fields: Vec<(&'static str, String)>,
    name: &str,
) -> Vec<(&'static str, String)> {
    fields.retain(|(n, _)| *n != name);
    fields
}

/// `application/x-www-form-urlencoded` body.
pub fn encode_form<T: serde::Serialize + ?Sized>(fields: &T) -> String {
    serde_urlencoded::to_string(fields).unwrap()
}

fn attribute<'a>(tag: &'a str, name: &str) -> Option<&'a str> {
    let marker = format!("{name}=\"");
    let start = tag.find(&marker)? + marker.len();
    let end = tag[start..].find('"')? + start;
    Some(&tag[start..end])
}

/// Controls a browser would submit, with their rendered values: every named
/// `input`, `textarea` or `select` that is not disabled.
fn controls(html: &str) -> Vec<(String, String)> {
    html.split('<')
        .filter(|tag| {
            tag.starts_with("input ") || tag.starts_with("textarea ") || tag.starts_with("select ")
        })
        .filter_map(|tag| {
            let tag = &tag[..tag.find('>')?];
            if tag.split_whitespace().any(|attr| attr == "disabled") {
                return None;
            }
            let name = attribute(tag, "name")?;
            let value = attribute(tag, "value").unwrap_or_default();
            Some((name.to_string(), value.to_string()))
        })
        .collect()
}

pub fn submitted_controls(html: &str) -> Vec<String> {
    controls(html).into_iter().map(|(name, _)| name).collect()
}

/// Fill a rendered form the way a browser would: what the user typed from
/// `typed`, everything else as rendered.
pub fn fill_form(html: &str, typed: &[(&'static str, String)]) -> Vec<(String, String)> {
    controls(html)
        .into_iter()
        .map(|(name, rendered)| {
            let value = typed
                .iter()
                .find(|(n, _)| *n == name)
                .map(|(_, v)| v.clone())
                .unwrap_or(rendered);
            (name, value)
        })
        .collect()
}

pub fn form_request(method: &str, uri: &str, session: Option<SessionId>, body: String) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(id) = session {
        builder = builder.header(header::COOKIE, cookie(id));
    }
    builder.body(Body::from(body)).unwrap()
}

pub async fn send(server: &HttpServer, request: Request<Body>) -> Response<Body> {
    server.router().oneshot(request).await.unwrap()
}

pub fn location(response: &Response<Body>) -> Option<&str> {
    response
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
}

pub fn set_cookie(response: &Response<Body>) -> Option<&str> {
    response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Pull the hidden CSRF token out of a rendered form.
pub fn extract_token(html: &str) -> Option<String> {
    let marker = "name=\"csrf_token\" value=\"";
    let start = html.find(marker)? + marker.len();
    let end = html[start..].find('"')? + start;
    Some(html[start..end].to_string())
}
