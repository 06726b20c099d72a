//! Response helpers.
//!
//! # Design Decisions
//! - Every rejection is a bare `303 See Other` with the session cookie expired;
//!   the reason is never put in the response

use axum::http::header::SET_COOKIE;
use axum::response::{Html, IntoResponse, Redirect, Response};

use crate::session::{SessionCookie, SessionId};

/// Redirect after the session has been torn down.
pub fn teardown_redirect(cookie: &SessionCookie, target: &'static str) -> Response {
    ([(SET_COOKIE, cookie.expire())], Redirect::to(target)).into_response()
}

/// HTML page that also binds the browser to `id`.
pub fn page_with_session(cookie: &SessionCookie, id: SessionId, body: String) -> Response {
    ([(SET_COOKIE, cookie.issue(id))], Html(body)).into_response()
}

/// HTML page sent after the session has ended.
pub fn page_after_teardown(cookie: &SessionCookie, body: String) -> Response {
    ([(SET_COOKIE, cookie.expire())], Html(body)).into_response()
}
