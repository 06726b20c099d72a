//! Per-request session resolution.
//!
//! # Responsibilities
//! - Map the session cookie to a `SessionHandle`
//! - Choose the response language
//!
//! # Design Decisions
//! - Never fails: a missing or stale cookie yields an inactive handle and the
//!   steps decide what that means

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::header::ACCEPT_LANGUAGE;
use axum::http::request::Parts;

use crate::http::server::AppState;
use crate::session::keys;
use crate::session::SessionHandle;

/// Header carrying the request ID.
pub const X_REQUEST_ID: &str = "x-request-id";

/// The caller's session together with the language to answer in.
pub struct ClientSession {
    pub handle: SessionHandle,
    pub language: String,
}

impl FromRequestParts<AppState> for ClientSession {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let handle = SessionHandle::new(state.sessions.clone(), state.cookie.read(&parts.headers));
        let accept = parts
            .headers
            .get(ACCEPT_LANGUAGE)
            .and_then(|v| v.to_str().ok());
        let language = state
            .catalog
            .pick_language(handle.get(keys::LANGUAGE).as_deref(), accept);
        Ok(Self { handle, language })
    }
}
