//! Security response headers.
//!
//! # Responsibilities
//! - Forbid framing and MIME sniffing
//! - Restrict content sources to the service itself
//! - Keep pages holding session data out of caches
//!
//! # Design Decisions
//! - Headers set by a handler are never overwritten

use axum::http::{HeaderName, HeaderValue};
use axum::Router;
use tower_http::set_header::SetResponseHeaderLayer;

const SECURITY_HEADERS: &[(&str, &str)] = &[
    ("x-frame-options", "DENY"),
    ("x-content-type-options", "nosniff"),
    ("referrer-policy", "same-origin"),
    ("content-security-policy", "default-src 'self'; form-action 'self'; frame-ancestors 'none'"),
    ("cache-control", "no-store"),
];

/// Add the security headers to every response of `router`.
pub fn with_security_headers(router: Router) -> Router {
    SECURITY_HEADERS.iter().fold(router, |router, &(name, value)| {
        router.layer(SetResponseHeaderLayer::if_not_present(
            HeaderName::from_static(name),
            HeaderValue::from_static(value),
        ))
    })
}
