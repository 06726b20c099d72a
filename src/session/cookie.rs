//! Session cookie encoding.

use axum::http::{header, HeaderMap, HeaderValue};

use crate::config::SessionConfig;
use crate::session::store::SessionId;

/// Builds and reads the cookie that carries the session identifier.
#[derive(Debug, Clone)]
pub struct SessionCookie {
    name: String,
    secure: bool,
}

impl SessionCookie {
    pub fn new(config: &SessionConfig) -> Self {
        Self {
            name: config.cookie_name.clone(),
            secure: config.secure_cookie,
        }
    }

    /// Find the session identifier among the request's cookies.
    pub fn read(&self, headers: &HeaderMap) -> Option<SessionId> {
        headers
            .get_all(header::COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .flat_map(|v| v.split(';'))
            .filter_map(|pair| pair.trim().split_once('='))
            .find(|(name, _)| *name == self.name)
            .and_then(|(_, value)| SessionId::parse(value))
    }

    /// `Set-Cookie` value binding the browser to `id`.
    pub fn issue(&self, id: SessionId) -> HeaderValue {
        self.header_value(&format!("{}={}; Path=/; HttpOnly; SameSite=Lax", self.name, id))
    }

    /// `Set-Cookie` value telling the browser to forget the session.
    pub fn expire(&self) -> HeaderValue {
        self.header_value(&format!(
            "{}=; Path=/; Max-Age=0; HttpOnly; SameSite=Lax",
            self.name
        ))
    }

    fn header_value(&self, base: &str) -> HeaderValue {
        let value = if self.secure {
            format!("{}; Secure", base)
        } else {
            base.to_string()
        };
        // Cookie names are validated as tokens at startup and ids are hex.
        HeaderValue::from_str(&value).unwrap_or_else(|_| HeaderValue::from_static(""))
    }
}
