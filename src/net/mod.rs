//! Network subsystem.
//!
//! Plain TCP is served directly by `axum::serve`; this module only prepares
//! the rustls configuration when the listener is configured for TLS.

pub mod tls;

pub use tls::load_tls_config;
