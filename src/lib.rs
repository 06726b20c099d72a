//! Emergency note service library.
//!
//! A three-page, session-backed workflow (start → review → done) in which the
//! review step gates, normalizes and validates the note before storing it.

pub mod config;
pub mod error;
pub mod http;
pub mod lifecycle;
pub mod net;
pub mod observability;
pub mod render;
pub mod security;
pub mod session;
pub mod workflow;

pub use config::schema::AppConfig;
pub use error::AppError;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
