//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP/TLS connection
//!     → server.rs (Axum setup, middleware)
//!     → request.rs (resolve session cookie, pick language)
//!     → handlers.rs (run the workflow step)
//!     → response.rs (page or teardown redirect, cookie header)
//!     → Send to client
//! ```

pub mod handlers;
pub mod request;
pub mod response;
pub mod server;

pub use request::{ClientSession, X_REQUEST_ID};
pub use server::{AppState, HttpServer};
