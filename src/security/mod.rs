//! Security subsystem.
//!
//! # Data Flow
//! ```text
//! Entry page:
//!     → csrf.rs (mint token, stored in the session)
//!
//! Submitting steps:
//!     → csrf.rs (compare stored vs submitted token)
//!
//! Every response:
//!     → headers.rs (framing, sniffing, CSP, caching)
//! ```
//!
//! # Design Decisions
//! - Fail closed: reject on any security check failure
//! - No trust in client input

pub mod csrf;
pub mod headers;
