//! Session subsystem.
//!
//! # Data Flow
//! ```text
//! Cookie header
//!     → cookie.rs (extract session id)
//!     → store.rs (SessionHandle scoped to that id)
//!     → review / done steps read and write through the handle
//!     → cookie.rs (issue or expire the cookie on the response)
//! ```
//!
//! # Design Decisions
//! - No global session state: the handle is passed explicitly
//! - A session is either empty (token only) or holds a fully validated draft
//! - Lifetime is enforced by the idle sweeper, not by the steps

pub mod cookie;
pub mod keys;
pub mod store;

pub use cookie::SessionCookie;
pub use store::{MemorySessionStore, SessionHandle, SessionId, SessionStore};
