//! Multi-step note workflow.
//!
//! # Data Flow
//! ```text
//! POST /review
//!     → gate.rs (method, CSRF)
//!     → normalize.rs (strip tags, truncate, sanitize emails)
//!     → rules.rs (expiration derivation, distinctness, presence, inactivity)
//!     → draft.rs (single write of the draft + step marker)
//!     → Transition::Advanced(draft)        render confirmation
//!
//! any failure
//!     → session destroyed
//!     → Transition::Rejected(error)        redirect to error.redirect_target()
//! ```
//!
//! # Design Decisions
//! - No retry in place: a rejection always restarts the whole flow
//! - Steps never write partially validated data
//! - Rejection reasons stay server-side; the client only sees a redirect

pub mod clock;
pub mod done;
pub mod draft;
pub mod gate;
pub mod normalize;
pub mod review;
pub mod rules;

use thiserror::Error;

pub use clock::{Clock, FixedClock, SystemClock};
pub use draft::{DraftNote, Expiration};
pub use review::ReviewForm;
pub use rules::RuleViolation;

/// Page that opens a fresh session.
pub const ENTRY_PAGE: &str = "/";
/// Page holding the note form.
pub const START_PAGE: &str = "/start";

/// Why a step refused a request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StepError {
    /// Anything other than a form submission.
    #[error("request method not accepted")]
    Protocol,

    /// Missing or mismatched anti-forgery token.
    #[error("anti-forgery token rejected")]
    Forgery,

    /// A business rule failed.
    #[error("submission rejected: {0}")]
    Validation(#[from] RuleViolation),
}

impl StepError {
    /// Where the client is sent after the session has been torn down.
    pub fn redirect_target(&self) -> &'static str {
        match self {
            StepError::Protocol | StepError::Forgery => ENTRY_PAGE,
            StepError::Validation(_) => START_PAGE,
        }
    }

    /// Coarse label safe to log and to use as a metric label.
    pub fn category(&self) -> &'static str {
        match self {
            StepError::Protocol => "protocol",
            StepError::Forgery => "forgery",
            StepError::Validation(_) => "validation",
        }
    }
}

/// Terminal state of one step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition<T> {
    /// Session updated; the next page may be rendered.
    Advanced(T),
    /// Session destroyed; the client must be redirected.
    Rejected(StepError),
}

impl<T> Transition<T> {
    pub fn is_advanced(&self) -> bool {
        matches!(self, Transition::Advanced(_))
    }

    pub fn outcome(&self) -> &'static str {
        match self {
            Transition::Advanced(_) => "advanced",
            Transition::Rejected(_) => "rejected",
        }
    }
}
