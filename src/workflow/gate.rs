//! Request gate and CSRF verifier shared by every submitting step.

use axum::http::Method;

use crate::security::csrf::tokens_match;
use crate::session::keys;
use crate::session::SessionHandle;
use crate::workflow::StepError;

/// Only form submissions may reach a step.
pub fn check_method(method: &Method) -> Result<(), StepError> {
    if *method == Method::POST {
        Ok(())
    } else {
        Err(StepError::Protocol)
    }
}

/// The submitted token must equal the one held by the session.
///
/// A missing session token fails just like a mismatch.
pub fn verify_csrf(session: &SessionHandle, submitted: Option<&str>) -> Result<(), StepError> {
    let expected = session.get(keys::CSRF_TOKEN).ok_or(StepError::Forgery)?;
    let submitted = submitted.ok_or(StepError::Forgery)?;
    if tokens_match(&expected, submitted) {
        Ok(())
    } else {
        Err(StepError::Forgery)
    }
}
