//! Done step: final confirmation of a reviewed draft.
//!
//! Gated the same way as the review step, plus the review step marker.
//! The session ends here whatever the outcome.

use axum::http::Method;
use serde::Deserialize;

use crate::session::keys;
use crate::session::SessionHandle;
use crate::workflow::draft::DraftNote;
use crate::workflow::gate::{check_method, verify_csrf};
use crate::workflow::rules::RuleViolation;
use crate::workflow::{StepError, Transition};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ConfirmForm {
    pub csrf_token: Option<String>,
}

pub fn confirm(
    method: &Method,
    form: Option<ConfirmForm>,
    session: &mut SessionHandle,
) -> Transition<DraftNote> {
    let transition = match accept(method, form, session) {
        Ok(draft) => Transition::Advanced(draft),
        Err(err) => Transition::Rejected(err),
    };
    session.destroy();
    transition
}

fn accept(
    method: &Method,
    form: Option<ConfirmForm>,
    session: &SessionHandle,
) -> Result<DraftNote, StepError> {
    check_method(method)?;
    let form = form.ok_or(StepError::Forgery)?;
    verify_csrf(session, form.csrf_token.as_deref())?;

    if session.get(keys::PAGE_TOKEN).as_deref() != Some(keys::REVIEW_PAGE_MARKER) {
        return Err(RuleViolation::StepOutOfOrder.into());
    }
    DraftNote::read_from(session).ok_or_else(|| RuleViolation::StepOutOfOrder.into())
}
