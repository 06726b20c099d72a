//! Review step: accept the note form, validate it and store the draft.

use axum::http::Method;
use chrono::NaiveDate;
use serde::Deserialize;

use crate::session::SessionHandle;
use crate::workflow::draft::DraftNote;
use crate::workflow::gate::{check_method, verify_csrf};
use crate::workflow::normalize::NormalizedFields;
use crate::workflow::rules::validate;
use crate::workflow::{StepError, Transition};

/// Fields posted by the start page. Every field is optional at this level;
/// absence is judged by the rules, not by the decoder.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ReviewForm {
    pub csrf_token: Option<String>,
    pub subject: Option<String>,
    pub note: Option<String>,
    pub primary_email: Option<String>,
    pub secondary_email: Option<String>,
    pub inactivity_time: Option<String>,
    pub expiration_date: Option<String>,
}

/// Run the review step against one request.
///
/// `form` is `None` when the body could not be decoded. On rejection the
/// session is destroyed before returning.
pub fn submit(
    method: &Method,
    form: Option<ReviewForm>,
    session: &mut SessionHandle,
    today: NaiveDate,
) -> Transition<DraftNote> {
    match accept(method, form, session, today) {
        Ok(draft) => Transition::Advanced(draft),
        Err(err) => {
            session.destroy();
            Transition::Rejected(err)
        }
    }
}

fn accept(
    method: &Method,
    form: Option<ReviewForm>,
    session: &SessionHandle,
    today: NaiveDate,
) -> Result<DraftNote, StepError> {
    check_method(method)?;
    let form = form.ok_or(StepError::Forgery)?;
    verify_csrf(session, form.csrf_token.as_deref())?;

    let fields = NormalizedFields::from_form(&form);
    let draft = validate(fields, today)?;

    // The session can only be gone here if it was swept after the token check.
    if !draft.write_to(session) {
        return Err(StepError::Forgery);
    }
    Ok(draft)
}
