//! Cross-field business rules.
//!
//! # Order
//! 1. Derive the expiration date (submitted dates below the minimum are dropped)
//! 2. Primary and secondary email must differ
//! 3. Subject, note, primary email and expiration must be present
//! 4. Inactivity period must be 1..=30 days
//!
//! A too-early expiration date is never reported as such: it is left unset
//! by step 1 and then fails the presence check of step 3.

use std::ops::RangeInclusive;

use chrono::{Days, NaiveDate};
use thiserror::Error;

use crate::workflow::draft::{parse_date, DraftNote, Expiration};
use crate::workflow::normalize::NormalizedFields;

pub const INACTIVITY_DAYS: RangeInclusive<i64> = 1..=30;

/// The first business rule a submission broke.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleViolation {
    #[error("primary and secondary email are the same")]
    DuplicateEmail,

    #[error("mandatory field '{0}' is empty")]
    MissingField(&'static str),

    #[error("inactivity period outside the allowed range")]
    InactivityOutOfRange,

    #[error("previous step has not been completed")]
    StepOutOfOrder,
}

/// Parse the inactivity period; anything but an integer yields `None`.
pub fn parse_inactivity(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}

/// Earliest admissible expiration date for a given inactivity period.
pub fn minimum_expiration(today: NaiveDate, inactivity_days: i64) -> Option<NaiveDate> {
    u64::try_from(inactivity_days)
        .ok()
        .and_then(|days| today.checked_add_days(Days::new(days)))
}

/// Resolve the effective expiration.
///
/// Not submitted → `Never`. Submitted and on/after the minimum → that date.
/// Anything else (too early, unparseable, unknown minimum) → `None`, i.e. unset.
pub fn derive_expiration(
    submitted: Option<&str>,
    inactivity_days: Option<i64>,
    today: NaiveDate,
) -> Option<Expiration> {
    let Some(submitted) = submitted else {
        return Some(Expiration::Never);
    };
    let minimum = inactivity_days.and_then(|days| minimum_expiration(today, days))?;
    parse_date(submitted)
        .filter(|date| *date >= minimum)
        .map(Expiration::On)
}

/// Apply every rule in order, stopping at the first violation.
pub fn validate(fields: NormalizedFields, today: NaiveDate) -> Result<DraftNote, RuleViolation> {
    let inactivity = parse_inactivity(&fields.inactivity_time);
    let expiration = derive_expiration(fields.expiration_date.as_deref(), inactivity, today);

    if fields.primary_email == fields.secondary_email {
        return Err(RuleViolation::DuplicateEmail);
    }

    if fields.subject.is_empty() {
        return Err(RuleViolation::MissingField("subject"));
    }
    if fields.note.is_empty() {
        return Err(RuleViolation::MissingField("note"));
    }
    if fields.primary_email.is_empty() {
        return Err(RuleViolation::MissingField("primary_email"));
    }
    let expiration = expiration.ok_or(RuleViolation::MissingField("expiration_date"))?;

    let inactivity_days = inactivity
        .filter(|days| INACTIVITY_DAYS.contains(days))
        .and_then(|days| u32::try_from(days).ok())
        .ok_or(RuleViolation::InactivityOutOfRange)?;

    let secondary_email = Some(fields.secondary_email).filter(|email| !email.is_empty());

    Ok(DraftNote {
        subject: fields.subject,
        note: fields.note,
        primary_email: fields.primary_email,
        secondary_email,
        inactivity_days,
        expiration,
    })
}
