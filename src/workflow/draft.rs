//! The draft note and its session representation.

use std::fmt;

use chrono::NaiveDate;

use crate::session::keys;
use crate::session::SessionHandle;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// When the note stops being deliverable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expiration {
    Never,
    On(NaiveDate),
}

impl Expiration {
    fn parse(value: &str) -> Option<Self> {
        if value == keys::NONE_SENTINEL {
            return Some(Self::Never);
        }
        parse_date(value).map(Self::On)
    }
}

impl fmt::Display for Expiration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expiration::Never => f.write_str(keys::NONE_SENTINEL),
            Expiration::On(date) => write!(f, "{}", date.format(DATE_FORMAT)),
        }
    }
}

/// Parse a `YYYY-MM-DD` date.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).ok()
}

/// A fully validated emergency note awaiting final confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftNote {
    pub subject: String,
    pub note: String,
    pub primary_email: String,
    pub secondary_email: Option<String>,
    pub inactivity_days: u32,
    pub expiration: Expiration,
}

impl DraftNote {
    /// Persist the draft and stamp the review step marker in one write.
    ///
    /// Returns false if the session no longer exists.
    pub fn write_to(&self, session: &SessionHandle) -> bool {
        session.set_many(vec![
            (keys::SUBJECT, self.subject.clone()),
            (keys::NOTE, self.note.clone()),
            (keys::PRIMARY_EMAIL, self.primary_email.clone()),
            (
                keys::SECONDARY_EMAIL,
                self.secondary_email
                    .clone()
                    .unwrap_or_else(|| keys::NONE_SENTINEL.to_string()),
            ),
            (keys::INACTIVITY_TIME, self.inactivity_days.to_string()),
            (keys::EXPIRATION_DATE, self.expiration.to_string()),
            (keys::PAGE_TOKEN, keys::REVIEW_PAGE_MARKER.to_string()),
        ])
    }

    /// Read a previously written draft back out of the session.
    pub fn read_from(session: &SessionHandle) -> Option<Self> {
        let secondary_email = session.get(keys::SECONDARY_EMAIL)?;
        Some(Self {
            subject: session.get(keys::SUBJECT)?,
            note: session.get(keys::NOTE)?,
            primary_email: session.get(keys::PRIMARY_EMAIL)?,
            secondary_email: (secondary_email != keys::NONE_SENTINEL).then_some(secondary_email),
            inactivity_days: session.get(keys::INACTIVITY_TIME)?.parse().ok()?,
            expiration: Expiration::parse(&session.get(keys::EXPIRATION_DATE)?)?,
        })
    }
}
