//! Well-known session keys and values.

pub const CSRF_TOKEN: &str = "csrf_token";
pub const PAGE_TOKEN: &str = "page_token";
pub const LANGUAGE: &str = "language";

pub const SUBJECT: &str = "subject";
pub const NOTE: &str = "note";
pub const PRIMARY_EMAIL: &str = "primary_email";
pub const SECONDARY_EMAIL: &str = "secondary_email";
pub const INACTIVITY_TIME: &str = "inactivity_time";
pub const EXPIRATION_DATE: &str = "expiration_date";

/// Step marker written once the review step accepts a submission.
pub const REVIEW_PAGE_MARKER: &str = "review_page";

/// Stored in place of an optional field the user left out.
pub const NONE_SENTINEL: &str = "none";
