//! Field normalization for submitted notes.
//!
//! Every free-text field is tag-stripped first and truncated second, so the
//! length limit counts characters left after markup removal. Email fields are
//! then reduced to the characters an address may contain.

use crate::workflow::review::ReviewForm;

pub const SUBJECT_MAX_CHARS: usize = 100;
pub const NOTE_MAX_CHARS: usize = 1000;
pub const EMAIL_MAX_CHARS: usize = 254;

/// Submitted values after markup removal, truncation and email filtering.
///
/// Nothing here has been checked against the business rules yet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedFields {
    pub subject: String,
    pub note: String,
    pub primary_email: String,
    pub secondary_email: String,
    pub inactivity_time: String,
    /// `None` when the client did not send the field at all.
    pub expiration_date: Option<String>,
}

impl NormalizedFields {
    pub fn from_form(form: &ReviewForm) -> Self {
        let text = |value: &Option<String>, max: usize| {
            truncate_chars(&strip_tags(value.as_deref().unwrap_or_default()), max)
        };
        let email = |value: &Option<String>| sanitize_email(&text(value, EMAIL_MAX_CHARS));

        Self {
            subject: text(&form.subject, SUBJECT_MAX_CHARS),
            note: text(&form.note, NOTE_MAX_CHARS),
            primary_email: email(&form.primary_email),
            secondary_email: email(&form.secondary_email),
            inactivity_time: strip_tags(form.inactivity_time.as_deref().unwrap_or_default())
                .trim()
                .to_string(),
            expiration_date: form.expiration_date.as_ref().map(|d| d.trim().to_string()),
        }
    }
}

/// Remove markup tags, keeping the text between them.
///
/// A `<` followed by whitespace is literal text ("1 < 2"). Quoted attribute
/// values may contain `>`. An unterminated tag swallows the rest of the input.
pub fn strip_tags(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '<' {
            out.push(c);
            continue;
        }
        match chars.peek() {
            Some(next) if next.is_whitespace() => {
                out.push(c);
                continue;
            }
            None => break,
            Some(_) => {}
        }

        let mut quote: Option<char> = None;
        let mut depth = 1usize;
        for c in chars.by_ref() {
            match quote {
                Some(q) if c == q => quote = None,
                Some(_) => {}
                None => match c {
                    '"' | '\'' => quote = Some(c),
                    '<' => depth += 1,
                    '>' => {
                        depth -= 1;
                        if depth == 0 {
                            break;
                        }
                    }
                    _ => {}
                },
            }
        }
    }

    out
}

/// Keep at most `max` characters (Unicode scalar values, not bytes).
pub fn truncate_chars(input: &str, max: usize) -> String {
    match input.char_indices().nth(max) {
        Some((cut, _)) => input[..cut].to_string(),
        None => input.to_string(),
    }
}

/// Drop every character that cannot appear in an email address.
///
/// Not a syntax check: "a@@b" survives untouched.
pub fn sanitize_email(input: &str) -> String {
    input.chars().filter(|c| is_email_char(*c)).collect()
}

fn is_email_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || "!#$%&'*+-=?^_`{|}~@.[]".contains(c)
}
