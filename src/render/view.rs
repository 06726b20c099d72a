//! Confirmation view selection.
//!
//! The review page only ever sees a `DraftNote`, so it can only be built
//! after the review step advanced.

use crate::render::catalog::Catalog;
use crate::render::escape_html;
use crate::workflow::{DraftNote, Expiration};

/// Catalog keys for the confirmation list, in display order.
pub fn review_item_keys(draft: &DraftNote) -> [&'static str; 7] {
    [
        "review_page_information_1",
        "review_page_information_2",
        if draft.secondary_email.is_some() {
            "review_page_information_3_a"
        } else {
            "review_page_information_3_b"
        },
        if draft.inactivity_days == 1 {
            "review_page_information_4_a"
        } else {
            "review_page_information_4_b"
        },
        match draft.expiration {
            Expiration::Never => "review_page_information_5_a",
            Expiration::On(_) => "review_page_information_5_b",
        },
        "review_page_information_6",
        "review_page_information_7",
    ]
}

/// Everything the review page needs, already escaped.
#[derive(Debug, Clone)]
pub struct ReviewView {
    pub language: String,
    pub title: String,
    pub items: Vec<String>,
    pub confirm_label: String,
    pub csrf_token: String,
}

impl ReviewView {
    pub fn new(catalog: &Catalog, language: &str, draft: &DraftNote, csrf_token: &str) -> Self {
        let inactivity = draft.inactivity_days.to_string();
        let expiration = draft.expiration.to_string();
        let values = [
            ("subject", draft.subject.as_str()),
            ("note", draft.note.as_str()),
            ("primary_email", draft.primary_email.as_str()),
            ("secondary_email", draft.secondary_email.as_deref().unwrap_or_default()),
            ("inactivity_time", inactivity.as_str()),
            ("expiration_date", expiration.as_str()),
        ];

        let items = review_item_keys(draft)
            .iter()
            .map(|key| fill(catalog.text(language, key), &values))
            .collect();

        Self {
            language: language.to_string(),
            title: escape_html(catalog.text(language, "review_page_title")),
            items,
            confirm_label: escape_html(catalog.text(language, "button_confirm")),
            csrf_token: escape_html(csrf_token),
        }
    }
}

/// Escape `template`, then replace `{name}` placeholders with escaped values.
pub fn fill(template: &str, values: &[(&str, &str)]) -> String {
    values
        .iter()
        .fold(escape_html(template), |text, (name, value)| {
            text.replace(&format!("{{{}}}", name), &escape_html(value))
        })
}
