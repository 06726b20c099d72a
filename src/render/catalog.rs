//! Translation catalog.
//!
//! Strings are looked up by language, then by the default language, then
//! fall back to the key itself so a missing translation is visible but harmless.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::I18nConfig;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("IO error reading catalog: {0}")]
    Io(#[from] std::io::Error),

    #[error("catalog parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

const EN: &[(&str, &str)] = &[
    ("site_name", "Emergency Note"),
    ("index_page_title", "Leave an emergency note"),
    ("index_page_lead", "Write a note that is delivered to the people you choose if you stop checking in."),
    ("button_start", "Start"),
    ("start_page_title", "Compose your note"),
    ("start_label_subject", "Subject"),
    ("start_label_note", "Note"),
    ("start_label_primary_email", "Recipient email"),
    ("start_label_secondary_email", "Second recipient email (optional)"),
    ("start_label_inactivity_time", "Days of inactivity before delivery"),
    ("start_label_expiration_date", "Expiration date (optional)"),
    ("button_review", "Review"),
    ("review_page_title", "Review your note"),
    ("review_page_information_1", "Your note \"{subject}\" reads: {note}"),
    ("review_page_information_2", "It will be delivered to {primary_email}."),
    ("review_page_information_3_a", "A copy will also be delivered to {secondary_email}."),
    ("review_page_information_3_b", "No second recipient has been set."),
    ("review_page_information_4_a", "Delivery happens after 1 day without activity."),
    ("review_page_information_4_b", "Delivery happens after {inactivity_time} days without activity."),
    ("review_page_information_5_a", "The note never expires."),
    ("review_page_information_5_b", "The note expires on {expiration_date}."),
    ("review_page_information_6", "You will periodically be asked to confirm that you are active."),
    ("review_page_information_7", "Once confirmed, the note can no longer be changed."),
    ("button_confirm", "Confirm"),
    ("done_page_title", "Your note is set"),
    ("done_page_information", "Thank you. Your emergency note has been confirmed."),
];

/// Localized strings keyed by language, then by string key.
#[derive(Debug, Clone)]
pub struct Catalog {
    default_language: String,
    tables: HashMap<String, HashMap<String, String>>,
}

impl Catalog {
    /// Catalog holding only the built-in English strings.
    pub fn builtin(default_language: &str) -> Self {
        let en = EN
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        let mut tables = HashMap::new();
        tables.insert("en".to_string(), en);
        Self {
            default_language: default_language.to_lowercase(),
            tables,
        }
    }

    /// Built-in strings extended by the configured catalog file, if any.
    pub fn load(config: &I18nConfig) -> Result<Self, CatalogError> {
        let mut catalog = Self::builtin(&config.default_language);
        if let Some(path) = &config.catalog_path {
            let content = fs::read_to_string(Path::new(path))?;
            catalog.merge_toml(&content)?;
            tracing::info!(path = %path, languages = catalog.tables.len(), "Translation catalog loaded");
        }
        Ok(catalog)
    }

    /// Merge `[lang] key = "text"` tables over the current strings.
    pub fn merge_toml(&mut self, content: &str) -> Result<(), toml::de::Error> {
        let parsed: HashMap<String, HashMap<String, String>> = toml::from_str(content)?;
        for (language, strings) in parsed {
            self.tables
                .entry(language.to_lowercase())
                .or_default()
                .extend(strings);
        }
        Ok(())
    }

    pub fn knows(&self, language: &str) -> bool {
        self.tables.contains_key(&language.to_lowercase())
    }

    /// Session choice first, then the browser's preference, then the default.
    pub fn pick_language(&self, session_choice: Option<&str>, accept_language: Option<&str>) -> String {
        if let Some(lang) = session_choice.filter(|l| self.knows(l)) {
            return lang.to_lowercase();
        }
        accept_language
            .into_iter()
            .flat_map(|header| header.split(','))
            .filter_map(|part| part.split(';').next())
            .map(|tag| tag.trim())
            .filter_map(|tag| tag.split('-').next())
            .find(|primary| self.knows(primary))
            .map(str::to_lowercase)
            .unwrap_or_else(|| self.default_language.clone())
    }

    pub fn text<'a>(&'a self, language: &str, key: &'a str) -> &'a str {
        self.lookup(language, key)
            .or_else(|| self.lookup(&self.default_language, key))
            .or_else(|| self.lookup("en", key))
            .unwrap_or(key)
    }

    fn lookup(&self, language: &str, key: &str) -> Option<&str> {
        self.tables
            .get(language)
            .and_then(|table| table.get(key))
            .map(String::as_str)
    }
}
