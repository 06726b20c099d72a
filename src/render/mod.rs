//! Rendering subsystem.
//!
//! # Data Flow
//! ```text
//! validated session data (DraftNote)
//!     → view.rs (pick catalog keys, substitute escaped values)
//!     → catalog.rs (localized strings)
//!     → pages.rs (HTML)
//! ```
//!
//! # Design Decisions
//! - Reads validated data only; never touches the session directly
//! - All interpolated text is HTML-escaped

pub mod assets;
pub mod catalog;
pub mod pages;
pub mod view;

pub use assets::START_SCRIPT_PATH;
pub use catalog::{Catalog, CatalogError};
pub use view::ReviewView;

/// Escape text for use in HTML element content and quoted attributes.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
