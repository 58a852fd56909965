// src/services/classifier.rs

//! Availability classification from page text.
//!
//! Classification is a fixed phrase-matching heuristic over the visible
//! text of the page, not a structural parse of any particular shop
//! layout. Unavailability phrases dominate, so any doubt resolves to
//! out of stock.

use scraper::Html;

use crate::models::StockStatus;

/// Phrases suggesting the product can be purchased.
const AVAILABLE_PHRASES: &[&str] = &["add to cart", "buy now", "in stock"];

/// Phrases suggesting the product cannot be purchased.
const UNAVAILABLE_PHRASES: &[&str] = &[
    "out of stock",
    "sold out",
    "currently unavailable",
    "unavailable",
];

/// Which phrase sets matched in a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub found_available: bool,
    pub found_unavailable: bool,
}

impl Classification {
    /// Resolve the matches to a status.
    ///
    /// In stock requires at least one availability phrase and no
    /// unavailability phrase.
    pub fn status(&self) -> StockStatus {
        if self.found_available && !self.found_unavailable {
            StockStatus::InStock
        } else {
            StockStatus::OutOfStock
        }
    }
}

/// Extract visible text from an HTML document.
///
/// Text nodes are trimmed, joined with a single space, and lower-cased
/// so phrase matching is case-insensitive and markup-independent.
pub fn visible_text(html: &str) -> String {
    let document = Html::parse_document(html);
    let parts: Vec<&str> = document
        .root_element()
        .text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect();
    parts.join(" ").to_lowercase()
}

/// Match the phrase sets against already-extracted page text.
pub fn classify_text(text: &str) -> Classification {
    Classification {
        found_available: AVAILABLE_PHRASES.iter().any(|p| text.contains(p)),
        found_unavailable: UNAVAILABLE_PHRASES.iter().any(|p| text.contains(p)),
    }
}

/// Classify a raw HTML page body.
pub fn classify_page(html: &str) -> Classification {
    classify_text(&visible_text(html))
}
