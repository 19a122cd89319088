//! Selector-based text extraction from arbitrary HTML.
//!
//! Parsing is lenient: malformed markup is turned into whatever tree html5ever
//! can build, so the only failure left is a selector that does not parse.
//!
//! ```rust
//! use page_scraper::extraction::select_texts;
//! let html = "<h1 class=\"title\">A</h1><h1>B</h1>";
//! assert_eq!(select_texts(html, "h1.title").unwrap(), vec!["A"]);
//! ```
use crate::errors::ScrapeError;
use crate::select_text;
use crate::utils::safe_selector;
use log::warn;
use scraper::Html;

/// Text of every element in `html` matching `selector`, in document order
///
/// Each entry is the concatenation of the element's descendant text nodes with
/// entities decoded and surrounding whitespace trimmed.
///
/// # Errors
/// * [`ScrapeError::SelectorError`] when `selector` is not valid CSS
pub fn select_texts(html: &str, selector: &str) -> Result<Vec<String>, ScrapeError> {
    let selector = safe_selector(selector)?;
    // html5ever synthesizes <html><head><body> for empty input
    if html.trim().is_empty() {
        return Ok(Vec::new());
    }
    let document = Html::parse_document(html);
    Ok(select_text!(document, &selector))
}

/// Lenient form of [`select_texts`]: a bad selector matches nothing
pub fn extract_texts(html: &str, selector: &str) -> Vec<String> {
    select_texts(html, selector).unwrap_or_else(|err| {
        warn!("{}", err);
        Vec::new()
    })
}
