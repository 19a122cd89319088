//! Utility functions for HTML processing and shared helpers

use crate::errors::ScrapeError;
use scraper::Selector;

/// Creates a selector from provided string
///
/// Internal utility function for parsing CSS selectors.
#[inline(always)]
pub(crate) fn make_selector(
    selector: &str,
) -> Result<Selector, scraper::error::SelectorErrorKind<'_>> {
    Selector::parse(selector)
}

/// Like [`make_selector`] but with the parse failure turned into a [`ScrapeError`]
pub(crate) fn safe_selector(selector: &str) -> Result<Selector, ScrapeError> {
    make_selector(selector)
        .map_err(|e| ScrapeError::SelectorError(format!("`{}`: {}", selector, e)))
}

/// Macro to select raw text from HTML document
#[macro_export]
macro_rules! select_raw_text {
    ($document:expr, $selector:expr) => {
        $document
            .select($selector)
            .map(|elem| elem.text().collect::<String>().trim().to_string())
    };
}
/// Macro to select text from HTML document, returning a Vec of every match
#[macro_export]
macro_rules! select_text {
    ($document:expr, $selector:expr) => {{ $crate::select_raw_text!($document, $selector).collect::<Vec<String>>() }};
}
