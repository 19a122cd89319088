//! # page-scraper
//!
//! Fetch a page and pull out the text of the elements matching a CSS selector.
//!
//! ```no_run
//! use page_scraper::PageScraper;
//!
//! let scraper = PageScraper::new("https://example.com")?;
//! let html = scraper.fetch()?;
//! let titles = scraper.parse(&html, "h1");
//! # Ok::<(), page_scraper::ScrapeError>(())
//! ```
pub mod errors;
pub mod extraction;
pub mod networking;
pub mod page_scraper;
mod utils;

pub use errors::ScrapeError;
pub use networking::{ClientOptions, HttpClient, HttpResponse};
pub use page_scraper::PageScraper;
