//! `PageScraper`: a url to fetch, and text extraction over any HTML

use crate::errors::ScrapeError;
use crate::extraction::extract_texts;
use crate::networking::{ClientOptions, HttpClient, ReqwestClient};
use log::debug;

/// Fetches one page and extracts text from HTML by CSS selector
///
/// # Example
/// ```no_run
/// use page_scraper::PageScraper;
/// let scraper = PageScraper::new("https://example.com").unwrap();
/// let html = scraper.fetch().unwrap();
/// for title in scraper.parse(&html, "h1") {
///     println!("{}", title);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct PageScraper<C = ReqwestClient> {
    url: String,
    client: C,
}

impl PageScraper<ReqwestClient> {
    /// Scraper for `url` using reqwest with default settings
    ///
    /// The url is stored as given. Only an empty url is rejected.
    pub fn new(url: impl Into<String>) -> Result<Self, ScrapeError> {
        Self::with_client(url, ReqwestClient::default())
    }

    pub fn with_options(url: impl Into<String>, options: ClientOptions) -> Result<Self, ScrapeError> {
        Self::with_client(url, ReqwestClient::new(options))
    }
}

impl<C: HttpClient> PageScraper<C> {
    /// Scraper for `url` that fetches through `client`
    pub fn with_client(url: impl Into<String>, client: C) -> Result<Self, ScrapeError> {
        let url = url.into();
        if url.is_empty() {
            return Err(ScrapeError::InvalidArgument(
                "url must not be empty".to_string(),
            ));
        }
        Ok(Self { url, client })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// GET the url once and return the body as text
    ///
    /// # Errors
    /// * [`ScrapeError::HttpError`] for any status other than 200
    /// * [`ScrapeError::NetworkError`] when no response was received
    pub fn fetch(&self) -> Result<String, ScrapeError> {
        let response = self.client.get(&self.url)?;
        if response.status != 200 {
            debug!("{} answered {}", self.url, response.status);
            return Err(ScrapeError::HttpError {
                status: response.status,
            });
        }
        Ok(response.body)
    }

    /// Trimmed text of every element of `html` matching `selector`
    ///
    /// `html` does not have to come from [`fetch`](Self::fetch). Malformed
    /// markup, empty input and unparseable selectors all give an empty Vec.
    pub fn parse(&self, html: &str, selector: &str) -> Vec<String> {
        extract_texts(html, selector)
    }
}
