//! HTTP capability used by `PageScraper`, plus its configuration
pub mod blocking;

use crate::errors::ScrapeError;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Status and decoded body of a single GET
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Anything that can perform a blocking GET by url
///
/// Implementations must return `Ok` whenever a response was received,
/// whatever its status, and [`ScrapeError::NetworkError`] when none was.
pub trait HttpClient {
    fn get(&self, url: &str) -> Result<HttpResponse, ScrapeError>;
}

impl<T: HttpClient + ?Sized> HttpClient for &T {
    fn get(&self, url: &str) -> Result<HttpResponse, ScrapeError> {
        (**self).get(url)
    }
}

/// Settings for the reqwest client. Unset fields keep reqwest's defaults.
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct ClientOptions {
    pub user_agent: Option<String>,
    pub timeout_secs: Option<u64>,
    /// Ignore proxies from the environment
    pub no_proxy: bool,
}

impl ClientOptions {
    /// Read options from a JSON file
    ///
    /// # Example
    /// ```no_run
    /// use page_scraper::networking::ClientOptions;
    /// let options = ClientOptions::from_file("scraper.json").unwrap();
    /// ```
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ScrapeError> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self, ScrapeError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}
