//! Blocking HTTP client implementation backed by reqwest

use super::{ClientOptions, HttpClient, HttpResponse};
use crate::errors::ScrapeError;
use log::debug;
use reqwest::blocking::{Client, Response};

/// Create a reqwest Client from the given options
///
/// Redirects follow reqwest's default policy.
///
/// # Example
/// ```no_run
/// use page_scraper::networking::{ClientOptions, create_client};
/// let client = create_client(&ClientOptions::default()).expect("Failed to create client");
/// ```
pub fn create_client(options: &ClientOptions) -> Result<Client, reqwest::Error> {
    let mut builder = Client::builder();
    if let Some(useragent) = &options.user_agent {
        builder = builder.user_agent(useragent.as_str());
    }
    if let Some(timeout) = options.timeout() {
        builder = builder.timeout(timeout);
    }
    if options.no_proxy {
        builder = builder.no_proxy();
    }
    builder.build()
}

/// Send one GET for `url` with the provided client
///
/// Any received response is returned, whatever its status.
///
/// # Example
/// ```no_run
/// use page_scraper::networking::{ClientOptions, create_client, get_page};
/// let client = create_client(&ClientOptions::default()).unwrap();
/// let response = get_page("https://example.com", &client);
/// ```
pub fn get_page(url: &str, client: &Client) -> Result<Response, reqwest::Error> {
    debug!("GET {}", url);
    let response = client.get(url).send()?;
    debug!("{} -> {}", url, response.status());
    Ok(response)
}

fn into_http_response(response: Response) -> Result<HttpResponse, ScrapeError> {
    let status = response.status();
    if status != reqwest::StatusCode::OK {
        // the body of a failed request is never handed out
        return Ok(HttpResponse::new(status.as_u16(), String::new()));
    }
    Ok(HttpResponse::new(status.as_u16(), response.text()?))
}

impl HttpClient for Client {
    fn get(&self, url: &str) -> Result<HttpResponse, ScrapeError> {
        into_http_response(get_page(url, self)?)
    }
}

/// Default [`HttpClient`]: builds a fresh reqwest Client for every request,
/// so no connection is held between calls.
#[derive(Debug, Clone, Default)]
pub struct ReqwestClient {
    options: ClientOptions,
}

impl ReqwestClient {
    pub fn new(options: ClientOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ClientOptions {
        &self.options
    }
}

impl HttpClient for ReqwestClient {
    fn get(&self, url: &str) -> Result<HttpResponse, ScrapeError> {
        let client = create_client(&self.options)?;
        HttpClient::get(&client, url)
    }
}
