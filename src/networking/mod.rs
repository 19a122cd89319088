//! # networking
//!
//! The HTTP side of the scraper.
//!
//! This module provides:
//! - the [`HttpClient`] capability `PageScraper` fetches through
//! - a reqwest backed implementation built from [`ClientOptions`]
//!
//! ## Usage - Blocking (default)
//!
//! ```no_run
//! use page_scraper::networking::{ClientOptions, HttpClient, ReqwestClient};
//!
//! let client = ReqwestClient::new(ClientOptions::default());
//! let response = client.get("https://example.com").expect("Failed to fetch page");
//! println!("{}: {} bytes", response.status, response.body.len());
//! ```

// Module declarations
pub mod client;

// Re-export commonly used items for convenience
pub use client::blocking::{ReqwestClient, create_client, get_page};
pub use client::{ClientOptions, HttpClient, HttpResponse};

// Re-export types from dependencies for convenience
pub use reqwest::blocking::Client;
