//! HTTP fetch-and-parse primitive
//!
//! Given a URL, return the parsed element view of the page or a
//! [`FetchError`]. Fetch failures are the only errors the crawl engine
//! tolerates: the URL is recorded dead and that traversal branch stops.

use crate::crawler::page::{parse_page, ParsedPage};
use crate::FetchError;
use reqwest::Client;
use std::time::Duration;

/// Builds the HTTP client shared by all crawl tasks
///
/// Redirects are followed by the client; hrefs are resolved against the final
/// response URL.
pub fn build_http_client() -> Result<Client, reqwest::Error> {
    let user_agent = format!(
        "{}/{}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    );

    Client::builder()
        .user_agent(user_agent)
        .timeout(Duration::from_secs(30))
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a URL and parses the response body into a [`ParsedPage`]
///
/// # Errors
///
/// * [`FetchError::Request`] - transport failure (connect, timeout, TLS,
///   malformed URL)
/// * [`FetchError::Status`] - non-success HTTP status
pub async fn fetch_page(client: &Client, url: &str) -> Result<ParsedPage, FetchError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|source| FetchError::Request {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    // Base for href resolution is the final URL after redirects.
    let base_url = response.url().clone();

    let body = response
        .text()
        .await
        .map_err(|source| FetchError::Request {
            url: url.to_string(),
            source,
        })?;

    Ok(parse_page(&body, &base_url))
}
