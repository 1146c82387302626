//! Get Last Updated
//!
//! Fetches a container image tag's metadata document and returns its
//! `last_updated` field.
//!
//! Decoding is lenient: a body that is not a JSON object, or that lacks a
//! string `last_updated`, yields an empty value rather than an error. Only
//! transport failures are reported as errors.

pub mod cli;
pub mod error;
pub mod extract;
pub mod fetch;

use error::Result;
use reqwest::Client;

/// Fetches `url` and extracts `last_updated` from the response body.
pub async fn run(client: &Client, url: &str) -> Result<String> {
    let body = fetch::fetch_body(client, url).await?;
    Ok(extract::last_updated(&body))
}
