use crate::error::Result;
use log::{debug, warn};
use reqwest::Client;

/// Issues one GET against `url` and reads the whole body.
///
/// The status code is not checked: an error page is returned like any other
/// body and left to the decoder.
pub async fn fetch_body(client: &Client, url: &str) -> Result<Vec<u8>> {
    debug!("GET {}", url);

    let response = client.get(url).send().await?;

    let status = response.status();
    if !status.is_success() {
        warn!("{} answered {}, decoding body anyway", url, status);
    } else {
        debug!("status: {}", status);
    }

    let body = response.bytes().await?;
    debug!("read {} bytes", body.len());

    Ok(body.to_vec())
}
