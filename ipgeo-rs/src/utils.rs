use reqwest::{Client, StatusCode};

#[cfg(feature = "tracing")]
use tracing::{debug, info, instrument, warn};

/// Status and body of a response that was fully received.
#[derive(Debug)]
pub struct RawResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

/// Issues a single GET and reads the whole body. Only transport failures are errors;
/// any HTTP status is returned to the caller to judge.
#[cfg_attr(feature = "tracing", instrument(skip(client)))]
pub async fn get_raw(client: &Client, url: &str) -> Result<RawResponse, reqwest::Error> {
    #[cfg(feature = "tracing")]
    debug!(%url, "Sending lookup request");

    let res = client
        .get(url)
        .header("Accept", "application/json")
        .send()
        .await?;

    let status = res.status();
    let body = res.bytes().await?.to_vec();

    if status.is_success() {
        #[cfg(feature = "tracing")]
        info!(status = ?status, bytes = body.len(), "Lookup request successful");
    } else {
        #[cfg(feature = "tracing")]
        warn!(status = ?status, body = %String::from_utf8_lossy(&body), "Lookup service returned error");
    }

    Ok(RawResponse { status, body })
}
