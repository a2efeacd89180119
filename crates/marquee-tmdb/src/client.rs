//! Catalog HTTP client.

use std::time::Duration;

use reqwest::StatusCode;
use tracing::{debug, error, instrument, trace};

use marquee_core::Error;
use marquee_core::error::InvalidInputError;

use crate::error::transport_error;

/// How long to wait for a connection to the catalog.
pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(15);

/// How long to wait between reads once connected.
pub const READ_TIMEOUT: Duration = Duration::from_secs(10);

/// Plain GET client for catalog requests.
///
/// One request, no retries. The connection goes back to the pool (or is
/// closed) when the response is dropped, whichever way the request ends.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    client: reqwest::Client,
}

impl CatalogClient {
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .user_agent(concat!("marquee/", env!("CARGO_PKG_VERSION")))
            .connect_timeout(CONNECT_TIMEOUT)
            .read_timeout(READ_TIMEOUT)
            .build()
            .expect("failed to build HTTP client");

        Self { client }
    }

    /// GET `url` and return the body text, or the reason there is none.
    ///
    /// Only HTTP 200 counts as success. The body is decoded as UTF-8, with
    /// invalid sequences replaced.
    #[instrument(skip(self, url), fields(url = %redact(url)))]
    pub async fn try_fetch(&self, url: &str) -> Result<String, Error> {
        let parsed = reqwest::Url::parse(url).map_err(|e| InvalidInputError::CatalogUrl {
            value: redact(url),
            reason: e.to_string(),
        })?;

        debug!("Catalog request");
        let response = self.client.get(parsed).send().await.map_err(transport_error)?;

        let status = response.status();
        trace!(status = %status, "Catalog response");
        if status != StatusCode::OK {
            return Err(Error::Status {
                status: status.as_u16(),
            });
        }

        let bytes = response.bytes().await.map_err(transport_error)?;
        debug!(bytes = bytes.len(), "Catalog body read");
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    /// GET `url`, logging any failure and returning `None` in its place.
    pub async fn fetch(&self, url: &str) -> Option<String> {
        match self.try_fetch(url).await {
            Ok(body) => Some(body),
            Err(Error::Status { status }) => {
                error!(status, url = %redact(url), "Error response code");
                None
            }
            Err(e) => {
                error!(error = %e, url = %redact(url), "Problem retrieving the JSON results");
                None
            }
        }
    }
}

impl Default for CatalogClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Drops the query string so the API key never reaches the logs.
fn redact(url: &str) -> String {
    match url.split_once('?') {
        Some((path, _)) => format!("{path}?<redacted>"),
        None => url.to_string(),
    }
}
