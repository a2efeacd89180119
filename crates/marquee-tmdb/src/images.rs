//! HTTP poster loader.

use async_trait::async_trait;
use reqwest::StatusCode;
use tracing::{debug, warn};

use marquee_core::present::{PosterRequest, PosterState};
use marquee_core::traits::ImageLoader;

use crate::client::{CONNECT_TIMEOUT, READ_TIMEOUT};

/// Downloads posters and reports their size. Nothing is cached.
#[derive(Debug, Clone)]
pub struct HttpImageLoader {
    client: reqwest::Client,
}

impl HttpImageLoader {
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .user_agent(concat!("marquee/", env!("CARGO_PKG_VERSION")))
            .connect_timeout(CONNECT_TIMEOUT)
            .read_timeout(READ_TIMEOUT)
            .build()
            .expect("failed to build HTTP client");

        Self { client }
    }
}

impl Default for HttpImageLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ImageLoader for HttpImageLoader {
    async fn load(&self, request: &PosterRequest) -> PosterState {
        let response = match self.client.get(&request.url).send().await {
            Ok(response) => response,
            Err(e) => {
                warn!(url = %request.url, error = %e, "Poster request failed");
                return request.failed(e.to_string());
            }
        };

        if response.status() != StatusCode::OK {
            warn!(url = %request.url, status = %response.status(), "Poster not available");
            return request.failed(format!("HTTP {}", response.status().as_u16()));
        }

        match response.bytes().await {
            Ok(bytes) => {
                debug!(url = %request.url, bytes = bytes.len(), "Poster loaded");
                request.loaded(bytes.len())
            }
            Err(e) => {
                warn!(url = %request.url, error = %e, "Poster download interrupted");
                request.failed(e.to_string())
            }
        }
    }
}
