//! Reachability probe.

use std::time::Duration;

use async_trait::async_trait;
use tokio::net::TcpStream;
use tokio::time::timeout;
use tracing::{debug, warn};

use marquee_core::CatalogUrl;
use marquee_core::traits::Connectivity;

/// Default probe timeout.
pub const PROBE_TIMEOUT: Duration = Duration::from_secs(3);

/// Considers the network usable if a TCP connection to the catalog host opens.
#[derive(Debug, Clone)]
pub struct TcpProbe {
    host: String,
    port: u16,
    timeout: Duration,
}

impl TcpProbe {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            timeout: PROBE_TIMEOUT,
        }
    }

    /// Probe the host and port a catalog URL points at.
    pub fn for_catalog(base: &CatalogUrl) -> Self {
        let host = base
            .host()
            .unwrap_or_default()
            .trim_start_matches('[')
            .trim_end_matches(']');
        Self::new(host, base.port().unwrap_or(443))
    }
}

#[async_trait]
impl Connectivity for TcpProbe {
    async fn is_connected(&self) -> bool {
        let target = (self.host.as_str(), self.port);
        match timeout(self.timeout, TcpStream::connect(target)).await {
            Ok(Ok(_)) => {
                debug!(host = %self.host, port = self.port, "Catalog host reachable");
                true
            }
            Ok(Err(e)) => {
                warn!(host = %self.host, port = self.port, error = %e, "Catalog host unreachable");
                false
            }
            Err(_) => {
                warn!(host = %self.host, port = self.port, "Connectivity probe timed out");
                false
            }
        }
    }
}
