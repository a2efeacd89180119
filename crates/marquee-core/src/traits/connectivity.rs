//! Network status trait.

use async_trait::async_trait;

/// Answers "is the network usable right now?" before a fetch is attempted.
#[async_trait]
pub trait Connectivity: Send + Sync {
    async fn is_connected(&self) -> bool;
}
