//! Poster image loading trait.

use async_trait::async_trait;

use crate::present::{PosterRequest, PosterState};

/// Loads poster images on behalf of list rows and the detail screen.
///
/// Caching and concurrency are up to the implementation. The only contract
/// is the outcome: [`PosterState::Loaded`] on success, otherwise
/// [`PosterState::Failed`] carrying the request's error image.
#[async_trait]
pub trait ImageLoader: Send + Sync {
    async fn load(&self, request: &PosterRequest) -> PosterState;
}
