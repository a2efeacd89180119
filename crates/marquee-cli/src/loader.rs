//! Background movie loader.

use std::sync::Arc;

use tracing::{debug, error};

use marquee_core::traits::Catalog;
use marquee_core::{MovieRecord, SortMode};

/// Runs one fetch-and-parse on a background task and hands back its result.
///
/// A loader task that panics or is cancelled counts as "no data".
pub async fn load(catalog: Arc<dyn Catalog>, sort: SortMode) -> Option<Vec<MovieRecord>> {
    debug!(sort = %sort, "Starting movie loader");
    let task = tokio::spawn(async move { catalog.fetch_movie_data(sort).await });

    match task.await {
        Ok(movies) => movies,
        Err(e) => {
            error!(error = %e, "Movie loader did not finish");
            None
        }
    }
}
