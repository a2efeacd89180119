//! Catalog service trait.

use async_trait::async_trait;

use crate::parse::extract_movies;
use crate::types::{MovieRecord, SortMode};

/// A remote movie catalog.
#[async_trait]
pub trait Catalog: Send + Sync {
    /// Fetch the raw response body for one sort mode.
    ///
    /// Returns `None` when there is no data: a non-200 status, a transport
    /// failure or a malformed request URL. Implementations log the cause.
    async fn fetch_movie_json(&self, sort: SortMode) -> Option<String>;

    /// Fetch and parse movies for one sort mode.
    ///
    /// Follows [`extract_movies`]: `None` when nothing was fetched, an empty
    /// list when the body could not be parsed.
    async fn fetch_movie_data(&self, sort: SortMode) -> Option<Vec<MovieRecord>> {
        let body = self.fetch_movie_json(sort).await;
        extract_movies(body.as_deref())
    }
}
