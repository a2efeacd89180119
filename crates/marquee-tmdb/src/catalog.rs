//! TMDB catalog implementation.

use std::fmt;

use async_trait::async_trait;
use tracing::{info, instrument};

use marquee_core::traits::Catalog;
use marquee_core::{CatalogUrl, SortMode};

use crate::client::CatalogClient;

/// The Movie Database, queried over its v3 REST API.
#[derive(Clone)]
pub struct TmdbCatalog {
    client: CatalogClient,
    base: CatalogUrl,
    api_key: String,
}

impl TmdbCatalog {
    pub fn new(base: CatalogUrl, api_key: impl Into<String>) -> Self {
        Self {
            client: CatalogClient::new(),
            base,
            api_key: api_key.into(),
        }
    }

    pub fn base(&self) -> &CatalogUrl {
        &self.base
    }

    /// The request URL for one sort mode, API key included.
    pub fn request_url(&self, sort: SortMode) -> String {
        self.base.movies_url(sort, &self.api_key)
    }
}

impl fmt::Debug for TmdbCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TmdbCatalog")
            .field("base", &self.base)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

#[async_trait]
impl Catalog for TmdbCatalog {
    #[instrument(skip(self), fields(base = %self.base))]
    async fn fetch_movie_json(&self, sort: SortMode) -> Option<String> {
        info!(sort = %sort, "Fetching movies");
        self.client.fetch(&self.request_url(sort)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_urls() {
        let catalog = TmdbCatalog::new(CatalogUrl::default(), "k3y");
        assert_eq!(
            catalog.request_url(SortMode::Popularity),
            "https://api.themoviedb.org/3/movie/popular?api_key=k3y"
        );
        assert_eq!(
            catalog.request_url(SortMode::Rating),
            "https://api.themoviedb.org/3/movie/top_rated?api_key=k3y"
        );
    }

    #[test]
    fn debug_hides_key() {
        let catalog = TmdbCatalog::new(CatalogUrl::default(), "k3y");
        assert!(!format!("{catalog:?}").contains("k3y"));
    }
}
