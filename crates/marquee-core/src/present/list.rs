//! List presenter.

use serde::Serialize;
use tracing::{debug, warn};

use crate::Result;
use crate::traits::Navigator;
use crate::types::{ImageBaseUrl, MovieRecord, PosterSize};

use super::navigate::Route;
use super::poster::PosterRequest;

/// Rendered state of one list row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RowView {
    pub position: usize,
    pub title: String,
    pub poster: PosterRequest,
}

impl RowView {
    /// Builds the row for `record` at `position`.
    pub fn bind(record: &MovieRecord, position: usize, images: &ImageBaseUrl) -> Self {
        Self {
            position,
            title: record.title().to_string(),
            poster: PosterRequest::new(images, PosterSize::W185, record.poster_path()),
        }
    }
}

/// The ordered collection behind the movie list.
///
/// The only supported mutation is wholesale replacement: the collection
/// always mirrors one catalog response, or nothing.
#[derive(Debug, Clone, Default)]
pub struct MovieList {
    movies: Vec<MovieRecord>,
    images: ImageBaseUrl,
}

impl MovieList {
    pub fn new(images: ImageBaseUrl) -> Self {
        Self {
            movies: Vec::new(),
            images,
        }
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    pub fn get(&self, position: usize) -> Option<&MovieRecord> {
        self.movies.get(position)
    }

    pub fn movies(&self) -> &[MovieRecord] {
        &self.movies
    }

    /// Clears the collection, then takes `movies` as its new contents.
    pub fn replace(&mut self, movies: Vec<MovieRecord>) {
        self.movies = movies;
        debug!(count = self.movies.len(), "Movie list replaced");
    }

    pub fn clear(&mut self) {
        self.movies.clear();
    }

    /// Binds the row at `position`, or `None` past the end.
    pub fn bind(&self, position: usize) -> Option<RowView> {
        self.movies
            .get(position)
            .map(|record| RowView::bind(record, position, &self.images))
    }

    /// All rows, in list order.
    pub fn rows(&self) -> impl Iterator<Item = RowView> + '_ {
        self.movies
            .iter()
            .enumerate()
            .map(|(position, record)| RowView::bind(record, position, &self.images))
    }

    /// Routes a tap on `position` to the detail screen.
    ///
    /// The navigator receives its own copy of the record. Returns `Ok(None)`
    /// when the position does not name a row.
    pub fn tap(&self, position: usize, navigator: &mut dyn Navigator) -> Result<Option<Route>> {
        let Some(record) = self.movies.get(position) else {
            warn!(position, count = self.movies.len(), "Tap outside the list");
            return Ok(None);
        };

        navigator.show_detail(record.clone()).map(Some)
    }
}
