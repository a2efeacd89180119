//! marquee-core - Core types, parser and presenters for the marquee movie browser.
//!
//! This crate is toolkit independent: it turns catalog responses into
//! [`MovieRecord`] values and turns records into row and detail views. The
//! network side lives in `marquee-tmdb`, the terminal front end in `marquee-cli`.
//!
//! # Example
//!
//! ```
//! use marquee_core::parse::extract_movies;
//! use marquee_core::present::MovieList;
//!
//! let body = r#"{"results":[{"title":"Test Movie","vote_average":7.5}]}"#;
//! let movies = extract_movies(Some(body)).unwrap();
//!
//! let mut list = MovieList::default();
//! list.replace(movies);
//! assert_eq!(list.len(), 1);
//! assert_eq!(list.bind(0).unwrap().title, "Test Movie");
//! ```

pub mod error;
pub mod parse;
pub mod present;
pub mod traits;
pub mod types;

pub use error::Error;
pub use traits::{Catalog, Connectivity, ImageLoader, Navigator};
pub use types::{CatalogUrl, ImageBaseUrl, MovieRecord, PosterSize, SortMode};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
