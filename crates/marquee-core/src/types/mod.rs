//! Core value types.
//!
//! URL types enforce their invariants at construction time, so request and
//! image URLs built from them are always absolute.

mod catalog_url;
mod movie;
mod sort_mode;

pub use catalog_url::{
    CatalogUrl, DEFAULT_CATALOG_URL, DEFAULT_IMAGE_URL, ImageBaseUrl, PosterSize,
};
pub use movie::{MovieRecord, NO_DATE, NO_PLOT, NO_POSTER, Transfer};
pub use sort_mode::SortMode;
