//! marquee-tmdb - TMDB-backed implementations of the marquee seams.

mod catalog;
mod client;
mod connectivity;
mod error;
mod images;

pub use catalog::TmdbCatalog;
pub use client::{CONNECT_TIMEOUT, CatalogClient, READ_TIMEOUT};
pub use connectivity::TcpProbe;
pub use images::HttpImageLoader;
