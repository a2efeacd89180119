//! Seams between the presenters and their collaborators.

mod catalog;
mod connectivity;
mod images;
mod navigator;

pub use catalog::Catalog;
pub use connectivity::Connectivity;
pub use images::ImageLoader;
pub use navigator::Navigator;
