//! Poster requests and load states.

use serde::Serialize;

use crate::types::{ImageBaseUrl, PosterSize};

/// Shown while a poster is being fetched.
pub const POSTER_PLACEHOLDER: &str = "[loading poster]";

/// Shown when a poster could not be fetched.
pub const POSTER_ERROR: &str = "[poster unavailable]";

/// What a view hands to the image loader for one poster slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PosterRequest {
    pub url: String,
    #[serde(skip)]
    pub size: PosterSize,
    pub placeholder: &'static str,
    pub error_image: &'static str,
}

impl PosterRequest {
    pub fn new(images: &ImageBaseUrl, size: PosterSize, poster_path: &str) -> Self {
        Self {
            url: images.poster_url(size, poster_path),
            size,
            placeholder: POSTER_PLACEHOLDER,
            error_image: POSTER_ERROR,
        }
    }

    /// The state a slot is in before the loader reports back.
    pub fn pending(&self) -> PosterState {
        PosterState::Pending {
            placeholder: self.placeholder,
        }
    }

    pub fn loaded(&self, bytes: usize) -> PosterState {
        PosterState::Loaded {
            url: self.url.clone(),
            bytes,
        }
    }

    pub fn failed(&self, reason: impl Into<String>) -> PosterState {
        PosterState::Failed {
            error_image: self.error_image,
            reason: reason.into(),
        }
    }
}

/// Load state of one poster slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum PosterState {
    Pending { placeholder: &'static str },
    Loaded { url: String, bytes: usize },
    Failed { error_image: &'static str, reason: String },
}

impl PosterState {
    /// Short text to draw in the poster slot.
    pub fn label(&self) -> &str {
        match self {
            PosterState::Pending { placeholder } => placeholder,
            PosterState::Loaded { url, .. } => url,
            PosterState::Failed { error_image, .. } => error_image,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_states() {
        let req = PosterRequest::new(&ImageBaseUrl::default(), PosterSize::W185, "/p.jpg");
        assert_eq!(req.pending().label(), POSTER_PLACEHOLDER);
        assert_eq!(req.failed("404").label(), POSTER_ERROR);
        assert_eq!(
            req.loaded(10).label(),
            "https://image.tmdb.org/t/p/w185/p.jpg"
        );
    }
}
