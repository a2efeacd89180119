//! Catalog and image base URL types.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use url::Url;

use crate::error::{Error, InvalidInputError};
use crate::types::SortMode;

/// Default catalog API base.
pub const DEFAULT_CATALOG_URL: &str = "https://api.themoviedb.org/3/";

/// Default poster image base.
pub const DEFAULT_IMAGE_URL: &str = "https://image.tmdb.org/t/p/";

/// A validated catalog service base URL.
///
/// Must use HTTPS, or HTTP for localhost. The stored form always ends in a
/// slash so endpoint paths can be appended directly.
///
/// # Example
///
/// ```
/// use marquee_core::{CatalogUrl, SortMode};
///
/// let base = CatalogUrl::new("https://api.themoviedb.org/3").unwrap();
/// assert_eq!(
///     base.movies_url(SortMode::Rating, "KEY"),
///     "https://api.themoviedb.org/3/movie/top_rated?api_key=KEY"
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CatalogUrl(Url);

impl CatalogUrl {
    /// Create a new catalog URL from a string, validating the format.
    pub fn new(s: impl AsRef<str>) -> Result<Self, Error> {
        Ok(Self(parse_base(s.as_ref())?))
    }

    /// Builds the request URL for one sort mode.
    ///
    /// The key is appended verbatim; callers supply it exactly as issued.
    pub fn movies_url(&self, sort: SortMode, api_key: &str) -> String {
        format!("{}{}?api_key={}", self.0.as_str(), sort.endpoint(), api_key)
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn as_url(&self) -> &Url {
        &self.0
    }

    pub fn host(&self) -> Option<&str> {
        self.0.host_str()
    }

    /// Returns the explicit port, or the scheme default.
    pub fn port(&self) -> Option<u16> {
        self.0.port_or_known_default()
    }
}

impl Default for CatalogUrl {
    fn default() -> Self {
        Self(Url::parse(DEFAULT_CATALOG_URL).expect("default catalog URL is valid"))
    }
}

impl fmt::Display for CatalogUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CatalogUrl {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for CatalogUrl {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.0.as_str())
    }
}

impl<'de> Deserialize<'de> for CatalogUrl {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        CatalogUrl::new(&s).map_err(serde::de::Error::custom)
    }
}

/// Poster resolutions served by the image host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PosterSize {
    /// List thumbnail.
    W185,
    /// Detail screen poster.
    W300,
}

impl PosterSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            PosterSize::W185 => "w185",
            PosterSize::W300 => "w300",
        }
    }
}

/// A validated poster image base URL such as `https://image.tmdb.org/t/p/`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ImageBaseUrl(Url);

impl ImageBaseUrl {
    pub fn new(s: impl AsRef<str>) -> Result<Self, Error> {
        Ok(Self(parse_base(s.as_ref())?))
    }

    /// Composes `base + size + poster_path`.
    ///
    /// The poster path is appended as stored, so a record carrying the
    /// "No poster" placeholder yields a URL the image host will reject and
    /// the loader shows its error image.
    pub fn poster_url(&self, size: PosterSize, poster_path: &str) -> String {
        format!("{}{}{}", self.0.as_str(), size.as_str(), poster_path)
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Default for ImageBaseUrl {
    fn default() -> Self {
        Self(Url::parse(DEFAULT_IMAGE_URL).expect("default image URL is valid"))
    }
}

impl fmt::Display for ImageBaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ImageBaseUrl {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

fn parse_base(original: &str) -> Result<Url, Error> {
    let mut url = Url::parse(original).map_err(|e| InvalidInputError::CatalogUrl {
        value: original.to_string(),
        reason: e.to_string(),
    })?;

    if url.cannot_be_a_base() {
        return Err(InvalidInputError::CatalogUrl {
            value: original.to_string(),
            reason: "must be an absolute URL".to_string(),
        }
        .into());
    }

    let is_localhost = url
        .host_str()
        .is_some_and(|h| h == "localhost" || h == "127.0.0.1" || h == "[::1]");

    let scheme = url.scheme();
    if scheme != "https" && !(scheme == "http" && is_localhost) {
        return Err(InvalidInputError::CatalogUrl {
            value: original.to_string(),
            reason: "must use HTTPS (HTTP allowed only for localhost)".to_string(),
        }
        .into());
    }

    if url.host_str().is_none() {
        return Err(InvalidInputError::CatalogUrl {
            value: original.to_string(),
            reason: "must have a host".to_string(),
        }
        .into());
    }

    if url.query().is_some() || url.fragment().is_some() {
        return Err(InvalidInputError::CatalogUrl {
            value: original.to_string(),
            reason: "must not carry a query or fragment".to_string(),
        }
        .into());
    }

    // Normalize: endpoint paths are appended, so the base must end in a slash
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }

    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn popular_url_contains_endpoint_and_key() {
        let base = CatalogUrl::default();
        let url = base.movies_url(SortMode::Popularity, "abc123");
        assert_eq!(
            url,
            "https://api.themoviedb.org/3/movie/popular?api_key=abc123"
        );
    }

    #[test]
    fn rating_url_contains_endpoint_and_key() {
        let base = CatalogUrl::default();
        let url = base.movies_url(SortMode::Rating, "abc123");
        assert!(url.contains("/movie/top_rated"));
        assert!(url.ends_with("?api_key=abc123"));
    }

    #[test]
    fn trailing_slash_is_normalized() {
        let with = CatalogUrl::new("https://api.themoviedb.org/3/").unwrap();
        let without = CatalogUrl::new("https://api.themoviedb.org/3").unwrap();
        assert_eq!(with, without);
        assert_eq!(without.as_str(), "https://api.themoviedb.org/3/");
    }

    #[test]
    fn http_allowed_for_localhost_only() {
        assert!(CatalogUrl::new("http://127.0.0.1:8080/3").is_ok());
        assert!(CatalogUrl::new("http://localhost/").is_ok());
        assert!(CatalogUrl::new("http://api.themoviedb.org/3").is_err());
    }

    #[test]
    fn rejects_garbage() {
        assert!(CatalogUrl::new("not a url").is_err());
        assert!(CatalogUrl::new("mailto:someone@example.com").is_err());
        assert!(CatalogUrl::new("https://api.themoviedb.org/3?x=1").is_err());
    }

    #[test]
    fn host_and_port() {
        let base = CatalogUrl::default();
        assert_eq!(base.host(), Some("api.themoviedb.org"));
        assert_eq!(base.port(), Some(443));

        let local = CatalogUrl::new("http://127.0.0.1:9999").unwrap();
        assert_eq!(local.port(), Some(9999));
    }

    #[test]
    fn poster_urls() {
        let images = ImageBaseUrl::default();
        assert_eq!(
            images.poster_url(PosterSize::W185, "/abc.jpg"),
            "https://image.tmdb.org/t/p/w185/abc.jpg"
        );
        assert_eq!(
            images.poster_url(PosterSize::W300, "/abc.jpg"),
            "https://image.tmdb.org/t/p/w300/abc.jpg"
        );
    }
}
