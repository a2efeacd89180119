//! Sort mode type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, InvalidInputError};

/// The ordering criterion that selects which catalog endpoint is queried.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortMode {
    /// Most popular movies (`movie/popular`).
    #[default]
    #[serde(rename = "popular", alias = "popularity", alias = "0")]
    Popularity,
    /// Highest rated movies (`movie/top_rated`).
    #[serde(rename = "top_rated", alias = "rating", alias = "1")]
    Rating,
}

impl SortMode {
    /// Returns the catalog endpoint path, relative to the API base.
    pub fn endpoint(&self) -> &'static str {
        match self {
            SortMode::Popularity => "movie/popular",
            SortMode::Rating => "movie/top_rated",
        }
    }

    /// Returns the preference value used to persist this mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortMode::Popularity => "popular",
            SortMode::Rating => "top_rated",
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SortMode {
    type Err = Error;

    /// Accepts the persisted names plus the legacy indexed values `0` and `1`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "popular" | "popularity" | "0" => Ok(SortMode::Popularity),
            "top_rated" | "rating" | "1" => Ok(SortMode::Rating),
            other => Err(InvalidInputError::SortMode {
                value: other.to_string(),
            }
            .into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints() {
        assert_eq!(SortMode::Popularity.endpoint(), "movie/popular");
        assert_eq!(SortMode::Rating.endpoint(), "movie/top_rated");
    }

    #[test]
    fn parses_names_and_legacy_indices() {
        assert_eq!("popular".parse::<SortMode>().unwrap(), SortMode::Popularity);
        assert_eq!("0".parse::<SortMode>().unwrap(), SortMode::Popularity);
        assert_eq!("top_rated".parse::<SortMode>().unwrap(), SortMode::Rating);
        assert_eq!("1".parse::<SortMode>().unwrap(), SortMode::Rating);
    }

    #[test]
    fn rejects_unknown() {
        assert!("newest".parse::<SortMode>().is_err());
    }

    #[test]
    fn serde_uses_preference_names() {
        let json = serde_json::to_string(&SortMode::Rating).unwrap();
        assert_eq!(json, "\"top_rated\"");
        let mode: SortMode = serde_json::from_str("\"popular\"").unwrap();
        assert_eq!(mode, SortMode::Popularity);
    }

    #[test]
    fn serde_accepts_legacy_indices() {
        let mode: SortMode = serde_json::from_str("\"1\"").unwrap();
        assert_eq!(mode, SortMode::Rating);
        let mode: SortMode = serde_json::from_str("\"0\"").unwrap();
        assert_eq!(mode, SortMode::Popularity);
        let mode: SortMode = serde_json::from_str("\"rating\"").unwrap();
        assert_eq!(mode, SortMode::Rating);
    }
}
