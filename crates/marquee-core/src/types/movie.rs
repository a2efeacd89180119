//! Movie record type.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Error, InvalidInputError};

/// Placeholder stored when a movie has no release date.
pub const NO_DATE: &str = "No date";

/// Placeholder stored when a movie has no poster path.
pub const NO_POSTER: &str = "No poster";

/// Placeholder stored when a movie has no overview.
pub const NO_PLOT: &str = "No plot";

/// One movie's displayable fields.
///
/// Records carry no identifier: a record is addressed by its position in the
/// list it was parsed into, and that position is not stable across refreshes.
/// Records are never mutated after construction; handing one to another
/// screen clones it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieRecord {
    title: String,
    release_date: String,
    poster_path: String,
    vote_average: f64,
    overview: String,
}

impl MovieRecord {
    /// Create a new record from already-defaulted field values.
    pub fn new(
        title: impl Into<String>,
        release_date: impl Into<String>,
        poster_path: impl Into<String>,
        vote_average: f64,
        overview: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            release_date: release_date.into(),
            poster_path: poster_path.into(),
            vote_average,
            overview: overview.into(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Release date as stored, normally `YYYY-MM-DD` or [`NO_DATE`].
    pub fn release_date(&self) -> &str {
        &self.release_date
    }

    /// Poster path suffix such as `/abc.jpg`, or [`NO_POSTER`].
    pub fn poster_path(&self) -> &str {
        &self.poster_path
    }

    pub fn vote_average(&self) -> f64 {
        self.vote_average
    }

    pub fn overview(&self) -> &str {
        &self.overview
    }

    /// Wrap this record for hand-off to another screen.
    pub fn to_transfer(&self) -> Result<Transfer, Error> {
        let json = serde_json::to_string(self).map_err(|e| InvalidInputError::Transfer {
            reason: e.to_string(),
        })?;
        Ok(Transfer(json))
    }
}

/// A by-value, serialized form of a [`MovieRecord`].
///
/// The contents are opaque to the receiving screen; only
/// [`Transfer::unwrap_record`] is meant to look inside.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transfer(String);

impl Transfer {
    /// Accept a transfer token produced elsewhere (e.g. passed on a command line).
    pub fn from_token(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Returns the token text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Decode the record carried by this transfer.
    pub fn unwrap_record(&self) -> Result<MovieRecord, Error> {
        serde_json::from_str(&self.0).map_err(|e| {
            InvalidInputError::Transfer {
                reason: e.to_string(),
            }
            .into()
        })
    }
}

impl fmt::Display for Transfer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> MovieRecord {
        MovieRecord::new("Heat", "1995-12-15", "/heat.jpg", 7.9, "A heist.")
    }

    #[test]
    fn transfer_carries_every_field() {
        let record = sample();
        let transfer = record.to_transfer().unwrap();
        assert_eq!(transfer.unwrap_record().unwrap(), record);
    }

    #[test]
    fn transfer_is_a_copy() {
        let record = sample();
        let copy = record.to_transfer().unwrap().unwrap_record().unwrap();
        drop(record);
        assert_eq!(copy.title(), "Heat");
    }

    #[test]
    fn garbage_token_is_rejected() {
        let transfer = Transfer::from_token("not a movie");
        let err = transfer.unwrap_record().unwrap_err();
        assert!(err.to_string().contains("invalid movie transfer"));
    }
}
