//! Catalog response parsing.
//!
//! Converts the raw body of a `movie/{popular,top_rated}` response into an
//! ordered list of [`MovieRecord`]s. Missing fields are not errors: each one
//! has a documented default.

use serde_json::{Map, Value};
use tracing::{debug, error};

use crate::error::Error;
use crate::types::{MovieRecord, NO_DATE, NO_PLOT, NO_POSTER};

const RESULTS: &str = "results";
const TITLE: &str = "title";
const RELEASE_DATE: &str = "release_date";
const POSTER_PATH: &str = "poster_path";
const VOTE_AVERAGE: &str = "vote_average";
const OVERVIEW: &str = "overview";

/// Extract movies from a catalog response body.
///
/// Returns `None` when there is no body at all (absent or empty text), which
/// is what the fetcher produces for transport failures. A body that is
/// present but structurally wrong yields `Some` of an empty list, after the
/// failure is logged. Callers that only care about "anything to show" can
/// treat both the same way.
pub fn extract_movies(body: Option<&str>) -> Option<Vec<MovieRecord>> {
    let body = body.filter(|b| !b.is_empty())?;

    match parse_results(body) {
        Ok(movies) => {
            debug!(count = movies.len(), "Parsed catalog response");
            Some(movies)
        }
        Err(e) => {
            error!(error = %e, "Problem parsing the JSON results");
            Some(Vec::new())
        }
    }
}

/// Strict variant of [`extract_movies`] that surfaces structural failures.
///
/// Either every element of `results` becomes a record, or an error is
/// returned; a prefix of the array is never produced.
pub fn parse_results(body: &str) -> Result<Vec<MovieRecord>, Error> {
    let root: Value = serde_json::from_str(body)?;

    let results = root
        .as_object()
        .ok_or_else(|| parse_error("top-level value is not an object"))?
        .get(RESULTS)
        .ok_or_else(|| parse_error("missing \"results\""))?
        .as_array()
        .ok_or_else(|| parse_error("\"results\" is not an array"))?;

    results
        .iter()
        .enumerate()
        .map(|(index, item)| {
            item.as_object()
                .map(movie_from_object)
                .ok_or_else(|| parse_error(&format!("results[{index}] is not an object")))
        })
        .collect()
}

fn movie_from_object(movie: &Map<String, Value>) -> MovieRecord {
    MovieRecord::new(
        text_field(movie, TITLE).unwrap_or_default(),
        text_field(movie, RELEASE_DATE).unwrap_or_else(|| NO_DATE.to_string()),
        text_field(movie, POSTER_PATH).unwrap_or_else(|| NO_POSTER.to_string()),
        number_field(movie, VOTE_AVERAGE),
        text_field(movie, OVERVIEW).unwrap_or_else(|| NO_PLOT.to_string()),
    )
}

/// Reads a field as text; `null` counts as absent.
fn text_field(movie: &Map<String, Value>, key: &str) -> Option<String> {
    match movie.get(key)? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Reads a field as a finite number, accepting numeric strings. Anything
/// else, including `NaN` and infinities, is 0.
fn number_field(movie: &Map<String, Value>, key: &str) -> f64 {
    let value = match movie.get(key) {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    };
    value.filter(|v: &f64| v.is_finite()).unwrap_or_default()
}

fn parse_error(message: &str) -> Error {
    Error::Parse {
        message: message.to_string(),
    }
}
