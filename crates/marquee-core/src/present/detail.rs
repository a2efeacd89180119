//! Detail presenter.

use chrono::{Locale, NaiveDate};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use tracing::warn;

use crate::error::{Error, InvalidInputError};
use crate::types::{ImageBaseUrl, MovieRecord, PosterSize};

use super::poster::PosterRequest;

/// Stored release date pattern.
const STORED_DATE_FORMAT: &str = "%Y-%m-%d";

/// Locale used for long-form dates.
///
/// Accepts POSIX-style names (`en_US`, `fr_FR.UTF-8`, `de_DE@euro`); `C` and
/// `POSIX` map to `en_US`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DisplayLocale {
    locale: Locale,
    pattern: &'static str,
}

impl DisplayLocale {
    pub fn new(name: &str) -> Result<Self, Error> {
        let base = name
            .split(['.', '@'])
            .next()
            .unwrap_or_default()
            .replace('-', "_");

        if base.is_empty() || base == "C" || base == "POSIX" {
            return Ok(Self::default());
        }

        let locale = Locale::try_from(base.as_str()).map_err(|_| InvalidInputError::Locale {
            value: name.to_string(),
        })?;

        Ok(Self {
            locale,
            pattern: long_date_pattern(&base),
        })
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }
}

/// strftime pattern for a locale's long date form.
fn long_date_pattern(name: &str) -> &'static str {
    if name == "en_US" {
        return "%B %-d, %Y";
    }
    match name.split('_').next().unwrap_or_default() {
        "de" | "da" | "nb" | "nn" | "fi" | "cs" | "sk" => "%-d. %B %Y",
        "ja" | "zh" => "%Y年%-m月%-d日",
        "ko" => "%Y년 %-m월 %-d일",
        "hu" => "%Y. %B %-d.",
        _ => "%-d %B %Y",
    }
}

impl Default for DisplayLocale {
    fn default() -> Self {
        Self {
            locale: Locale::en_US,
            pattern: long_date_pattern("en_US"),
        }
    }
}

impl FromStr for DisplayLocale {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for DisplayLocale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.locale)
    }
}

/// Reformats a stored `YYYY-MM-DD` date into the locale's long form.
pub fn format_release_date(stored: &str, locale: DisplayLocale) -> Result<String, Error> {
    let date = NaiveDate::parse_from_str(stored, STORED_DATE_FORMAT).map_err(|e| {
        Error::Parse {
            message: format!("release date '{stored}': {e}"),
        }
    })?;

    let midnight = date.and_hms_opt(0, 0, 0).ok_or_else(|| Error::Parse {
        message: format!("release date '{stored}' has no midnight"),
    })?;

    Ok(midnight
        .and_utc()
        .format_localized(locale.pattern, locale.locale)
        .to_string())
}

/// Formats a vote the way a double prints: always with a fractional part.
pub fn format_vote(vote: f64) -> String {
    if vote.is_finite() && vote.fract() == 0.0 && vote.abs() < 1e7 {
        format!("{vote:.1}")
    } else {
        format!("{vote}")
    }
}

/// Rendered state of the detail screen.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailView {
    pub title: String,
    pub vote: String,
    /// Long-form date, or the stored value if it could not be reformatted.
    pub release_date: String,
    pub overview: String,
    pub poster: PosterRequest,
}

impl DetailView {
    pub fn render(record: &MovieRecord, locale: DisplayLocale, images: &ImageBaseUrl) -> Self {
        let release_date = match format_release_date(record.release_date(), locale) {
            Ok(formatted) => formatted,
            Err(e) => {
                warn!(error = %e, title = record.title(), "Could not reformat release date");
                record.release_date().to_string()
            }
        };

        Self {
            title: record.title().to_string(),
            vote: format_vote(record.vote_average()),
            release_date,
            overview: record.overview().to_string(),
            poster: PosterRequest::new(images, PosterSize::W300, record.poster_path()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_movie() -> MovieRecord {
        MovieRecord::new("Test Movie", "2020-01-15", "/abc.jpg", 7.5, "A test plot.")
    }

    #[test]
    fn renders_every_field() {
        let view = DetailView::render(
            &test_movie(),
            DisplayLocale::default(),
            &ImageBaseUrl::default(),
        );

        assert_eq!(view.title, "Test Movie");
        assert_eq!(view.vote, "7.5");
        assert_eq!(view.release_date, "January 15, 2020");
        assert_eq!(view.overview, "A test plot.");
        assert_eq!(view.poster.url, "https://image.tmdb.org/t/p/w300/abc.jpg");
    }

    #[test]
    fn unparseable_date_keeps_stored_value() {
        let movie = MovieRecord::new("X", "No date", "No poster", 0.0, "No plot");
        let view = DetailView::render(&movie, DisplayLocale::default(), &ImageBaseUrl::default());
        assert_eq!(view.release_date, "No date");
        assert_eq!(view.vote, "0.0");
    }

    #[test]
    fn french_long_date() {
        let locale = DisplayLocale::new("fr_FR.UTF-8").unwrap();
        let formatted = format_release_date("2020-01-15", locale).unwrap();
        assert_eq!(formatted, "15 janvier 2020");
    }

    #[test]
    fn german_long_date() {
        let locale = DisplayLocale::new("de_DE").unwrap();
        let formatted = format_release_date("2020-01-15", locale).unwrap();
        assert_eq!(formatted, "15. Januar 2020");
    }

    #[test]
    fn posix_locales_default_to_us_english() {
        assert_eq!(DisplayLocale::new("C").unwrap(), DisplayLocale::default());
        assert_eq!(DisplayLocale::new("POSIX").unwrap(), DisplayLocale::default());
        assert_eq!(DisplayLocale::new("en-US").unwrap(), DisplayLocale::default());
    }

    #[test]
    fn unknown_locale() {
        assert!(DisplayLocale::new("xx_YY").is_err());
    }

    #[test]
    fn bad_dates() {
        let locale = DisplayLocale::default();
        assert!(format_release_date("", locale).is_err());
        assert!(format_release_date("2020-13-01", locale).is_err());
        assert!(format_release_date("15/01/2020", locale).is_err());
    }

    #[test]
    fn votes() {
        assert_eq!(format_vote(7.5), "7.5");
        assert_eq!(format_vote(8.0), "8.0");
        assert_eq!(format_vote(0.0), "0.0");
        assert_eq!(format_vote(6.123), "6.123");
    }
}
