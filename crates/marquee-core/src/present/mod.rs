//! Toolkit-independent presenters for the list and detail screens.

mod detail;
mod list;
mod navigate;
mod poster;
mod screen;

pub use detail::{DetailView, DisplayLocale, format_release_date, format_vote};
pub use list::{MovieList, RowView};
pub use navigate::{EmbedInPlace, Layout, PushScreen, Route, navigator_for};
pub use poster::{POSTER_ERROR, POSTER_PLACEHOLDER, PosterRequest, PosterState};
pub use screen::{ListScreen, NO_INTERNET_CONNECTION, NO_MOVIES_FOUND, ScreenState};
