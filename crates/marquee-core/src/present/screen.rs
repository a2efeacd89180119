//! List screen state machine.
//!
//! ```text
//! NoNetwork            (connectivity check failed, nothing fetched)
//! Loading ──┬─> Loaded (non-empty result)
//!           └─> Empty  (no data or an empty list)
//! ```
//!
//! Every state after `Loading` is final for a screen instance; reloading
//! means building a new screen.

use serde::Serialize;
use tracing::{info, warn};

use crate::Result;
use crate::traits::Navigator;
use crate::types::{ImageBaseUrl, MovieRecord};

use super::list::{MovieList, RowView};
use super::navigate::{Layout, Route};

/// Message shown when the connectivity check fails.
pub const NO_INTERNET_CONNECTION: &str = "No internet connection.";

/// Message shown when a fetch produced nothing to display.
pub const NO_MOVIES_FOUND: &str = "No movies found.";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScreenState {
    NoNetwork,
    Loading,
    Loaded,
    Empty,
}

/// The movie list screen: state, indicator, empty-state text and rows.
#[derive(Debug, Clone)]
pub struct ListScreen {
    state: ScreenState,
    layout: Layout,
    loading_indicator: bool,
    empty_message: Option<&'static str>,
    list: MovieList,
}

impl ListScreen {
    /// A freshly created screen is loading, with the indicator showing.
    pub fn new(layout: Layout, images: ImageBaseUrl) -> Self {
        Self {
            state: ScreenState::Loading,
            layout,
            loading_indicator: true,
            empty_message: None,
            list: MovieList::new(images),
        }
    }

    pub fn state(&self) -> ScreenState {
        self.state
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn loading_indicator_visible(&self) -> bool {
        self.loading_indicator
    }

    pub fn empty_message(&self) -> Option<&'static str> {
        self.empty_message
    }

    pub fn list(&self) -> &MovieList {
        &self.list
    }

    pub fn rows(&self) -> impl Iterator<Item = RowView> + '_ {
        self.list.rows()
    }

    /// Applies the pre-flight connectivity result.
    ///
    /// Returns whether a fetch should be started.
    pub fn begin(&mut self, connected: bool) -> bool {
        if self.state != ScreenState::Loading {
            warn!(state = ?self.state, "Screen already settled, not fetching again");
            return false;
        }

        self.list.clear();

        if !connected {
            info!("No connectivity, skipping fetch");
            self.state = ScreenState::NoNetwork;
            self.loading_indicator = false;
            self.empty_message = Some(NO_INTERNET_CONNECTION);
            return false;
        }

        true
    }

    /// Applies the loader result.
    ///
    /// The indicator is hidden only when there is something to show; a
    /// missing or empty result leaves the empty-state message instead.
    pub fn on_load_finished(&mut self, movies: Option<Vec<MovieRecord>>) {
        if self.state != ScreenState::Loading {
            warn!(state = ?self.state, "Ignoring load result for a settled screen");
            return;
        }

        match movies {
            Some(movies) if !movies.is_empty() => {
                self.loading_indicator = false;
                self.empty_message = None;
                self.state = ScreenState::Loaded;
                self.list.replace(movies);
            }
            _ => {
                self.empty_message = Some(NO_MOVIES_FOUND);
                self.state = ScreenState::Empty;
                self.list.clear();
            }
        }

        info!(state = ?self.state, count = self.list.len(), "Load finished");
    }

    /// The loader was torn down; drop whatever it delivered.
    pub fn on_loader_reset(&mut self) {
        self.list.clear();
    }

    /// Routes a tap on a row to `navigator`.
    pub fn tap(&self, position: usize, navigator: &mut dyn Navigator) -> Result<Option<Route>> {
        self.list.tap(position, navigator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::present::{DisplayLocale, EmbedInPlace, PushScreen, navigator_for};

    fn screen() -> ListScreen {
        ListScreen::new(Layout::SinglePane, ImageBaseUrl::default())
    }

    fn one_movie() -> Vec<MovieRecord> {
        vec![MovieRecord::new(
            "Test Movie",
            "2020-01-15",
            "/abc.jpg",
            7.5,
            "A test plot.",
        )]
    }

    #[test]
    fn starts_loading() {
        let screen = screen();
        assert_eq!(screen.state(), ScreenState::Loading);
        assert!(screen.loading_indicator_visible());
        assert!(screen.empty_message().is_none());
    }

    #[test]
    fn offline_is_terminal() {
        let mut screen = screen();
        assert!(!screen.begin(false));
        assert_eq!(screen.state(), ScreenState::NoNetwork);
        assert!(!screen.loading_indicator_visible());
        assert_eq!(screen.empty_message(), Some(NO_INTERNET_CONNECTION));

        screen.on_load_finished(Some(one_movie()));
        assert_eq!(screen.state(), ScreenState::NoNetwork);
        assert!(screen.list().is_empty());
    }

    #[test]
    fn loaded() {
        let mut screen = screen();
        assert!(screen.begin(true));
        screen.on_load_finished(Some(one_movie()));

        assert_eq!(screen.state(), ScreenState::Loaded);
        assert!(!screen.loading_indicator_visible());
        assert_eq!(screen.rows().count(), 1);
    }

    #[test]
    fn empty_list_shows_message() {
        let mut screen = screen();
        screen.begin(true);
        screen.on_load_finished(Some(Vec::new()));

        assert_eq!(screen.state(), ScreenState::Empty);
        assert_eq!(screen.empty_message(), Some(NO_MOVIES_FOUND));
        assert!(screen.loading_indicator_visible());
    }

    #[test]
    fn no_data_shows_message() {
        let mut screen = screen();
        screen.begin(true);
        screen.on_load_finished(None);

        assert_eq!(screen.state(), ScreenState::Empty);
        assert_eq!(screen.empty_message(), Some(NO_MOVIES_FOUND));
    }

    #[test]
    fn second_result_is_ignored() {
        let mut screen = screen();
        screen.begin(true);
        screen.on_load_finished(Some(one_movie()));
        screen.on_load_finished(Some(Vec::new()));
        assert_eq!(screen.state(), ScreenState::Loaded);
        assert_eq!(screen.list().len(), 1);
    }

    #[test]
    fn loader_reset_clears_rows() {
        let mut screen = screen();
        screen.begin(true);
        screen.on_load_finished(Some(one_movie()));
        screen.on_loader_reset();
        assert!(screen.list().is_empty());
    }

    #[test]
    fn tap_routes_by_layout() {
        let mut screen = screen();
        screen.begin(true);
        screen.on_load_finished(Some(one_movie()));

        let mut pane = EmbedInPlace::default();
        let route = screen.tap(0, &mut pane).unwrap().unwrap();
        let Route::Embedded(view) = route else {
            panic!("expected embedded detail");
        };
        assert_eq!(view.vote, "7.5");
        assert_eq!(view.release_date, "January 15, 2020");

        let mut push = PushScreen::new();
        assert!(matches!(
            screen.tap(0, &mut push).unwrap(),
            Some(Route::Pushed(_))
        ));
    }

    #[test]
    fn layout_picks_the_navigator() {
        let mut wide = ListScreen::new(Layout::TwoPane, ImageBaseUrl::default());
        wide.begin(true);
        wide.on_load_finished(Some(one_movie()));

        let mut navigator = navigator_for(
            wide.layout(),
            DisplayLocale::default(),
            ImageBaseUrl::default(),
        );
        assert!(matches!(
            wide.tap(0, navigator.as_mut()).unwrap(),
            Some(Route::Embedded(_))
        ));
    }
}
