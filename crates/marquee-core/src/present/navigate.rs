//! Detail navigation strategies.
//!
//! Whether a tapped movie opens beside the list or on a screen of its own is
//! a layout decision. Both strategies implement [`Navigator`]; [`navigator_for`]
//! picks one from the layout capability.

use tracing::debug;

use crate::Result;
use crate::traits::Navigator;
use crate::types::{ImageBaseUrl, MovieRecord, Transfer};

use super::detail::{DetailView, DisplayLocale};

/// Layout capability of the hosting screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Layout {
    /// List only; details open on a new screen.
    #[default]
    SinglePane,
    /// List and details side by side.
    TwoPane,
}

/// Where a detail hand-off ended up.
#[derive(Debug, Clone, PartialEq)]
pub enum Route {
    /// Rendered into the detail pane next to the list.
    Embedded(DetailView),
    /// A new screen was pushed carrying this transfer.
    Pushed(Transfer),
}

/// Renders details into a pane that lives alongside the list.
///
/// Each hand-off replaces whatever the pane showed before.
#[derive(Debug, Clone, Default)]
pub struct EmbedInPlace {
    locale: DisplayLocale,
    images: ImageBaseUrl,
    pane: Option<DetailView>,
}

impl EmbedInPlace {
    pub fn new(locale: DisplayLocale, images: ImageBaseUrl) -> Self {
        Self {
            locale,
            images,
            pane: None,
        }
    }

    /// The view currently shown in the detail pane.
    pub fn pane(&self) -> Option<&DetailView> {
        self.pane.as_ref()
    }
}

impl Navigator for EmbedInPlace {
    fn show_detail(&mut self, record: MovieRecord) -> Result<Route> {
        debug!(title = record.title(), "Embedding detail pane");
        let view = DetailView::render(&record, self.locale, &self.images);
        self.pane = Some(view.clone());
        Ok(Route::Embedded(view))
    }
}

/// Pushes a new detail screen, handing the record over as a [`Transfer`].
#[derive(Debug, Clone, Default)]
pub struct PushScreen {
    back_stack: Vec<Transfer>,
}

impl PushScreen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Screens pushed so far, oldest first.
    pub fn back_stack(&self) -> &[Transfer] {
        &self.back_stack
    }
}

impl Navigator for PushScreen {
    fn show_detail(&mut self, record: MovieRecord) -> Result<Route> {
        debug!(title = record.title(), "Pushing detail screen");
        let transfer = record.to_transfer()?;
        self.back_stack.push(transfer.clone());
        Ok(Route::Pushed(transfer))
    }
}

/// Picks the navigation strategy for a layout.
pub fn navigator_for(
    layout: Layout,
    locale: DisplayLocale,
    images: ImageBaseUrl,
) -> Box<dyn Navigator> {
    match layout {
        Layout::TwoPane => Box::new(EmbedInPlace::new(locale, images)),
        Layout::SinglePane => Box::new(PushScreen::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie() -> MovieRecord {
        MovieRecord::new("Test Movie", "2020-01-15", "/abc.jpg", 7.5, "A test plot.")
    }

    #[test]
    fn two_pane_embeds() {
        let mut nav = EmbedInPlace::default();
        let route = nav.show_detail(movie()).unwrap();

        let Route::Embedded(view) = route else {
            panic!("expected embedded detail");
        };
        assert_eq!(view.vote, "7.5");
        assert_eq!(nav.pane().unwrap().title, "Test Movie");
    }

    #[test]
    fn embed_replaces_previous_pane() {
        let mut nav = EmbedInPlace::default();
        nav.show_detail(movie()).unwrap();
        nav.show_detail(MovieRecord::new("Other", "No date", "", 1.0, ""))
            .unwrap();
        assert_eq!(nav.pane().unwrap().title, "Other");
    }

    #[test]
    fn single_pane_pushes_transfer() {
        let mut nav = PushScreen::new();
        let route = nav.show_detail(movie()).unwrap();

        let Route::Pushed(transfer) = route else {
            panic!("expected pushed screen");
        };
        assert_eq!(transfer.unwrap_record().unwrap(), movie());
        assert_eq!(nav.back_stack().len(), 1);
    }

    #[test]
    fn layout_selects_strategy() {
        let mut nav = navigator_for(
            Layout::TwoPane,
            DisplayLocale::default(),
            ImageBaseUrl::default(),
        );
        assert!(matches!(
            nav.show_detail(movie()).unwrap(),
            Route::Embedded(_)
        ));

        let mut nav = navigator_for(
            Layout::SinglePane,
            DisplayLocale::default(),
            ImageBaseUrl::default(),
        );
        assert!(matches!(nav.show_detail(movie()).unwrap(), Route::Pushed(_)));
    }
}
