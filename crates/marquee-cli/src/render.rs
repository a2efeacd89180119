//! Terminal rendering of the list and detail screens.

use colored::Colorize;
use futures_util::future::join_all;

use marquee_core::present::{DetailView, ListScreen, PosterRequest, PosterState, RowView};
use marquee_core::traits::ImageLoader;

use crate::output;

/// Resolves poster slots, or leaves them on their placeholders.
pub async fn posters(
    requests: &[&PosterRequest],
    loader: Option<&dyn ImageLoader>,
) -> Vec<PosterState> {
    match loader {
        Some(loader) => join_all(requests.iter().map(|request| loader.load(request))).await,
        None => requests.iter().map(|request| request.pending()).collect(),
    }
}

/// Draws the list screen: rows, or the empty-state message.
pub fn list_screen(screen: &ListScreen, rows: &[RowView], posters: &[PosterState]) {
    if let Some(message) = screen.empty_message() {
        output::notice(message);
        return;
    }

    for (row, poster) in rows.iter().zip(posters) {
        println!(
            "{:>3}  {}  {}",
            row.position.to_string().dimmed(),
            row.title,
            poster.label().dimmed()
        );
    }
}

/// Draws a detail view, indented by `gutter` on every line.
pub fn detail(view: &DetailView, poster: &PosterState, gutter: &str) {
    println!("{gutter}{}", view.title.bold());
    println!("{gutter}{}: {}", "Rating".dimmed(), view.vote);
    println!("{gutter}{}: {}", "Released".dimmed(), view.release_date);
    println!("{gutter}{}: {}", "Poster".dimmed(), poster.label());
    println!("{gutter}");
    for line in view.overview.lines() {
        println!("{gutter}{line}");
    }
}

/// Separator between the list pane and the detail pane.
pub fn pane_divider() {
    println!();
    output::heading("── Detail ──");
}

/// Header of a pushed detail screen.
pub fn screen_header() {
    println!();
    output::heading("══ Movie ══");
}
