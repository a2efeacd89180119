//! List command implementation.

use std::sync::Arc;

use anyhow::{Result, bail};
use clap::Args;
use colored::Colorize;
use tracing::{debug, warn};

use marquee_core::SortMode;
use marquee_core::present::{ListScreen, Route, RowView, ScreenState, navigator_for};
use marquee_core::traits::{Connectivity, ImageLoader};
use marquee_tmdb::{HttpImageLoader, TcpProbe, TmdbCatalog};

use crate::config::{CatalogArgs, DisplayArgs, LayoutArgs};
use crate::prefs::storage;
use crate::{loader, output, render};

use super::detail;

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Sort order for this run (popular or top_rated); defaults to the stored preference
    #[arg(long)]
    pub sort: Option<SortMode>,

    /// Open the movie at this row after loading
    #[arg(long, value_name = "ROW")]
    pub open: Option<usize>,

    #[command(flatten)]
    pub catalog: CatalogArgs,

    #[command(flatten)]
    pub display: DisplayArgs,

    #[command(flatten)]
    pub layout: LayoutArgs,
}

pub async fn run(args: ListArgs) -> Result<()> {
    let api_key = args.catalog.api_key()?;

    let sort = args.sort.unwrap_or_else(stored_sort);

    let images = args.display.image_url.clone();
    let mut screen = ListScreen::new(args.layout.layout(), images.clone());

    if !args.display.json {
        eprintln!("{}", format!("Loading {sort} movies...").dimmed());
    }

    let probe = TcpProbe::for_catalog(&args.catalog.catalog_url);
    if screen.begin(probe.is_connected().await) {
        let catalog = Arc::new(TmdbCatalog::new(args.catalog.catalog_url.clone(), api_key));
        screen.on_load_finished(loader::load(catalog, sort).await);
    }
    debug!(state = ?screen.state(), "List screen settled");

    let image_loader = HttpImageLoader::new();
    let image_loader: Option<&dyn ImageLoader> =
        (!args.display.no_posters).then_some(&image_loader as &dyn ImageLoader);

    if args.display.json {
        for movie in screen.list().movies() {
            output::json(movie)?;
        }
        if let Some(message) = screen.empty_message() {
            eprintln!("{}", message.dimmed());
        }
    } else {
        let rows: Vec<RowView> = screen.rows().collect();
        let requests: Vec<_> = rows.iter().map(|row| &row.poster).collect();
        let posters = render::posters(&requests, image_loader).await;
        render::list_screen(&screen, &rows, &posters);
    }

    let Some(position) = args.open else {
        return Ok(());
    };

    if screen.state() != ScreenState::Loaded {
        debug!(position, "Nothing to open");
        return Ok(());
    }

    let locale = args.display.locale();
    let mut navigator = navigator_for(screen.layout(), locale, images.clone());

    match screen.tap(position, navigator.as_mut())? {
        Some(Route::Embedded(view)) => {
            if args.display.json {
                output::json_pretty(&view)?;
            } else {
                let poster = render::posters(&[&view.poster], image_loader).await;
                render::pane_divider();
                render::detail(&view, &poster[0], "│ ");
            }
        }
        Some(Route::Pushed(transfer)) => {
            debug!(transfer = %transfer, "Opening pushed detail screen");
            detail::show(&transfer, locale, &images, image_loader, args.display.json).await?;
        }
        None => bail!(
            "No movie at row {position} (the list has {} rows)",
            screen.list().len()
        ),
    }

    Ok(())
}

/// The stored sort order. An unreadable preferences file is not fatal.
fn stored_sort() -> SortMode {
    match storage::load_preferences() {
        Ok(prefs) => prefs.sort_order,
        Err(e) => {
            warn!(error = %format!("{e:#}"), "Ignoring preferences, using default sort order");
            SortMode::default()
        }
    }
}
