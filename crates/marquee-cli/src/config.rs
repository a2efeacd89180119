//! Runtime configuration shared by the screen commands.
//!
//! Every setting can come from a flag or from the environment; flags win.

use anyhow::{Context, Result};
use clap::Args;
use tracing::warn;

use marquee_core::present::{DisplayLocale, Layout};
use marquee_core::types::{DEFAULT_CATALOG_URL, DEFAULT_IMAGE_URL};
use marquee_core::{CatalogUrl, ImageBaseUrl};

/// Terminal width at which the list and detail panes fit side by side.
const TWO_PANE_MIN_COLUMNS: u16 = 120;

/// Environment variables consulted for the date locale, in order.
const LOCALE_VARS: [&str; 3] = ["LC_ALL", "LC_TIME", "LANG"];

#[derive(Args, Debug, Clone)]
pub struct CatalogArgs {
    /// TMDB API key
    #[arg(long, env = "MARQUEE_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Catalog API base URL
    #[arg(long, env = "MARQUEE_CATALOG_URL", default_value = DEFAULT_CATALOG_URL)]
    pub catalog_url: CatalogUrl,
}

impl CatalogArgs {
    pub fn api_key(&self) -> Result<&str> {
        self.api_key
            .as_deref()
            .filter(|key| !key.trim().is_empty())
            .context("No API key. Set MARQUEE_API_KEY or pass --api-key.")
    }
}

#[derive(Args, Debug, Clone)]
pub struct DisplayArgs {
    /// Poster image base URL
    #[arg(long, env = "MARQUEE_IMAGE_URL", default_value = DEFAULT_IMAGE_URL)]
    pub image_url: ImageBaseUrl,

    /// Locale for dates (e.g. en_US, fr_FR); defaults to LC_ALL, LC_TIME or LANG
    #[arg(long, env = "MARQUEE_LOCALE")]
    pub locale: Option<DisplayLocale>,

    /// Do not download posters; show placeholders instead
    #[arg(long)]
    pub no_posters: bool,

    /// Print JSON instead of formatted screens
    #[arg(long)]
    pub json: bool,
}

impl DisplayArgs {
    pub fn locale(&self) -> DisplayLocale {
        self.locale.unwrap_or_else(|| locale_from_env(|var| std::env::var(var).ok()))
    }
}

#[derive(Args, Debug, Clone, Default)]
pub struct LayoutArgs {
    /// Show details next to the list
    #[arg(long, conflicts_with = "single_pane")]
    pub two_pane: bool,

    /// Open details as a separate screen
    #[arg(long)]
    pub single_pane: bool,
}

impl LayoutArgs {
    pub fn layout(&self) -> Layout {
        let columns = std::env::var("COLUMNS").ok().and_then(|c| c.parse().ok());
        pick_layout(self.two_pane, self.single_pane, columns)
    }
}

fn pick_layout(two_pane: bool, single_pane: bool, columns: Option<u16>) -> Layout {
    if two_pane {
        Layout::TwoPane
    } else if single_pane {
        Layout::SinglePane
    } else if columns.is_some_and(|c| c >= TWO_PANE_MIN_COLUMNS) {
        Layout::TwoPane
    } else {
        Layout::SinglePane
    }
}

fn locale_from_env(lookup: impl Fn(&str) -> Option<String>) -> DisplayLocale {
    let Some(name) = LOCALE_VARS
        .iter()
        .filter_map(|var| lookup(var))
        .find(|value| !value.is_empty())
    else {
        return DisplayLocale::default();
    };

    DisplayLocale::new(&name).unwrap_or_else(|e| {
        warn!(locale = %name, error = %e, "Unsupported locale, using en_US");
        DisplayLocale::default()
    })
}
