//! Preference subcommands.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};

use marquee_core::SortMode;

use crate::output;
use crate::prefs::storage;

#[derive(Args, Debug)]
pub struct PrefsCommand {
    #[command(subcommand)]
    pub command: PrefsSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum PrefsSubcommand {
    /// Display stored preferences
    Show,

    /// Choose which list `marquee list` shows by default
    SetSort {
        /// popular or top_rated
        sort: SortMode,
    },
}

pub fn handle(cmd: PrefsCommand) -> Result<()> {
    match cmd.command {
        PrefsSubcommand::Show => show(),
        PrefsSubcommand::SetSort { sort } => set_sort(sort),
    }
}

fn show() -> Result<()> {
    let prefs = storage::load_preferences().context("Failed to load preferences")?;
    let path = storage::preferences_path()?;

    output::field("Sort order", prefs.sort_order.as_str());
    output::field("File", &path.display().to_string());

    Ok(())
}

fn set_sort(sort: SortMode) -> Result<()> {
    let mut prefs = storage::load_preferences().context("Failed to load preferences")?;
    prefs.sort_order = sort;
    storage::save_preferences(&prefs).context("Failed to save preferences")?;

    output::success(&format!("Sort order set to {sort}"));

    Ok(())
}
