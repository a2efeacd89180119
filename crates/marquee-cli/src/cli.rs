//! CLI argument definitions.

use clap::{Parser, Subcommand};

use crate::commands::detail::DetailArgs;
use crate::commands::list::ListArgs;
use crate::commands::prefs::PrefsCommand;

/// Browse popular and top rated movies from The Movie Database.
#[derive(Parser, Debug)]
#[command(name = "marquee")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the movie list, optionally opening one movie
    List(ListArgs),

    /// Show the detail screen for a transferred movie
    Detail(DetailArgs),

    /// Read or change stored preferences
    Prefs(PrefsCommand),
}
