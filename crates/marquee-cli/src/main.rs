//! marquee - browse popular and top rated movies from The Movie Database.
//!
//! A terminal front end over `marquee-core`'s presenters and the
//! `marquee-tmdb` catalog.

mod cli;
mod commands;
mod config;
mod loader;
mod output;
mod prefs;
mod render;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.json_logs);

    match cli.command {
        Commands::List(args) => commands::list::run(args).await,
        Commands::Detail(args) => commands::detail::run(args).await,
        Commands::Prefs(cmd) => commands::prefs::handle(cmd),
    }
}

/// Logs go to stderr; stdout carries the screens.
fn init_logging(verbosity: u8, json: bool) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
            .init();
    }
}
