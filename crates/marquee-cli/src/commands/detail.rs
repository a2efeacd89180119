//! Detail command implementation.

use anyhow::{Context, Result};
use clap::Args;

use marquee_core::ImageBaseUrl;
use marquee_core::present::{DetailView, DisplayLocale};
use marquee_core::traits::ImageLoader;
use marquee_core::types::Transfer;
use marquee_tmdb::HttpImageLoader;

use crate::config::DisplayArgs;
use crate::{output, render};

#[derive(Args, Debug)]
pub struct DetailArgs {
    /// Movie to show, as printed by `marquee list --json`
    #[arg(long)]
    pub movie: String,

    #[command(flatten)]
    pub display: DisplayArgs,
}

pub async fn run(args: DetailArgs) -> Result<()> {
    let transfer = Transfer::from_token(args.movie);
    let image_loader = HttpImageLoader::new();
    let image_loader: Option<&dyn ImageLoader> =
        (!args.display.no_posters).then_some(&image_loader as &dyn ImageLoader);

    show(
        &transfer,
        args.display.locale(),
        &args.display.image_url,
        image_loader,
        args.display.json,
    )
    .await
}

/// Opens a detail screen for a transferred movie.
pub async fn show(
    transfer: &Transfer,
    locale: DisplayLocale,
    images: &ImageBaseUrl,
    image_loader: Option<&dyn ImageLoader>,
    json: bool,
) -> Result<()> {
    let movie = transfer.unwrap_record().context("Invalid movie")?;
    let view = DetailView::render(&movie, locale, images);

    if json {
        return output::json_pretty(&view);
    }

    let poster = render::posters(&[&view.poster], image_loader).await;
    render::screen_header();
    render::detail(&view, &poster[0], "");

    Ok(())
}
