//! Show Score Image Generator

use clap::Parser as _;
use color_eyre::eyre::{ContextCompat as _, Result};
use tracing_subscriber::{layer::SubscriberExt as _, util::SubscriberInitExt as _, Layer as _};

mod config;
mod pixel;
mod remap;
mod scores;
mod settings;
mod tile;
/// Various ways to output data.
mod output {
    pub mod png;
}

fn main() -> Result<()> {
    color_eyre::install()?;
    setup_logging()?;

    let config = crate::config::Config::parse();
    tracing::info!("Initialising with config: {config:?}");

    let document = crate::settings::Document::read(&config.config)?;
    let section = document.section(config.environment)?;

    let mut provider = crate::scores::ScoreProvider::connect(&section.database)?;
    let totals = provider.fetch_totals()?;
    drop(provider);

    if totals.is_empty() {
        tracing::warn!("No scores to process, exiting without rendering an image");
        return Ok(());
    }

    tracing::info!("Rendering {} show score totals", totals.len());
    render(&totals, &config.output)?;
    tracing::info!("Image saved to: {}", config.output.display());

    if config.view {
        open::that(&config.output)?;
    }

    Ok(())
}

/// Remap raw score totals into pixel intensities, tile them into rows and save the result as a
/// square PNG.
fn render(totals: &[u32], path: &std::path::Path) -> Result<()> {
    let minimum = totals
        .iter()
        .min()
        .copied()
        .context("No minimum, the list of totals is empty")?;
    let maximum = totals
        .iter()
        .max()
        .copied()
        .context("No maximum, the list of totals is empty")?;
    tracing::debug!("Observed range of totals: [{minimum}, {maximum}]");

    let mut intensities = Vec::with_capacity(totals.len());
    for total in totals {
        let remapped = crate::remap::remap(*total, minimum, maximum, 0, 255)?;
        intensities.push(u8::try_from(remapped)?);
    }

    let pixel_rows = crate::pixel::convert_rows(crate::tile::rows(&intensities));
    crate::output::png::save(&pixel_rows, totals.len(), path)
}

/// Setup logging.
fn setup_logging() -> Result<()> {
    let filters = tracing_subscriber::EnvFilter::builder()
        .with_default_directive("info".parse()?)
        .from_env_lossy();
    let filter_layer = tracing_subscriber::fmt::layer().with_filter(filters);
    let tracing_setup = tracing_subscriber::registry().with(filter_layer);
    tracing_setup.init();

    Ok(())
}
