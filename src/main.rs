mod config;
mod models;
mod pipeline;
mod scrapers;
mod store;

use config::ScoutConfig;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("💼 Job Scout - merojob Individual Jobs");
    info!("======================================");

    let config = ScoutConfig::from_env()?;
    info!("Data directory: {}", config.data_dir.display());

    let fetcher = pipeline::fetcher_for(&config);

    let summary = pipeline::run(&config, fetcher.as_ref()).await?;
    info!(
        "✅ {} cards, {} parsed, {} new, {} listings on file, {} in deadline view",
        summary.cards,
        summary.parsed,
        summary.new_listings,
        summary.primary_total,
        summary.deadline_total
    );

    Ok(())
}
