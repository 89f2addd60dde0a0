use crate::config::ScoutConfig;
use crate::scrapers::{parse_cards, BrowserFetcher, ListingFetcher, SnapshotFetcher};
use crate::store::{deadline_view, Dataset};
use anyhow::{Context, Result};
use std::fs;
use tracing::info;

/// Counts reported at the end of a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub cards: usize,
    pub parsed: usize,
    pub new_listings: usize,
    pub primary_total: usize,
    pub deadline_total: usize,
}

/// Pick the live browser, or the saved page when a snapshot is configured
pub fn fetcher_for(config: &ScoutConfig) -> Box<dyn ListingFetcher> {
    match &config.snapshot {
        Some(path) => Box::new(SnapshotFetcher::new(path, config.card_selector.clone())),
        None => Box::new(BrowserFetcher::new(config.clone())),
    }
}

/// One scrape: fetch cards, merge them into the primary file, refresh the
/// deadline view.
pub async fn run(config: &ScoutConfig, fetcher: &dyn ListingFetcher) -> Result<RunSummary> {
    fs::create_dir_all(&config.data_dir)
        .with_context(|| format!("Failed to create {}", config.data_dir.display()))?;

    info!("Fetching job cards from {}...", fetcher.source_name());
    let cards = fetcher.fetch_cards().await?;

    let fresh = parse_cards(&cards);
    if fresh.len() < cards.len() {
        info!("Skipped {} incomplete cards", cards.len() - fresh.len());
    }
    let parsed = fresh.len();

    let primary_path = config.primary_path();
    let mut primary = Dataset::load(&primary_path)?;
    let new_listings = primary.merge_new(fresh);
    primary.persist(&primary_path)?;
    println!("{} updated ({} new jobs)", config.primary_file, new_listings);

    let view = deadline_view::update(&primary, &config.deadline_path())?;
    println!("{} updated ({} jobs)", config.deadline_file, view.len());

    Ok(RunSummary {
        cards: cards.len(),
        parsed,
        new_listings,
        primary_total: primary.len(),
        deadline_total: view.len(),
    })
}
