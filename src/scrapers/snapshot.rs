use crate::scrapers::traits::ListingFetcher;
use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use scraper::{Html, Selector};
use std::path::PathBuf;
use tracing::info;

/// Replays a saved copy of the job board instead of driving a browser
pub struct SnapshotFetcher {
    path: PathBuf,
    card_selector: String,
}

impl SnapshotFetcher {
    pub fn new(path: impl Into<PathBuf>, card_selector: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            card_selector: card_selector.into(),
        }
    }
}

#[async_trait]
impl ListingFetcher for SnapshotFetcher {
    async fn fetch_cards(&self) -> Result<Vec<String>> {
        info!("Reading page snapshot {}", self.path.display());

        let html = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("Failed to read snapshot {}", self.path.display()))?;

        let blocks = extract_cards(&html, &self.card_selector)?;
        info!("Found {} job cards in snapshot", blocks.len());

        Ok(blocks)
    }

    fn source_name(&self) -> &'static str {
        "merojob (snapshot)"
    }
}

/// Turn every matching card into newline-separated text, one line per
/// non-blank text node, which is how the rendered card reads.
pub fn extract_cards(html: &str, card_selector: &str) -> Result<Vec<String>> {
    let selector = Selector::parse(card_selector)
        .map_err(|e| anyhow!("Invalid card selector {:?}: {:?}", card_selector, e))?;

    let document = Html::parse_document(html);
    let blocks = document
        .select(&selector)
        .map(|card| {
            card.text()
                .flat_map(str::lines)
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .collect::<Vec<_>>()
                .join("\n")
        })
        .collect();

    Ok(blocks)
}
