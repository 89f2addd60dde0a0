use anyhow::Result;
use async_trait::async_trait;

/// Source of raw listing cards.
///
/// Each block is the text of one card with lines separated by `\n`; turning it
/// into a record is left to the card parser.
#[async_trait]
pub trait ListingFetcher: Send + Sync {
    /// Collect the text of every listing card currently on the board
    async fn fetch_cards(&self) -> Result<Vec<String>>;

    /// Get the name of the fetcher for logging
    fn source_name(&self) -> &'static str;
}
