pub mod browser;
pub mod card;
pub mod snapshot;
pub mod traits;

pub use browser::BrowserFetcher;
pub use card::parse_cards;
pub use snapshot::SnapshotFetcher;
pub use traits::ListingFetcher;
