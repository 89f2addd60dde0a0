use crate::models::{Deadline, ListingRecord};
use tracing::debug;

/// Label printed in front of the deadline on every card
pub const DEADLINE_LABEL: &str = "Apply Before: ";

/// Number of lines a complete card carries
const CARD_LINES: usize = 6;

/// Parse the text of one listing card.
///
/// Lines are read positionally: title, company, experience, level, salary and
/// the labelled deadline. Returns `None` for cards with fewer than six
/// non-empty lines.
pub fn parse_card(block: &str) -> Option<ListingRecord> {
    let lines: Vec<&str> = block
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    if lines.len() < CARD_LINES {
        debug!("Skipping card with {} lines: {:?}", lines.len(), block);
        return None;
    }

    let deadline_text = lines[5].replacen(DEADLINE_LABEL, "", 1);

    Some(ListingRecord {
        title: lines[0].to_string(),
        company: lines[1].to_string(),
        experience: lines[2].to_string(),
        level: lines[3].to_string(),
        salary: lines[4].to_string(),
        deadline: Deadline::from_card(&deadline_text),
    })
}

/// Parse every card, dropping the incomplete ones
pub fn parse_cards<S: AsRef<str>>(blocks: &[S]) -> Vec<ListingRecord> {
    blocks
        .iter()
        .filter_map(|block| parse_card(block.as_ref()))
        .collect()
}
