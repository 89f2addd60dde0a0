use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Date format used in the persisted CSV files
pub const STORED_DATE_FORMAT: &str = "%Y-%m-%d";

/// Date format printed on the listing cards ("Jan 05, 2025")
pub const CARD_DATE_FORMAT: &str = "%b %d, %Y";

/// Application deadline of a listing.
///
/// Cards that carry a recognisable date become `Parsed`; anything else is kept
/// as the text the board printed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Deadline {
    Parsed(NaiveDate),
    Raw(String),
}

impl Deadline {
    /// Normalize the text found on a listing card
    pub fn from_card(text: &str) -> Self {
        let text = text.trim();
        match NaiveDate::parse_from_str(text, CARD_DATE_FORMAT) {
            Ok(date) => Deadline::Parsed(date),
            Err(_) => Deadline::Raw(text.to_string()),
        }
    }

    /// Read a value back from a dataset file.
    ///
    /// Only strings in canonical `YYYY-MM-DD` form become `Parsed`, so the text
    /// of every deadline survives a write/read cycle unchanged.
    pub fn from_stored(text: &str) -> Self {
        match NaiveDate::parse_from_str(text, STORED_DATE_FORMAT) {
            Ok(date) if date.format(STORED_DATE_FORMAT).to_string() == text => {
                Deadline::Parsed(date)
            }
            _ => Deadline::Raw(text.to_string()),
        }
    }

    /// Ordering key for the deadline view.
    ///
    /// Raw text still sorts by date when it reads as `YYYY-MM-DD`; anything
    /// else sorts after every date.
    pub fn sort_key(&self) -> NaiveDate {
        match self {
            Deadline::Parsed(date) => *date,
            Deadline::Raw(text) => {
                NaiveDate::parse_from_str(text, STORED_DATE_FORMAT).unwrap_or(NaiveDate::MAX)
            }
        }
    }
}

impl fmt::Display for Deadline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Deadline::Parsed(date) => write!(f, "{}", date.format(STORED_DATE_FORMAT)),
            Deadline::Raw(text) => f.write_str(text),
        }
    }
}

impl Serialize for Deadline {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Deadline {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Ok(Deadline::from_stored(&text))
    }
}

/// Identity of a listing across runs: (title, company, deadline text)
pub type ListingKey = (String, String, String);

/// One job posting as stored in the dataset files
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingRecord {
    #[serde(rename = "Post")]
    pub title: String,
    #[serde(rename = "Company")]
    pub company: String,
    #[serde(rename = "Experience")]
    pub experience: String,
    #[serde(rename = "Level")]
    pub level: String,
    #[serde(rename = "Salary")]
    pub salary: String,
    #[serde(rename = "Deadline")]
    pub deadline: Deadline,
}

impl ListingRecord {
    pub fn key(&self) -> ListingKey {
        (
            self.title.clone(),
            self.company.clone(),
            self.deadline.to_string(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_dates_are_normalized() {
        let deadline = Deadline::from_card(" Jan 05, 2025 ");
        assert_eq!(
            deadline,
            Deadline::Parsed(NaiveDate::from_ymd_opt(2025, 1, 5).unwrap())
        );
        assert_eq!(deadline.to_string(), "2025-01-05");
    }

    #[test]
    fn unrecognised_card_text_is_kept_verbatim() {
        let deadline = Deadline::from_card("Next Week ");
        assert_eq!(deadline, Deadline::Raw("Next Week".to_string()));
        assert_eq!(deadline.to_string(), "Next Week");
    }

    #[test]
    fn stored_values_keep_their_exact_text() {
        assert_eq!(
            Deadline::from_stored("2025-03-01"),
            Deadline::Parsed(NaiveDate::from_ymd_opt(2025, 3, 1).unwrap())
        );
        // Not canonical, so it must not be rewritten as 2025-03-01
        let loose = Deadline::from_stored("2025-3-1");
        assert_eq!(loose, Deadline::Raw("2025-3-1".to_string()));
        assert_eq!(loose.to_string(), "2025-3-1");
        // Card format is not accepted from the store
        assert!(matches!(
            Deadline::from_stored("Jan 05, 2025"),
            Deadline::Raw(_)
        ));
    }

    #[test]
    fn raw_deadlines_sort_after_dates() {
        let far = Deadline::Parsed(NaiveDate::from_ymd_opt(9999, 12, 31).unwrap());
        let raw = Deadline::Raw("Soon".to_string());
        assert!(far.sort_key() < raw.sort_key());
    }

    #[test]
    fn raw_iso_text_sorts_by_its_date() {
        let loose = Deadline::from_stored("2025-3-1");
        assert_eq!(loose.sort_key(), NaiveDate::from_ymd_opt(2025, 3, 1).unwrap());

        let from_card = Deadline::from_card("2025-01-05");
        assert_eq!(from_card, Deadline::Raw("2025-01-05".to_string()));
        assert_eq!(
            from_card.sort_key(),
            Deadline::from_stored("2025-01-05").sort_key()
        );
    }

    #[test]
    fn key_uses_deadline_text() {
        let record = ListingRecord {
            title: "Engineer".into(),
            company: "Acme".into(),
            experience: "2 years".into(),
            level: "Mid".into(),
            salary: "Negotiable".into(),
            deadline: Deadline::from_stored("2025-03-01"),
        };
        assert_eq!(
            record.key(),
            (
                "Engineer".to_string(),
                "Acme".to_string(),
                "2025-03-01".to_string()
            )
        );
    }
}
