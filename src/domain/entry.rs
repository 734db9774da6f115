//! Journal entries and the mood scale

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Write};
use std::str::FromStr;
use thiserror::Error;
use tracing::warn;

/// Date format used for `displayDate` unless configured otherwise
pub const DEFAULT_DATE_FORMAT: &str = "%m/%d/%Y";

/// A point on the ordinal mood scale, 1 (rough) through 5 (great)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct MoodLevel(u8);

impl MoodLevel {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    /// Create a level, rejecting values outside 1..=5
    pub fn new(value: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX)
            .contains(&value)
            .then_some(MoodLevel(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// All levels, lowest first
    pub fn all() -> impl DoubleEndedIterator<Item = MoodLevel> {
        (Self::MIN..=Self::MAX).map(MoodLevel)
    }

    /// Human-readable label shown next to the selection
    pub fn label(self) -> &'static str {
        match self.0 {
            5 => "Great",
            4 => "Good",
            3 => "Okay",
            2 => "Low",
            _ => "Rough",
        }
    }

    /// Symbol used on entry cards and chart ticks
    pub fn symbol(self) -> &'static str {
        match self.0 {
            5 => "🌟",
            4 => "🙂",
            3 => "😐",
            2 => "😔",
            _ => "😣",
        }
    }
}

impl TryFrom<u8> for MoodLevel {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        MoodLevel::new(value).ok_or_else(|| {
            format!(
                "mood must be between {} and {}, got {}",
                MoodLevel::MIN,
                MoodLevel::MAX,
                value
            )
        })
    }
}

impl From<MoodLevel> for u8 {
    fn from(level: MoodLevel) -> Self {
        level.0
    }
}

impl FromStr for MoodLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: u8 = s
            .trim()
            .parse()
            .map_err(|_| format!("not a mood level: {}", s.trim()))?;
        MoodLevel::try_from(value)
    }
}

impl fmt::Display for MoodLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Symbol for an optional mood. Unset moods decorate as an empty string.
pub fn mood_symbol(mood: Option<MoodLevel>) -> &'static str {
    mood.map(MoodLevel::symbol).unwrap_or("")
}

/// Reasons an entry cannot be created
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please write something or select a mood.")]
    EmptyEntry,
}

/// A single saved journal entry.
///
/// Field names follow the `sentra_journal` JSON schema; `timestamp` and
/// `date` are accepted as older spellings of `createdAt` and `displayDate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalEntry {
    pub id: i64,
    #[serde(alias = "timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(alias = "date")]
    pub display_date: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub mood: Option<MoodLevel>,
}

impl JournalEntry {
    /// Build a new entry, enforcing that it carries text or a mood.
    ///
    /// `newest_id` is the id of the most recent stored entry; the new id is
    /// the creation time in milliseconds, bumped past `newest_id` if needed.
    pub fn create(
        text: &str,
        mood: Option<MoodLevel>,
        created_at: DateTime<Utc>,
        date_format: &str,
        newest_id: Option<i64>,
    ) -> Result<Self, ValidationError> {
        let text = text.trim();
        if text.is_empty() && mood.is_none() {
            return Err(ValidationError::EmptyEntry);
        }

        Ok(JournalEntry {
            id: next_id(created_at, newest_id),
            created_at,
            display_date: display_date(created_at, date_format),
            text: text.to_string(),
            mood,
        })
    }
}

/// Millisecond timestamp id, strictly greater than `newest_id`.
///
/// A stored id of `i64::MAX` cannot be bumped; the timestamp is used instead.
pub fn next_id(created_at: DateTime<Utc>, newest_id: Option<i64>) -> i64 {
    let millis = created_at.timestamp_millis();
    match newest_id {
        Some(newest) if millis <= newest => newest.checked_add(1).unwrap_or_else(|| {
            warn!(newest, "newest entry id is at the maximum, using the timestamp");
            millis
        }),
        _ => millis,
    }
}

/// Format the local calendar date of `created_at`.
///
/// Falls back to [`DEFAULT_DATE_FORMAT`] when `format` is not a valid
/// strftime pattern.
pub fn display_date(created_at: DateTime<Utc>, format: &str) -> String {
    let local = created_at.with_timezone(&Local);
    let mut out = String::new();
    if write!(out, "{}", local.format(format)).is_err() {
        out = local.format(DEFAULT_DATE_FORMAT).to_string();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn noon(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_mood_level_bounds() {
        assert!(MoodLevel::new(0).is_none());
        assert!(MoodLevel::new(6).is_none());
        for v in 1..=5 {
            assert_eq!(MoodLevel::new(v).unwrap().value(), v);
        }
    }

    #[test]
    fn test_mood_symbol_total_over_scale() {
        let symbols: Vec<&str> = MoodLevel::all().map(MoodLevel::symbol).collect();
        assert_eq!(symbols, vec!["😣", "😔", "😐", "🙂", "🌟"]);
        assert!(symbols.iter().all(|s| !s.is_empty()));
    }

    #[test]
    fn test_mood_symbol_unset_is_empty() {
        assert_eq!(mood_symbol(None), "");
        assert_eq!(mood_symbol(MoodLevel::new(5)), "🌟");
    }

    #[test]
    fn test_mood_level_from_str() {
        assert_eq!("4".parse::<MoodLevel>().unwrap().value(), 4);
        assert_eq!(" 2 ".parse::<MoodLevel>().unwrap().value(), 2);
        assert!("7".parse::<MoodLevel>().is_err());
        assert!("great".parse::<MoodLevel>().is_err());
    }

    #[test]
    fn test_create_requires_text_or_mood() {
        let result = JournalEntry::create("   ", None, noon(2024, 12, 1), "%Y", None);
        assert_eq!(result.unwrap_err(), ValidationError::EmptyEntry);
    }

    #[test]
    fn test_create_with_mood_only() {
        let entry =
            JournalEntry::create("", MoodLevel::new(3), noon(2024, 12, 1), "%Y", None).unwrap();
        assert_eq!(entry.text, "");
        assert_eq!(entry.mood, MoodLevel::new(3));
        assert_eq!(entry.id, noon(2024, 12, 1).timestamp_millis());
    }

    #[test]
    fn test_create_trims_text() {
        let entry =
            JournalEntry::create("  walked home \n", None, noon(2024, 6, 15), "%Y", None).unwrap();
        assert_eq!(entry.text, "walked home");
        assert!(entry.mood.is_none());
        assert_eq!(entry.display_date, "2024");
    }

    #[test]
    fn test_next_id_is_strictly_increasing() {
        let at = noon(2024, 12, 1);
        let millis = at.timestamp_millis();
        assert_eq!(next_id(at, None), millis);
        assert_eq!(next_id(at, Some(millis - 5)), millis);
        assert_eq!(next_id(at, Some(millis)), millis + 1);
        assert_eq!(next_id(at, Some(millis + 100)), millis + 101);
    }

    #[test]
    fn test_next_id_at_maximum_falls_back_to_timestamp() {
        let at = noon(2024, 12, 1);
        assert_eq!(next_id(at, Some(i64::MAX)), at.timestamp_millis());
    }

    #[test]
    fn test_display_date_invalid_format_falls_back() {
        let at = noon(2024, 6, 15);
        assert_eq!(display_date(at, "%Q"), display_date(at, DEFAULT_DATE_FORMAT));
    }

    #[test]
    fn test_serde_schema() {
        let entry = JournalEntry {
            id: 1733054400000,
            created_at: noon(2024, 12, 1),
            display_date: "12/01/2024".to_string(),
            text: "hello".to_string(),
            mood: MoodLevel::new(4),
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["createdAt"], "2024-12-01T12:00:00Z");
        assert_eq!(json["displayDate"], "12/01/2024");
        assert_eq!(json["mood"], 4);
    }

    #[test]
    fn test_deserialize_legacy_field_names() {
        let json = r#"{"id":1,"date":"12/1/2024","timestamp":"2024-12-01T10:00:00.000Z","text":"hi","mood":null}"#;
        let entry: JournalEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.display_date, "12/1/2024");
        assert!(entry.mood.is_none());
    }

    #[test]
    fn test_deserialize_rejects_out_of_range_mood() {
        let json = r#"{"id":1,"displayDate":"x","createdAt":"2024-12-01T10:00:00Z","text":"","mood":9}"#;
        assert!(serde_json::from_str::<JournalEntry>(json).is_err());
    }
}
