//! Reward history entries
//!
//! Each rewarded action leaves one entry. Entries snapshot the action's
//! description and points at the time of the award.

use std::fmt::Display;

use chrono::{DateTime, Local, SubsecRound, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use super::actions::RewardAction;

/// Maximum number of history entries kept (newest first)
pub const HISTORY_LIMIT: usize = 50;

/// A single past reward grant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Action description at the time of the award
    pub action: String,
    pub points: u32,
    #[serde(with = "iso_millis")]
    pub timestamp: DateTime<Utc>,
}

impl HistoryEntry {
    /// Create an entry for `action` stamped with the current time
    pub fn now(action: RewardAction) -> Self {
        Self::at(action, Utc::now())
    }

    /// Create an entry for `action` stamped with `at`.
    ///
    /// The timestamp is truncated to millisecond precision, the precision of
    /// the stored format.
    pub fn at(action: RewardAction, at: DateTime<Utc>) -> Self {
        let def = action.definition();
        Self {
            action: def.description.to_string(),
            points: def.points,
            timestamp: at.trunc_subsecs(3),
        }
    }

    /// Display form of the timestamp in the local time zone
    pub fn display_time(&self) -> String {
        format_timestamp_in(&self.timestamp, &Local)
    }
}

/// Prepend `entry` and drop everything past [`HISTORY_LIMIT`]
pub fn push_capped(history: &[HistoryEntry], entry: HistoryEntry) -> Vec<HistoryEntry> {
    std::iter::once(entry)
        .chain(history.iter().cloned())
        .take(HISTORY_LIMIT)
        .collect()
}

/// Format a timestamp as month/day and hour:minute, e.g. `10月16日 14:05`
pub fn format_timestamp_in<Tz>(ts: &DateTime<Utc>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    ts.with_timezone(tz).format("%-m月%-d日 %H:%M").to_string()
}

/// ISO-8601 with millisecond precision and a `Z` suffix
mod iso_millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(ts: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&ts.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(d)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|ts| ts.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    fn ts(secs: i64) -> DateTime<Utc> {
        DateTime::from_timestamp(secs, 0).unwrap()
    }

    #[test]
    fn test_entry_snapshots_action() {
        let entry = HistoryEntry::at(RewardAction::CompleteDeck, ts(1_700_000_000));
        assert_eq!(entry.action, "完成一个卡片集");
        assert_eq!(entry.points, 20);
    }

    #[test]
    fn test_timestamp_wire_format() {
        let entry = HistoryEntry::at(RewardAction::DailyLogin, ts(1_700_000_000));
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["timestamp"], "2023-11-14T22:13:20.000Z");
        assert_eq!(json["action"], "每日登录");
        assert_eq!(json["points"], 10);
    }

    #[test]
    fn test_timestamp_truncated_to_millis() {
        let precise = DateTime::from_timestamp(1_700_000_000, 123_456_789).unwrap();
        let entry = HistoryEntry::at(RewardAction::DailyLogin, precise);
        let raw = serde_json::to_string(&entry).unwrap();
        let back: HistoryEntry = serde_json::from_str(&raw).unwrap();
        assert_eq!(back, entry);
        assert_eq!(entry.timestamp.timestamp_subsec_millis(), 123);
    }

    #[test]
    fn test_accepts_offset_timestamps() {
        let raw = r#"{"action":"每日登录","points":10,"timestamp":"2024-03-01T08:00:00+08:00"}"#;
        let entry: HistoryEntry = serde_json::from_str(raw).unwrap();
        assert_eq!(entry.timestamp, ts(1_709_251_200));
    }

    #[test]
    fn test_push_capped_keeps_newest_first() {
        let mut history = Vec::new();
        for i in 0..(HISTORY_LIMIT as i64 + 5) {
            history = push_capped(&history, HistoryEntry::at(RewardAction::CompleteCard, ts(i)));
        }
        assert_eq!(history.len(), HISTORY_LIMIT);
        assert_eq!(history[0].timestamp, ts(54));
        assert_eq!(history[HISTORY_LIMIT - 1].timestamp, ts(5));
    }

    #[test]
    fn test_format_timestamp() {
        let beijing = FixedOffset::east_opt(8 * 3600).unwrap();
        // 2023-11-14T22:13:20Z is 06:13 on the 15th in UTC+8
        assert_eq!(format_timestamp_in(&ts(1_700_000_000), &beijing), "11月15日 06:13");
        assert_eq!(format_timestamp_in(&ts(1_700_000_000), &Utc), "11月14日 22:13");
    }
}
