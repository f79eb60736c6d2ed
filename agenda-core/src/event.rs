//! Calendar event types.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};

/// A stored calendar event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Store-assigned identifier. Unique, immutable, never reused after
    /// deletion.
    pub id: u32,
    pub title: String,
    /// Calendar day the event falls on. Only the day matters for conflict
    /// detection; any time-of-day in the incoming JSON is dropped.
    #[serde(deserialize_with = "date_only")]
    pub date: NaiveDate,
    /// Wall-clock start encoded as "HH:MM". May be empty or malformed;
    /// the store never rejects it.
    pub time: String,
    /// Length in minutes. Zero or negative is treated as 60 wherever the
    /// duration is consumed.
    pub duration_minutes: i32,
    pub description: Option<String>,
}

/// Event fields without an id: what callers submit on create/update, and
/// the candidate handed to the overlap check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDraft {
    pub title: String,
    #[serde(deserialize_with = "date_only")]
    pub date: NaiveDate,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub duration_minutes: i32,
    #[serde(default)]
    pub description: Option<String>,
}

impl EventDraft {
    /// Promote the draft to a stored event under `id`.
    pub fn into_event(self, id: u32) -> Event {
        Event {
            id,
            title: self.title,
            date: self.date,
            time: self.time,
            duration_minutes: self.duration_minutes,
            description: self.description,
        }
    }
}

/// Parse a date string, accepting either a bare date ("2025-03-19") or a
/// full datetime (RFC 3339, or naive "2025-03-19T10:00[:00]"). The
/// time-of-day portion is discarded.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M"))
        .ok()
        .map(|dt| dt.date())
}

fn date_only<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_date(&raw).ok_or_else(|| {
        serde::de::Error::custom(format!("Invalid date '{}'. Expected YYYY-MM-DD", raw))
    })
}
