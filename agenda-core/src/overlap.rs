//! Conflict detection between a candidate event and stored events.
//!
//! Two events conflict when they fall on the same calendar day and their
//! `[start, end)` intervals intersect. The half-open rule means back-to-back
//! meetings (one ending exactly when the next starts) do not conflict.

use chrono::{Duration, NaiveDate, NaiveDateTime};

use crate::event::EventDraft;
use crate::store::EventStore;

/// Parse a "HH:MM" wall-clock string into minutes since midnight.
///
/// Only the shape is checked, not the range: "25:00" parses to 1500 and
/// spills into the next day when turned into a timestamp. Empty or
/// non-numeric input returns `None`.
pub fn parse_hhmm(time: &str) -> Option<i64> {
    let (hours, minutes) = time.split_once(':')?;
    let hours: i64 = hours.parse().ok()?;
    let minutes: i64 = minutes.parse().ok()?;
    // Extreme hour values fit in i64 but overflow the minute count
    hours.checked_mul(60)?.checked_add(minutes)
}

/// Duration in minutes, falling back to 60 for zero or negative values.
pub fn effective_duration(minutes: i32) -> Duration {
    if minutes <= 0 {
        Duration::minutes(60)
    } else {
        Duration::minutes(i64::from(minutes))
    }
}

/// The `[start, end)` interval an event occupies, or `None` when its time
/// string does not parse (such an event cannot take part in a conflict).
fn event_span(
    date: NaiveDate,
    time: &str,
    duration_minutes: i32,
) -> Option<(NaiveDateTime, NaiveDateTime)> {
    let offset = Duration::try_minutes(parse_hhmm(time)?)?;
    let start = date.and_hms_opt(0, 0, 0)?.checked_add_signed(offset)?;
    let end = start.checked_add_signed(effective_duration(duration_minutes))?;
    Some((start, end))
}

impl EventStore {
    /// Whether `candidate` intersects any stored event on the same calendar
    /// day, skipping the event under `exclude_id` (the one being updated,
    /// so it cannot conflict with its own prior state).
    ///
    /// Never fails: a candidate whose time cannot be parsed yields `false`
    /// (its start cannot be computed, so no conflict can be shown), and
    /// stored events with missing or malformed times are skipped.
    pub fn overlaps(&self, candidate: &EventDraft, exclude_id: Option<u32>) -> bool {
        let Some((cand_start, cand_end)) =
            event_span(candidate.date, &candidate.time, candidate.duration_minutes)
        else {
            return false;
        };

        self.read().values().any(|event| {
            if Some(event.id) == exclude_id || event.date != candidate.date {
                return false;
            }
            match event_span(event.date, &event.time, event.duration_minutes) {
                Some((other_start, other_end)) => {
                    other_start < cand_end && other_end > cand_start
                }
                None => false,
            }
        })
    }
}
