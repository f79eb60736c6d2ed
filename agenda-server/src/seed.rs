//! Fixed sample dataset for local development.

use agenda_core::{EventDraft, EventStore};
use chrono::{Duration, Local};

/// Insert a handful of sample events around today. State is in-memory
/// only, so this runs fresh on every start.
pub fn seed(store: &EventStore) {
    let today = Local::now().date_naive();
    let samples = [
        ("Team standup", 0, "09:30", 15, Some("Daily sync")),
        ("Design review", 0, "11:00", 60, None),
        ("1:1 with Sam", 1, "14:00", 30, None),
        ("Sprint planning", 2, "10:00", 90, Some("Groom the backlog first")),
    ];

    for (title, day_offset, time, minutes, description) in samples {
        store.insert(EventDraft {
            title: title.to_string(),
            date: today + Duration::days(day_offset),
            time: time.to_string(),
            duration_minutes: minutes,
            description: description.map(str::to_string),
        });
    }

    tracing::info!(count = store.len(), "seeded sample events");
}
