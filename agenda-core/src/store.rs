//! In-memory event storage with monotonic id assignment.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::event::{Event, EventDraft};

/// Process-wide store of calendar events keyed by id.
///
/// Ids come from an atomic counter held separately from the map lock, so
/// concurrent inserts each receive a distinct increasing id and no insert
/// is lost. Deleted ids are never reused.
///
/// Each operation is atomic in isolation. The check-overlap-then-insert
/// sequence a caller performs is NOT atomic as a whole: two racing creates
/// can both pass the overlap check against the same state and both land.
pub struct EventStore {
    events: RwLock<HashMap<u32, Event>>,
    next_id: AtomicU32,
}

impl Default for EventStore {
    fn default() -> Self {
        Self::new()
    }
}

impl EventStore {
    /// Empty store whose first assigned id is 1.
    pub fn new() -> Self {
        Self::with_first_id(1)
    }

    /// Empty store whose first assigned id is `first_id`. Useful for test
    /// isolation when several stores coexist.
    pub fn with_first_id(first_id: u32) -> Self {
        EventStore {
            events: RwLock::new(HashMap::new()),
            next_id: AtomicU32::new(first_id),
        }
    }

    /// Add a new event, returning its assigned id.
    pub fn insert(&self, draft: EventDraft) -> u32 {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.write().insert(id, draft.into_event(id));
        id
    }

    /// Point lookup. Absence is a normal outcome, not an error.
    pub fn get(&self, id: u32) -> Option<Event> {
        self.read().get(&id).cloned()
    }

    /// All events, ordered by date then by start time. The "HH:MM" encoding
    /// is fixed-width zero-padded, so the lexical tiebreak is chronological.
    pub fn all(&self) -> Vec<Event> {
        let events = self.read().values().cloned().collect();
        chronological(events)
    }

    /// Replace every field of the event under `id` except the id itself.
    /// Returns false when the id is not present.
    pub fn update(&self, id: u32, draft: EventDraft) -> bool {
        match self.write().get_mut(&id) {
            Some(slot) => {
                *slot = draft.into_event(id);
                true
            }
            None => false,
        }
    }

    /// Remove the event under `id` if present, returning whether a removal
    /// occurred. The id is not freed for reuse.
    pub fn remove(&self, id: u32) -> bool {
        self.write().remove(&id).is_some()
    }

    /// Number of stored events.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Case-insensitive substring search over title and description,
    /// ordered like `all()`.
    pub fn search(&self, query: &str) -> Vec<Event> {
        let needle = query.to_lowercase();
        let events = self
            .read()
            .values()
            .filter(|e| {
                e.title.to_lowercase().contains(&needle)
                    || e.description
                        .as_deref()
                        .is_some_and(|d| d.to_lowercase().contains(&needle))
            })
            .cloned()
            .collect();
        chronological(events)
    }

    // A poisoned lock only means some holder panicked; the map itself is
    // never left mid-mutation by our operations, so keep going.
    pub(crate) fn read(&self) -> RwLockReadGuard<'_, HashMap<u32, Event>> {
        self.events.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<u32, Event>> {
        self.events.write().unwrap_or_else(|e| e.into_inner())
    }
}

fn chronological(mut events: Vec<Event>) -> Vec<Event> {
    events.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.time.cmp(&b.time)));
    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::sync::Arc;

    fn draft(date: &str, time: &str) -> EventDraft {
        EventDraft {
            title: "Standup".to_string(),
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            time: time.to_string(),
            duration_minutes: 60,
            description: None,
        }
    }

    #[test]
    fn test_insert_assigns_sequential_ids_from_one() {
        let store = EventStore::new();
        assert_eq!(store.insert(draft("2025-03-19", "10:00")), 1);
        assert_eq!(store.insert(draft("2025-03-19", "12:00")), 2);
        assert_eq!(store.insert(draft("2025-03-20", "09:00")), 3);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_first_id_offset() {
        let store = EventStore::with_first_id(100);
        assert_eq!(store.insert(draft("2025-03-19", "10:00")), 100);
        assert_eq!(store.insert(draft("2025-03-19", "12:00")), 101);
    }

    #[test]
    fn test_get_is_idempotent() {
        let store = EventStore::new();
        let id = store.insert(draft("2025-03-19", "10:00"));
        let first = store.get(id);
        let second = store.get(id);
        assert!(first.is_some());
        assert_eq!(first, second);
        assert_eq!(store.get(999), None);
    }

    #[test]
    fn test_update_replaces_fields_and_keeps_id() {
        let store = EventStore::new();
        let id = store.insert(draft("2025-03-19", "10:00"));

        let mut replacement = draft("2025-04-01", "15:30");
        replacement.title = "Retro".to_string();
        replacement.description = Some("Quarterly".to_string());
        assert!(store.update(id, replacement));

        let stored = store.get(id).unwrap();
        assert_eq!(stored.id, id);
        assert_eq!(stored.title, "Retro");
        assert_eq!(stored.time, "15:30");
        assert_eq!(stored.description.as_deref(), Some("Quarterly"));
    }

    #[test]
    fn test_update_missing_returns_false() {
        let store = EventStore::new();
        assert!(!store.update(42, draft("2025-03-19", "10:00")));
        assert!(store.is_empty());
    }

    #[test]
    fn test_remove_and_no_id_reuse() {
        let store = EventStore::new();
        let id = store.insert(draft("2025-03-19", "10:00"));
        assert!(store.remove(id));
        assert!(!store.remove(id));
        assert_eq!(store.get(id), None);

        // Counter never rewinds after a delete
        let next = store.insert(draft("2025-03-19", "10:00"));
        assert!(next > id);
    }

    #[test]
    fn test_all_is_ordered_by_date_then_time() {
        let store = EventStore::new();
        store.insert(draft("2025-03-20", "09:00"));
        store.insert(draft("2025-03-19", "14:00"));
        store.insert(draft("2025-03-19", "08:30"));
        store.insert(draft("2025-03-21", "00:15"));

        let keys: Vec<(String, String)> = store
            .all()
            .into_iter()
            .map(|e| (e.date.to_string(), e.time))
            .collect();
        assert_eq!(
            keys,
            vec![
                ("2025-03-19".to_string(), "08:30".to_string()),
                ("2025-03-19".to_string(), "14:00".to_string()),
                ("2025-03-20".to_string(), "09:00".to_string()),
                ("2025-03-21".to_string(), "00:15".to_string()),
            ]
        );
    }

    #[test]
    fn test_search_matches_title_and_description() {
        let store = EventStore::new();
        store.insert(EventDraft {
            title: "Dentist".to_string(),
            description: None,
            ..draft("2025-03-19", "10:00")
        });
        store.insert(EventDraft {
            title: "Planning".to_string(),
            description: Some("Bring the DENTAL plan docs".to_string()),
            ..draft("2025-03-20", "11:00")
        });
        store.insert(draft("2025-03-21", "09:00"));

        let hits = store.search("dent");
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].title, "Dentist");
        assert_eq!(hits[1].title, "Planning");

        assert!(store.search("nothing-matches").is_empty());
    }

    #[test]
    fn test_concurrent_inserts_get_distinct_contiguous_ids() {
        let store = Arc::new(EventStore::new());
        let threads = 8;
        let per_thread = 50;

        let handles: Vec<_> = (0..threads)
            .map(|_| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || {
                    (0..per_thread)
                        .map(|_| store.insert(draft("2025-03-19", "10:00")))
                        .collect::<Vec<u32>>()
                })
            })
            .collect();

        let mut ids: Vec<u32> = handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect();
        ids.sort_unstable();

        let total = threads * per_thread;
        assert_eq!(store.len(), total);
        assert_eq!(ids.len(), total);
        // Distinct and gap-free: exactly 1..=total
        assert_eq!(ids, (1..=total as u32).collect::<Vec<u32>>());
    }
}
