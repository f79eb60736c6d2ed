//! Core types for the agenda ecosystem.
//!
//! This crate provides everything the HTTP layer builds on:
//! - `Event` and `EventDraft` for calendar events
//! - `EventStore`, the in-memory store with monotonic id assignment
//! - conflict detection between events on the same calendar day

pub mod error;
pub mod event;
pub mod overlap;
pub mod store;

// Re-export the main types at crate root for convenience
pub use error::{AgendaError, AgendaResult};
pub use event::{Event, EventDraft};
pub use store::EventStore;
