//! Error types for the agenda ecosystem.

use thiserror::Error;

/// Errors that can occur in agenda operations.
///
/// Absence of an event is never an error here: lookups return `Option` and
/// update/delete return `bool`. This type covers contract violations only,
/// for the HTTP layer to translate into 400-class responses.
#[derive(Error, Debug)]
pub enum AgendaError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type alias for agenda operations.
pub type AgendaResult<T> = Result<T, AgendaError>;
