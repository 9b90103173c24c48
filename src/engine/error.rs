use crate::model::{BookingId, TimeOfDay};

/// Error taxonomy of the scheduling service. The `Display` text of the
/// first three variants is surfaced to the end user verbatim by the client
/// layer; storage failures are logged and genericized instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Malformed, missing, or out-of-range input. Caller's fault; no retry.
    Validation(&'static str),
    /// The requested interval overlaps an existing booking in the same room
    /// on the same date. Carries the first conflicting record's time range.
    Conflict { start: TimeOfDay, end: TimeOfDay },
    /// Stale booking id; the caller should refresh its view.
    NotFound(BookingId),
    /// Snapshot I/O failed. Fatal for the current command; nothing was
    /// mutated.
    Storage(String),
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineError::Validation(msg) => f.write_str(msg),
            EngineError::Conflict { start, end } => {
                write!(f, "This room is already booked from {start} to {end}.")
            }
            EngineError::NotFound(_) => f.write_str("Booking not found."),
            EngineError::Storage(e) => write!(f, "storage error: {e}"),
        }
    }
}

impl std::error::Error for EngineError {}

impl From<std::io::Error> for EngineError {
    fn from(e: std::io::Error) -> Self {
        EngineError::Storage(e.to_string())
    }
}
