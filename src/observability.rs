//! Metric names recorded through the `metrics` facade. The embedding
//! process decides which recorder (if any) to install.

// ── RED metrics (request-driven) ────────────────────────────────

/// Counter: bookings created.
pub const BOOKINGS_CREATED_TOTAL: &str = "huddle_bookings_created_total";

/// Counter: bookings updated (moves and edits).
pub const BOOKINGS_UPDATED_TOTAL: &str = "huddle_bookings_updated_total";

/// Counter: bookings deleted.
pub const BOOKINGS_DELETED_TOTAL: &str = "huddle_bookings_deleted_total";

/// Counter: create/update attempts refused because the slot was taken.
pub const CONFLICTS_TOTAL: &str = "huddle_conflicts_total";

// ── USE metrics (resource utilization) ──────────────────────────

/// Histogram: snapshot write duration in seconds.
pub const SNAPSHOT_SAVE_DURATION_SECONDS: &str = "huddle_snapshot_save_duration_seconds";
