use chrono::NaiveDate;

use crate::model::{Booking, BookingId, RoomId, Span, TimeOfDay};

use super::EngineError;

/// Validate a booking's time range and return it as a span.
///
/// Order matters: end-before-start is the caller's most common mistake and
/// its message is checked first, then the bookable window, then the
/// quarter-step alignment the booking form normally guarantees.
pub(crate) fn validate_times(
    start: TimeOfDay,
    end: TimeOfDay,
    window: &Span,
) -> Result<Span, EngineError> {
    if end <= start {
        return Err(EngineError::Validation("End time must be after start time."));
    }
    if start.minutes() < window.start || end.minutes() > window.end {
        return Err(EngineError::Validation(
            "Booking must be within bookable hours (07:00-22:00).",
        ));
    }
    if !start.on_quarter_step() || !end.on_quarter_step() {
        return Err(EngineError::Validation("Times must be on 15-minute steps."));
    }
    Ok(Span::new(start.minutes(), end.minutes()))
}

/// First booking in storage order whose `[start, end)` interval overlaps
/// `span` in the same room on the same date. `exclude` skips the record
/// being updated so it never conflicts with itself.
pub(crate) fn find_conflict<'a>(
    bookings: &'a [Booking],
    room_id: RoomId,
    date: NaiveDate,
    span: &Span,
    exclude: Option<BookingId>,
) -> Option<&'a Booking> {
    bookings.iter().find(|b| {
        exclude != Some(b.id) && b.room_id == room_id && b.date == date && b.span().overlaps(span)
    })
}
