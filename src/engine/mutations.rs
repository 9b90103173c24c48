use tracing::{debug, info};

use crate::model::{Booking, BookingDraft, BookingId, BookingPatch};
use crate::observability;

use super::conflict::{find_conflict, validate_times};
use super::{Engine, EngineError};

impl Engine {
    /// Create a booking from a client draft.
    ///
    /// Validation order is part of the contract: missing fields, unknown
    /// room, time-range checks, then the overlap scan. Nothing is persisted
    /// unless every check passes.
    pub async fn create_booking(&self, draft: BookingDraft) -> Result<Booking, EngineError> {
        let job_name = draft.job_name.filter(|j| !j.trim().is_empty());
        let (
            Some(room_id),
            Some(date),
            Some(start_time),
            Some(end_time),
            Some(meeting_type),
            Some(job_name),
        ) = (
            draft.room_id,
            draft.date,
            draft.start_time,
            draft.end_time,
            draft.meeting_type,
            job_name,
        )
        else {
            return Err(EngineError::Validation("Missing required fields."));
        };

        let room = self
            .room(room_id)
            .ok_or(EngineError::Validation("Invalid room."))?;
        let span = validate_times(start_time, end_time, &self.window)?;

        let store = self.store.write().await;
        let mut snapshot = store.load()?;

        if let Some(hit) = find_conflict(&snapshot.bookings, room_id, date, &span, None) {
            metrics::counter!(observability::CONFLICTS_TOTAL).increment(1);
            debug!("create rejected: room {room_id} on {date} clashes with booking {}", hit.id);
            return Err(EngineError::Conflict {
                start: hit.start_time,
                end: hit.end_time,
            });
        }

        let id = snapshot.last_id + 1;
        let booking = Booking {
            id,
            room_id,
            room_name: room.name.clone(),
            date,
            start_time,
            end_time,
            meeting_type,
            job_name,
            booker: draft.booker.unwrap_or_default(),
            people_count: draft.people_count,
        };
        snapshot.last_id = id;
        snapshot.bookings.push(booking.clone());
        Self::persist(&store, &snapshot)?;

        metrics::counter!(observability::BOOKINGS_CREATED_TOTAL).increment(1);
        info!(
            "booked {} on {date} {start_time}-{end_time} (id {id})",
            booking.room_name
        );
        Ok(booking)
    }

    /// Merge a patch over an existing booking and re-validate the result.
    /// Drag-move is this operation fed a position-only patch.
    pub async fn update_booking(
        &self,
        id: BookingId,
        patch: BookingPatch,
    ) -> Result<Booking, EngineError> {
        let store = self.store.write().await;
        let mut snapshot = store.load()?;
        let idx = snapshot
            .bookings
            .iter()
            .position(|b| b.id == id)
            .ok_or(EngineError::NotFound(id))?;

        // Omitted fields keep their prior values; an empty job name counts
        // as omitted, matching the form's behavior.
        let existing = &snapshot.bookings[idx];
        let room_id = patch.room_id.unwrap_or(existing.room_id);
        let date = patch.date.unwrap_or(existing.date);
        let start_time = patch.start_time.unwrap_or(existing.start_time);
        let end_time = patch.end_time.unwrap_or(existing.end_time);
        let meeting_type = patch.meeting_type.unwrap_or(existing.meeting_type);
        let job_name = patch
            .job_name
            .filter(|j| !j.trim().is_empty())
            .unwrap_or_else(|| existing.job_name.clone());
        let booker = patch.booker.unwrap_or_else(|| existing.booker.clone());
        let people_count = match patch.people_count {
            Some(value) => value, // explicit null/empty already collapsed to None
            None => existing.people_count,
        };

        let room = self
            .room(room_id)
            .ok_or(EngineError::Validation("Invalid room."))?;
        let span = validate_times(start_time, end_time, &self.window)?;

        if let Some(hit) = find_conflict(&snapshot.bookings, room_id, date, &span, Some(id)) {
            metrics::counter!(observability::CONFLICTS_TOTAL).increment(1);
            debug!("update {id} rejected: clashes with booking {}", hit.id);
            return Err(EngineError::Conflict {
                start: hit.start_time,
                end: hit.end_time,
            });
        }

        let updated = Booking {
            id,
            room_id,
            room_name: room.name.clone(),
            date,
            start_time,
            end_time,
            meeting_type,
            job_name,
            booker,
            people_count,
        };
        snapshot.bookings[idx] = updated.clone();
        Self::persist(&store, &snapshot)?;

        metrics::counter!(observability::BOOKINGS_UPDATED_TOTAL).increment(1);
        info!("updated booking {id}: {} on {date} {start_time}-{end_time}", updated.room_name);
        Ok(updated)
    }

    /// Remove a booking permanently. Ids are never reassigned.
    pub async fn delete_booking(&self, id: BookingId) -> Result<(), EngineError> {
        let store = self.store.write().await;
        let mut snapshot = store.load()?;
        let idx = snapshot
            .bookings
            .iter()
            .position(|b| b.id == id)
            .ok_or(EngineError::NotFound(id))?;

        snapshot.bookings.remove(idx);
        Self::persist(&store, &snapshot)?;

        metrics::counter!(observability::BOOKINGS_DELETED_TOTAL).increment(1);
        info!("released booking {id}");
        Ok(())
    }
}
