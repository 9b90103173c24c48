mod conflict;
mod error;
mod mutations;
mod queries;

pub use error::EngineError;
pub use queries::ListFilter;

use std::path::PathBuf;
use std::time::Instant;

use tokio::sync::RwLock;

use crate::grid::GridConfig;
use crate::model::{Room, RoomId, Snapshot, Span};
use crate::observability;
use crate::store::SnapshotStore;

/// Booking scheduling service.
///
/// Every command runs load → validate → save as one critical section behind
/// the store's write lock, so two commands racing for the same room and date
/// serialize and the no-overlap invariant holds under concurrent callers.
/// List queries share the read half: they run concurrently with each other
/// and always see a consistent snapshot.
pub struct Engine {
    rooms: Vec<Room>,
    window: Span,
    store: RwLock<SnapshotStore>,
}

impl Engine {
    pub fn new(data_file: impl Into<PathBuf>, rooms: Vec<Room>) -> Self {
        Self::with_grid(data_file, rooms, &GridConfig::default())
    }

    /// Bind the service window to a non-default grid.
    pub fn with_grid(data_file: impl Into<PathBuf>, rooms: Vec<Room>, grid: &GridConfig) -> Self {
        Self {
            rooms,
            window: grid.service_window(),
            store: RwLock::new(SnapshotStore::new(data_file)),
        }
    }

    /// The static room roster, in fixed display order.
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    fn room(&self, id: RoomId) -> Option<&Room> {
        self.rooms.iter().find(|r| r.id == id)
    }

    /// Timed snapshot save.
    fn persist(store: &SnapshotStore, snapshot: &Snapshot) -> Result<(), EngineError> {
        let start = Instant::now();
        store.save(snapshot)?;
        metrics::histogram!(observability::SNAPSHOT_SAVE_DURATION_SECONDS)
            .record(start.elapsed().as_secs_f64());
        Ok(())
    }
}
