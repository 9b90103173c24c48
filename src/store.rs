use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::model::Snapshot;

/// File-backed whole-snapshot store.
///
/// The entire state — `{ "lastId": N, "bookings": [...] }` — is read and
/// rewritten on every command. No incremental format, no indexing: query
/// volume is single-building scale and a linear scan is fine.
pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the persisted snapshot. A missing file is the empty snapshot
    /// (`last_id = 0`); the file first appears on the first successful save.
    pub fn load(&self) -> io::Result<Snapshot> {
        let raw = match fs::read(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Snapshot::default()),
            Err(e) => return Err(e),
        };
        serde_json::from_slice(&raw).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    /// Replace the persisted snapshot: write to a temp file, fsync, then
    /// atomically rename over the target. A crash mid-save leaves the old
    /// snapshot intact.
    pub fn save(&self, snapshot: &Snapshot) -> io::Result<()> {
        let payload = serde_json::to_vec_pretty(snapshot)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        let tmp_path = self.path.with_extension("json.tmp");
        let file = File::create(&tmp_path)?;
        let mut writer = BufWriter::new(file);
        writer.write_all(&payload)?;
        writer.flush()?;
        writer.get_ref().sync_all()?;

        fs::rename(&tmp_path, &self.path)
    }
}
