//! Directory-backed command queue.

use chrono::Local;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::config::{ENTRY_EXTENSION, ENTRY_PREFIX, ENTRY_TIMESTAMP_FORMAT};
use crate::error::{RelayError, Result};
use crate::model::ShapeCommand;
use crate::store::CommandQueue;

/// Command queue persisted as one JSON file per entry in a directory.
///
/// Entries are named `command_<YYYYMMDD_HHMMSS>.json`. The timestamp has
/// second resolution, so two commands enqueued within the same wall-clock
/// second collide and the second silently overwrites the first. This is a
/// known limitation of the format, kept deliberately; see
/// [`DirStore::enqueue_stamped`] for the deterministic variant.
#[derive(Debug, Clone)]
pub struct DirStore {
    dir: PathBuf,
}

impl DirStore {
    /// Create a store over a directory. The directory itself is created
    /// lazily on first enqueue or listing.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The backing directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Persist a command under an explicit timestamp stamp.
    ///
    /// This is the write path behind [`CommandQueue::enqueue`], exposed so
    /// the same-second collision behavior is deterministic to exercise: a
    /// repeated stamp overwrites the earlier entry and the second command's
    /// body survives.
    pub fn enqueue_stamped(&self, command: &ShapeCommand, stamp: &str) -> Result<String> {
        self.ensure_dir()?;

        let id = format!("{}{}.{}", ENTRY_PREFIX, stamp, ENTRY_EXTENSION);
        let body = serde_json::to_string_pretty(command)?;
        fs::write(self.entry_path(&id), body)?;

        tracing::debug!("enqueued {} ({})", id, command.shape);
        Ok(id)
    }

    fn ensure_dir(&self) -> Result<()> {
        fs::create_dir_all(&self.dir).map_err(|source| RelayError::StoreUnavailable {
            path: self.dir.clone(),
            source,
        })
    }

    fn entry_path(&self, id: &str) -> PathBuf {
        self.dir.join(id)
    }
}

impl CommandQueue for DirStore {
    fn enqueue(&self, command: &ShapeCommand) -> Result<String> {
        let stamp = Local::now().format(ENTRY_TIMESTAMP_FORMAT).to_string();
        self.enqueue_stamped(command, &stamp)
    }

    fn list_pending(&self) -> Result<Vec<String>> {
        self.ensure_dir()?;

        let entries = fs::read_dir(&self.dir).map_err(|source| RelayError::StoreUnavailable {
            path: self.dir.clone(),
            source,
        })?;

        let suffix = format!(".{}", ENTRY_EXTENSION);
        let mut ids = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| RelayError::StoreUnavailable {
                path: self.dir.clone(),
                source,
            })?;
            let name = entry.file_name().to_string_lossy().into_owned();
            if name.ends_with(&suffix) {
                ids.push(name);
            }
        }

        // Directory order is platform-dependent; sort for a stable listing.
        // No processing-order guarantee is implied.
        ids.sort();
        Ok(ids)
    }

    fn read(&self, id: &str) -> Result<ShapeCommand> {
        let body = match fs::read_to_string(self.entry_path(id)) {
            Ok(body) => body,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Err(RelayError::EntryNotFound { id: id.to_string() })
            }
            Err(err) => return Err(err.into()),
        };

        serde_json::from_str(&body).map_err(|source| RelayError::MalformedEntry {
            id: id.to_string(),
            source,
        })
    }

    fn remove(&self, id: &str) -> Result<()> {
        match fs::remove_file(self.entry_path(id)) {
            Ok(()) => {
                tracing::debug!("removed {}", id);
                Ok(())
            }
            // Already gone: removal is idempotent.
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn sample_command() -> ShapeCommand {
        let mut cmd = ShapeCommand::new("circle");
        cmd.parameters.insert("radius".to_string(), 5.0.into());
        cmd.plane = Some("XY".to_string());
        cmd
    }

    // ==================== round-trip tests ====================

    #[test]
    fn test_enqueue_read_round_trip() {
        let tmp = TempDir::new().unwrap();
        let store = DirStore::new(tmp.path().join("commands"));

        let cmd = sample_command();
        let id = store.enqueue(&cmd).unwrap();
        assert_eq!(store.read(&id).unwrap(), cmd);
    }

    #[test]
    fn test_entry_naming() {
        let tmp = TempDir::new().unwrap();
        let store = DirStore::new(tmp.path());

        let id = store
            .enqueue_stamped(&sample_command(), "20250101_120000")
            .unwrap();
        assert_eq!(id, "command_20250101_120000.json");
    }

    // ==================== collision tests ====================

    #[test]
    fn test_same_stamp_overwrites_silently() {
        let tmp = TempDir::new().unwrap();
        let store = DirStore::new(tmp.path());

        let first = sample_command();
        let mut second = ShapeCommand::new("rectangle");
        second.parameters.insert("width".to_string(), 10.into());

        let id_a = store.enqueue_stamped(&first, "20250101_120000").unwrap();
        let id_b = store.enqueue_stamped(&second, "20250101_120000").unwrap();

        assert_eq!(id_a, id_b);
        assert_eq!(store.list_pending().unwrap().len(), 1);
        assert_eq!(store.read(&id_b).unwrap(), second);
    }

    // ==================== listing tests ====================

    #[test]
    fn test_list_pending_creates_missing_dir() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("not_yet_there");
        let store = DirStore::new(&dir);

        assert_eq!(store.list_pending().unwrap(), Vec::<String>::new());
        assert!(dir.is_dir());
    }

    #[test]
    fn test_list_pending_filters_by_extension() {
        let tmp = TempDir::new().unwrap();
        let store = DirStore::new(tmp.path());

        let id = store
            .enqueue_stamped(&sample_command(), "20250101_120000")
            .unwrap();
        fs::write(tmp.path().join("notes.txt"), "not an entry").unwrap();

        assert_eq!(store.list_pending().unwrap(), vec![id]);
    }

    // ==================== read/remove tests ====================

    #[test]
    fn test_read_missing_is_typed_not_found() {
        let tmp = TempDir::new().unwrap();
        let store = DirStore::new(tmp.path());

        let err = store.read("command_19990101_000000.json").unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_read_malformed_entry() {
        let tmp = TempDir::new().unwrap();
        let store = DirStore::new(tmp.path());
        fs::write(tmp.path().join("command_x.json"), "{ not json").unwrap();

        let err = store.read("command_x.json").unwrap_err();
        assert!(matches!(err, RelayError::MalformedEntry { .. }));
    }

    #[test]
    fn test_remove_is_idempotent() {
        let tmp = TempDir::new().unwrap();
        let store = DirStore::new(tmp.path());

        let id = store.enqueue(&sample_command()).unwrap();
        store.remove(&id).unwrap();
        store.remove(&id).unwrap();
        assert!(store.read(&id).unwrap_err().is_not_found());
    }
}
