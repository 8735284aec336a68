use super::{StorageError, StorageSlot};
use std::fs;
use std::io;
use std::path::PathBuf;

/// File-backed storage slot: one payload per file.
///
/// A missing file is an empty slot, not an error; every other IO failure
/// is surfaced to the store, which decides how to degrade.
pub struct FileSlot {
    path: PathBuf,
}

impl FileSlot {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "slot".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl StorageSlot for FileSlot {
    fn read(&self) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(&self.path) {
            Ok(payload) => Ok(Some(payload)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&self, payload: &str) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        // Write to a sibling temp file first, then rename over the slot,
        // so a crash mid-write cannot leave a truncated payload behind.
        let tmp = self.tmp_path();
        fs::write(&tmp, payload)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}
