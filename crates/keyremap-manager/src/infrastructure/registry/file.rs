//! Raw blob file store.
//!
//! Holds exactly the bytes that would go into the registry value.  A
//! missing file is treated like a missing registry value.

use std::path::{Path, PathBuf};

use tracing::info;

use super::{ScancodeMapStore, StoreError};

/// A [`ScancodeMapStore`] backed by a file on disk.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn error(&self, source: std::io::Error) -> StoreError {
        StoreError::from_io(self.location(), source)
    }
}

impl ScancodeMapStore for FileStore {
    fn read(&self) -> Result<Option<Vec<u8>>, StoreError> {
        match std::fs::read(&self.path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(self.error(e)),
        }
    }

    fn write(&self, blob: &[u8]) -> Result<(), StoreError> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir).map_err(|e| self.error(e))?;
        }
        std::fs::write(&self.path, blob).map_err(|e| self.error(e))?;
        info!(path = %self.path.display(), bytes = blob.len(), "wrote scancode map file");
        Ok(())
    }

    fn delete(&self) -> Result<bool, StoreError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => {
                info!(path = %self.path.display(), "deleted scancode map file");
                Ok(true)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(self.error(e)),
        }
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
