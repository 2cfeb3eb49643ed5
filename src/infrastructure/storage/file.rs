//! File-backed storage.
//!
//! Each key maps to one `<key>.json` file under the data directory. Files
//! are read and replaced whole; there is no locking, matching the
//! single-user model.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::domain::storage::Storage;
use crate::shared::error::AppError;

/// Storage rooted at a local data directory.
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    /// Open storage at `root`, creating the directory if needed.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, AppError> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    /// The directory this storage reads and writes.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

impl Storage for FileStorage {
    fn read(&self, key: &str) -> Result<Option<String>, AppError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AppError::Storage(e)),
        }
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), AppError> {
        fs::write(self.path_for(key), value)?;
        Ok(())
    }
}
