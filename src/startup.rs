//! Application Startup
//!
//! Wires settings to a storage backend and an opened store.

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::application::Store;
use crate::config::Settings;
use crate::infrastructure::storage::FileStorage;

/// Application instance
pub struct Application {
    pub store: Store,
    data_dir: PathBuf,
}

impl Application {
    /// Build the application from settings.
    ///
    /// `data_dir_override` (the `--data-dir` flag) wins over configured
    /// and default locations.
    pub fn build(settings: &Settings, data_dir_override: Option<PathBuf>) -> Result<Self> {
        let data_dir = data_dir_override.unwrap_or_else(|| settings.data_dir());

        let storage = FileStorage::open(&data_dir)?;
        tracing::debug!(path = %data_dir.display(), "Opened storage directory");

        let store = Store::open(Box::new(storage))?;

        Ok(Self { store, data_dir })
    }

    /// The directory holding the state files.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
