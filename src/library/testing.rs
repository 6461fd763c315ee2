//! Table-backed [`MetadataReader`] for tests.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::error::{PlayerError, Result};

use super::probe::MetadataReader;

/// Paths it knows are valid MP3s of the given length; anything else is invalid.
/// Clones share the table so a test can break a file after handing it out.
#[derive(Debug, Clone, Default)]
pub struct FakeReader {
    known: Arc<Mutex<HashMap<PathBuf, Duration>>>,
}

impl FakeReader {
    pub fn with(self, path: impl Into<PathBuf>, secs: u64) -> Self {
        self.insert(path, secs);
        self
    }

    pub fn insert(&self, path: impl Into<PathBuf>, secs: u64) {
        self.known
            .lock()
            .unwrap()
            .insert(path.into(), Duration::from_secs(secs));
    }

    pub fn forget(&self, path: impl AsRef<Path>) {
        self.known.lock().unwrap().remove(path.as_ref());
    }
}

impl MetadataReader for FakeReader {
    fn read_duration(&self, path: &Path) -> Result<Duration> {
        self.known
            .lock()
            .unwrap()
            .get(path)
            .copied()
            .ok_or_else(|| PlayerError::invalid_file(path, "unreadable"))
    }
}
