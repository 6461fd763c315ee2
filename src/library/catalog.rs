use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::PlayerError;

use super::model::{Track, display_name_for};
use super::probe::MetadataReader;

/// Insertion-ordered set of tracks keyed by display name.
#[derive(Debug, Default)]
pub struct Catalog {
    tracks: Vec<Track>,
    by_name: HashMap<String, usize>,
}

/// What happened to each path handed to [`Catalog::add_files`].
#[derive(Debug, Default)]
pub struct AddReport {
    pub added: Vec<String>,
    /// Valid files whose display name was already taken.
    pub duplicates: Vec<PathBuf>,
    pub rejected: Vec<PlayerError>,
}

impl AddReport {
    /// One-line summary for the status bar.
    pub fn summary(&self) -> String {
        let mut parts = vec![format!("added {}", self.added.len())];
        if !self.duplicates.is_empty() {
            parts.push(format!("{} already listed", self.duplicates.len()));
        }
        if !self.rejected.is_empty() {
            parts.push(format!("{} skipped (not valid MP3)", self.rejected.len()));
        }
        parts.join(", ")
    }
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and insert each path. Invalid files are logged and skipped,
    /// names already present are left untouched.
    pub fn add_files<P: AsRef<Path>>(
        &mut self,
        paths: &[P],
        reader: &dyn MetadataReader,
    ) -> AddReport {
        let mut report = AddReport::default();

        for path in paths {
            let path = path.as_ref();
            let duration = match reader.read_duration(path) {
                Ok(d) => d,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "skipping invalid MP3");
                    report.rejected.push(e);
                    continue;
                }
            };

            let name = display_name_for(path);
            if self.by_name.contains_key(&name) {
                debug!(%name, "already in catalog");
                report.duplicates.push(path.to_path_buf());
                continue;
            }

            self.by_name.insert(name.clone(), self.tracks.len());
            self.tracks.push(Track::from_path(path, duration));
            report.added.push(name);
        }

        report
    }

    /// Look a track up by display name.
    pub fn resolve(&self, display_name: &str) -> Option<&Track> {
        self.by_name.get(display_name).map(|&i| &self.tracks[i])
    }

    /// Track at a position of the visible order.
    pub fn get(&self, index: usize) -> Option<&Track> {
        self.tracks.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Track> {
        self.tracks.iter()
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }
}
