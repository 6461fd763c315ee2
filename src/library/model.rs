use std::path::{Path, PathBuf};
use std::time::Duration;

/// One playable MP3 in the catalog, keyed by its file name.
#[derive(Debug, Clone, PartialEq)]
pub struct Track {
    pub display_name: String,
    pub path: PathBuf,
    /// Length read at import time, used for the list only.
    pub duration: Duration,
}

impl Track {
    /// Build a track for `path`, naming it after the file's basename.
    pub fn from_path(path: &Path, duration: Duration) -> Self {
        Self {
            display_name: display_name_for(path),
            path: path.to_path_buf(),
            duration,
        }
    }
}

/// The catalog key for `path`: its basename, extension included.
pub fn display_name_for(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
