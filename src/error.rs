//! Error type shared by the catalog, the audio engine and the coordinator.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlayerError {
    /// The file could not be read or is not an MP3.
    #[error("invalid MP3 file {}: {reason}", path.display())]
    InvalidFile { path: PathBuf, reason: String },

    /// Play was requested with nothing selected and nothing loaded.
    #[error("no track selected")]
    NoSelection,

    /// The audio engine refused to open, load or start playback.
    #[error("audio engine failure: {0}")]
    EngineFailure(String),
}

impl PlayerError {
    pub fn invalid_file(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Self::InvalidFile {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Informational errors are shown as a notice rather than an error dialog.
    pub fn is_notice(&self) -> bool {
        matches!(self, Self::NoSelection)
    }
}

pub type Result<T, E = PlayerError> = std::result::Result<T, E>;
