//! The contract the playback coordinator needs from an audio backend.

use std::path::Path;
use std::time::Duration;

use crate::error::Result;

/// A single-track audio output.
///
/// The engine can only start a track from an absolute offset, so seeking is a
/// `load` followed by `play(offset)`.
pub trait AudioEngine: Send {
    /// Open `path` and keep it ready; replaces whatever was loaded.
    fn load(&mut self, path: &Path) -> Result<()>;
    /// Start the loaded track from `start`.
    fn play(&mut self, start: Duration) -> Result<()>;
    fn pause(&mut self);
    fn unpause(&mut self);
    /// `level` is expected in `[0, 1]`.
    fn set_volume(&mut self, level: f32);
    /// True while audio is actually coming out (loaded, not paused, not finished).
    fn is_busy(&self) -> bool;
    /// Position within the current track, when the backend can tell.
    fn elapsed(&self) -> Option<Duration> {
        None
    }
}
