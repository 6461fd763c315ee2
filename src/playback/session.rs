use crate::library::Track;

use super::clock::format_time_display;

/// Coarse playback status shown in the status bar.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Status {
    #[default]
    Stopped,
    Playing,
    Paused,
    Error,
}

impl Status {
    pub fn label(self) -> &'static str {
        match self {
            Self::Stopped => "Stopped",
            Self::Playing => "Playing",
            Self::Paused => "Paused",
            Self::Error => "Error",
        }
    }
}

/// Everything the UI needs to know about what is playing.
#[derive(Debug, Clone)]
pub struct PlaybackSession {
    pub current: Option<Track>,
    pub duration_secs: f64,
    pub position_secs: u64,
    pub status: Status,
    pub volume: f32,
    /// `MM:SS / MM:SS`, refreshed on play and on every clock tick.
    pub time_display: String,
}

impl Default for PlaybackSession {
    fn default() -> Self {
        Self {
            current: None,
            duration_secs: 0.0,
            position_secs: 0,
            status: Status::Stopped,
            volume: 1.0,
            time_display: format_time_display(0, 0.0),
        }
    }
}

impl PlaybackSession {
    pub fn is_loaded(&self) -> bool {
        self.current.is_some()
    }

    pub(super) fn refresh_time_display(&mut self) {
        self.time_display = format_time_display(self.position_secs, self.duration_secs);
    }
}
