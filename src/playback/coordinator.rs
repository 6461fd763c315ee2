use std::time::Duration;

use tracing::{debug, error, info};

use crate::audio::AudioEngine;
use crate::error::{PlayerError, Result};
use crate::library::{MetadataReader, Track};

use super::session::{PlaybackSession, Status};

/// Owns the playback session and is the only thing that talks to the engine.
pub struct Coordinator {
    engine: Box<dyn AudioEngine>,
    reader: Box<dyn MetadataReader>,
    session: PlaybackSession,
    restart_on_reselect: bool,
    follow_engine: bool,
}

impl Coordinator {
    pub fn new(engine: Box<dyn AudioEngine>, reader: Box<dyn MetadataReader>) -> Self {
        Self {
            engine,
            reader,
            session: PlaybackSession::default(),
            restart_on_reselect: true,
            follow_engine: false,
        }
    }

    /// Whether selecting the already-loaded track starts it over.
    pub fn restart_on_reselect(mut self, on: bool) -> Self {
        self.restart_on_reselect = on;
        self
    }

    /// Whether ticks read the position from the engine when it reports one.
    pub fn follow_engine(mut self, on: bool) -> Self {
        self.follow_engine = on;
        self
    }

    pub fn session(&self) -> &PlaybackSession {
        &self.session
    }

    /// Copy of the session for rendering outside the lock.
    pub fn snapshot(&self) -> PlaybackSession {
        self.session.clone()
    }

    /// Load `track` and play it from `start_offset_secs`.
    ///
    /// On failure the engine is paused, the session moves to
    /// [`Status::Error`] and the error is handed back for the UI to show; the
    /// coordinator stays usable.
    pub fn play(&mut self, track: &Track, start_offset_secs: u64) -> Result<()> {
        match self.start(track, start_offset_secs) {
            Ok(()) => {
                info!(track = %track.display_name, offset = start_offset_secs, "playing");
                Ok(())
            }
            Err(e) => {
                error!(track = %track.display_name, error = %e, "playback failed");
                // Error is silent, whatever was audible before.
                self.engine.pause();
                self.session.status = Status::Error;
                Err(e)
            }
        }
    }

    fn start(&mut self, track: &Track, start_offset_secs: u64) -> Result<()> {
        let duration = self.reader.read_duration(&track.path)?;

        self.engine.load(&track.path)?;
        self.engine.play(Duration::from_secs(start_offset_secs))?;

        let s = &mut self.session;
        s.current = Some(track.clone());
        s.duration_secs = duration.as_secs_f64();
        s.position_secs = start_offset_secs;
        s.status = Status::Playing;
        s.refresh_time_display();
        Ok(())
    }

    /// Pause when playing; otherwise resume the loaded track or start `selected`.
    ///
    /// After a failure ([`Status::Error`]) nothing is audible, so this restarts
    /// `selected`, or the last loaded track, from 0 instead of unpausing.
    pub fn toggle_play_pause(&mut self, selected: Option<&Track>) -> Result<()> {
        match self.session.status {
            Status::Playing => {
                self.engine.pause();
                self.session.status = Status::Paused;
                Ok(())
            }
            Status::Paused | Status::Stopped if self.session.is_loaded() => {
                self.engine.unpause();
                self.session.status = Status::Playing;
                Ok(())
            }
            Status::Paused | Status::Stopped => {
                let track = selected.ok_or(PlayerError::NoSelection)?.clone();
                self.play(&track, 0)
            }
            Status::Error => {
                let track = selected
                    .or(self.session.current.as_ref())
                    .ok_or(PlayerError::NoSelection)?
                    .clone();
                self.play(&track, 0)
            }
        }
    }

    /// Move the position by `delta_secs` by restarting the track at the new
    /// offset. Going past the end is ignored; going before the start clamps to 0.
    pub fn skip(&mut self, delta_secs: i64) -> Result<()> {
        let Some(track) = self.session.current.clone() else {
            return Ok(());
        };

        let target = self.session.position_secs as i64 + delta_secs;
        if target as f64 >= self.session.duration_secs {
            debug!(target, "skip past end ignored");
            return Ok(());
        }

        self.play(&track, target.max(0) as u64)
    }

    /// Clamp to `[0, 1]` and apply immediately.
    pub fn set_volume(&mut self, level: f32) {
        let level = if level.is_nan() {
            0.0
        } else {
            level.clamp(0.0, 1.0)
        };
        self.session.volume = level;
        self.engine.set_volume(level);
    }

    /// Start `track` from the beginning, unless it is already the loaded
    /// track and restarting on reselect is off.
    pub fn select_track(&mut self, track: &Track) -> Result<()> {
        let same = self
            .session
            .current
            .as_ref()
            .is_some_and(|c| c.display_name == track.display_name);
        let live = matches!(self.session.status, Status::Playing | Status::Paused);

        if same && live && !self.restart_on_reselect {
            return Ok(());
        }
        self.play(track, 0)
    }

    /// One clock period has passed.
    pub fn tick(&mut self) {
        if self.session.status != Status::Playing || !self.engine.is_busy() {
            return;
        }

        match self.engine.elapsed().filter(|_| self.follow_engine) {
            Some(elapsed) => self.session.position_secs = elapsed.as_secs(),
            None => self.session.position_secs += 1,
        }
        self.session.refresh_time_display();
    }
}
