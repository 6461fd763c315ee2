use std::path::{Path, PathBuf};
use std::time::Duration;

use rodio::mixer::Mixer;
use rodio::{OutputStream, OutputStreamBuilder, Sink};
use tracing::{debug, info};

use crate::error::{PlayerError, Result};

use super::sink::create_sink_at;
use super::types::AudioEngine;

/// Open the default output device and build an engine on its mixer.
///
/// The returned stream must outlive the engine; dropping it silences output.
pub fn initialize() -> Result<(OutputStream, RodioEngine)> {
    let mut stream = OutputStreamBuilder::open_default_stream()
        .map_err(|e| PlayerError::EngineFailure(format!("no audio output device: {e}")))?;
    // rodio logs to stderr when OutputStream is dropped. That's useful in debugging,
    // but noisy for a TUI app.
    stream.log_on_drop(false);
    info!("audio output opened");

    let engine = RodioEngine::new(stream.mixer().clone());
    Ok((stream, engine))
}

/// [`AudioEngine`] backed by one `rodio::Sink` per started track.
pub struct RodioEngine {
    mixer: Mixer,
    loaded: Option<PathBuf>,
    sink: Option<Sink>,
    volume: f32,
    // Offset the current sink was started from; `Sink::get_pos` counts from it.
    start_offset: Duration,
}

impl RodioEngine {
    pub fn new(mixer: Mixer) -> Self {
        Self {
            mixer,
            loaded: None,
            sink: None,
            volume: 1.0,
            start_offset: Duration::ZERO,
        }
    }

    fn stop_current(&mut self) {
        if let Some(s) = self.sink.take() {
            s.stop();
        }
    }
}

impl AudioEngine for RodioEngine {
    fn load(&mut self, path: &Path) -> Result<()> {
        if !path.is_file() {
            return Err(PlayerError::invalid_file(path, "file not found"));
        }
        self.stop_current();
        self.loaded = Some(path.to_path_buf());
        debug!(path = %path.display(), "loaded");
        Ok(())
    }

    fn play(&mut self, start: Duration) -> Result<()> {
        let path = self
            .loaded
            .clone()
            .ok_or_else(|| PlayerError::EngineFailure("play called before load".into()))?;

        self.stop_current();
        let sink = create_sink_at(&self.mixer, &path, start)?;
        sink.set_volume(self.volume);
        sink.play();
        self.sink = Some(sink);
        self.start_offset = start;
        Ok(())
    }

    fn pause(&mut self) {
        if let Some(s) = &self.sink {
            s.pause();
        }
    }

    fn unpause(&mut self) {
        if let Some(s) = &self.sink {
            s.play();
        }
    }

    fn set_volume(&mut self, level: f32) {
        self.volume = level;
        if let Some(s) = &self.sink {
            s.set_volume(level);
        }
    }

    fn is_busy(&self) -> bool {
        self.sink
            .as_ref()
            .map(|s| !s.is_paused() && !s.empty())
            .unwrap_or(false)
    }

    fn elapsed(&self) -> Option<Duration> {
        self.sink.as_ref().map(|s| self.start_offset + s.get_pos())
    }
}
