//! Recording [`AudioEngine`] for tests.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::audio::AudioEngine;
use crate::error::{PlayerError, Result};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Load(PathBuf),
    Play(Duration),
    Pause,
    Unpause,
    Volume(f32),
}

#[derive(Debug, Default)]
struct State {
    calls: Vec<Call>,
    busy: bool,
    fail_play: bool,
    elapsed: Option<Duration>,
}

/// Clones share state, so a test keeps one clone and boxes the other.
#[derive(Debug, Clone, Default)]
pub struct FakeEngine {
    state: Arc<Mutex<State>>,
}

impl FakeEngine {
    pub fn calls(&self) -> Vec<Call> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn clear_calls(&self) {
        self.state.lock().unwrap().calls.clear();
    }

    pub fn set_busy(&self, busy: bool) {
        self.state.lock().unwrap().busy = busy;
    }

    pub fn fail_play(&self, fail: bool) {
        self.state.lock().unwrap().fail_play = fail;
    }

    pub fn report_elapsed(&self, elapsed: Option<Duration>) {
        self.state.lock().unwrap().elapsed = elapsed;
    }
}

impl AudioEngine for FakeEngine {
    fn load(&mut self, path: &Path) -> Result<()> {
        self.state
            .lock()
            .unwrap()
            .calls
            .push(Call::Load(path.to_path_buf()));
        Ok(())
    }

    fn play(&mut self, start: Duration) -> Result<()> {
        let mut s = self.state.lock().unwrap();
        if s.fail_play {
            return Err(PlayerError::EngineFailure("device unplugged".into()));
        }
        s.calls.push(Call::Play(start));
        s.busy = true;
        Ok(())
    }

    fn pause(&mut self) {
        let mut s = self.state.lock().unwrap();
        s.calls.push(Call::Pause);
        s.busy = false;
    }

    fn unpause(&mut self) {
        let mut s = self.state.lock().unwrap();
        s.calls.push(Call::Unpause);
        s.busy = true;
    }

    fn set_volume(&mut self, level: f32) {
        self.state.lock().unwrap().calls.push(Call::Volume(level));
    }

    fn is_busy(&self) -> bool {
        self.state.lock().unwrap().busy
    }

    fn elapsed(&self) -> Option<Duration> {
        self.state.lock().unwrap().elapsed
    }
}
