//! Playback coordination: the session state machine, the engine commands it
//! issues, and the clock that keeps the elapsed time moving.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

pub mod clock;
mod coordinator;
mod session;

pub use coordinator::Coordinator;
pub use session::{PlaybackSession, Status};

/// The coordinator shared between the UI loop and the clock thread.
pub type PlayerHandle = Arc<Mutex<Coordinator>>;

pub fn shared(coordinator: Coordinator) -> PlayerHandle {
    Arc::new(Mutex::new(coordinator))
}

/// Lock the coordinator, recovering it if the other thread panicked.
pub fn lock(player: &PlayerHandle) -> MutexGuard<'_, Coordinator> {
    player.lock().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
pub(crate) mod testing;
