//! Position clock: a background thread that ticks the coordinator.

use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use tracing::debug;

use super::{PlayerHandle, lock};

/// Format whole seconds as `MM:SS`. Minutes are not capped at 99.
pub fn format_mmss(secs: u64) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

/// `elapsed / total`, with the total truncated to whole seconds.
pub fn format_time_display(position_secs: u64, duration_secs: f64) -> String {
    let total = if duration_secs.is_finite() && duration_secs > 0.0 {
        duration_secs as u64
    } else {
        0
    };
    format!("{} / {}", format_mmss(position_secs), format_mmss(total))
}

/// Spawn the ticker. It holds a weak reference and exits once every
/// [`PlayerHandle`] is gone; nobody joins it.
pub fn spawn(player: &PlayerHandle, period: Duration) -> JoinHandle<()> {
    let weak = Arc::downgrade(player);
    thread::spawn(move || {
        loop {
            thread::sleep(period);
            let Some(player) = weak.upgrade() else {
                break;
            };
            lock(&player).tick();
        }
        debug!("position clock stopped");
    })
}
