use std::path::PathBuf;
use std::time::Duration;

use tracing::info;

use crate::app::App;
use crate::audio::AudioEngine;
use crate::config;
use crate::library::{LoftyReader, MetadataReader};
use crate::playback::{self, Coordinator, PlayerHandle};

/// Build the shared coordinator around `engine`, apply the configured
/// volume and start the position clock.
pub fn start_player(engine: Box<dyn AudioEngine>, settings: &config::Settings) -> PlayerHandle {
    let mut coordinator = Coordinator::new(engine, Box::new(LoftyReader))
        .restart_on_reselect(settings.playback.restart_on_reselect)
        .follow_engine(settings.clock.follow_engine);
    coordinator.set_volume(settings.audio.volume);

    let player = playback::shared(coordinator);
    // Detached: the clock exits on its own once the player is dropped.
    let _clock = playback::clock::spawn(&player, Duration::from_millis(settings.clock.tick_ms));
    player
}

/// Import whatever was passed on the command line before the UI starts.
pub fn import_args(
    app: &mut App,
    args: &[PathBuf],
    reader: &dyn MetadataReader,
    settings: &config::Settings,
) {
    if args.is_empty() {
        return;
    }
    let report = app.add_paths(args, reader, &settings.library);
    info!(added = report.added.len(), rejected = report.rejected.len(), "startup import");
}
