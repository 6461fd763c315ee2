use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{debug, info};

use crate::app::App;
use crate::config;
use crate::error::PlayerError;
use crate::library::MetadataReader;
use crate::playback::{PlayerHandle, lock};
use crate::ui;

/// Main terminal event loop: draws a fresh session snapshot every iteration
/// and dispatches key presses. Returns `Ok(())` when the user quits.
pub fn run(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    settings: &config::Settings,
    app: &mut App,
    player: &PlayerHandle,
    reader: &dyn MetadataReader,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        let session = lock(player).snapshot();
        terminal.draw(|f| ui::draw(f, app, &session, &settings.controls))?;

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if handle_key_event(key, settings, app, player, reader) {
                    break;
                }
            }
        }
    }

    info!("quit requested");
    Ok(())
}

/// Apply one key press. Returns true when the app should exit.
pub(super) fn handle_key_event(
    key: KeyEvent,
    settings: &config::Settings,
    app: &mut App,
    player: &PlayerHandle,
    reader: &dyn MetadataReader,
) -> bool {
    // An open message box swallows the key that closes it.
    if app.popup.is_some() {
        app.dismiss_popup();
        return false;
    }

    if app.input.is_some() {
        match key.code {
            KeyCode::Esc => app.cancel_input(),
            KeyCode::Backspace => app.pop_input_char(),
            KeyCode::Enter => {
                if let Some(path) = app.submit_input() {
                    let report = app.add_paths(&[path], reader, &settings.library);
                    debug!(summary = %report.summary(), "import");
                }
            }
            KeyCode::Char(c) if !c.is_control() => app.push_input_char(c),
            _ => {}
        }
        return false;
    }

    let skip = settings.controls.skip_seconds.min(i64::MAX as u64) as i64;
    let result: Result<(), PlayerError> = match key.code {
        KeyCode::Char('q') => return true,
        KeyCode::Char('a') => {
            app.open_input();
            Ok(())
        }
        KeyCode::Char('j') | KeyCode::Down => {
            app.next();
            Ok(())
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.prev();
            Ok(())
        }
        KeyCode::Enter => match app.selected_name().and_then(|n| app.catalog.resolve(n)).cloned() {
            Some(track) => lock(player).select_track(&track),
            None => Err(PlayerError::NoSelection),
        },
        KeyCode::Char(' ') | KeyCode::Char('p') => {
            let selected = app.selected_track().cloned();
            lock(player).toggle_play_pause(selected.as_ref())
        }
        KeyCode::Char('l') | KeyCode::Right => lock(player).skip(skip),
        KeyCode::Char('h') | KeyCode::Left => lock(player).skip(-skip),
        KeyCode::Char('+') | KeyCode::Char('=') => {
            let mut p = lock(player);
            let v = p.session().volume + settings.audio.volume_step;
            p.set_volume(v);
            Ok(())
        }
        KeyCode::Char('-') => {
            let mut p = lock(player);
            let v = p.session().volume - settings.audio.volume_step;
            p.set_volume(v);
            Ok(())
        }
        _ => Ok(()),
    };

    if let Err(e) = result {
        app.show_error(&e);
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    use crate::app::PopupKind;
    use crate::library::testing::FakeReader;
    use crate::playback::testing::FakeEngine;
    use crate::playback::{Coordinator, Status, shared};

    fn press(c: KeyCode) -> KeyEvent {
        KeyEvent::new(c, KeyModifiers::NONE)
    }

    fn fixture() -> (App, PlayerHandle, FakeReader, config::Settings) {
        let reader = FakeReader::default()
            .with("/music/song.mp3", 180)
            .with("/music/other.mp3", 240);
        let player = shared(Coordinator::new(
            Box::new(FakeEngine::default()),
            Box::new(reader.clone()),
        ));
        (App::new(), player, reader, config::Settings::default())
    }

    #[test]
    fn play_with_empty_catalog_shows_notice() {
        let (mut app, player, reader, settings) = fixture();

        assert!(!handle_key_event(press(KeyCode::Char(' ')), &settings, &mut app, &player, &reader));
        assert_eq!(app.popup.as_ref().unwrap().kind, PopupKind::Info);
        assert_eq!(lock(&player).session().status, Status::Stopped);

        // Any key closes it without acting.
        handle_key_event(press(KeyCode::Char('q')), &settings, &mut app, &player, &reader);
        assert!(app.popup.is_none());
    }

    #[test]
    fn add_prompt_then_enter_plays_selection() {
        let (mut app, player, reader, settings) = fixture();

        handle_key_event(press(KeyCode::Char('a')), &settings, &mut app, &player, &reader);
        for c in "/music/song.mp3".chars() {
            handle_key_event(press(KeyCode::Char(c)), &settings, &mut app, &player, &reader);
        }
        handle_key_event(press(KeyCode::Enter), &settings, &mut app, &player, &reader);
        assert_eq!(app.catalog.len(), 1);
        assert!(app.input.is_none());

        handle_key_event(press(KeyCode::Enter), &settings, &mut app, &player, &reader);
        let p = lock(&player);
        assert_eq!(p.session().status, Status::Playing);
        assert_eq!(p.session().current.as_ref().unwrap().display_name, "song.mp3");
    }

    #[test]
    fn enter_plays_the_highlighted_name() {
        let (mut app, player, reader, settings) = fixture();
        app.add_paths(&["/music/song.mp3", "/music/other.mp3"], &reader, &settings.library);

        handle_key_event(press(KeyCode::Down), &settings, &mut app, &player, &reader);
        assert_eq!(app.selected_name(), Some("other.mp3"));
        handle_key_event(press(KeyCode::Enter), &settings, &mut app, &player, &reader);

        let p = lock(&player);
        let current = p.session().current.as_ref().unwrap();
        assert_eq!(current.path, std::path::PathBuf::from("/music/other.mp3"));
        assert_eq!(p.session().duration_secs, 240.0);
    }

    #[test]
    fn skip_keys_use_configured_amount() {
        let (mut app, player, reader, mut settings) = fixture();
        settings.controls.skip_seconds = 30;
        app.add_paths(&["/music/song.mp3"], &reader, &settings.library);
        lock(&player).play(app.selected_track().unwrap(), 60).unwrap();

        handle_key_event(press(KeyCode::Char('l')), &settings, &mut app, &player, &reader);
        assert_eq!(lock(&player).session().position_secs, 90);
        handle_key_event(press(KeyCode::Left), &settings, &mut app, &player, &reader);
        assert_eq!(lock(&player).session().position_secs, 60);
    }

    #[test]
    fn volume_keys_step_and_clamp() {
        let (mut app, player, reader, settings) = fixture();
        lock(&player).set_volume(0.95);

        handle_key_event(press(KeyCode::Char('+')), &settings, &mut app, &player, &reader);
        assert_eq!(lock(&player).session().volume, 1.0);

        for _ in 0..20 {
            handle_key_event(press(KeyCode::Char('-')), &settings, &mut app, &player, &reader);
        }
        assert_eq!(lock(&player).session().volume, 0.0);
    }

    #[test]
    fn quit_key_exits() {
        let (mut app, player, reader, settings) = fixture();
        assert!(handle_key_event(press(KeyCode::Char('q')), &settings, &mut app, &player, &reader));
    }
}
