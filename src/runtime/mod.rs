use std::env;
use std::path::PathBuf;

use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{info, warn};

use crate::app::App;
use crate::audio;
use crate::library::LoftyReader;
use crate::logging;

mod event_loop;
mod settings;
mod startup;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let (settings, fallback) = settings::load_settings();

    // Logging is best effort; the player works without it.
    let _log_guard = match logging::init(&settings.log) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("tapedeck: logging disabled: {e}");
            None
        }
    };
    settings::report_fallback(fallback);

    // The stream has to stay alive for as long as anything plays.
    let (_stream, engine) = audio::initialize()?;
    let player = startup::start_player(Box::new(engine), &settings);

    let mut app = App::new();
    let args: Vec<PathBuf> = env::args_os().skip(1).map(PathBuf::from).collect();
    startup::import_args(&mut app, &args, &LoftyReader, &settings);

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    info!("ui started");

    let run_result = event_loop::run(&mut terminal, &settings, &mut app, &player, &LoftyReader);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &run_result {
        warn!(error = %e, "event loop ended with an error");
    }
    run_result
}
