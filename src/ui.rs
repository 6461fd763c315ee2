//! UI rendering helpers for the terminal user interface.
//!
//! This module contains functions to render the TUI using `ratatui`.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Gauge, List, ListItem, ListState, Padding, Paragraph, Wrap},
};

use crate::app::{App, PopupKind};
use crate::config::ControlsSettings;
use crate::playback::{PlaybackSession, Status, clock::format_mmss};

/// Render the controls help text, incorporating skip seconds.
fn controls_text(skip_seconds: u64) -> String {
    [
        "[j/k] up/down".to_string(),
        "[enter] play selected".to_string(),
        "[space/p] play/pause".to_string(),
        format!("[h/l] back/forward {skip_seconds}s"),
        "[-/+] volume".to_string(),
        "[a] add files".to_string(),
        "[q] quit".to_string(),
    ]
    .join(" | ")
}

fn status_style(status: Status) -> Style {
    match status {
        Status::Playing => Style::default().fg(Color::Green),
        Status::Paused => Style::default().fg(Color::Yellow),
        Status::Error => Style::default().fg(Color::Red),
        Status::Stopped => Style::default(),
    }
}

/// Compute a centered rectangle with given size constrained to `r`.
fn centered_rect_sized(mut width: u16, mut height: u16, r: Rect) -> Rect {
    width = width.min(r.width.saturating_sub(2)).max(10);
    height = height.min(r.height.saturating_sub(2)).max(3);

    let x = r.x + (r.width.saturating_sub(width) / 2);
    let y = r.y + (r.height.saturating_sub(height) / 2);
    Rect {
        x,
        y,
        width: width.min(r.width),
        height: height.min(r.height),
    }
}

fn padded(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .title(title)
        .padding(Padding {
            left: 1,
            right: 0,
            top: 0,
            bottom: 0,
        })
}

/// Render the entire UI into the provided `frame` using `app` and a session snapshot.
pub fn draw(
    frame: &mut Frame,
    app: &App,
    session: &PlaybackSession,
    controls_settings: &ControlsSettings,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(3),
            Constraint::Length(4),
        ])
        .split(frame.area());

    // Now playing
    let song = session
        .current
        .as_ref()
        .map(|t| t.display_name.as_str())
        .unwrap_or("-");
    let now_playing = Paragraph::new(format!("{song}\n{}", session.time_display))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" tapedeck ")
                .title_alignment(Alignment::Center),
        );
    frame.render_widget(now_playing, chunks[0]);

    // Volume
    let volume = session.volume.clamp(0.0, 1.0);
    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title(" volume "))
        .ratio(f64::from(volume))
        .label(format!("{:.0}%", volume * 100.0));
    frame.render_widget(gauge, chunks[1]);

    // Track list
    {
        let playing = session.current.as_ref().map(|t| t.display_name.as_str());
        let items: Vec<ListItem> = app
            .catalog
            .iter()
            .map(|t| {
                let line = format!("{}  ({})", t.display_name, format_mmss(t.duration.as_secs()));
                if Some(t.display_name.as_str()) == playing {
                    ListItem::new(line).style(Style::default().add_modifier(Modifier::BOLD))
                } else {
                    ListItem::new(line)
                }
            })
            .collect();

        let title = format!(" tracks ({}) ", app.catalog.len());
        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title(title))
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("> ");
        let mut state = ListState::default();
        state.select(app.selected);
        frame.render_stateful_widget(list, chunks[2], &mut state);
    }

    // Status bar
    let mut status = session.status.label().to_string();
    if let Some(msg) = &app.message {
        status.push_str(" • ");
        status.push_str(msg);
    }
    let status_par = Paragraph::new(status)
        .style(status_style(session.status))
        .block(padded(" status "));
    frame.render_widget(status_par, chunks[3]);

    let footer = Paragraph::new(controls_text(controls_settings.skip_seconds))
        .block(padded(" controls "))
        .wrap(Wrap { trim: true });
    frame.render_widget(footer, chunks[4]);

    if let Some(input) = &app.input {
        let area = centered_rect_sized(72, 3, chunks[2]);
        frame.render_widget(Clear, area);
        let prompt = Paragraph::new(format!("{input}_"))
            .block(padded(" add file or folder (enter adds, esc cancels) "));
        frame.render_widget(prompt, area);
    }

    if let Some(popup) = &app.popup {
        let area = centered_rect_sized(60, 7, frame.area());
        frame.render_widget(Clear, area);
        let border = match popup.kind {
            PopupKind::Info => Style::default().fg(Color::Cyan),
            PopupKind::Error => Style::default().fg(Color::Red),
        };
        let title = format!(" {} ", popup.title);
        let body = Paragraph::new(popup.body.as_str())
            .block(padded(&title).border_style(border))
            .wrap(Wrap { trim: true });
        frame.render_widget(body, area);
    }
}
