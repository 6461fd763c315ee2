//! Application model types: `App` and the popups it can show.
//!
//! The `App` struct holds the catalog, the list cursor and the transient UI
//! state (add-files prompt, notices) used by the renderer and the runtime.

use std::env;
use std::path::PathBuf;

use crate::config::LibrarySettings;
use crate::error::PlayerError;
use crate::library::{AddReport, Catalog, MetadataReader, Track, expand_paths};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PopupKind {
    Info,
    Error,
}

/// A message box; any key dismisses it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Popup {
    pub kind: PopupKind,
    pub title: String,
    pub body: String,
}

impl Popup {
    pub fn from_error(e: &PlayerError) -> Self {
        if e.is_notice() {
            Self {
                kind: PopupKind::Info,
                title: "No selection".to_string(),
                body: "Please select a song to play.".to_string(),
            }
        } else {
            Self {
                kind: PopupKind::Error,
                title: "Playback Error".to_string(),
                body: e.to_string(),
            }
        }
    }
}

/// The main application model.
#[derive(Default)]
pub struct App {
    pub catalog: Catalog,
    /// Cursor in the track list; `None` until something is imported.
    pub selected: Option<usize>,
    pub popup: Option<Popup>,
    /// Text typed into the "add files" prompt while it is open.
    pub input: Option<String>,
    /// Last import summary, shown in the status bar.
    pub message: Option<String>,
}

impl App {
    pub fn new() -> Self {
        Self::default()
    }

    /// Import files and directories, then select the first track if nothing
    /// was selected yet.
    pub fn add_paths<P: AsRef<std::path::Path>>(
        &mut self,
        inputs: &[P],
        reader: &dyn MetadataReader,
        settings: &LibrarySettings,
    ) -> AddReport {
        let files = expand_paths(inputs, settings);
        let report = self.catalog.add_files(&files, reader);
        if self.selected.is_none() && !self.catalog.is_empty() {
            self.selected = Some(0);
        }
        self.message = Some(report.summary());
        report
    }

    pub fn selected_track(&self) -> Option<&Track> {
        self.selected.and_then(|i| self.catalog.get(i))
    }

    /// Display name of the highlighted row, as the list shows it.
    pub fn selected_name(&self) -> Option<&str> {
        self.selected_track().map(|t| t.display_name.as_str())
    }

    /// Move the cursor to the next track, wrapping to the first.
    pub fn next(&mut self) {
        let len = self.catalog.len();
        if len == 0 {
            return;
        }
        self.selected = Some(self.selected.map_or(0, |i| (i + 1) % len));
    }

    /// Move the cursor to the previous track, wrapping to the last.
    pub fn prev(&mut self) {
        let len = self.catalog.len();
        if len == 0 {
            return;
        }
        self.selected = Some(match self.selected {
            Some(0) | None => len - 1,
            Some(i) => i - 1,
        });
    }

    pub fn show_error(&mut self, e: &PlayerError) {
        self.popup = Some(Popup::from_error(e));
    }

    pub fn dismiss_popup(&mut self) {
        self.popup = None;
    }

    pub fn open_input(&mut self) {
        self.input = Some(String::new());
    }

    pub fn cancel_input(&mut self) {
        self.input = None;
    }

    pub fn push_input_char(&mut self, c: char) {
        if let Some(buf) = self.input.as_mut() {
            buf.push(c);
        }
    }

    pub fn pop_input_char(&mut self) {
        if let Some(buf) = self.input.as_mut() {
            buf.pop();
        }
    }

    /// Close the prompt and return the path it held, if any was typed.
    pub fn submit_input(&mut self) -> Option<PathBuf> {
        let raw = self.input.take()?;
        parse_input_path(&raw)
    }
}

/// Trim, unquote and expand a leading `~/` in a typed path.
pub(crate) fn parse_input_path(raw: &str) -> Option<PathBuf> {
    let s = raw.trim();
    let s = s
        .strip_prefix('"')
        .and_then(|x| x.strip_suffix('"'))
        .or_else(|| s.strip_prefix('\'').and_then(|x| x.strip_suffix('\'')))
        .unwrap_or(s);
    if s.is_empty() {
        return None;
    }

    if let Some(rest) = s.strip_prefix("~/") {
        if let Some(home) = env::var_os("HOME") {
            return Some(PathBuf::from(home).join(rest));
        }
    }
    Some(PathBuf::from(s))
}
