use tracing::warn;

use crate::config;

/// Load settings, falling back to defaults on any problem. Returns the
/// reason when defaults were used so it can be logged once logging is up.
pub fn load_settings() -> (config::Settings, Option<String>) {
    match config::Settings::load() {
        Ok(s) => match s.validate() {
            Ok(()) => (s, None),
            Err(msg) => (
                config::Settings::default(),
                Some(format!("invalid config, using defaults: {msg}")),
            ),
        },
        // Config is optional; failures should not prevent the app from starting.
        Err(e) => (
            config::Settings::default(),
            Some(format!("failed to load config, using defaults: {e}")),
        ),
    }
}

pub fn report_fallback(reason: Option<String>) {
    if let Some(reason) = reason {
        warn!("{reason}");
    }
}
