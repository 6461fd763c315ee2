//! Application module: exposes the app model used by the TUI and runtime.
//!
//! The `App` model lives in `app::model` and holds the catalog, the list
//! cursor and any open prompt or popup.

mod model;

pub use model::*;
