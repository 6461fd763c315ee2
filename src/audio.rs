//! Audio output: the [`AudioEngine`] contract and its `rodio` implementation.

mod player;
mod sink;
mod types;

pub use player::{RodioEngine, initialize};
pub use types::AudioEngine;
