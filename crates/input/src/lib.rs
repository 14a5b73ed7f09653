//! Terminal input module (scheduler-facing).
//!
//! Maps `crossterm` key events into per-tick [`crate::types::Controls`]. The
//! reader never blocks: each poll drains whatever is already queued and
//! reports the resulting direction and fire state.

pub mod map;
pub mod reader;

pub use tui_starfield_types as types;

pub use map::{handle_key_event, should_quit, ShipCommand};
pub use reader::{fold_keys, push_newest, ControlsReader, Polled, MAX_KEYS_PER_POLL};
