//! Terminal canvas module.
//!
//! Tasks draw into a [`FrameBuffer`], an in-memory cell grid implementing
//! [`crate::core::Canvas`]. Once per tick the [`TerminalRenderer`] diffs it
//! against what is already on screen and writes only the changed runs.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Write each tick's changes in one flush
//! - Put the terminal back the way it was on every exit path

pub mod fb;
pub mod renderer;

pub use tui_starfield_core as core;
pub use tui_starfield_types as types;

pub use fb::{Cell, FrameBuffer};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
