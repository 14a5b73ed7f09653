//! TUI Starfield (workspace facade crate).
//!
//! Re-exports the member crates as `tui_starfield::{core, input, term, types}`
//! and adds the application glue: environment configuration, frame loading
//! and building the initial task set.

pub use tui_starfield_core as core;
pub use tui_starfield_input as input;
pub use tui_starfield_term as term;
pub use tui_starfield_types as types;

pub mod assets;
pub mod config;
pub mod scene;
