//! Loading sprite frames from disk.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};

use crate::core::SpriteFrame;

/// Rocket animation frames, in display order.
pub const ROCKET_FRAME_FILES: [&str; 2] = ["rocket_frame_1.txt", "rocket_frame_2.txt"];

/// Load one frame file. An empty or whitespace-only file is an error.
pub fn load_frame(path: &Path) -> Result<SpriteFrame> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read sprite frame {}", path.display()))?;
    if text.trim().is_empty() {
        bail!("sprite frame {} is empty", path.display());
    }
    Ok(SpriteFrame::parse(&text))
}

/// Load the rocket frames from `dir`.
pub fn load_rocket_frames(dir: &Path) -> Result<Vec<SpriteFrame>> {
    ROCKET_FRAME_FILES
        .iter()
        .map(|name| load_frame(&dir.join(name)))
        .collect()
}
