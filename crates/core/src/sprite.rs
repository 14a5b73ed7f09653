//! Frame store: multi-line text sprites and how they are drawn.
//!
//! A frame is plain text, one terminal row per line. Spaces are transparent:
//! drawing never writes them, so a sprite does not punch holes in whatever
//! is behind its outline.

use crate::canvas::Canvas;
use crate::types::Emphasis;

/// Sprite size in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameSize {
    pub rows: u16,
    pub columns: u16,
}

/// Whether a sprite is drawn or rubbed out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ink {
    Draw,
    Erase,
}

/// An immutable glyph grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpriteFrame {
    lines: Vec<Vec<char>>,
    size: FrameSize,
}

impl SpriteFrame {
    /// Parse frame text. Size is `(line count, longest line)`.
    ///
    /// A trailing newline does not add an empty row; carriage returns are
    /// dropped so frames saved with CRLF endings behave the same.
    pub fn parse(text: &str) -> Self {
        let lines: Vec<Vec<char>> = text
            .lines()
            .map(|line| line.trim_end_matches('\r').chars().collect())
            .collect();
        let columns = lines.iter().map(Vec::len).max().unwrap_or(0);
        let size = FrameSize {
            rows: lines.len().min(u16::MAX as usize) as u16,
            columns: columns.min(u16::MAX as usize) as u16,
        };
        Self { lines, size }
    }

    pub fn size(&self) -> FrameSize {
        self.size
    }

    pub fn lines(&self) -> &[Vec<char>] {
        &self.lines
    }

    /// Draw (or erase) the frame with its top-left corner at `(top, left)`.
    ///
    /// Cells falling outside the canvas interior are skipped.
    pub fn paint(&self, canvas: &mut dyn Canvas, top: i32, left: i32, ink: Ink) {
        let interior = canvas.interior();
        for (dy, line) in self.lines.iter().enumerate() {
            let row = top + dy as i32;
            for (dx, &glyph) in line.iter().enumerate() {
                if glyph == ' ' {
                    continue;
                }
                let column = left + dx as i32;
                if !interior.contains(row, column) {
                    continue;
                }
                let glyph = match ink {
                    Ink::Draw => glyph,
                    Ink::Erase => ' ',
                };
                canvas.put(row as u16, column as u16, glyph, Emphasis::Normal);
            }
        }
    }
}

/// Smallest box that fits every frame.
pub fn bounding_box(frames: &[SpriteFrame]) -> FrameSize {
    frames.iter().fold(FrameSize::default(), |acc, frame| FrameSize {
        rows: acc.rows.max(frame.size.rows),
        columns: acc.columns.max(frame.size.columns),
    })
}
