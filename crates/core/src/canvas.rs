//! Canvas contract consumed by every animation task.
//!
//! The terminal crate provides the real implementation (a framebuffer that
//! is flushed once per tick). Tasks only ever see `&mut dyn Canvas`.

use crate::types::{Emphasis, Interior};

/// A fixed-size character grid with a one-cell border.
pub trait Canvas {
    /// Total size in cells as `(rows, columns)`, border included.
    fn size(&self) -> (u16, u16);

    /// Write one glyph.
    ///
    /// Callers must stay inside [`Canvas::interior`]. Implementations should
    /// fail fast on violations in debug builds and clip in release builds.
    fn put(&mut self, row: u16, column: u16, glyph: char, emphasis: Emphasis);

    /// Draw the border on the outermost rows and columns.
    fn draw_border(&mut self);

    /// Queue one audible alert for the next flush.
    fn beep(&mut self);

    fn interior(&self) -> Interior {
        let (rows, columns) = self.size();
        Interior::of_size(rows, columns)
    }
}
