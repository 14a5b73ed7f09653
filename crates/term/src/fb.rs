//! Framebuffer: the canvas tasks draw into.

use crate::core::Canvas;
use crate::types::Emphasis;

/// A single terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub emphasis: Emphasis,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            emphasis: Emphasis::Normal,
        }
    }
}

/// 2D framebuffer of character cells, addressed by `(x, y)`.
///
/// Content persists between flushes: tasks only write the cells they
/// change, and erase what they drew themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
    bells: u16,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![Cell::default(); len],
            bells: 0,
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[inline(always)]
    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = cell;
        }
    }

    pub fn put_char(&mut self, x: u16, y: u16, ch: char, emphasis: Emphasis) {
        self.set(x, y, Cell { ch, emphasis });
    }

    /// Bells queued since the last call.
    pub fn take_bells(&mut self) -> u16 {
        std::mem::take(&mut self.bells)
    }

    /// Row `y` as text, for tests and debugging.
    pub fn row_text(&self, y: u16) -> String {
        (0..self.width)
            .filter_map(|x| self.get(x, y))
            .map(|c| c.ch)
            .collect()
    }
}

impl Canvas for FrameBuffer {
    fn size(&self) -> (u16, u16) {
        (self.height, self.width)
    }

    fn put(&mut self, row: u16, column: u16, glyph: char, emphasis: Emphasis) {
        let inside = self.interior().contains(row as i32, column as i32);
        debug_assert!(inside, "write outside canvas interior at ({row}, {column})");
        if inside {
            self.put_char(column, row, glyph, emphasis);
        }
    }

    fn draw_border(&mut self) {
        let (w, h) = (self.width, self.height);
        if w < 2 || h < 2 {
            return;
        }
        let style = Emphasis::Normal;

        self.put_char(0, 0, '┌', style);
        self.put_char(w - 1, 0, '┐', style);
        self.put_char(0, h - 1, '└', style);
        self.put_char(w - 1, h - 1, '┘', style);

        for x in 1..w - 1 {
            self.put_char(x, 0, '─', style);
            self.put_char(x, h - 1, '─', style);
        }
        for y in 1..h - 1 {
            self.put_char(0, y, '│', style);
            self.put_char(w - 1, y, '│', style);
        }
    }

    fn beep(&mut self) {
        self.bells = self.bells.saturating_add(1);
    }
}
