use tui_starfield::core::Canvas;
use tui_starfield::types::Emphasis;

/// One recorded write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Put {
    pub row: u16,
    pub column: u16,
    pub glyph: char,
    pub emphasis: Emphasis,
}

/// Canvas that records writes, grouped by tick.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    pub rows: u16,
    pub columns: u16,
    pub ticks: Vec<Vec<Put>>,
    pub beeps: usize,
}

#[allow(dead_code)]
impl RecordingCanvas {
    pub fn new(rows: u16, columns: u16) -> Self {
        Self {
            rows,
            columns,
            ticks: vec![Vec::new()],
            ..Self::default()
        }
    }

    /// Start collecting writes for a new tick.
    pub fn next_tick(&mut self) {
        self.ticks.push(Vec::new());
    }

    /// Non-blank writes made during tick `i`.
    pub fn drawn_in(&self, i: usize) -> Vec<Put> {
        self.ticks[i].iter().copied().filter(|p| p.glyph != ' ').collect()
    }
}

impl Canvas for RecordingCanvas {
    fn size(&self) -> (u16, u16) {
        (self.rows, self.columns)
    }

    fn put(&mut self, row: u16, column: u16, glyph: char, emphasis: Emphasis) {
        assert!(
            self.interior().contains(row as i32, column as i32),
            "write outside interior at ({row}, {column})"
        );
        if let Some(tick) = self.ticks.last_mut() {
            tick.push(Put {
                row,
                column,
                glyph,
                emphasis,
            });
        }
    }

    fn draw_border(&mut self) {}

    fn beep(&mut self) {
        self.beeps += 1;
    }
}
