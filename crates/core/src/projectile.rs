//! Projectile task: a shot flying in a straight line.

use crate::task::{Step, TickContext};
use crate::types::Emphasis;

/// Glyphs shown at the muzzle before a fired shot starts moving.
const MUZZLE_FLASH: [char; 2] = ['*', 'O'];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ShotPhase {
    Flash(usize),
    Flight,
}

/// A shot moving at a constant sub-cell velocity.
///
/// In flight, each resume erases the previous glyph, advances by the
/// velocity and draws again. The task finishes, without drawing, on the
/// first resume whose rounded position is outside the canvas interior.
#[derive(Debug, Clone)]
pub struct ProjectileTask {
    row: f64,
    column: f64,
    row_speed: f64,
    column_speed: f64,
    phase: ShotPhase,
    drawn_at: Option<(u16, u16)>,
}

impl ProjectileTask {
    /// A shot already in flight from `start`. The first resume advances.
    pub fn new(start: (f64, f64), velocity: (f64, f64)) -> Self {
        Self {
            row: start.0,
            column: start.1,
            row_speed: velocity.0,
            column_speed: velocity.1,
            phase: ShotPhase::Flight,
            drawn_at: None,
        }
    }

    /// A shot fired from a gun: flashes at `start` before moving.
    pub fn fired(start: (f64, f64), velocity: (f64, f64)) -> Self {
        Self {
            phase: ShotPhase::Flash(0),
            ..Self::new(start, velocity)
        }
    }

    pub fn position(&self) -> (f64, f64) {
        (self.row, self.column)
    }

    fn glyph(&self) -> char {
        if self.column_speed != 0.0 {
            '-'
        } else {
            '|'
        }
    }

    /// Draw at the current position, or report that the shot has left.
    fn draw(&mut self, cx: &mut TickContext<'_>, glyph: char) -> Step {
        let row = self.row.round();
        let column = self.column.round();
        if !cx.interior().contains(row as i32, column as i32) {
            return Step::Finished;
        }
        let (row, column) = (row as u16, column as u16);
        cx.canvas.put(row, column, glyph, Emphasis::Normal);
        self.drawn_at = Some((row, column));
        Step::Continue
    }

    pub fn resume(&mut self, cx: &mut TickContext<'_>) -> Step {
        match self.phase {
            ShotPhase::Flash(i) => {
                self.phase = if i + 1 < MUZZLE_FLASH.len() {
                    ShotPhase::Flash(i + 1)
                } else {
                    ShotPhase::Flight
                };
                self.draw(cx, MUZZLE_FLASH[i])
            }
            ShotPhase::Flight => {
                if let Some((row, column)) = self.drawn_at.take() {
                    cx.canvas.put(row, column, ' ', Emphasis::Normal);
                }
                self.row += self.row_speed;
                self.column += self.column_speed;
                let glyph = self.glyph();
                self.draw(cx, glyph)
            }
        }
    }
}
