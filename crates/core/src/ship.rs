//! Ship task: the player's sprite, steered by the keyboard.

use crate::bounds::clamp_to_interior;
use crate::projectile::ProjectileTask;
use crate::sprite::{bounding_box, FrameSize, Ink, SpriteFrame};
use crate::task::{Step, TickContext};
use crate::types::{Interior, DEFAULT_SHOT_VELOCITY};

/// The player's ship.
///
/// Position is fractional and only rounded when drawing. Each resume rubs
/// out the frame drawn last tick, advances to the next animation frame,
/// applies the tick's controls, clamps and draws again.
#[derive(Debug, Clone)]
pub struct ShipTask {
    frames: Vec<SpriteFrame>,
    frame_index: usize,
    bbox: FrameSize,
    top_row: f64,
    left_column: f64,
    speed: f64,
    drawn_at: Option<(i32, i32)>,
}

impl ShipTask {
    /// A ship centred in `interior`.
    pub fn new(frames: Vec<SpriteFrame>, interior: Interior, speed: f64) -> Self {
        let bbox = bounding_box(&frames);
        let (middle_row, middle_column) = interior.center();
        let top_row = middle_row - bbox.rows as f64 / 2.0;
        let left_column = middle_column - bbox.columns as f64 / 2.0;
        let (top_row, left_column) = clamp_to_interior(top_row, left_column, interior, bbox);
        Self::at(frames, top_row, left_column, speed)
    }

    /// A ship at an explicit top-left position. Clamping happens on resume.
    pub fn at(frames: Vec<SpriteFrame>, top_row: f64, left_column: f64, speed: f64) -> Self {
        Self {
            bbox: bounding_box(&frames),
            frames,
            frame_index: 0,
            top_row,
            left_column,
            speed,
            drawn_at: None,
        }
    }

    pub fn position(&self) -> (f64, f64) {
        (self.top_row, self.left_column)
    }

    pub fn bounding_box(&self) -> FrameSize {
        self.bbox
    }

    pub fn frame_index(&self) -> usize {
        self.frame_index
    }

    /// Cell just above the middle of the ship's top edge.
    pub fn gun_position(&self) -> (f64, f64) {
        (
            self.top_row - 1.0,
            self.left_column + (self.bbox.columns / 2) as f64,
        )
    }

    pub fn resume(&mut self, cx: &mut TickContext<'_>) -> Step {
        if let Some((row, column)) = self.drawn_at.take() {
            if let Some(frame) = self.frames.get(self.frame_index) {
                frame.paint(cx.canvas, row, column, Ink::Erase);
            }
            if !self.frames.is_empty() {
                self.frame_index = (self.frame_index + 1) % self.frames.len();
            }
        }

        let controls = cx.controls;
        if controls.rows_direction != 0 {
            self.top_row += controls.rows_direction as f64 * self.speed;
        }
        if controls.columns_direction != 0 {
            self.left_column += controls.columns_direction as f64 * self.speed;
        }
        let (top_row, left_column) =
            clamp_to_interior(self.top_row, self.left_column, cx.interior(), self.bbox);
        self.top_row = top_row;
        self.left_column = left_column;

        if controls.fire {
            let (row, column) = self.gun_position();
            // No room above the nose: a shot there would never be drawn.
            if cx.interior().contains(row.round() as i32, column.round() as i32) {
                cx.fire(ProjectileTask::fired((row, column), DEFAULT_SHOT_VELOCITY));
            }
        }

        let row = self.top_row.round() as i32;
        let column = self.left_column.round() as i32;
        if let Some(frame) = self.frames.get(self.frame_index) {
            frame.paint(cx.canvas, row, column, Ink::Draw);
        }
        self.drawn_at = Some((row, column));
        Step::Continue
    }
}
