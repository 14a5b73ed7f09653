//! Core types module - shared data structures and constants
//!
//! This module defines the plain data passed between the scheduler, the
//! animation tasks, the input reader and the terminal canvas. Nothing in here
//! performs I/O or depends on another crate.
//!
//! # Coordinates
//!
//! Positions are `(row, column)` with `(0, 0)` at the top-left corner of the
//! terminal. Row 0, column 0, the last row and the last column belong to the
//! border; everything else is the **interior**, described by [`Interior`].
//!
//! # Blink Timing
//!
//! A star cycles through four lit stages, one resume per scheduler tick:
//!
//! | Stage | Emphasis | Ticks |
//! |-------|----------|-------|
//! | 0 | Dim | 20 |
//! | 1 | Normal | 3 |
//! | 2 | Bold | 5 |
//! | 3 | Normal | 3 |
//!
//! The whole cycle therefore lasts [`BLINK_CYCLE_TICKS`] = 31 ticks.
//!
//! # Examples
//!
//! ```
//! use tui_starfield_types::{Interior, BLINK_CYCLE_TICKS};
//!
//! // A 10x10 terminal leaves rows/columns 1..=8 for content.
//! let interior = Interior::of_size(10, 10);
//! assert_eq!(interior.max_row, 8);
//! assert!(interior.contains(1, 8));
//! assert!(!interior.contains(0, 4));
//!
//! assert_eq!(BLINK_CYCLE_TICKS, 31);
//! ```

/// Text attribute applied to a single glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Emphasis {
    #[default]
    Normal,
    Dim,
    Bold,
}

/// Direction and action state read from the keyboard for one tick.
///
/// Directions are always in `{-1, 0, 1}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Controls {
    pub rows_direction: i8,
    pub columns_direction: i8,
    pub fire: bool,
}

impl Controls {
    pub const IDLE: Controls = Controls {
        rows_direction: 0,
        columns_direction: 0,
        fire: false,
    };

    pub fn new(rows_direction: i8, columns_direction: i8, fire: bool) -> Self {
        Self {
            rows_direction: rows_direction.signum(),
            columns_direction: columns_direction.signum(),
            fire,
        }
    }

    /// True when any direction component is nonzero.
    pub fn is_moving(&self) -> bool {
        self.rows_direction != 0 || self.columns_direction != 0
    }
}

/// Canvas interior: the area inside the one-cell border.
///
/// `max_row` and `max_column` are the last *interior* indices, so valid
/// content cells are `1..=max_row` x `1..=max_column`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interior {
    pub max_row: u16,
    pub max_column: u16,
}

impl Interior {
    /// Interior of a canvas with the given total size.
    pub fn of_size(rows: u16, columns: u16) -> Self {
        Self {
            max_row: rows.saturating_sub(2),
            max_column: columns.saturating_sub(2),
        }
    }

    pub fn contains(&self, row: i32, column: i32) -> bool {
        row >= 1 && row <= self.max_row as i32 && column >= 1 && column <= self.max_column as i32
    }

    /// Centre cell of the interior (rounded towards the top-left).
    pub fn center(&self) -> (f64, f64) {
        (
            (1.0 + self.max_row as f64) / 2.0,
            (1.0 + self.max_column as f64) / 2.0,
        )
    }

    pub fn is_empty(&self) -> bool {
        self.max_row == 0 || self.max_column == 0
    }
}

/// Lit stages of a star, in cycle order, with their length in ticks.
pub const BLINK_STAGES: [(Emphasis, u8); 4] = [
    (Emphasis::Dim, 20),
    (Emphasis::Normal, 3),
    (Emphasis::Bold, 5),
    (Emphasis::Normal, 3),
];

/// Length of one full blink cycle in ticks.
pub const BLINK_CYCLE_TICKS: u32 = 31;

/// Largest idle offset a star may start with.
pub const MAX_BLINK_OFFSET: u8 = 3;

/// Default pause between ticks, in seconds.
pub const DEFAULT_TICK_TIMEOUT_SECS: f64 = 0.1;

/// Default pool of star glyphs.
pub const DEFAULT_STAR_SYMBOLS: &str = "+*.:";

/// Default number of stars.
pub const DEFAULT_STARS_AMOUNT: usize = 200;

/// Default ship speed in cells per tick.
pub const DEFAULT_SPACESHIP_SPEED: f64 = 10.0;

/// Default projectile velocity in cells per tick (row, column).
pub const DEFAULT_SHOT_VELOCITY: (f64, f64) = (-0.3, 0.0);
