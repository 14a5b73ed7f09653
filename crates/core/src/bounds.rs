//! Bounds policy: keeps a sprite inside the canvas interior.

use crate::sprite::FrameSize;
use crate::types::Interior;

/// Clamp a sprite's top-left corner so the sprite stays off the border.
///
/// The result satisfies `1 <= top_row <= max_row - rows` and
/// `1 <= left_column <= max_column - columns`. The lower bound is applied
/// first, so a sprite taller or wider than the interior ends up pinned to
/// the upper bound. Out-of-range input is clamped, never rejected.
pub fn clamp_to_interior(
    top_row: f64,
    left_column: f64,
    interior: Interior,
    frame: FrameSize,
) -> (f64, f64) {
    let top_row = clamp_axis(top_row, interior.max_row, frame.rows);
    let left_column = clamp_axis(left_column, interior.max_column, frame.columns);
    (top_row, left_column)
}

fn clamp_axis(value: f64, max: u16, extent: u16) -> f64 {
    // f64::max maps NaN to the lower bound.
    let value = value.max(1.0);
    let upper = max as f64 - extent as f64;
    if value > upper {
        upper
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ship() -> FrameSize {
        FrameSize { rows: 3, columns: 3 }
    }

    #[test]
    fn in_range_position_is_untouched() {
        let interior = Interior::of_size(10, 10);
        assert_eq!(clamp_to_interior(2.5, 3.0, interior, ship()), (2.5, 3.0));
    }

    #[test]
    fn negative_position_clamps_to_one() {
        let interior = Interior::of_size(10, 10);
        assert_eq!(clamp_to_interior(-40.0, -0.2, interior, ship()), (1.0, 1.0));
    }

    #[test]
    fn overflowing_position_clamps_to_upper_bound() {
        let interior = Interior::of_size(10, 10);
        assert_eq!(clamp_to_interior(100.0, 7.0, interior, ship()), (5.0, 5.0));
    }

    #[test]
    fn nan_clamps_to_lower_bound() {
        let interior = Interior::of_size(10, 10);
        assert_eq!(clamp_to_interior(f64::NAN, f64::NAN, interior, ship()), (1.0, 1.0));
    }

    #[test]
    fn upper_clamp_wins_for_oversized_sprite() {
        let interior = Interior::of_size(4, 4);
        let (top, left) = clamp_to_interior(1.0, 1.0, interior, FrameSize { rows: 5, columns: 2 });
        assert_eq!(top, -3.0);
        assert_eq!(left, 1.0);
    }
}
