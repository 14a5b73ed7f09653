//! Initial task set: the stars, then the ship.

use log::info;

use crate::config::StarfieldConfig;
use crate::core::{BlinkTask, Scheduler, ShipTask, SimpleRng, SpriteFrame};
use crate::types::Interior;

/// Build the scheduler for a canvas with the given interior.
///
/// Stars are queued first so the ship, resumed last, is drawn over any
/// star sharing its cells.
pub fn build_scene(
    config: &StarfieldConfig,
    interior: Interior,
    frames: Vec<SpriteFrame>,
    rng: &mut SimpleRng,
) -> Scheduler {
    let mut scheduler = Scheduler::new();

    for _ in 0..config.stars_amount {
        match BlinkTask::random(rng, interior, &config.star_symbols) {
            Some(star) => scheduler.push(star),
            None => break,
        }
    }
    let stars = scheduler.len();

    scheduler.push(ShipTask::new(frames, interior, config.spaceship_speed));

    info!(
        "scene ready: {stars} stars, interior {}x{}",
        interior.max_row, interior.max_column
    );
    scheduler
}
