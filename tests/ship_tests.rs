use tui_starfield::core::{Canvas, Scheduler, ShipTask, SpriteFrame, Task};
use tui_starfield::term::FrameBuffer;
use tui_starfield::types::Controls;

fn square() -> Vec<SpriteFrame> {
    vec![SpriteFrame::parse("###\n#o#\n###"), SpriteFrame::parse("###\n#O#\n###")]
}

fn ship_position(scheduler: &Scheduler) -> (f64, f64) {
    match scheduler.tasks().last() {
        Some(Task::Ship(ship)) => ship.position(),
        other => panic!("expected ship, got {other:?}"),
    }
}

#[test]
fn holding_right_stops_at_the_border() {
    let mut fb = FrameBuffer::new(10, 10);
    let mut scheduler = Scheduler::new();
    scheduler.push(ShipTask::new(square(), fb.interior(), 1.0));
    assert_eq!(ship_position(&scheduler), (3.0, 3.0));

    for _ in 0..10 {
        scheduler.tick(&mut fb, Controls::new(0, 1, false));
    }

    let (top, left) = ship_position(&scheduler);
    assert_eq!(left, 8.0 - 3.0);
    assert_eq!(top, 3.0);
    // Border column untouched, ship flush against column 7.
    assert_eq!(fb.get(9, 4).unwrap().ch, '│');
    assert_eq!(fb.get(7, 4).unwrap().ch, '#');
}

#[test]
fn large_speed_clamps_in_one_step() {
    let mut fb = FrameBuffer::new(10, 10);
    let mut scheduler = Scheduler::new();
    scheduler.push(ShipTask::new(square(), fb.interior(), 10.0));

    scheduler.tick(&mut fb, Controls::new(1, -1, false));
    assert_eq!(ship_position(&scheduler), (5.0, 1.0));
}

#[test]
fn moving_leaves_no_ghost() {
    let mut fb = FrameBuffer::new(12, 12);
    let mut scheduler = Scheduler::new();
    scheduler.push(ShipTask::at(square(), 2.0, 2.0, 3.0));

    scheduler.tick(&mut fb, Controls::IDLE);
    scheduler.tick(&mut fb, Controls::new(1, 1, false));

    let glyphs: usize = (1..11)
        .flat_map(|y| (1..11).map(move |x| (x, y)))
        .filter(|&(x, y)| fb.get(x, y).unwrap().ch != ' ')
        .count();
    assert_eq!(glyphs, 9);
    assert_eq!(fb.get(6, 6).unwrap().ch, 'O');
}
