//! Blink task: one twinkling star.

use crate::rng::SimpleRng;
use crate::task::{Step, TickContext};
use crate::types::{Emphasis, Interior, BLINK_STAGES, MAX_BLINK_OFFSET};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BlinkState {
    /// Waiting out the initial phase offset.
    Idle { remaining: u8 },
    /// Showing `BLINK_STAGES[stage]`; `remaining` more resumes stay in it.
    Lit { stage: usize, remaining: u8 },
}

/// A star at a fixed cell that cycles dim, normal, bold, normal forever.
///
/// Entering a stage writes the glyph once; the following resumes of that
/// stage only count down. Every resume consumes exactly one tick.
#[derive(Debug, Clone)]
pub struct BlinkTask {
    row: u16,
    column: u16,
    symbol: char,
    state: BlinkState,
}

impl BlinkTask {
    pub fn new(row: u16, column: u16, symbol: char, offset: u8) -> Self {
        Self {
            row,
            column,
            symbol,
            state: BlinkState::Idle { remaining: offset },
        }
    }

    /// A star at a random interior cell with a random symbol and offset.
    ///
    /// Returns `None` when there is no interior to place it in or no symbol
    /// to pick.
    pub fn random(rng: &mut SimpleRng, interior: Interior, symbols: &[char]) -> Option<Self> {
        if interior.is_empty() {
            return None;
        }
        let symbol = *rng.choose(symbols)?;
        let row = rng.range_inclusive(1, interior.max_row as u32) as u16;
        let column = rng.range_inclusive(1, interior.max_column as u32) as u16;
        let offset = rng.range_inclusive(0, MAX_BLINK_OFFSET as u32) as u8;
        Some(Self::new(row, column, symbol, offset))
    }

    pub fn position(&self) -> (u16, u16) {
        (self.row, self.column)
    }

    pub fn symbol(&self) -> char {
        self.symbol
    }

    /// Current emphasis, or `None` while still idle.
    pub fn emphasis(&self) -> Option<Emphasis> {
        match self.state {
            BlinkState::Idle { .. } => None,
            BlinkState::Lit { stage, .. } => Some(BLINK_STAGES[stage].0),
        }
    }

    pub fn resume(&mut self, cx: &mut TickContext<'_>) -> Step {
        match self.state {
            BlinkState::Idle { remaining: 0 } => self.enter(cx, 0),
            BlinkState::Idle { remaining } => {
                self.state = BlinkState::Idle {
                    remaining: remaining - 1,
                };
            }
            BlinkState::Lit {
                stage,
                remaining: 0,
            } => self.enter(cx, (stage + 1) % BLINK_STAGES.len()),
            BlinkState::Lit { stage, remaining } => {
                self.state = BlinkState::Lit {
                    stage,
                    remaining: remaining - 1,
                };
            }
        }
        Step::Continue
    }

    fn enter(&mut self, cx: &mut TickContext<'_>, stage: usize) {
        let (emphasis, ticks) = BLINK_STAGES[stage];
        if cx.interior().contains(self.row as i32, self.column as i32) {
            cx.canvas.put(self.row, self.column, self.symbol, emphasis);
        }
        self.state = BlinkState::Lit {
            stage,
            remaining: ticks.saturating_sub(1),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::testing::Recorder;
    use crate::task::Task;
    use crate::types::Controls;

    /// Resume `n` times, returning the emphasis written on each resume.
    fn run(task: &mut BlinkTask, n: usize) -> Vec<Option<Emphasis>> {
        let mut canvas = Recorder::new(10, 10);
        let mut spawned: Vec<Task> = Vec::new();
        let mut out = Vec::with_capacity(n);
        for _ in 0..n {
            let before = canvas.puts.len();
            let mut cx = TickContext::new(&mut canvas, Controls::IDLE, &mut spawned);
            assert_eq!(task.resume(&mut cx), Step::Continue);
            out.push(canvas.puts.get(before).map(|p| p.emphasis));
        }
        out
    }

    #[test]
    fn idle_offset_delays_first_write() {
        let mut star = BlinkTask::new(2, 2, '+', 3);
        let writes = run(&mut star, 4);
        assert_eq!(writes, vec![None, None, None, Some(Emphasis::Dim)]);
    }

    #[test]
    fn stage_writes_happen_on_entry_only() {
        let mut star = BlinkTask::new(2, 2, '+', 0);
        let writes = run(&mut star, 31);
        let entries: Vec<(usize, Emphasis)> = writes
            .iter()
            .enumerate()
            .filter_map(|(i, w)| w.map(|e| (i, e)))
            .collect();
        assert_eq!(
            entries,
            vec![
                (0, Emphasis::Dim),
                (20, Emphasis::Normal),
                (23, Emphasis::Bold),
                (28, Emphasis::Normal),
            ]
        );
    }

    #[test]
    fn emphasis_tracks_current_stage() {
        let mut star = BlinkTask::new(2, 2, '+', 1);
        assert_eq!(star.emphasis(), None);
        run(&mut star, 2);
        assert_eq!(star.emphasis(), Some(Emphasis::Dim));
        run(&mut star, 20);
        assert_eq!(star.emphasis(), Some(Emphasis::Normal));
        run(&mut star, 3);
        assert_eq!(star.emphasis(), Some(Emphasis::Bold));
    }

    #[test]
    fn random_star_lands_in_interior() {
        let mut rng = SimpleRng::new(42);
        let interior = Interior::of_size(12, 30);
        for _ in 0..500 {
            let star = BlinkTask::random(&mut rng, interior, &['*', '.']).unwrap();
            let (row, column) = star.position();
            assert!(interior.contains(row as i32, column as i32));
            assert!(matches!(star.state, BlinkState::Idle { remaining } if remaining <= 3));
        }
    }

    #[test]
    fn random_star_needs_symbols_and_room() {
        let mut rng = SimpleRng::new(42);
        assert!(BlinkTask::random(&mut rng, Interior::of_size(10, 10), &[]).is_none());
        assert!(BlinkTask::random(&mut rng, Interior::of_size(2, 10), &['*']).is_none());
    }
}
