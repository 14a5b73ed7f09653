//! Cooperative scheduler: resumes every live task once per tick.
//!
//! There is one thread of control. Tasks are resumed in insertion order and
//! run to their next yield point without interruption; finished tasks are
//! dropped without reordering the survivors. Flushing the canvas and pacing
//! the loop are left to the caller so this module stays free of I/O.

use log::{debug, warn};

use crate::canvas::Canvas;
use crate::task::{Lifetime, Step, Task, TickContext};
use crate::types::Controls;

/// When the border is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BorderPolicy {
    /// Before every sweep, so stray writes can never leave it damaged.
    #[default]
    EveryTick,
    /// Only before the first sweep.
    Once,
}

/// What happened during one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickReport {
    /// Tick number, starting at 0.
    pub tick: u64,
    pub resumed: usize,
    pub finished: usize,
    pub spawned: usize,
    /// Tasks alive after the tick, spawned ones included.
    pub live: usize,
}

#[derive(Debug, Default)]
pub struct Scheduler {
    tasks: Vec<Task>,
    spawned: Vec<Task>,
    border: BorderPolicy,
    border_drawn: bool,
    ticks: u64,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_border_policy(mut self, border: BorderPolicy) -> Self {
        self.border = border;
        self
    }

    /// Append a task; it is resumed after every task already queued.
    pub fn push(&mut self, task: impl Into<Task>) {
        self.tasks.push(task.into());
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Number of completed ticks.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Run one sweep: border, then every live task once, in order.
    ///
    /// Tasks that report [`Step::Finished`] are removed before this returns
    /// and are never resumed again. Tasks spawned during the sweep are
    /// appended afterwards and first run on the next tick.
    pub fn tick(&mut self, canvas: &mut dyn Canvas, controls: Controls) -> TickReport {
        if self.border == BorderPolicy::EveryTick || !self.border_drawn {
            canvas.draw_border();
            self.border_drawn = true;
        }

        let tick = self.ticks;
        let mut resumed = 0;
        let mut finished = 0;
        let spawned = &mut self.spawned;

        self.tasks.retain_mut(|task| {
            resumed += 1;
            let mut cx = TickContext::new(&mut *canvas, controls, &mut *spawned);
            match task.resume(&mut cx) {
                Step::Continue => true,
                Step::Finished => {
                    finished += 1;
                    if task.lifetime() == Lifetime::Infinite {
                        warn!("tick {tick}: {} task finished unexpectedly", task.name());
                    } else {
                        debug!("tick {tick}: {} task finished", task.name());
                    }
                    false
                }
            }
        });

        let spawned = self.spawned.len();
        if spawned > 0 {
            debug!("tick {tick}: {spawned} task(s) spawned");
        }
        self.tasks.append(&mut self.spawned);
        self.ticks += 1;

        TickReport {
            tick,
            resumed,
            finished,
            spawned,
            live: self.tasks.len(),
        }
    }
}
