//! Animation tasks: resumable units of drawing work.
//!
//! Each task is an explicit state machine. The scheduler calls
//! [`Task::resume`] once per tick; the task does a bounded amount of drawing
//! and reports whether it wants to be resumed again.

use crate::blink::BlinkTask;
use crate::canvas::Canvas;
use crate::projectile::ProjectileTask;
use crate::ship::ShipTask;
use crate::types::{Controls, Interior};

/// Outcome of a single resume.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Continue,
    Finished,
}

/// Whether a task is expected to end on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifetime {
    /// Runs for the whole program (stars, the ship).
    Infinite,
    /// Ends once its own condition is met (a shot leaving the screen).
    Finite,
}

/// Everything a task may touch during one resume.
pub struct TickContext<'a> {
    pub canvas: &'a mut dyn Canvas,
    pub controls: Controls,
    spawned: &'a mut Vec<Task>,
}

impl<'a> TickContext<'a> {
    pub fn new(canvas: &'a mut dyn Canvas, controls: Controls, spawned: &'a mut Vec<Task>) -> Self {
        Self {
            canvas,
            controls,
            spawned,
        }
    }

    pub fn interior(&self) -> Interior {
        self.canvas.interior()
    }

    /// Queue a new task. It joins the scheduler after the current sweep.
    pub fn spawn(&mut self, task: impl Into<Task>) {
        self.spawned.push(task.into());
    }

    /// Queue a shot and ring the bell for it.
    pub fn fire(&mut self, shot: ProjectileTask) {
        self.canvas.beep();
        self.spawn(shot);
    }
}

/// The closed set of task kinds the scheduler drives.
#[derive(Debug, Clone)]
pub enum Task {
    Blink(BlinkTask),
    Ship(ShipTask),
    Projectile(ProjectileTask),
}

impl Task {
    pub fn resume(&mut self, cx: &mut TickContext<'_>) -> Step {
        match self {
            Task::Blink(task) => task.resume(cx),
            Task::Ship(task) => task.resume(cx),
            Task::Projectile(task) => task.resume(cx),
        }
    }

    pub fn lifetime(&self) -> Lifetime {
        match self {
            Task::Blink(_) | Task::Ship(_) => Lifetime::Infinite,
            Task::Projectile(_) => Lifetime::Finite,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Task::Blink(_) => "blink",
            Task::Ship(_) => "ship",
            Task::Projectile(_) => "projectile",
        }
    }
}

impl From<BlinkTask> for Task {
    fn from(task: BlinkTask) -> Self {
        Task::Blink(task)
    }
}

impl From<ShipTask> for Task {
    fn from(task: ShipTask) -> Self {
        Task::Ship(task)
    }
}

impl From<ProjectileTask> for Task {
    fn from(task: ProjectileTask) -> Self {
        Task::Projectile(task)
    }
}
