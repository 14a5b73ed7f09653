//! Core animation logic - pure, deterministic, and testable
//!
//! This crate holds everything that decides *what* is drawn and *when*,
//! with no dependency on a real terminal:
//!
//! - **Deterministic**: one seeded [`SimpleRng`] drives every random choice
//! - **Testable**: tasks draw through the [`Canvas`] trait, so tests can
//!   record every write
//! - **Cooperative**: tasks are explicit state machines resumed once per
//!   tick by the [`Scheduler`]; no async runtime or threads are involved
//!
//! # Module Structure
//!
//! - [`canvas`]: the drawing contract implemented by the terminal crate
//! - [`bounds`]: clamps sprite positions to the canvas interior
//! - [`sprite`]: multi-line text frames, bounding boxes and sprite painting
//! - [`task`]: the task enum, resume outcome and per-resume context
//! - [`blink`], [`ship`], [`projectile`]: the concrete tasks
//! - [`scheduler`]: the round-robin tick sweep
//! - [`rng`]: the seeded pseudo-random source
//!
//! # Example
//!
//! ```
//! use tui_starfield_core::{BlinkTask, Canvas, Scheduler};
//! use tui_starfield_types::{Controls, Emphasis};
//!
//! struct Null;
//! impl Canvas for Null {
//!     fn size(&self) -> (u16, u16) { (24, 80) }
//!     fn put(&mut self, _: u16, _: u16, _: char, _: Emphasis) {}
//!     fn draw_border(&mut self) {}
//!     fn beep(&mut self) {}
//! }
//!
//! let mut scheduler = Scheduler::new();
//! scheduler.push(BlinkTask::new(3, 4, '*', 0));
//!
//! let report = scheduler.tick(&mut Null, Controls::IDLE);
//! assert_eq!(report.resumed, 1);
//! assert_eq!(report.live, 1);
//! ```

pub mod blink;
pub mod bounds;
pub mod canvas;
pub mod projectile;
pub mod rng;
pub mod scheduler;
pub mod ship;
pub mod sprite;
pub mod task;

pub use tui_starfield_types as types;

// Re-export commonly used types for convenience
pub use blink::BlinkTask;
pub use bounds::clamp_to_interior;
pub use canvas::Canvas;
pub use projectile::ProjectileTask;
pub use rng::SimpleRng;
pub use scheduler::{BorderPolicy, Scheduler, TickReport};
pub use ship::ShipTask;
pub use sprite::{bounding_box, FrameSize, Ink, SpriteFrame};
pub use task::{Lifetime, Step, Task, TickContext};
