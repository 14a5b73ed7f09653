//! Non-blocking controls reader.
//!
//! Every poll drains the events already waiting in the terminal queue and
//! folds them into one [`Controls`] value. Nothing is buffered between
//! polls: a key pressed during a slow tick shows up in the next poll. When a
//! burst exceeds [`MAX_KEYS_PER_POLL`], the oldest keys are dropped.

use std::io;
use std::time::Duration;

use arrayvec::ArrayVec;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

use crate::map::{handle_key_event, should_quit, ShipCommand};
use crate::types::Controls;

/// Upper bound on key events kept from a single poll.
pub const MAX_KEYS_PER_POLL: usize = 32;

/// Result of one poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Polled {
    pub controls: Controls,
    pub quit: bool,
}

/// Fold a burst of key events into one tick's controls.
///
/// A later key overrides an earlier one on the same axis; fire stays set
/// once any fire key was seen. Release events are ignored.
pub fn fold_keys(keys: &[KeyEvent]) -> Polled {
    let mut polled = Polled::default();
    for key in keys {
        if key.kind == KeyEventKind::Release {
            continue;
        }
        if should_quit(*key) {
            polled.quit = true;
            continue;
        }
        match handle_key_event(*key) {
            Some(ShipCommand::Fire) => polled.controls.fire = true,
            Some(command) => {
                if let Some((rows, columns)) = command.direction() {
                    if rows != 0 {
                        polled.controls.rows_direction = rows;
                    }
                    if columns != 0 {
                        polled.controls.columns_direction = columns;
                    }
                }
            }
            None => {}
        }
    }
    polled
}

/// Append `key`, evicting the oldest entry when the buffer is full.
pub fn push_newest(keys: &mut ArrayVec<KeyEvent, MAX_KEYS_PER_POLL>, key: KeyEvent) {
    if keys.is_full() {
        keys.remove(0);
    }
    keys.push(key);
}

/// Reads pending keyboard events from the real terminal.
#[derive(Debug, Default)]
pub struct ControlsReader {
    keys: ArrayVec<KeyEvent, MAX_KEYS_PER_POLL>,
}

impl ControlsReader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drain queued events without waiting.
    pub fn poll(&mut self) -> io::Result<Polled> {
        self.keys.clear();
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                push_newest(&mut self.keys, key);
            }
        }
        Ok(fold_keys(&self.keys))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEventState, KeyModifiers};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::from(code)
    }

    fn release(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn empty_burst_is_idle() {
        assert_eq!(fold_keys(&[]), Polled::default());
    }

    #[test]
    fn later_key_wins_per_axis() {
        let polled = fold_keys(&[press(KeyCode::Left), press(KeyCode::Up), press(KeyCode::Right)]);
        assert_eq!(polled.controls, Controls::new(-1, 1, false));
    }

    #[test]
    fn fire_is_sticky_within_a_poll() {
        let polled = fold_keys(&[press(KeyCode::Char(' ')), press(KeyCode::Down)]);
        assert_eq!(polled.controls, Controls::new(1, 0, true));
    }

    #[test]
    fn release_events_are_ignored() {
        let polled = fold_keys(&[release(KeyCode::Left), release(KeyCode::Char(' '))]);
        assert_eq!(polled.controls, Controls::IDLE);
    }

    #[test]
    fn overflowing_burst_keeps_the_latest_direction() {
        let mut keys = ArrayVec::<KeyEvent, MAX_KEYS_PER_POLL>::new();
        for _ in 0..MAX_KEYS_PER_POLL {
            push_newest(&mut keys, press(KeyCode::Left));
        }
        push_newest(&mut keys, press(KeyCode::Right));

        assert_eq!(keys.len(), MAX_KEYS_PER_POLL);
        assert_eq!(keys.last().map(|k| k.code), Some(KeyCode::Right));
        assert_eq!(fold_keys(&keys).controls.columns_direction, 1);
    }

    #[test]
    fn overflow_drops_oldest_keys_first() {
        let mut keys = ArrayVec::<KeyEvent, MAX_KEYS_PER_POLL>::new();
        push_newest(&mut keys, press(KeyCode::Char(' ')));
        for _ in 0..MAX_KEYS_PER_POLL {
            push_newest(&mut keys, press(KeyCode::Up));
        }

        let polled = fold_keys(&keys);
        assert!(!polled.controls.fire);
        assert_eq!(polled.controls.rows_direction, -1);
    }

    #[test]
    fn quit_is_reported_alongside_controls() {
        let polled = fold_keys(&[press(KeyCode::Right), press(KeyCode::Char('q'))]);
        assert!(polled.quit);
        assert_eq!(polled.controls.columns_direction, 1);
    }
}
