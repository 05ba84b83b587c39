/// Keyboard state tracking.
///
/// The tracker records the frame each logical key was last seen held.  On
/// terminals that report key releases (keyboard-enhancement capable ones)
/// keys drop out on release.  Classic terminals only send presses, with OS
/// key-repeat showing up as repeated presses; there a key expires after
/// `hold_window` frames of silence, which is shorter than the repeat
/// interval, so it stays live while actively repeating.

use std::collections::HashMap;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind};

/// Frames a key stays held without a fresh press/repeat (≈133 ms @ 30 FPS).
pub const HOLD_WINDOW: u64 = 4;

/// The closed vocabulary of logical keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    Space,
    Left,
    Up,
    Right,
    Down,
    /// Always stored upper-case.
    Letter(char),
}

impl Key {
    pub fn letter(c: char) -> Key {
        Key::Letter(c.to_ascii_uppercase())
    }

    pub fn from_code(code: KeyCode) -> Option<Key> {
        match code {
            KeyCode::Char(' ') => Some(Key::Space),
            KeyCode::Left => Some(Key::Left),
            KeyCode::Up => Some(Key::Up),
            KeyCode::Right => Some(Key::Right),
            KeyCode::Down => Some(Key::Down),
            KeyCode::Char(c) if c.is_ascii_alphabetic() => Some(Key::letter(c)),
            _ => None,
        }
    }

    /// Logical key names: `SPACE`, `LEFT`, `UP`, `RIGHT`, `DOWN`, or a single
    /// letter.  Case-insensitive.
    pub fn parse(name: &str) -> Option<Key> {
        match name.to_ascii_uppercase().as_str() {
            "SPACE" => Some(Key::Space),
            "LEFT" => Some(Key::Left),
            "UP" => Some(Key::Up),
            "RIGHT" => Some(Key::Right),
            "DOWN" => Some(Key::Down),
            other => {
                let mut chars = other.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) if c.is_ascii_alphabetic() => Some(Key::letter(c)),
                    _ => None,
                }
            }
        }
    }
}

/// Per-tick view of the controls the game reads.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputSnapshot {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub fire: bool,
}

#[derive(Clone, Debug, Default)]
pub struct InputTracker {
    pressed: HashMap<Key, u64>,
    frame: u64,
    hold_window: Option<u64>,
}

impl InputTracker {
    /// Tracker for terminals that report releases; keys never expire.
    pub fn new() -> Self {
        InputTracker::default()
    }

    /// Tracker for press-only terminals.
    pub fn with_hold_window(frames: u64) -> Self {
        InputTracker {
            hold_window: Some(frames),
            ..InputTracker::default()
        }
    }

    pub fn begin_frame(&mut self) {
        self.frame += 1;
    }

    pub fn set_key(&mut self, key: Key, down: bool) {
        if down {
            self.pressed.insert(key, self.frame);
        } else {
            self.pressed.remove(&key);
        }
    }

    /// Forget everything, as when the window loses focus.
    pub fn clear(&mut self) {
        self.pressed.clear();
    }

    pub fn handle_event(&mut self, event: &Event) {
        match event {
            Event::Key(KeyEvent { code, kind, .. }) => {
                let Some(key) = Key::from_code(*code) else {
                    return;
                };
                match kind {
                    KeyEventKind::Press | KeyEventKind::Repeat => self.set_key(key, true),
                    KeyEventKind::Release => self.set_key(key, false),
                }
            }
            Event::FocusLost => self.clear(),
            _ => {}
        }
    }

    pub fn is_down(&self, key: Key) -> bool {
        match (self.pressed.get(&key), self.hold_window) {
            (None, _) => false,
            (Some(_), None) => true,
            (Some(&seen), Some(window)) => self.frame.saturating_sub(seen) <= window,
        }
    }

    /// `is_down` by logical name; unknown names are never down.
    pub fn is_down_named(&self, name: &str) -> bool {
        Key::parse(name).is_some_and(|key| self.is_down(key))
    }

    pub fn snapshot(&self) -> InputSnapshot {
        InputSnapshot {
            up: self.is_down(Key::Up) || self.is_down(Key::letter('w')),
            down: self.is_down(Key::Down) || self.is_down(Key::letter('s')),
            left: self.is_down(Key::Left) || self.is_down(Key::letter('a')),
            right: self.is_down(Key::Right) || self.is_down(Key::letter('d')),
            fire: self.is_down(Key::Space),
        }
    }
}
