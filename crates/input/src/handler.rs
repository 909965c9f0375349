//! Held-button tracking for terminal environments.
//!
//! Most terminals only report key presses (plus auto-repeat presses while a
//! key is down). A button therefore counts as held from its last press until
//! either a release event arrives or a short timeout passes without another
//! press.

use std::time::{Duration, Instant};

use crossterm::event::KeyCode;

use crate::map::button_for_key;
use crate::types::Buttons;

const SLOTS: [Buttons; 5] = [
    Buttons::LEFT,
    Buttons::RIGHT,
    Buttons::UP,
    Buttons::DOWN,
    Buttons::START,
];

// Long enough to bridge the gap between a terminal's auto-repeat presses,
// short enough that a tap moves the camera only a few cells.
const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u32 = 150;

/// Tracks which buttons are currently held.
#[derive(Debug, Clone)]
pub struct InputHandler {
    last_press: [Option<Instant>; SLOTS.len()],
    key_release_timeout_ms: u32,
}

fn slot(button: Buttons) -> Option<usize> {
    SLOTS.iter().position(|&b| b == button)
}

impl InputHandler {
    pub fn new() -> Self {
        Self {
            last_press: [None; SLOTS.len()],
            key_release_timeout_ms: DEFAULT_KEY_RELEASE_TIMEOUT_MS,
        }
    }

    pub fn with_key_release_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.key_release_timeout_ms = timeout_ms;
        self
    }

    pub fn key_release_timeout_ms(&self) -> u32 {
        self.key_release_timeout_ms
    }

    /// Record a press. Returns the button it maps to.
    pub fn handle_key_press(&mut self, code: KeyCode) -> Option<Buttons> {
        self.press_at(code, Instant::now())
    }

    pub fn press_at(&mut self, code: KeyCode, at: Instant) -> Option<Buttons> {
        let button = button_for_key(code)?;
        if let Some(i) = slot(button) {
            self.last_press[i] = Some(at);
        }
        Some(button)
    }

    pub fn handle_key_release(&mut self, code: KeyCode) {
        if let Some(i) = button_for_key(code).and_then(slot) {
            self.last_press[i] = None;
        }
    }

    /// Buttons held right now.
    pub fn held(&mut self) -> Buttons {
        self.held_at(Instant::now())
    }

    /// Buttons held at `now`. Buttons whose last press is older than the
    /// release timeout are dropped.
    pub fn held_at(&mut self, now: Instant) -> Buttons {
        let timeout = Duration::from_millis(self.key_release_timeout_ms as u64);
        let mut held = Buttons::empty();
        for (i, last) in self.last_press.iter_mut().enumerate() {
            match *last {
                Some(t) if now.saturating_duration_since(t) <= timeout => held |= SLOTS[i],
                Some(_) => *last = None,
                None => {}
            }
        }
        held
    }

    pub fn reset(&mut self) {
        self.last_press = [None; SLOTS.len()];
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
