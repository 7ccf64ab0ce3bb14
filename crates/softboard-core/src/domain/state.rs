//! Mutable keyboard session state.

use serde::{Deserialize, Serialize};

use crate::domain::layout::Screen;

/// The two state variables of a keyboard session: which screen is active and
/// whether caps is on.
///
/// Created once per session and mutated only by the dispatcher; everything
/// else reads [`KeyboardState::snapshot`]. The type is `Copy` so each
/// dispatch call takes the current state in and hands the next state back,
/// leaving no hidden shared mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyboardState {
    active_screen: Screen,
    caps_on: bool,
}

impl KeyboardState {
    /// The session start state: primary screen, caps off.
    pub fn new() -> Self {
        Self {
            active_screen: Screen::Primary,
            caps_on: false,
        }
    }

    /// Read-only view for the renderer: `(active screen, caps on)`.
    pub fn snapshot(&self) -> (Screen, bool) {
        (self.active_screen, self.caps_on)
    }

    pub fn active_screen(&self) -> Screen {
        self.active_screen
    }

    pub fn caps_on(&self) -> bool {
        self.caps_on
    }

    // Setters are crate-internal: only the dispatcher transitions state.

    pub(crate) fn set_screen(&mut self, screen: Screen) {
        self.active_screen = screen;
    }

    pub(crate) fn set_caps(&mut self, on: bool) {
        self.caps_on = on;
    }

    pub(crate) fn toggle_caps(&mut self) {
        self.caps_on = !self.caps_on;
    }
}

impl Default for KeyboardState {
    fn default() -> Self {
        Self::new()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
