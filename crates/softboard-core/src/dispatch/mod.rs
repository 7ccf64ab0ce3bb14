//! Press dispatch: from a key identifier plus the current state to a
//! text-editing action and the next state.
//!
//! The dispatcher is the only component with behavior. It owns nothing
//! mutable: every call takes the current [`KeyboardState`] in and returns
//! the next one inside a [`DispatchOutcome`], so the caller decides when a
//! transition is committed. Dispatch is a fast, total function: malformed
//! key events degrade to [`Action::None`] and never take the session down.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::domain::layout::{KeyKind, LayoutError, LayoutTable, Screen};
use crate::domain::state::KeyboardState;

/// The text-editing side effect of one key press, consumed by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    /// Insert the given text at the host cursor.
    InsertText(String),
    /// Delete one unit backward at the host cursor.
    DeleteBackward,
    /// A host function request (keyboard switcher, settings) forwarded
    /// verbatim; the core does not interpret it further.
    DelegateToHost(String),
    /// Nothing to forward. Pure state transitions and ignored presses.
    None,
}

/// Result of dispatching one key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchOutcome {
    /// The side effect to forward to the host text sink.
    pub action: Action,
    /// The state after this press. Identical to the input state unless the
    /// press was a caps or screen transition.
    pub state: KeyboardState,
    /// `true` when visible key caps may have changed and the renderer
    /// should re-read the snapshot and redraw. The dispatcher never
    /// enumerates affected keys; redraw granularity is the renderer's call.
    pub needs_redraw: bool,
}

/// Tunable dispatch behavior left open by the observed source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispatchPolicy {
    /// Reset caps to off when the active screen changes. Off by default:
    /// caps is preserved across screen switches.
    pub reset_caps_on_screen_switch: bool,
}

/// Maps a pressed key identifier plus the current state to an [`Action`] and
/// the resulting state transition.
pub struct Dispatcher {
    table: Arc<LayoutTable>,
    policy: DispatchPolicy,
}

impl Dispatcher {
    /// Creates a dispatcher over `table` with the default policy.
    pub fn new(table: Arc<LayoutTable>) -> Self {
        Self::with_policy(table, DispatchPolicy::default())
    }

    /// Creates a dispatcher with an explicit [`DispatchPolicy`].
    pub fn with_policy(table: Arc<LayoutTable>, policy: DispatchPolicy) -> Self {
        Self { table, policy }
    }

    /// Returns the layout table this dispatcher resolves keys against.
    pub fn table(&self) -> &Arc<LayoutTable> {
        &self.table
    }

    /// Handles one key press event `(key_id, screen)` against `state`.
    ///
    /// Never fails: an id that does not resolve within `screen` is logged
    /// and becomes [`Action::None`] with the state unchanged, so a stale or
    /// malformed renderer event cannot make the keyboard unresponsive.
    pub fn dispatch(&self, key_id: &str, screen: Screen, state: KeyboardState) -> DispatchOutcome {
        let spec = match self.table.key(screen, key_id) {
            Ok(spec) => spec,
            Err(err @ LayoutError::UnknownScreen(_)) => {
                // Unregistered screen is a programmer error: loud in debug,
                // degraded to a no-op in release.
                debug_assert!(false, "dispatch on unregistered screen: {err}");
                warn!(key_id, ?screen, %err, "ignoring press on unregistered screen");
                return Self::ignored(state);
            }
            Err(err) => {
                warn!(key_id, ?screen, %err, "ignoring unresolvable key press");
                return Self::ignored(state);
            }
        };

        match &spec.kind {
            KeyKind::Literal(text) => {
                let emitted = if spec.shift_exempt {
                    text.clone()
                } else if state.caps_on() {
                    text.to_uppercase()
                } else {
                    text.to_lowercase()
                };
                DispatchOutcome {
                    action: Action::InsertText(emitted),
                    state,
                    needs_redraw: false,
                }
            }
            KeyKind::Delete => DispatchOutcome {
                action: Action::DeleteBackward,
                state,
                needs_redraw: false,
            },
            KeyKind::Space => DispatchOutcome {
                action: Action::InsertText(" ".to_string()),
                state,
                needs_redraw: false,
            },
            KeyKind::Enter => DispatchOutcome {
                action: Action::InsertText("\n".to_string()),
                state,
                needs_redraw: false,
            },
            KeyKind::CapsLock => {
                let mut next = state;
                next.toggle_caps();
                debug!(caps_on = next.caps_on(), "caps state toggled");
                DispatchOutcome {
                    action: Action::None,
                    state: next,
                    needs_redraw: true,
                }
            }
            KeyKind::ScreenToggle(target) => {
                let mut next = state;
                next.set_screen(*target);
                if self.policy.reset_caps_on_screen_switch {
                    next.set_caps(false);
                }
                debug!(?target, caps_on = next.caps_on(), "active screen switched");
                DispatchOutcome {
                    action: Action::None,
                    state: next,
                    needs_redraw: true,
                }
            }
            KeyKind::SwitchKeyboard | KeyKind::Settings => DispatchOutcome {
                action: Action::DelegateToHost(spec.id.clone()),
                state,
                needs_redraw: false,
            },
            KeyKind::NoOp => Self::ignored(state),
        }
    }

    fn ignored(state: KeyboardState) -> DispatchOutcome {
        DispatchOutcome {
            action: Action::None,
            state,
            needs_redraw: false,
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
