//! View-model bridge for host UIs.
//!
//! The host renderer does not consume [`LayoutTable`] directly; it reads
//! plain serializable DTO snapshots built here. The DTOs resolve everything
//! the renderer would otherwise have to know about the core: the label on a
//! literal key already has the caps state applied, and shift-exempt keys
//! keep their verbatim text. Each DTO derives `serde::Serialize` +
//! `Deserialize` so a WebView-style host can move it across its IPC
//! boundary as JSON.

use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use softboard_core::{Glyph, IconRef, KeyKind, LayoutError, LayoutTable, Screen};

use crate::application::run_session::Renderer;

// ── View-model DTOs ───────────────────────────────────────────────────────────

/// One key cap, ready to draw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyCapDto {
    /// The id to send back on activation.
    pub id: String,
    /// Cap text with the caps state already applied. Empty for icon keys.
    pub label: String,
    /// Icon reference for keys drawn from the host asset set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<IconRef>,
}

/// One rendered row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyRowDto {
    pub keys: Vec<KeyCapDto>,
}

/// The full view of one screen under one caps state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyboardViewDto {
    pub screen: Screen,
    pub caps_on: bool,
    pub rows: Vec<KeyRowDto>,
}

/// Builds the view of `screen` under `caps_on`.
///
/// # Errors
///
/// Returns [`LayoutError::UnknownScreen`] if `screen` is not registered in
/// `table`.
pub fn build_view(
    table: &LayoutTable,
    screen: Screen,
    caps_on: bool,
) -> Result<KeyboardViewDto, LayoutError> {
    let rows = table
        .rows(screen)?
        .iter()
        .map(|row| KeyRowDto {
            keys: row
                .keys
                .iter()
                .map(|spec| {
                    let label = match (&spec.glyph, &spec.kind) {
                        // Literal caps follow the dispatch-time case rule so
                        // what the user sees is what gets emitted.
                        (Glyph::Text(text), KeyKind::Literal(_)) => {
                            if spec.shift_exempt {
                                text.clone()
                            } else if caps_on {
                                text.to_uppercase()
                            } else {
                                text.to_lowercase()
                            }
                        }
                        (Glyph::Text(text), _) => text.clone(),
                        (Glyph::Icon(_), _) => String::new(),
                    };
                    let icon = match &spec.glyph {
                        Glyph::Icon(icon) => Some(*icon),
                        Glyph::Text(_) => None,
                    };
                    KeyCapDto {
                        id: spec.id.clone(),
                        label,
                        icon,
                    }
                })
                .collect(),
        })
        .collect();

    Ok(KeyboardViewDto {
        screen,
        caps_on,
        rows,
    })
}

// ── Logging renderer ──────────────────────────────────────────────────────────

/// A [`Renderer`] that logs redraw requests and records the last snapshot.
///
/// Used by the demo binary and available to hosts as a tracing tap while
/// they bring up their real renderer.
#[derive(Debug, Default)]
pub struct LoggingRenderer {
    last_snapshot: Mutex<Option<(Screen, bool)>>,
}

impl LoggingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// The snapshot carried by the most recent redraw request, if any.
    pub fn last_snapshot(&self) -> Option<(Screen, bool)> {
        *self.last_snapshot.lock().unwrap()
    }
}

impl Renderer for LoggingRenderer {
    fn request_redraw(&self, screen: Screen, caps_on: bool) {
        debug!(?screen, caps_on, "redraw requested");
        *self.last_snapshot.lock().unwrap() = Some((screen, caps_on));
    }

    fn delegate(&self, name: &str) {
        info!(name, "host function requested");
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
