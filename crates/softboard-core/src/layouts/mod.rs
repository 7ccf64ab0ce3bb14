//! Built-in key layout tables.
//!
//! One module per screen, each contributing its rows; [`standard`] assembles
//! the full two-screen table the input surface ships with. Hosts that need a
//! different arrangement build their own table through
//! [`LayoutTable::builder`] instead of editing these rows.

mod primary;
mod secondary;

use crate::domain::layout::{LayoutTable, Screen};

/// The standard two-screen table: an alphanumeric + punctuation primary
/// screen and a digit / symbol secondary screen.
pub fn standard() -> LayoutTable {
    LayoutTable::builder()
        .screen(Screen::Primary, primary::rows())
        .screen(Screen::Secondary, secondary::rows())
        .build()
        .expect("standard layout table is internally consistent")
}

// ── Tests ─────────────────────────────────────────────────────────────────────
