//! # softboard-core
//!
//! The key-layout/state engine of the Softboard input surface: layout
//! tables, keyboard session state, and press dispatch.
//!
//! This crate is consumed by the embedding layer (`softboard-host`) and by
//! any host UI that renders the keys. It has zero dependencies on OS APIs,
//! UI frameworks, I/O, or async runtimes.
//!
//! The core defines:
//!
//! - **`domain`** – Pure data. A [`LayoutTable`] describes which keys exist
//!   on which [`Screen`], row by row; a [`KeyboardState`] holds the two
//!   session variables (active screen, caps on).
//!
//! - **`dispatch`** – The only behavior. [`Dispatcher::dispatch`] maps a
//!   pressed key identifier plus the current state to an [`Action`] for the
//!   host text sink and the next state.
//!
//! - **`layouts`** – The built-in two-screen table
//!   ([`layouts::standard`]): alphanumeric + punctuation, and
//!   digit / symbol.
//!
//! Dispatch is synchronous and total: every press is handled to completion,
//! and malformed events degrade to [`Action::None`] rather than failing the
//! session.

pub mod dispatch;
pub mod domain;
pub mod layouts;

pub use dispatch::{Action, DispatchOutcome, DispatchPolicy, Dispatcher};
pub use domain::layout::{
    Glyph, IconRef, KeyKind, KeyRow, KeySpec, LayoutError, LayoutTable, LayoutTableBuilder, Screen,
};
pub use domain::state::KeyboardState;
