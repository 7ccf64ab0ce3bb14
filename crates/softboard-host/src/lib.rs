//! # softboard-host
//!
//! Embedding layer for the Softboard input surface. The core engine
//! (`softboard-core`) knows nothing about any concrete host; this crate
//! supplies the session use case that drives it and the adapter seams a
//! host plugs into:
//!
//! - **`application::run_session`** – [`KeyboardSession`], the single entry
//!   point (`handle_press`) between the host's event system and the core,
//!   plus the [`TextSink`] and [`Renderer`] traits the host implements.
//! - **`infrastructure::text_sink`** – an in-memory document sink and a
//!   recording mock.
//! - **`infrastructure::ui_bridge`** – serializable view-model DTOs for the
//!   host renderer, and a logging [`Renderer`].
//! - **`infrastructure::storage`** – read-only TOML host configuration.
//!
//! The demo binary (`softboard-host`) wires the mock-grade infrastructure
//! into a real session and drives a scripted typing run.

pub mod application;
pub mod infrastructure;

pub use application::run_session::{KeyboardSession, Renderer, SessionError, SinkError, TextSink};
pub use infrastructure::storage::config::{ConfigError, HostConfig};
pub use infrastructure::text_sink::buffer::BufferTextSink;
pub use infrastructure::ui_bridge::{build_view, KeyboardViewDto, LoggingRenderer};
