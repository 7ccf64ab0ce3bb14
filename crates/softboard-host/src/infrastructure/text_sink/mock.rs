//! Mock text sink for unit testing.
//!
//! # Why a mock sink?
//!
//! A real host's text sink writes into a live text-input view that test code
//! cannot observe directly. The `MockTextSink` replaces that with in-memory
//! recording: each command is pushed into a `Mutex<Vec<...>>` so assertions
//! can inspect exactly what was emitted and in what order.
//!
//! # `should_fail` flag
//!
//! Set `should_fail = true` to make every method return
//! [`SinkError::Host`]. This exercises error-handling paths in callers
//! without needing a broken host.

use std::sync::Mutex;

use crate::application::run_session::{SinkError, TextSink};

/// The commands a [`TextSink`] receives, in call order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkCommand {
    Insert(String),
    DeleteBackward,
}

/// A sink that records all commands without touching a host document.
#[derive(Debug, Default)]
pub struct MockTextSink {
    /// Every command received, in call order.
    pub commands: Mutex<Vec<SinkCommand>>,
    /// When `true`, every method immediately returns [`SinkError::Host`].
    pub should_fail: bool,
}

impl MockTextSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Convenience: the texts of all `Insert` commands, in order.
    pub fn inserted_texts(&self) -> Vec<String> {
        self.commands
            .lock()
            .unwrap()
            .iter()
            .filter_map(|cmd| match cmd {
                SinkCommand::Insert(text) => Some(text.clone()),
                SinkCommand::DeleteBackward => None,
            })
            .collect()
    }
}

impl TextSink for MockTextSink {
    fn insert(&self, text: &str) -> Result<(), SinkError> {
        if self.should_fail {
            return Err(SinkError::Host("mock failure".into()));
        }
        self.commands
            .lock()
            .unwrap()
            .push(SinkCommand::Insert(text.to_string()));
        Ok(())
    }

    fn delete_backward(&self) -> Result<(), SinkError> {
        if self.should_fail {
            return Err(SinkError::Host("mock failure".into()));
        }
        self.commands.lock().unwrap().push(SinkCommand::DeleteBackward);
        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
