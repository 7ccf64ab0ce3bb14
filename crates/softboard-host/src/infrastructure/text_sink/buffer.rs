//! In-memory document sink.

use std::sync::Mutex;

use crate::application::run_session::{SinkError, TextSink};

/// A [`TextSink`] that applies editing commands to an in-memory `String`.
///
/// Deleting at the start of the document is a no-op, as required by the
/// sink contract: the session never guards that edge case itself.
#[derive(Debug, Default)]
pub struct BufferTextSink {
    buffer: Mutex<String>,
}

impl BufferTextSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the current document contents.
    pub fn contents(&self) -> String {
        self.buffer.lock().unwrap().clone()
    }
}

impl TextSink for BufferTextSink {
    fn insert(&self, text: &str) -> Result<(), SinkError> {
        self.buffer.lock().unwrap().push_str(text);
        Ok(())
    }

    fn delete_backward(&self) -> Result<(), SinkError> {
        // Pop one char, not one byte: literals may be multi-byte.
        self.buffer.lock().unwrap().pop();
        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_appends_text() {
        let sink = BufferTextSink::new();
        sink.insert("ab").unwrap();
        sink.insert("c").unwrap();
        assert_eq!(sink.contents(), "abc");
    }

    #[test]
    fn test_insert_empty_string_is_a_no_op() {
        let sink = BufferTextSink::new();
        sink.insert("").unwrap();
        assert_eq!(sink.contents(), "");
    }

    #[test]
    fn test_delete_backward_removes_last_char() {
        let sink = BufferTextSink::new();
        sink.insert("hi").unwrap();
        sink.delete_backward().unwrap();
        assert_eq!(sink.contents(), "h");
    }

    #[test]
    fn test_delete_backward_at_start_of_document_is_a_no_op() {
        let sink = BufferTextSink::new();
        assert!(sink.delete_backward().is_ok());
        assert_eq!(sink.contents(), "");
    }

    #[test]
    fn test_interleaved_insert_and_delete_yield_expected_document() {
        let sink = BufferTextSink::new();
        sink.insert("hell").unwrap();
        sink.insert("p").unwrap();
        sink.delete_backward().unwrap();
        sink.insert("o").unwrap();
        assert_eq!(sink.contents(), "hello");
    }
}
