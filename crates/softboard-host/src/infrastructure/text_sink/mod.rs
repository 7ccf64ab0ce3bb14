//! Text sink implementations.
//!
//! [`buffer::BufferTextSink`] maintains an in-memory document and is the
//! sink used by the demo binary and integration tests; [`mock::MockTextSink`]
//! records calls for unit-testing callers. A real host supplies its own
//! implementation bridging to its text-input API.

pub mod buffer;
pub mod mock;
