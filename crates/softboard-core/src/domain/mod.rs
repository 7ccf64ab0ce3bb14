//! Pure domain entities: the key layout tables and the session state.

pub mod layout;
pub mod state;
