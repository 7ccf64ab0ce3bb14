//! Host-side adapter implementations for the application-layer traits,
//! plus the view-model bridge and configuration storage.

pub mod storage;
pub mod text_sink;
pub mod ui_bridge;
