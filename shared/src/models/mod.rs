//! Data models
//!
//! Shared between the backend and the client (via API).
//! All IDs are `String` (server-assigned).

pub mod appointment;
pub mod service;

// Re-exports
pub use appointment::*;
pub use service::*;
