//! In-memory mock of the appointment backend
//!
//! Implements the service directory and appointment endpoints the
//! client consumes, with server-side validation, so the client and
//! its booking flow can be exercised without a real deployment.

pub mod api;
pub mod state;

pub use api::router;
pub use state::AppState;
