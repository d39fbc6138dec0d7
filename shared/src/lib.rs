//! Shared types for the TaxDesk appointment platform
//!
//! Common types used across the client and backend mock including
//! domain models, API request/response DTOs, error types, and the
//! booking flow state machine.

pub mod booking;
pub mod client;
pub mod error;
pub mod models;
pub mod response;

// Re-exports
pub use serde::{Deserialize, Serialize};

// Booking flow re-exports (for convenient access)
pub use booking::{BookingState, BookingStateUpdate, BookingStep, StepView, MAX_COMMENTS_LEN};
pub use response::{ApiResponse, PaginatedResponse, Pagination};
