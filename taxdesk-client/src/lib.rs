//! TaxDesk Client - HTTP client for the appointment backend
//!
//! Provides typed REST calls to the backend API and the
//! [`BookingFlow`] controller driving the multi-stage appointment
//! booking workflow.

pub mod config;
pub mod error;
pub mod flow;
pub mod http;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use flow::{BookingError, BookingFlow, BookingSummary};
pub use http::HttpClient;

// Re-export shared types for convenience
pub use shared::booking::{BookingState, BookingStep, MAX_COMMENTS_LEN, StepView};
pub use shared::client::{ApiResponse, CancelAppointmentRequest, CreateAppointmentRequest};
pub use shared::models::{
    Appointment, AppointmentStateFilter, AppointmentStatus, Service, StaffMember,
};
