//! Client-related types shared between server and client
//!
//! Common request/response types used in API communication.
//! These types are shared between the backend mock and taxdesk-client.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// Re-export ApiResponse from response module
pub use crate::response::ApiResponse;

// =============================================================================
// Appointment API DTOs
// =============================================================================

/// Create appointment request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAppointmentRequest {
    /// Service reference (String ID)
    pub service_id: String,
    /// Staff member reference (String ID)
    pub staff_id: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    /// IANA time zone name
    pub time_zone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
}

/// Cancel appointment request
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CancelAppointmentRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancellation_reason: Option<String>,
}

/// Query parameters for the current-user appointment listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppointmentListQuery {
    pub state: crate::models::AppointmentStateFilter,
}
