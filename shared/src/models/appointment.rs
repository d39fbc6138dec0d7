//! Appointment Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Appointment lifecycle status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AppointmentStatus {
    /// Active booking
    #[default]
    Booked,
    /// Cancelled by the user or the office
    Cancelled,
}

/// Appointment entity (server-owned)
///
/// Created by the submission call; the client only mutates it
/// through the cancel action.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Appointment {
    pub id: String,
    /// Service reference (String ID)
    pub service_id: String,
    /// Staff member reference (String ID)
    pub staff_id: String,
    /// Owning user reference (String ID)
    pub user_id: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    /// IANA time zone name (e.g., "Europe/Madrid")
    pub time_zone: String,
    pub status: AppointmentStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancellation_reason: Option<String>,
}

impl Appointment {
    /// Whether this appointment counts as pending at `now`
    ///
    /// Pending means not cancelled and the time window has not ended.
    pub fn is_pending(&self, now: DateTime<Utc>) -> bool {
        self.status == AppointmentStatus::Booked && self.end > now
    }
}

/// Filter for the current-user appointment listing
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStateFilter {
    /// Upcoming, non-cancelled appointments
    Pending,
    /// Finished or cancelled appointments
    Past,
}

impl AppointmentStateFilter {
    /// Query-string value for this filter
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Past => "past",
        }
    }
}
