//! Service Model

use serde::{Deserialize, Serialize};

/// Staff member assignable to a service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffMember {
    pub id: String,
    pub name: String,
}

/// Bookable service entity
///
/// A service with an empty `staff_members` list has no bookable
/// availability and is a terminal state for the booking flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    pub id: String,
    pub name: String,
    /// Staff members assigned to this service
    #[serde(default)]
    pub staff_members: Vec<StaffMember>,
}

impl Service {
    /// Whether at least one staff member can take bookings for this service
    pub fn has_bookable_staff(&self) -> bool {
        !self.staff_members.is_empty()
    }
}
