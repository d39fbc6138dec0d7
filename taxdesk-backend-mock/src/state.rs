//! Mock backend state

use shared::models::{Appointment, Service, StaffMember};
use tokio::sync::Mutex;

/// In-memory backend state
///
/// The service directory is fixed at startup; appointments accumulate
/// behind a mutex as bookings are created and cancelled.
#[derive(Debug)]
pub struct AppState {
    pub services: Vec<Service>,
    pub appointments: Mutex<Vec<Appointment>>,
    /// User id attributed to every created appointment
    pub current_user: String,
}

impl AppState {
    /// Create a state with the given service directory
    pub fn new(services: Vec<Service>) -> Self {
        Self {
            services,
            appointments: Mutex::new(Vec::new()),
            current_user: "usr-demo".to_string(),
        }
    }

    /// Create a state seeded with a demo service directory
    pub fn seeded() -> Self {
        Self::new(vec![
            Service {
                id: "svc-tax-filing".to_string(),
                name: "Tax Filing".to_string(),
                staff_members: vec![
                    StaffMember {
                        id: "stf-jane".to_string(),
                        name: "Jane Doe".to_string(),
                    },
                    StaffMember {
                        id: "stf-luis".to_string(),
                        name: "Luis Moreno".to_string(),
                    },
                ],
            },
            Service {
                id: "svc-bookkeeping".to_string(),
                name: "Quarterly Bookkeeping".to_string(),
                staff_members: vec![StaffMember {
                    id: "stf-luis".to_string(),
                    name: "Luis Moreno".to_string(),
                }],
            },
            // Misconfigured on purpose: exists in the directory but
            // has nobody assigned, so booking it is impossible.
            Service {
                id: "svc-payroll".to_string(),
                name: "Payroll Review".to_string(),
                staff_members: vec![],
            },
        ])
    }

    /// Look up a service by id
    pub fn service(&self, id: &str) -> Option<&Service> {
        self.services.iter().find(|s| s.id == id)
    }
}
