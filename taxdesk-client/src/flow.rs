//! Booking flow controller
//!
//! Drives the multi-stage booking workflow: service selection,
//! staff/time selection, detail entry, and the one-shot submission.
//! The accumulated selection lives in a single owned [`BookingState`]
//! mutated only through this controller; each step validates its own
//! preconditions before merging.

use chrono::{DateTime, Utc};
use shared::booking::{
    BookingState, BookingStateUpdate, BookingStep, CommentsTooLong, StepView, validate_comments,
};
use shared::client::CreateAppointmentRequest;
use shared::models::{Appointment, Service, StaffMember};
use thiserror::Error;

use crate::{ClientError, HttpClient};

/// User-facing error taxonomy for the booking workflow
///
/// Every variant is scoped to the current step; none is fatal and
/// none triggers an automatic retry or back-navigation.
#[derive(Debug, Error)]
pub enum BookingError {
    /// Network or server failure while fetching step data
    #[error("failed to load data: {0}")]
    Load(#[source] ClientError),

    /// No service selected yet; the user must return to the service list
    #[error("no service selected; return to the service list")]
    MissingService,

    /// Required prior-step state is missing; the user must navigate back
    #[error("missing booking information; complete the earlier steps first")]
    MissingInformation,

    /// The selected service has no bookable staff; an administrator
    /// has to assign staff before it can be booked
    #[error("service \"{service}\" has no staff assigned; contact an administrator")]
    NoStaffAssigned { service: String },

    /// Comments exceeded the length limit
    #[error(transparent)]
    Comments(#[from] CommentsTooLong),

    /// The create-appointment call failed; the selection is kept
    #[error("failed to create the appointment: {0}")]
    Submission(#[source] ClientError),
}

/// Read-only summary of the selection shown on the details screen
#[derive(Debug, Clone)]
pub struct BookingSummary {
    pub service: Service,
    pub staff_member: StaffMember,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub time_zone: Option<String>,
}

/// Controller for the linear booking flow
///
/// `Empty → ServiceChosen → StaffTimeChosen → DetailsAdded →
/// submitted`. Guard failures leave the state untouched; recovery is
/// manual back-navigation, never a programmatic transition.
#[derive(Debug)]
pub struct BookingFlow {
    client: HttpClient,
    state: BookingState,
}

impl BookingFlow {
    /// Create a flow with an empty selection
    pub fn new(client: HttpClient) -> Self {
        Self {
            client,
            state: BookingState::new(),
        }
    }

    /// Reset the selection, on flow entry or abandonment
    pub fn start(&mut self) {
        self.state.reset();
    }

    /// The current selection
    pub fn state(&self) -> &BookingState {
        &self.state
    }

    /// The current position in the flow
    pub fn step(&self) -> BookingStep {
        self.state.step()
    }

    // ========== Service selection ==========

    /// Fetch the service directory for the selection screen
    ///
    /// An empty directory renders as `Empty` rather than allowing
    /// progression; a fetch failure renders as `Error`.
    pub async fn load_services(&self) -> StepView<Vec<Service>, BookingError> {
        StepView::from(self.client.list_services().await.map_err(BookingError::Load))
    }

    /// Record the chosen service and advance
    pub fn choose_service(&mut self, service: Service) {
        tracing::debug!(service = %service.id, "service chosen");
        self.state.merge(BookingStateUpdate {
            service: Some(service),
            ..Default::default()
        });
    }

    // ========== Availability / staff selection ==========

    /// Evaluate the availability-step guards, in order
    ///
    /// Missing service blocks with a return-to-service-list prompt; a
    /// service with zero assigned staff is a configuration error
    /// directed at an administrator. Only once both guards pass does
    /// the view carry the bookable staff for the form.
    pub fn availability_step(&self) -> StepView<Vec<StaffMember>, BookingError> {
        let Some(service) = self.state.service.as_ref() else {
            return StepView::Error(BookingError::MissingService);
        };

        if !service.has_bookable_staff() {
            return StepView::Error(BookingError::NoStaffAssigned {
                service: service.name.clone(),
            });
        }

        StepView::Ready(service.staff_members.clone())
    }

    /// Record the chosen staff member and time window and advance
    pub fn choose_slot(
        &mut self,
        staff_member: StaffMember,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        time_zone: impl Into<String>,
    ) -> Result<(), BookingError> {
        if self.state.service.is_none() {
            return Err(BookingError::MissingService);
        }

        tracing::debug!(staff = %staff_member.id, %start, %end, "slot chosen");
        self.state.merge(BookingStateUpdate {
            staff_member: Some(staff_member),
            start: Some(start),
            end: Some(end),
            time_zone: Some(time_zone.into()),
            ..Default::default()
        });
        Ok(())
    }

    // ========== Details ==========

    /// Evaluate the details-step guard
    ///
    /// Requires service, staff member, start and end all present;
    /// otherwise the step blocks with a missing-information message
    /// and no form is rendered. Recovery is manual back-navigation.
    pub fn details_step(&self) -> Result<BookingSummary, BookingError> {
        match (
            &self.state.service,
            &self.state.staff_member,
            self.state.start,
            self.state.end,
        ) {
            (Some(service), Some(staff_member), Some(start), Some(end)) => Ok(BookingSummary {
                service: service.clone(),
                staff_member: staff_member.clone(),
                start,
                end,
                time_zone: self.state.time_zone.clone(),
            }),
            _ => Err(BookingError::MissingInformation),
        }
    }

    /// Validate and record the optional free-text comments
    ///
    /// Text over the length limit is rejected before anything is
    /// merged. Blank text merges as an empty string so the details
    /// step counts as completed; submission omits the field either
    /// way.
    pub fn add_comments(&mut self, text: &str) -> Result<(), BookingError> {
        validate_comments(text)?;

        self.state.merge(BookingStateUpdate {
            comments: Some(text.trim().to_string()),
            ..Default::default()
        });
        Ok(())
    }

    // ========== Submission ==========

    /// Convert the accumulated selection into one create-appointment
    /// call
    ///
    /// Unreachable unless service, staff member, start and end are all
    /// set. Success clears the selection and returns the created
    /// appointment; failure keeps the selection intact and is not
    /// retried.
    pub async fn submit(&mut self) -> Result<Appointment, BookingError> {
        if !self.state.can_submit() {
            return Err(BookingError::MissingInformation);
        }

        let request = self.build_request();
        tracing::info!(service = %request.service_id, staff = %request.staff_id, "submitting booking");

        let appointment = self
            .client
            .create_appointment(&request)
            .await
            .map_err(BookingError::Submission)?;

        self.state.reset();
        Ok(appointment)
    }

    fn build_request(&self) -> CreateAppointmentRequest {
        // Callers go through can_submit() first; empty ids would only
        // appear if that gate were bypassed and the server rejects them.
        CreateAppointmentRequest {
            service_id: self
                .state
                .service
                .as_ref()
                .map(|s| s.id.clone())
                .unwrap_or_default(),
            staff_id: self
                .state
                .staff_member
                .as_ref()
                .map(|s| s.id.clone())
                .unwrap_or_default(),
            start: self.state.start.unwrap_or_default(),
            end: self.state.end.unwrap_or_default(),
            time_zone: self
                .state
                .time_zone
                .clone()
                .unwrap_or_else(|| "UTC".to_string()),
            comments: self.state.comments.clone().filter(|c| !c.is_empty()),
        }
    }
}
