//! API routes and handlers

use crate::state::AppState;
use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::{get, patch, post},
};
use chrono::Utc;
use shared::booking::{MAX_COMMENTS_LEN, validate_comments};
use shared::client::{AppointmentListQuery, CancelAppointmentRequest, CreateAppointmentRequest};
use shared::error::{ApiError, ApiResult};
use shared::models::{Appointment, AppointmentStateFilter, AppointmentStatus, Service};
use shared::response::{ApiResponse, PaginatedResponse};
use std::sync::Arc;

/// Build the mock API router
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/services", get(list_services))
        .route("/appointments", post(create_appointment))
        .route("/appointments/{id}/cancel", patch(cancel_appointment))
        .route("/appointments/current-user", get(my_appointments))
        .with_state(state)
}

async fn list_services(
    State(state): State<Arc<AppState>>,
) -> Json<ApiResponse<PaginatedResponse<Service>>> {
    let items = state.services.clone();
    let total = items.len() as u64;
    // Single-page directory; the envelope keeps the paginated shape
    // the real backend uses.
    Json(ApiResponse::ok(PaginatedResponse::new(
        items,
        1,
        total.max(1) as u32,
        total,
    )))
}

async fn create_appointment(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateAppointmentRequest>,
) -> ApiResult<Json<ApiResponse<Appointment>>> {
    let service = state
        .service(&req.service_id)
        .ok_or_else(|| ApiError::not_found("Service"))?;

    if !service.staff_members.iter().any(|s| s.id == req.staff_id) {
        return Err(ApiError::validation(format!(
            "Staff member {} is not assigned to service {}",
            req.staff_id, req.service_id
        )));
    }

    if req.start >= req.end {
        return Err(ApiError::validation(
            "Appointment start must be before its end",
        ));
    }

    if let Some(comments) = &req.comments {
        validate_comments(comments).map_err(|_| {
            ApiError::validation(format!(
                "Comments exceed the {} character limit",
                MAX_COMMENTS_LEN
            ))
        })?;
    }

    let appointment = Appointment {
        id: format!("apt-{}", uuid::Uuid::new_v4()),
        service_id: req.service_id,
        staff_id: req.staff_id,
        user_id: state.current_user.clone(),
        start: req.start,
        end: req.end,
        time_zone: req.time_zone,
        status: AppointmentStatus::Booked,
        comments: req.comments,
        cancellation_reason: None,
    };

    tracing::info!(id = %appointment.id, service = %appointment.service_id, "appointment created");

    let mut appointments = state.appointments.lock().await;
    appointments.push(appointment.clone());

    Ok(Json(ApiResponse::ok(appointment)))
}

async fn cancel_appointment(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(req): Json<CancelAppointmentRequest>,
) -> ApiResult<Json<ApiResponse<Appointment>>> {
    let mut appointments = state.appointments.lock().await;
    let appointment = appointments
        .iter_mut()
        .find(|a| a.id == id)
        .ok_or_else(|| ApiError::not_found("Appointment"))?;

    if appointment.status == AppointmentStatus::Cancelled {
        return Err(ApiError::conflict("Appointment is already cancelled"));
    }

    appointment.status = AppointmentStatus::Cancelled;
    appointment.cancellation_reason = req.cancellation_reason;

    tracing::info!(%id, "appointment cancelled");

    Ok(Json(ApiResponse::ok(appointment.clone())))
}

async fn my_appointments(
    State(state): State<Arc<AppState>>,
    Query(query): Query<AppointmentListQuery>,
) -> Json<ApiResponse<Vec<Appointment>>> {
    let now = Utc::now();
    let appointments = state.appointments.lock().await;
    let items: Vec<Appointment> = appointments
        .iter()
        .filter(|a| a.user_id == state.current_user)
        .filter(|a| match query.state {
            AppointmentStateFilter::Pending => a.is_pending(now),
            AppointmentStateFilter::Past => !a.is_pending(now),
        })
        .cloned()
        .collect();

    Json(ApiResponse::ok(items))
}
