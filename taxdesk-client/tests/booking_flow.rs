// End-to-end booking flow tests against the in-memory mock backend.

use chrono::{DateTime, Duration, TimeZone, Utc};
use std::sync::Arc;
use taxdesk_backend_mock::{AppState, router};
use taxdesk_client::{
    AppointmentStateFilter, AppointmentStatus, BookingError, BookingFlow, BookingStep,
    ClientConfig, CreateAppointmentRequest, ClientError, Service, StaffMember, StepView,
};

async fn spawn_mock(state: Arc<AppState>) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind mock listener");
    let addr = listener.local_addr().expect("local addr");

    tokio::spawn(async move {
        axum::serve(listener, router(state)).await.expect("serve mock");
    });

    format!("http://{}", addr)
}

fn directory() -> Vec<Service> {
    vec![
        Service {
            id: "svc-tax-filing".to_string(),
            name: "Tax Filing".to_string(),
            staff_members: vec![StaffMember {
                id: "stf-jane".to_string(),
                name: "Jane Doe".to_string(),
            }],
        },
        Service {
            id: "svc-payroll".to_string(),
            name: "Payroll Review".to_string(),
            staff_members: vec![],
        },
    ]
}

fn window() -> (DateTime<Utc>, DateTime<Utc>) {
    (
        Utc.with_ymd_and_hms(2025, 4, 1, 14, 0, 0).unwrap(),
        Utc.with_ymd_and_hms(2025, 4, 1, 15, 0, 0).unwrap(),
    )
}

#[tokio::test]
async fn full_booking_scenario_with_empty_comments() {
    let base_url = spawn_mock(Arc::new(AppState::new(directory()))).await;
    let client = ClientConfig::new(&base_url).build_http_client();
    let mut flow = BookingFlow::new(client);
    flow.start();

    // Service selection
    let services = match flow.load_services().await {
        StepView::Ready(services) => services,
        other => panic!("expected service list, got {:?}", other),
    };
    let tax_filing = services
        .into_iter()
        .find(|s| s.name == "Tax Filing")
        .expect("Tax Filing in directory");
    flow.choose_service(tax_filing);
    assert_eq!(flow.step(), BookingStep::ServiceChosen);

    // Availability / staff selection
    let staff = flow.availability_step().into_ready().expect("bookable staff");
    let jane = staff
        .into_iter()
        .find(|s| s.name == "Jane Doe")
        .expect("Jane Doe assigned");
    let (start, end) = window();
    flow.choose_slot(jane, start, end, "Europe/Madrid").unwrap();
    assert_eq!(flow.step(), BookingStep::StaffTimeChosen);

    // Details: comments left empty still complete the step
    flow.details_step().expect("summary renders");
    flow.add_comments("").unwrap();
    assert_eq!(flow.step(), BookingStep::DetailsAdded);

    // Submission
    let appointment = flow.submit().await.expect("appointment created");
    assert_eq!(appointment.service_id, "svc-tax-filing");
    assert_eq!(appointment.staff_id, "stf-jane");
    assert_eq!(appointment.start, start);
    assert_eq!(appointment.end, end);
    assert_eq!(appointment.time_zone, "Europe/Madrid");
    assert_eq!(appointment.status, AppointmentStatus::Booked);
    assert!(appointment.comments.is_none());

    // Success clears the selection
    assert_eq!(flow.step(), BookingStep::Empty);
    assert!(flow.state().service.is_none());
    assert!(flow.state().start.is_none());
}

#[tokio::test]
async fn zero_staff_service_never_reaches_details() {
    let base_url = spawn_mock(Arc::new(AppState::new(directory()))).await;
    let client = ClientConfig::new(&base_url).build_http_client();
    let mut flow = BookingFlow::new(client);
    flow.start();

    let services = flow.load_services().await;
    let payroll = services
        .ready()
        .and_then(|s| s.iter().find(|s| s.name == "Payroll Review"))
        .cloned()
        .expect("Payroll Review in directory");
    flow.choose_service(payroll);

    assert!(matches!(
        flow.availability_step(),
        StepView::Error(BookingError::NoStaffAssigned { .. })
    ));
    // Nothing past the service was ever merged, so details stay blocked
    assert!(matches!(
        flow.details_step(),
        Err(BookingError::MissingInformation)
    ));
}

#[tokio::test]
async fn empty_directory_renders_empty_state() {
    let base_url = spawn_mock(Arc::new(AppState::new(vec![]))).await;
    let client = ClientConfig::new(&base_url).build_http_client();
    let flow = BookingFlow::new(client);

    assert!(matches!(flow.load_services().await, StepView::Empty));
}

#[tokio::test]
async fn load_failure_renders_error_state() {
    // Unroutable address, no server
    let client = ClientConfig::new("http://127.0.0.1:1")
        .with_timeout(1)
        .build_http_client();
    let flow = BookingFlow::new(client);

    assert!(matches!(flow.load_services().await, StepView::Error(_)));
}

#[tokio::test]
async fn submission_failure_keeps_the_selection() {
    let base_url = spawn_mock(Arc::new(AppState::new(directory()))).await;
    let client = ClientConfig::new(&base_url).build_http_client();
    let mut flow = BookingFlow::new(client);
    flow.start();

    // A service the directory no longer knows, as after a stale fetch
    flow.choose_service(Service {
        id: "svc-gone".to_string(),
        name: "Retired Service".to_string(),
        staff_members: vec![StaffMember {
            id: "stf-jane".to_string(),
            name: "Jane Doe".to_string(),
        }],
    });
    let staff = flow.availability_step().into_ready().unwrap().remove(0);
    let (start, end) = window();
    flow.choose_slot(staff, start, end, "Europe/Madrid").unwrap();

    let err = flow.submit().await.expect_err("unknown service rejected");
    assert!(matches!(err, BookingError::Submission(_)));

    // Selection survives the failure; the user can retry manually
    assert_eq!(flow.step(), BookingStep::StaffTimeChosen);
    assert!(flow.state().service.is_some());
}

#[tokio::test]
async fn server_rejects_over_long_comments() {
    let base_url = spawn_mock(Arc::new(AppState::new(directory()))).await;
    let client = ClientConfig::new(&base_url).build_http_client();

    let (start, end) = window();
    let request = CreateAppointmentRequest {
        service_id: "svc-tax-filing".to_string(),
        staff_id: "stf-jane".to_string(),
        start,
        end,
        time_zone: "Europe/Madrid".to_string(),
        comments: Some("x".repeat(501)),
    };

    let err = client
        .create_appointment(&request)
        .await
        .expect_err("server enforces the comment limit");
    assert!(matches!(err, ClientError::Validation(_)));
}

#[tokio::test]
async fn server_rejects_inverted_time_window() {
    let base_url = spawn_mock(Arc::new(AppState::new(directory()))).await;
    let client = ClientConfig::new(&base_url).build_http_client();

    let (start, end) = window();
    let request = CreateAppointmentRequest {
        service_id: "svc-tax-filing".to_string(),
        staff_id: "stf-jane".to_string(),
        start: end,
        end: start,
        time_zone: "Europe/Madrid".to_string(),
        comments: None,
    };

    let err = client
        .create_appointment(&request)
        .await
        .expect_err("server enforces start < end");
    assert!(matches!(err, ClientError::Validation(_)));
}

#[tokio::test]
async fn error_bodies_surface_the_envelope_message() {
    let base_url = spawn_mock(Arc::new(AppState::new(directory()))).await;
    let client = ClientConfig::new(&base_url).build_http_client();

    let err = client
        .cancel_appointment("apt-missing", None)
        .await
        .expect_err("unknown appointment rejected");
    match err {
        ClientError::NotFound(message) => assert_eq!(message, "Appointment not found"),
        other => panic!("expected NotFound, got {:?}", other),
    }
}

#[tokio::test]
async fn cancelling_moves_an_appointment_to_past() {
    let base_url = spawn_mock(Arc::new(AppState::new(directory()))).await;
    let client = ClientConfig::new(&base_url).build_http_client();

    let start = Utc::now() + Duration::days(7);
    let request = CreateAppointmentRequest {
        service_id: "svc-tax-filing".to_string(),
        staff_id: "stf-jane".to_string(),
        start,
        end: start + Duration::hours(1),
        time_zone: "Europe/Madrid".to_string(),
        comments: None,
    };

    let appointment = client.create_appointment(&request).await.unwrap();

    let pending = client
        .my_appointments(AppointmentStateFilter::Pending)
        .await
        .unwrap();
    assert!(pending.iter().any(|a| a.id == appointment.id));

    let cancelled = client
        .cancel_appointment(&appointment.id, Some("client rescheduled".to_string()))
        .await
        .unwrap();
    assert_eq!(cancelled.status, AppointmentStatus::Cancelled);
    assert_eq!(
        cancelled.cancellation_reason.as_deref(),
        Some("client rescheduled")
    );

    let pending = client
        .my_appointments(AppointmentStateFilter::Pending)
        .await
        .unwrap();
    assert!(pending.iter().all(|a| a.id != appointment.id));

    let past = client
        .my_appointments(AppointmentStateFilter::Past)
        .await
        .unwrap();
    assert!(past.iter().any(|a| a.id == appointment.id));

    // Cancelling twice conflicts
    assert!(
        client
            .cancel_appointment(&appointment.id, None)
            .await
            .is_err()
    );
}
