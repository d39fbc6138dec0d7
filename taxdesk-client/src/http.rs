//! HTTP client for network-based API calls

use crate::{ClientConfig, ClientError, ClientResult};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use shared::client::{CancelAppointmentRequest, CreateAppointmentRequest};
use shared::models::{Appointment, AppointmentStateFilter, Service};
use shared::response::{ApiResponse, PaginatedResponse};

/// HTTP client for making network requests to the appointment backend
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: config.base_url.clone(),
            token: config.token.clone(),
        }
    }

    /// Set the authentication token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Get the current token
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Build authorization header value
    fn auth_header(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("Bearer {}", t))
    }

    /// Make a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let mut request = self.client.get(self.url(path));

        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }

        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Make a POST request with JSON body
    pub async fn post<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let mut request = self.client.post(self.url(path)).json(body);

        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }

        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Make a PATCH request with JSON body
    pub async fn patch<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let mut request = self.client.patch(self.url(path)).json(body);

        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }

        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Handle the HTTP response
    ///
    /// Error bodies carry the standard envelope; its message is
    /// surfaced instead of the raw JSON when it parses as one.
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<ApiResponse<()>>(&text)
                .map(|envelope| envelope.message)
                .unwrap_or(text);
            tracing::warn!(%status, %message, "request failed");
            return match status {
                StatusCode::UNAUTHORIZED => Err(ClientError::Unauthorized),
                StatusCode::FORBIDDEN => Err(ClientError::Forbidden(message)),
                StatusCode::NOT_FOUND => Err(ClientError::NotFound(message)),
                StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                    Err(ClientError::Validation(message))
                }
                _ => Err(ClientError::Internal(message)),
            };
        }

        serde_json::from_str(&text).map_err(Into::into)
    }

    // ========== Service Directory API ==========

    /// List bookable services with their assigned staff
    pub async fn list_services(&self) -> ClientResult<Vec<Service>> {
        self.get::<ApiResponse<PaginatedResponse<Service>>>("services")
            .await?
            .data
            .map(|page| page.items)
            .ok_or_else(|| ClientError::InvalidResponse("Missing service list".to_string()))
    }

    // ========== Appointment API ==========

    /// Create an appointment from a fully populated booking selection
    pub async fn create_appointment(
        &self,
        request: &CreateAppointmentRequest,
    ) -> ClientResult<Appointment> {
        self.post::<ApiResponse<Appointment>, _>("appointments", request)
            .await?
            .data
            .ok_or_else(|| ClientError::InvalidResponse("Missing appointment data".to_string()))
    }

    /// Cancel an appointment, optionally recording a reason
    pub async fn cancel_appointment(
        &self,
        id: &str,
        cancellation_reason: Option<String>,
    ) -> ClientResult<Appointment> {
        let request = CancelAppointmentRequest {
            cancellation_reason,
        };
        self.patch::<ApiResponse<Appointment>, _>(&format!("appointments/{}/cancel", id), &request)
            .await?
            .data
            .ok_or_else(|| ClientError::InvalidResponse("Missing appointment data".to_string()))
    }

    /// List the current user's appointments, filtered to pending or past
    pub async fn my_appointments(
        &self,
        state: AppointmentStateFilter,
    ) -> ClientResult<Vec<Appointment>> {
        self.get::<ApiResponse<Vec<Appointment>>>(&format!(
            "appointments/current-user?state={}",
            state.as_str()
        ))
        .await?
        .data
        .ok_or_else(|| ClientError::InvalidResponse("Missing appointment list".to_string()))
    }
}
