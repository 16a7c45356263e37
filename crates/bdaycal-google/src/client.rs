//! Google Calendar API client.
//!
//! A thin HTTP client for the Calendar API v3. The importer only needs one
//! operation: inserting an event into a calendar.

use std::time::Duration;

use serde::Deserialize;
use tracing::debug;

use bdaycal_core::BirthdayEvent;

use crate::error::{GoogleError, GoogleResult};

/// Base URL for Google Calendar API v3.
const CALENDAR_API_BASE: &str = "https://www.googleapis.com/calendar/v3";

/// Google Calendar API client.
#[derive(Debug)]
pub struct CalendarClient {
    http_client: reqwest::Client,
    access_token: String,
}

impl CalendarClient {
    /// Creates a new Calendar client with the given access token.
    pub fn new(access_token: impl Into<String>, timeout: Duration) -> Self {
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("failed to create HTTP client");

        Self {
            http_client,
            access_token: access_token.into(),
        }
    }

    /// Inserts an event into a calendar.
    ///
    /// # Arguments
    ///
    /// * `calendar_id` - The calendar identifier (e.g., `"primary"`)
    /// * `event` - The event payload to create
    ///
    /// # Errors
    ///
    /// Maps 401 to an authentication error, 403 to authorization, 429 to
    /// rate-limited, 400 to bad request, and 5xx to server errors.
    pub async fn insert_event(
        &self,
        calendar_id: &str,
        event: &BirthdayEvent,
    ) -> GoogleResult<CreatedEvent> {
        let url = format!(
            "{}/calendars/{}/events",
            CALENDAR_API_BASE,
            urlencoding::encode(calendar_id)
        );

        let response = self
            .http_client
            .post(&url)
            .bearer_auth(&self.access_token)
            .json(event)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GoogleError::network("request timeout")
                } else if e.is_connect() {
                    GoogleError::network(format!("connection failed: {}", e))
                } else {
                    GoogleError::network(format!("request failed: {}", e))
                }
            })?;

        let status = response.status();

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get("Retry-After")
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse::<u64>().ok());
            return Err(GoogleError::rate_limited(format!(
                "rate limit exceeded{}",
                retry_after
                    .map(|s| format!(", retry after {} seconds", s))
                    .unwrap_or_default()
            )));
        }

        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(GoogleError::authentication(
                "access token expired or invalid",
            ));
        }

        if status == reqwest::StatusCode::FORBIDDEN {
            return Err(GoogleError::authorization("access denied to calendar"));
        }

        if status == reqwest::StatusCode::BAD_REQUEST {
            let body = response.text().await.unwrap_or_default();
            return Err(GoogleError::bad_request(format!(
                "event rejected: {}",
                body
            )));
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GoogleError::server(format!(
                "API error ({}): {}",
                status, body
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| GoogleError::network(format!("failed to read response: {}", e)))?;

        let created: CreatedEvent = serde_json::from_str(&body).map_err(|e| {
            GoogleError::invalid_response(format!("failed to parse response: {}", e))
        })?;

        debug!(
            "created event {} in calendar {}",
            created.id, calendar_id
        );
        Ok(created)
    }
}

/// The created event as returned by the insert endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedEvent {
    /// The event ID assigned by the service.
    pub id: String,
    /// The event status (normally `"confirmed"`).
    pub status: Option<String>,
    /// Link to the event in the web UI.
    pub html_link: Option<String>,
}
