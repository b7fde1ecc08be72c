//! HR time-off API client
//!
//! HTTP client for the portal backend's time-off endpoints.

use async_trait::async_trait;
use domain::EmployeeId;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::models::{
    BalanceResponse, ErrorBody, SubmitResponse, TimeOffRecord, TimeOffRequestBody,
};

/// Time-off client errors
#[derive(Debug, Error)]
pub enum TimeOffApiError {
    /// Connection to the HR API failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// The API rejected the request with an error payload
    #[error("{0}")]
    Rejected(String),

    /// Request failed without a parseable error payload
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse a response from the HR API
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Service is temporarily unavailable
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),
}

/// Time-off API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeOffApiConfig {
    /// HR API base URL (default: <http://localhost:3001>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Connection timeout in seconds (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "http://localhost:3001".to_string()
}

const fn default_timeout() -> u64 {
    30
}

impl Default for TimeOffApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

/// Client trait for the time-off endpoints
#[async_trait]
pub trait TimeOffApi: Send + Sync {
    /// Submit a new time-off request
    async fn submit_request(
        &self,
        request: &TimeOffRequestBody,
    ) -> Result<SubmitResponse, TimeOffApiError>;

    /// List all submitted time-off requests
    async fn list_requests(&self) -> Result<Vec<TimeOffRecord>, TimeOffApiError>;

    /// Fetch the leave balance summary for an employee
    async fn fetch_balances(
        &self,
        employee_id: EmployeeId,
    ) -> Result<BalanceResponse, TimeOffApiError>;

    /// Check if the time-off endpoints respond
    async fn is_healthy(&self) -> bool;
}

/// HTTP client implementation against the portal backend
#[derive(Debug)]
pub struct HrTimeOffClient {
    client: Client,
    config: TimeOffApiConfig,
}

impl HrTimeOffClient {
    /// Create a new client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: TimeOffApiConfig) -> Result<Self, TimeOffApiError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| TimeOffApiError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Create a new client with default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn with_defaults() -> Result<Self, TimeOffApiError> {
        Self::new(TimeOffApiConfig::default())
    }

    fn requests_url(&self) -> String {
        format!("{}/api/timeoff", self.config.base_url)
    }

    /// Triage a non-success response into the matching error
    async fn error_from_response(response: reqwest::Response) -> TimeOffApiError {
        let status = response.status();
        if status.is_server_error() {
            return TimeOffApiError::ServiceUnavailable(format!("HTTP {status}"));
        }
        // The API reports failures as {"error": "..."}; fall back to the
        // portal's historical default message when the body isn't parseable
        match response.json::<ErrorBody>().await {
            Ok(body) => TimeOffApiError::Rejected(body.error),
            Err(_) => TimeOffApiError::Rejected("Failed to submit request".to_string()),
        }
    }
}

#[async_trait]
impl TimeOffApi for HrTimeOffClient {
    #[instrument(skip(self, request), fields(employee_id = request.employee_id))]
    async fn submit_request(
        &self,
        request: &TimeOffRequestBody,
    ) -> Result<SubmitResponse, TimeOffApiError> {
        let url = self.requests_url();
        debug!(url = %url, start = %request.start_date, end = %request.end_date, "Submitting time off request");

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| TimeOffApiError::ConnectionFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Self::error_from_response(response).await);
        }

        response
            .json()
            .await
            .map_err(|e| TimeOffApiError::ParseError(e.to_string()))
    }

    #[instrument(skip(self))]
    async fn list_requests(&self) -> Result<Vec<TimeOffRecord>, TimeOffApiError> {
        let url = self.requests_url();
        debug!(url = %url, "Fetching time off requests");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| TimeOffApiError::ConnectionFailed(e.to_string()))?;

        let status = response.status();
        if status.is_server_error() {
            return Err(TimeOffApiError::ServiceUnavailable(format!("HTTP {status}")));
        }
        if !status.is_success() {
            return Err(TimeOffApiError::RequestFailed(format!("HTTP {status}")));
        }

        response
            .json()
            .await
            .map_err(|e| TimeOffApiError::ParseError(e.to_string()))
    }

    #[instrument(skip(self), fields(employee_id = %employee_id))]
    async fn fetch_balances(
        &self,
        employee_id: EmployeeId,
    ) -> Result<BalanceResponse, TimeOffApiError> {
        let url = format!("{}/balance", self.requests_url());
        debug!(url = %url, "Fetching leave balances");

        let response = self
            .client
            .get(&url)
            .query(&[("employee_id", employee_id.as_i64())])
            .send()
            .await
            .map_err(|e| TimeOffApiError::ConnectionFailed(e.to_string()))?;

        let status = response.status();
        if status.is_server_error() {
            return Err(TimeOffApiError::ServiceUnavailable(format!("HTTP {status}")));
        }
        if !status.is_success() {
            return Err(TimeOffApiError::RequestFailed(format!("HTTP {status}")));
        }

        response
            .json()
            .await
            .map_err(|e| TimeOffApiError::ParseError(e.to_string()))
    }

    async fn is_healthy(&self) -> bool {
        self.client
            .get(self.requests_url())
            .send()
            .await
            .map(|r| r.status().is_success())
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults() {
        let config = TimeOffApiConfig::default();
        assert_eq!(config.base_url, "http://localhost:3001");
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn config_deserializes_with_partial_fields() {
        let config: TimeOffApiConfig =
            serde_json::from_str(r#"{"base_url": "http://hr.internal"}"#).unwrap();
        assert_eq!(config.base_url, "http://hr.internal");
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn requests_url_joins_base() {
        let client = HrTimeOffClient::new(TimeOffApiConfig {
            base_url: "http://hr.internal".to_string(),
            timeout_secs: 5,
        })
        .expect("client creation should succeed");
        assert_eq!(client.requests_url(), "http://hr.internal/api/timeoff");
    }

    #[test]
    fn rejected_error_displays_bare_message() {
        let err = TimeOffApiError::Rejected("Missing required fields".to_string());
        assert_eq!(err.to_string(), "Missing required fields");
    }
}
