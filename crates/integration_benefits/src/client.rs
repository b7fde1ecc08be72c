//! HR benefits API client

use async_trait::async_trait;
use domain::EmployeeId;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::models::BenefitsResponse;

/// Benefits client errors
#[derive(Debug, Error)]
pub enum BenefitsApiError {
    /// Connection to the HR API failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request failed with a non-success status
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse a response from the HR API
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Service is temporarily unavailable
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),
}

/// Benefits API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenefitsApiConfig {
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

impl Default for BenefitsApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

/// Client trait for the benefits endpoint
#[async_trait]
pub trait BenefitsApi: Send + Sync {
    /// Fetch enrollment and cost data for an employee
    async fn fetch_benefits(
        &self,
        employee_id: EmployeeId,
    ) -> Result<BenefitsResponse, BenefitsApiError>;

    /// Check if the benefits endpoint responds
    async fn is_healthy(&self) -> bool;
}

/// HTTP client implementation against the portal backend
#[derive(Debug)]
pub struct HrBenefitsClient {
    client: Client,
    config: BenefitsApiConfig,
}

impl HrBenefitsClient {
    /// Create a new client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: BenefitsApiConfig) -> Result<Self, BenefitsApiError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| BenefitsApiError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Create a new client with default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn with_defaults() -> Result<Self, BenefitsApiError> {
        Self::new(BenefitsApiConfig::default())
    }

    fn benefits_url(&self) -> String {
        format!("{}/api/benefits", self.config.base_url)
    }
}

#[async_trait]
impl BenefitsApi for HrBenefitsClient {
    #[instrument(skip(self), fields(employee_id = %employee_id))]
    async fn fetch_benefits(
        &self,
        employee_id: EmployeeId,
    ) -> Result<BenefitsResponse, BenefitsApiError> {
        let url = self.benefits_url();
        debug!(url = %url, "Fetching benefits");

        let response = self
            .client
            .get(&url)
            .query(&[("employee_id", employee_id.as_i64())])
            .send()
            .await
            .map_err(|e| BenefitsApiError::ConnectionFailed(e.to_string()))?;

        let status = response.status();
        if status.is_server_error() {
            return Err(BenefitsApiError::ServiceUnavailable(format!("HTTP {status}")));
        }
        if !status.is_success() {
            return Err(BenefitsApiError::RequestFailed(format!("HTTP {status}")));
        }

        response
            .json()
            .await
            .map_err(|e| BenefitsApiError::ParseError(e.to_string()))
    }

    async fn is_healthy(&self) -> bool {
        // Any routed response counts as reachable; the endpoint needs a query
        // parameter to return data, so a 4xx still proves the service is up
        self.client
            .get(self.benefits_url())
            .send()
            .await
            .map(|r| !r.status().is_server_error())
            .unwrap_or(false)
    }
}
