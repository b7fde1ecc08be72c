//! Time-off adapter - Implements TimeOffPort and BalancePort using integration_timeoff

use application::error::ApplicationError;
use application::ports::{
    BalancePort, BalanceSummary, BookingConfirmation, LeaveBalance, TimeOffPort,
    TimeOffRequestRecord,
};
use async_trait::async_trait;
use chrono::NaiveDate;
use domain::{EmployeeId, LeaveType};
use integration_timeoff::{
    HrTimeOffClient, TimeOffApi, TimeOffApiConfig, TimeOffApiError, TimeOffRecord,
    TimeOffRequestBody,
};
use tracing::instrument;

/// Adapter for the time-off and balance ports over the HR API
pub struct TimeOffAdapter {
    client: HrTimeOffClient,
}

impl std::fmt::Debug for TimeOffAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TimeOffAdapter")
            .field("client", &"HrTimeOffClient")
            .finish()
    }
}

impl TimeOffAdapter {
    /// Create a new adapter with custom configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn new(config: TimeOffApiConfig) -> Result<Self, ApplicationError> {
        let client =
            HrTimeOffClient::new(config).map_err(|e| ApplicationError::Internal(e.to_string()))?;
        Ok(Self { client })
    }

    /// Create a new adapter with default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn with_defaults() -> Result<Self, ApplicationError> {
        Self::new(TimeOffApiConfig::default())
    }

    /// Map integration client errors to application errors
    fn map_error(err: TimeOffApiError) -> ApplicationError {
        match err {
            TimeOffApiError::ConnectionFailed(e)
            | TimeOffApiError::RequestFailed(e)
            | TimeOffApiError::Rejected(e)
            | TimeOffApiError::ServiceUnavailable(e) => ApplicationError::ExternalService(e),
            TimeOffApiError::ParseError(e) => ApplicationError::Internal(e),
        }
    }

    /// Parse a date string that may carry a time component
    fn parse_api_date(raw: &str) -> Result<NaiveDate, ApplicationError> {
        let date_part = raw.get(..10).unwrap_or(raw);
        NaiveDate::parse_from_str(date_part, "%Y-%m-%d").map_err(|e| {
            ApplicationError::Internal(format!("Invalid date '{raw}' from HR API: {e}"))
        })
    }

    fn convert_record(record: TimeOffRecord) -> Result<TimeOffRequestRecord, ApplicationError> {
        Ok(TimeOffRequestRecord {
            request_id: record.request_id,
            leave_type: record
                .leave_type
                .unwrap_or_else(|| LeaveType::Pto.api_name().to_string()),
            start_date: Self::parse_api_date(&record.start_date)?,
            end_date: Self::parse_api_date(&record.end_date)?,
            status: record.status,
        })
    }
}

#[async_trait]
impl TimeOffPort for TimeOffAdapter {
    #[instrument(skip(self), fields(employee_id = %employee_id))]
    async fn submit_request(
        &self,
        employee_id: EmployeeId,
        leave_type: LeaveType,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<BookingConfirmation, ApplicationError> {
        let body = TimeOffRequestBody {
            employee_id: employee_id.as_i64(),
            leave_type: leave_type.api_name().to_string(),
            start_date: start.format("%Y-%m-%d").to_string(),
            end_date: end.format("%Y-%m-%d").to_string(),
        };

        let response = self
            .client
            .submit_request(&body)
            .await
            .map_err(Self::map_error)?;

        Ok(BookingConfirmation {
            request_id: response.request_id,
            status: response.status,
        })
    }

    #[instrument(skip(self))]
    async fn list_requests(&self) -> Result<Vec<TimeOffRequestRecord>, ApplicationError> {
        let records = self.client.list_requests().await.map_err(Self::map_error)?;
        records.into_iter().map(Self::convert_record).collect()
    }

    async fn is_available(&self) -> bool {
        self.client.is_healthy().await
    }
}

#[async_trait]
impl BalancePort for TimeOffAdapter {
    #[instrument(skip(self), fields(employee_id = %employee_id))]
    async fn fetch_balances(
        &self,
        employee_id: EmployeeId,
    ) -> Result<BalanceSummary, ApplicationError> {
        let response = self
            .client
            .fetch_balances(employee_id)
            .await
            .map_err(Self::map_error)?;

        Ok(BalanceSummary::new(response.summary.into_iter().map(
            |(name, entry)| {
                (
                    name,
                    LeaveBalance {
                        total_remaining: entry.total_remaining,
                        total_used: entry.total_used,
                    },
                )
            },
        )))
    }
}
