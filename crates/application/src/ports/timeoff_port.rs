//! Time-off service port
//!
//! Defines the interface for submitting and listing time-off requests.
//! The external HR API owns all persisted state and serializes writes on its
//! side (one row insert per booking).

use async_trait::async_trait;
use chrono::NaiveDate;
use domain::{EmployeeId, LeaveType};
#[cfg(test)]
use mockall::automock;
use serde::{Deserialize, Serialize};

use crate::error::ApplicationError;

/// Result of a successful booking submission
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingConfirmation {
    /// Identifier assigned by the HR API
    pub request_id: i64,
    /// Initial request status, e.g. "Pending"
    pub status: String,
}

/// A previously submitted time-off request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeOffRequestRecord {
    /// Identifier assigned by the HR API
    pub request_id: i64,
    /// Leave type name, e.g. "PTO"
    #[serde(rename = "type")]
    pub leave_type: String,
    /// First day of leave
    pub start_date: NaiveDate,
    /// Last day of leave
    pub end_date: NaiveDate,
    /// Current status: "Pending", "Approved", "Denied"
    pub status: String,
}

/// Port for time-off operations
#[cfg_attr(test, automock)]
#[async_trait]
pub trait TimeOffPort: Send + Sync {
    /// Submit a time-off request for the inclusive date range
    async fn submit_request(
        &self,
        employee_id: EmployeeId,
        leave_type: LeaveType,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<BookingConfirmation, ApplicationError>;

    /// List all submitted time-off requests
    async fn list_requests(&self) -> Result<Vec<TimeOffRequestRecord>, ApplicationError>;

    /// Check if the time-off service is reachable
    async fn is_available(&self) -> bool;
}
