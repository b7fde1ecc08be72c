//! Wire types for the time-off endpoints

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Body for `POST /api/timeoff`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeOffRequestBody {
    /// Employee the request is for
    pub employee_id: i64,
    /// Leave type name, e.g. "PTO"
    #[serde(rename = "type")]
    pub leave_type: String,
    /// First day of leave, `YYYY-MM-DD`
    pub start_date: String,
    /// Last day of leave, `YYYY-MM-DD`
    pub end_date: String,
}

/// Success response from `POST /api/timeoff`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitResponse {
    /// Human-readable confirmation
    #[serde(default)]
    pub message: Option<String>,
    /// Identifier of the inserted request row
    pub request_id: i64,
    /// Initial status, e.g. "Pending"
    pub status: String,
}

/// Error body the API returns on failed requests
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Failure description
    pub error: String,
}

/// One request row from `GET /api/timeoff`
///
/// Dates come back as strings; depending on the backend driver they may carry
/// a time component, so parsing is left to the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeOffRecord {
    /// Identifier of the request row
    pub request_id: i64,
    /// Leave type name; older rows may omit it
    #[serde(rename = "type", default)]
    pub leave_type: Option<String>,
    /// First day of leave
    pub start_date: String,
    /// Last day of leave
    pub end_date: String,
    /// Current status: "Pending", "Approved", "Denied"
    pub status: String,
}

/// Balance entry for one leave type
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BalanceEntry {
    /// Days remaining
    pub total_remaining: f64,
    /// Days used this year; omitted when nothing was used
    #[serde(default)]
    pub total_used: f64,
}

/// Response from `GET /api/timeoff/balance`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BalanceResponse {
    /// Balances keyed by leave-type name
    pub summary: HashMap<String, BalanceEntry>,
}
