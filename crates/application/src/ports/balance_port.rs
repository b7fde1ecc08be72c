//! Leave balance port
//!
//! Defines the interface for fetching per-leave-type balance summaries.

use std::collections::HashMap;

use async_trait::async_trait;
use domain::{EmployeeId, LeaveType};
#[cfg(test)]
use mockall::automock;
use serde::{Deserialize, Serialize};

use crate::error::ApplicationError;

/// Balance entry for one leave type
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LeaveBalance {
    /// Days remaining
    pub total_remaining: f64,
    /// Days used this year; the HR API omits the field when nothing was used
    #[serde(default)]
    pub total_used: f64,
}

/// Balance summary keyed by leave-type name
///
/// Leave types absent from the map are simply not reported; the assistant
/// omits their lines rather than inventing zeros.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BalanceSummary(HashMap<String, LeaveBalance>);

impl BalanceSummary {
    /// Build a summary from name/balance pairs
    pub fn new(entries: impl IntoIterator<Item = (String, LeaveBalance)>) -> Self {
        Self(entries.into_iter().collect())
    }

    /// Look up the balance for a leave type
    pub fn get(&self, leave_type: LeaveType) -> Option<&LeaveBalance> {
        self.0.get(leave_type.api_name())
    }
}

/// Port for leave balance queries
#[cfg_attr(test, automock)]
#[async_trait]
pub trait BalancePort: Send + Sync {
    /// Fetch the balance summary for an employee
    async fn fetch_balances(
        &self,
        employee_id: EmployeeId,
    ) -> Result<BalanceSummary, ApplicationError>;
}
