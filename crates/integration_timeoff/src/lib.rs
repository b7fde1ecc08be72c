//! HR time-off API integration
//!
//! HTTP client for the portal's time-off endpoints: request submission,
//! request listing, and leave balance summaries.

mod client;
mod models;

pub use client::{HrTimeOffClient, TimeOffApi, TimeOffApiConfig, TimeOffApiError};
pub use models::{
    BalanceEntry, BalanceResponse, SubmitResponse, TimeOffRecord, TimeOffRequestBody,
};
