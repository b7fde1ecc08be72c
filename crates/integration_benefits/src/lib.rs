//! HR benefits API integration
//!
//! HTTP client for the portal's benefits endpoint: enrollment records grouped
//! by category, plus aggregate per-pay-period cost totals.

mod client;
mod models;

pub use client::{BenefitsApi, BenefitsApiConfig, BenefitsApiError, HrBenefitsClient};
pub use models::{BenefitRow, BenefitsResponse, CostTotals};
