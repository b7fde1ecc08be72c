//! Wire types for the benefits endpoint

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One enrolled benefit row from the API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenefitRow {
    /// Benefit name, e.g. "Health Plan Premium"
    pub benefit_name: String,
    /// Plan name when it differs from the benefit name
    #[serde(default)]
    pub plan_name: Option<String>,
    /// Human-readable coverage description
    #[serde(default)]
    pub description: Option<String>,
    /// Category name, e.g. "Medical"
    pub category: String,
    /// Employee cost per pay period
    pub employee_pays: f64,
    /// Employer cost per pay period
    pub employer_pays: f64,
    /// Total plan cost per pay period
    pub total_plan_cost: f64,
    /// Number of covered dependants
    #[serde(default)]
    pub dependants: u32,
}

/// Aggregate per-pay-period cost totals
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct CostTotals {
    /// Employee share per pay period
    pub total_employee_pays: f64,
    /// Employer share per pay period
    pub total_employer_pays: f64,
    /// Total plan cost per pay period
    pub total_cost: f64,
}

/// Response from `GET /api/benefits`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenefitsResponse {
    /// Flat list of enrolled benefits
    #[serde(default)]
    pub benefits: Vec<BenefitRow>,
    /// The same records grouped by category name
    #[serde(rename = "byCategory")]
    pub by_category: HashMap<String, Vec<BenefitRow>>,
    /// Aggregate cost totals
    pub totals: CostTotals,
}
