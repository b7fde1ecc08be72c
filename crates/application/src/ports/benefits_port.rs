//! Benefits service port
//!
//! Defines the interface for fetching benefit enrollment and cost data.

use std::collections::HashMap;

use async_trait::async_trait;
use domain::{BenefitCategory, EmployeeId, UsdAmount};
#[cfg(test)]
use mockall::automock;
use serde::{Deserialize, Serialize};

use crate::error::ApplicationError;

/// One enrolled benefit plan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenefitRecord {
    /// Benefit name, e.g. "Health Plan Premium"
    pub benefit_name: String,
    /// Plan name when it differs from the benefit name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan_name: Option<String>,
    /// Human-readable coverage description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Category name, e.g. "Medical"
    pub category: String,
    /// Employee cost per pay period
    pub employee_pays: UsdAmount,
    /// Employer cost per pay period
    pub employer_pays: UsdAmount,
    /// Total plan cost per pay period
    pub total_plan_cost: UsdAmount,
    /// Number of covered dependants
    #[serde(default)]
    pub dependants: u32,
}

/// Aggregate per-pay-period costs across all enrolled benefits
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct BenefitsTotals {
    /// Employee share per pay period
    pub total_employee_pays: UsdAmount,
    /// Employer share per pay period
    pub total_employer_pays: UsdAmount,
    /// Total plan cost per pay period
    pub total_cost: UsdAmount,
}

/// Benefit enrollment grouped by category, plus aggregate totals
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BenefitsSummary {
    /// Records grouped by category name
    #[serde(rename = "byCategory")]
    pub by_category: HashMap<String, Vec<BenefitRecord>>,
    /// Aggregate per-pay-period costs
    pub totals: BenefitsTotals,
}

impl BenefitsSummary {
    /// Records for one category; empty when not enrolled
    pub fn records(&self, category: BenefitCategory) -> &[BenefitRecord] {
        self.by_category
            .get(category.api_name())
            .map_or(&[], Vec::as_slice)
    }

    /// Categories with at least one enrolled record, in display order
    pub fn enrolled_categories(&self) -> Vec<BenefitCategory> {
        BenefitCategory::ALL
            .into_iter()
            .filter(|category| !self.records(*category).is_empty())
            .collect()
    }
}

/// Port for benefits queries
#[cfg_attr(test, automock)]
#[async_trait]
pub trait BenefitsPort: Send + Sync {
    /// Fetch the benefits summary for an employee
    async fn fetch_benefits(
        &self,
        employee_id: EmployeeId,
    ) -> Result<BenefitsSummary, ApplicationError>;

    /// Check if the benefits service is reachable
    async fn is_available(&self) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn _assert_object_safe(_: &dyn BenefitsPort) {}

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn BenefitsPort>();
    }

    fn record(category: &str, name: &str) -> BenefitRecord {
        BenefitRecord {
            benefit_name: name.to_string(),
            plan_name: None,
            description: None,
            category: category.to_string(),
            employee_pays: UsdAmount::new(50.0),
            employer_pays: UsdAmount::new(150.0),
            total_plan_cost: UsdAmount::new(200.0),
            dependants: 0,
        }
    }

    #[test]
    fn enrolled_categories_keep_display_order() {
        let summary = BenefitsSummary {
            by_category: HashMap::from([
                ("Vision".to_string(), vec![record("Vision", "VSP")]),
                ("Medical".to_string(), vec![record("Medical", "PPO")]),
                ("Dental".to_string(), Vec::new()),
            ]),
            totals: BenefitsTotals::default(),
        };
        assert_eq!(
            summary.enrolled_categories(),
            vec![BenefitCategory::Medical, BenefitCategory::Vision]
        );
    }

    #[test]
    fn records_for_missing_category_are_empty() {
        let summary = BenefitsSummary::default();
        assert!(summary.records(BenefitCategory::Dental).is_empty());
    }

    #[test]
    fn summary_deserializes_camel_case_grouping() {
        let json = r#"{
            "byCategory": {
                "Medical": [{
                    "benefit_name": "Health Plan",
                    "category": "Medical",
                    "employee_pays": 55.25,
                    "employer_pays": 210.0,
                    "total_plan_cost": 265.25
                }]
            },
            "totals": {
                "total_employee_pays": 55.25,
                "total_employer_pays": 210.0,
                "total_cost": 265.25
            }
        }"#;
        let summary: BenefitsSummary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.records(BenefitCategory::Medical).len(), 1);
        assert_eq!(summary.totals.total_employee_pays.to_string(), "$55.25");
    }
}
