//! Benefits adapter - Implements BenefitsPort using integration_benefits

use application::error::ApplicationError;
use application::ports::{BenefitRecord, BenefitsPort, BenefitsSummary, BenefitsTotals};
use async_trait::async_trait;
use domain::{EmployeeId, UsdAmount};
use integration_benefits::{
    BenefitRow, BenefitsApi, BenefitsApiConfig, BenefitsApiError, HrBenefitsClient,
};
use tracing::instrument;

/// Adapter for the benefits port over the HR API
pub struct BenefitsAdapter {
    client: HrBenefitsClient,
}

impl std::fmt::Debug for BenefitsAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BenefitsAdapter")
            .field("client", &"HrBenefitsClient")
            .finish()
    }
}

impl BenefitsAdapter {
    /// Create a new adapter with custom configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn new(config: BenefitsApiConfig) -> Result<Self, ApplicationError> {
        let client =
            HrBenefitsClient::new(config).map_err(|e| ApplicationError::Internal(e.to_string()))?;
        Ok(Self { client })
    }

    /// Create a new adapter with default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn with_defaults() -> Result<Self, ApplicationError> {
        Self::new(BenefitsApiConfig::default())
    }

    /// Map integration client errors to application errors
    fn map_error(err: BenefitsApiError) -> ApplicationError {
        match err {
            BenefitsApiError::ConnectionFailed(e)
            | BenefitsApiError::RequestFailed(e)
            | BenefitsApiError::ServiceUnavailable(e) => ApplicationError::ExternalService(e),
            BenefitsApiError::ParseError(e) => ApplicationError::Internal(e),
        }
    }

    fn convert_row(row: BenefitRow) -> BenefitRecord {
        BenefitRecord {
            benefit_name: row.benefit_name,
            plan_name: row.plan_name,
            description: row.description,
            category: row.category,
            employee_pays: UsdAmount::new(row.employee_pays),
            employer_pays: UsdAmount::new(row.employer_pays),
            total_plan_cost: UsdAmount::new(row.total_plan_cost),
            dependants: row.dependants,
        }
    }
}

#[async_trait]
impl BenefitsPort for BenefitsAdapter {
    #[instrument(skip(self), fields(employee_id = %employee_id))]
    async fn fetch_benefits(
        &self,
        employee_id: EmployeeId,
    ) -> Result<BenefitsSummary, ApplicationError> {
        let response = self
            .client
            .fetch_benefits(employee_id)
            .await
            .map_err(Self::map_error)?;

        Ok(BenefitsSummary {
            by_category: response
                .by_category
                .into_iter()
                .map(|(category, rows)| {
                    (category, rows.into_iter().map(Self::convert_row).collect())
                })
                .collect(),
            totals: BenefitsTotals {
                total_employee_pays: UsdAmount::new(response.totals.total_employee_pays),
                total_employer_pays: UsdAmount::new(response.totals.total_employer_pays),
                total_cost: UsdAmount::new(response.totals.total_cost),
            },
        })
    }

    async fn is_available(&self) -> bool {
        self.client.is_healthy().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_conversion_preserves_costs() {
        let row = BenefitRow {
            benefit_name: "Health Plan".to_string(),
            plan_name: Some("PPO 500".to_string()),
            description: None,
            category: "Medical".to_string(),
            employee_pays: 55.25,
            employer_pays: 210.0,
            total_plan_cost: 265.25,
            dependants: 2,
        };
        let record = BenefitsAdapter::convert_row(row);
        assert_eq!(record.employee_pays.to_string(), "$55.25");
        assert_eq!(record.plan_name.as_deref(), Some("PPO 500"));
        assert_eq!(record.dependants, 2);
    }

    #[test]
    fn connection_errors_map_to_external_service() {
        let err =
            BenefitsAdapter::map_error(BenefitsApiError::ConnectionFailed("refused".to_string()));
        assert!(matches!(err, ApplicationError::ExternalService(_)));
    }
}
