//! HR backend endpoint configuration.

use integration_benefits::BenefitsApiConfig;
use integration_timeoff::TimeOffApiConfig;
use serde::{Deserialize, Serialize};

/// HR backend configuration
///
/// Both gateway clients target the same backend, so one base URL covers the
/// time-off and benefits endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HrApiConfig {
    /// HR API base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Connection timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "http://localhost:3001".to_string()
}

const fn default_timeout() -> u64 {
    30
}

impl Default for HrApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

impl HrApiConfig {
    /// Client configuration for the time-off endpoints
    pub fn timeoff_config(&self) -> TimeOffApiConfig {
        TimeOffApiConfig {
            base_url: self.base_url.clone(),
            timeout_secs: self.timeout_secs,
        }
    }

    /// Client configuration for the benefits endpoint
    pub fn benefits_config(&self) -> BenefitsApiConfig {
        BenefitsApiConfig {
            base_url: self.base_url.clone(),
            timeout_secs: self.timeout_secs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_configs_share_base_url() {
        let config = HrApiConfig {
            base_url: "https://hr.example.com".to_string(),
            timeout_secs: 10,
        };
        assert_eq!(config.timeoff_config().base_url, "https://hr.example.com");
        assert_eq!(config.benefits_config().base_url, "https://hr.example.com");
        assert_eq!(config.timeoff_config().timeout_secs, 10);
    }
}
