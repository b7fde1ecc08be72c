//! Benefit category value object

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// A benefits category as grouped by the HR API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BenefitCategory {
    /// Medical coverage
    Medical,
    /// Dental coverage
    Dental,
    /// Vision coverage
    Vision,
    /// Everything else (life insurance, FSA, ...)
    Other,
}

impl BenefitCategory {
    /// All categories, in the order list replies enumerate them
    pub const ALL: [Self; 4] = [Self::Medical, Self::Dental, Self::Vision, Self::Other];

    /// The exact category name the HR API uses as a map key
    pub const fn api_name(&self) -> &'static str {
        match self {
            Self::Medical => "Medical",
            Self::Dental => "Dental",
            Self::Vision => "Vision",
            Self::Other => "Other",
        }
    }

    /// Detect a category keyword in a lower-cased utterance
    ///
    /// Priority is medical > dental > vision when several keywords are
    /// present. `Other` is never detected from keywords.
    pub fn detect(lower: &str) -> Option<Self> {
        if lower.contains("medical") {
            Some(Self::Medical)
        } else if lower.contains("dental") {
            Some(Self::Dental)
        } else if lower.contains("vision") {
            Some(Self::Vision)
        } else {
            None
        }
    }
}

impl fmt::Display for BenefitCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.api_name())
    }
}

impl std::str::FromStr for BenefitCategory {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Medical" => Ok(Self::Medical),
            "Dental" => Ok(Self::Dental),
            "Vision" => Ok(Self::Vision),
            "Other" => Ok(Self::Other),
            other => Err(DomainError::UnknownBenefitCategory(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_prefers_medical_over_dental_and_vision() {
        assert_eq!(
            BenefitCategory::detect("my medical and dental and vision plans"),
            Some(BenefitCategory::Medical)
        );
        assert_eq!(
            BenefitCategory::detect("dental and vision"),
            Some(BenefitCategory::Dental)
        );
        assert_eq!(
            BenefitCategory::detect("vision only"),
            Some(BenefitCategory::Vision)
        );
    }

    #[test]
    fn detect_returns_none_without_keywords() {
        assert_eq!(BenefitCategory::detect("what benefits do i have"), None);
    }

    #[test]
    fn other_is_never_detected() {
        assert_eq!(BenefitCategory::detect("other stuff"), None);
    }

    #[test]
    fn api_names_round_trip_through_from_str() {
        for category in BenefitCategory::ALL {
            let parsed: BenefitCategory = category.api_name().parse().unwrap();
            assert_eq!(parsed, category);
        }
    }
}
