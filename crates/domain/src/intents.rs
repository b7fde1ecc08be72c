//! Assistant intents - the fixed set of utterance classifications
//!
//! Every incoming utterance resolves to exactly one intent. Classification is
//! order-dependent: rules are evaluated in a fixed priority order and the first
//! matching rule wins (no scoring).

use std::fmt;

use serde::{Deserialize, Serialize};

/// The classified purpose of a user utterance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    /// Book a time-off request for a parsed date range
    BookTimeOff,
    /// Report how much PTO has been used this year
    PtoUsed,
    /// Detail a single benefit category (medical, dental, vision)
    BenefitDetail,
    /// List all enrolled benefits grouped by category
    BenefitsList,
    /// Year-to-date benefit cost projection
    BenefitsYtdCost,
    /// Per-pay-period benefit cost summary
    BenefitsCost,
    /// Remaining leave balances
    PtoBalance,
    /// Redirect to the pending approvals view
    PendingApprovals,
    /// Generic benefits summary (fallback for benefit-ish utterances)
    BenefitsGeneric,
    /// Redirect to the Goals page
    Goals,
    /// Redirect to the Personal section
    Personal,
    /// Nothing matched - reply with the help message
    Unknown,
}

impl Intent {
    /// Stable wire name, matching the serde representation
    pub const fn name(&self) -> &'static str {
        match self {
            Self::BookTimeOff => "book_time_off",
            Self::PtoUsed => "pto_used",
            Self::BenefitDetail => "benefit_detail",
            Self::BenefitsList => "benefits_list",
            Self::BenefitsYtdCost => "benefits_ytd_cost",
            Self::BenefitsCost => "benefits_cost",
            Self::PtoBalance => "pto_balance",
            Self::PendingApprovals => "pending_approvals",
            Self::BenefitsGeneric => "benefits_generic",
            Self::Goals => "goals",
            Self::Personal => "personal",
            Self::Unknown => "unknown",
        }
    }

    /// Whether handling this intent involves a gateway round-trip
    pub const fn calls_gateway(&self) -> bool {
        !matches!(
            self,
            Self::PendingApprovals | Self::Goals | Self::Personal | Self::Unknown
        )
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_matches_serde_representation() {
        let json = serde_json::to_string(&Intent::BenefitsYtdCost).unwrap();
        assert_eq!(json, format!("\"{}\"", Intent::BenefitsYtdCost.name()));
    }

    #[test]
    fn static_intents_do_not_call_gateways() {
        assert!(!Intent::PendingApprovals.calls_gateway());
        assert!(!Intent::Goals.calls_gateway());
        assert!(!Intent::Personal.calls_gateway());
        assert!(!Intent::Unknown.calls_gateway());
    }

    #[test]
    fn booking_calls_gateway() {
        assert!(Intent::BookTimeOff.calls_gateway());
    }
}
