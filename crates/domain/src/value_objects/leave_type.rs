//! Leave type value object

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// A category of leave tracked by the HR API
///
/// Serialized with the exact names the balance summary and time-off endpoints
/// use as map keys and `type` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LeaveType {
    /// Paid time off
    #[serde(rename = "PTO")]
    Pto,
    /// Sick leave
    #[serde(rename = "Sick Leave")]
    SickLeave,
    /// Floating holiday
    #[serde(rename = "Floating Holiday")]
    FloatingHoliday,
}

impl LeaveType {
    /// All leave types, in the order balance replies list them
    pub const ALL: [Self; 3] = [Self::Pto, Self::SickLeave, Self::FloatingHoliday];

    /// The exact name the HR API uses for this leave type
    pub const fn api_name(&self) -> &'static str {
        match self {
            Self::Pto => "PTO",
            Self::SickLeave => "Sick Leave",
            Self::FloatingHoliday => "Floating Holiday",
        }
    }
}

impl fmt::Display for LeaveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.api_name())
    }
}

impl std::str::FromStr for LeaveType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PTO" => Ok(Self::Pto),
            "Sick Leave" => Ok(Self::SickLeave),
            "Floating Holiday" => Ok(Self::FloatingHoliday),
            other => Err(DomainError::UnknownLeaveType(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_names_round_trip_through_from_str() {
        for leave_type in LeaveType::ALL {
            let parsed: LeaveType = leave_type.api_name().parse().unwrap();
            assert_eq!(parsed, leave_type);
        }
    }

    #[test]
    fn serializes_to_api_name() {
        let json = serde_json::to_string(&LeaveType::SickLeave).unwrap();
        assert_eq!(json, "\"Sick Leave\"");
    }

    #[test]
    fn unknown_name_is_rejected() {
        assert!("Sabbatical".parse::<LeaveType>().is_err());
    }
}
