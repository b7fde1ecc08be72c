//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// Invalid employee identifier
    #[error("Invalid employee id: {0}")]
    InvalidEmployeeId(String),

    /// Leave type name not recognized by the HR API
    #[error("Unknown leave type: {0}")]
    UnknownLeaveType(String),

    /// Benefit category name not recognized by the HR API
    #[error("Unknown benefit category: {0}")]
    UnknownBenefitCategory(String),
}
