//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
///
/// Gateway failures never escape the dispatcher as errors; each intent
/// handler converts them into a user-facing fallback reply. This type exists
/// for the port boundary and for callers outside the dispatch path.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// External service error (gateway unreachable or non-success response)
    #[error("External service error: {0}")]
    ExternalService(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_error_is_transparent() {
        let err: ApplicationError = DomainError::InvalidEmployeeId("0".to_string()).into();
        assert_eq!(err.to_string(), "Invalid employee id: 0");
    }

    #[test]
    fn external_service_error_message() {
        let err = ApplicationError::ExternalService("connection refused".to_string());
        assert_eq!(err.to_string(), "External service error: connection refused");
    }
}
