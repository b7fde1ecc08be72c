//! API error handling

use application::ApplicationError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed or invalid request
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An upstream gateway is unreachable
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Anything else
    #[error("Internal error: {0}")]
    Internal(String),
}

/// JSON error body, matching the HR API's `{error}` convention
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = Json(ErrorResponse {
            error: self.to_string(),
        });
        (status, body).into_response()
    }
}

impl From<ApplicationError> for ApiError {
    fn from(err: ApplicationError) -> Self {
        match err {
            ApplicationError::ExternalService(e) => Self::ServiceUnavailable(e),
            ApplicationError::Domain(e) => Self::BadRequest(e.to_string()),
            ApplicationError::Configuration(e) | ApplicationError::Internal(e) => {
                Self::Internal(e)
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_request_maps_to_400() {
        let response = ApiError::BadRequest("nope".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn external_service_maps_to_503() {
        let err: ApiError = ApplicationError::ExternalService("down".to_string()).into();
        assert!(matches!(err, ApiError::ServiceUnavailable(_)));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn internal_maps_to_500() {
        let err: ApiError = ApplicationError::Internal("boom".to_string()).into();
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
