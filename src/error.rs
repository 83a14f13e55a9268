//! Error types for baggage entries
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Baggage Error Enum ==
/// Unified error type for entry construction and the validation service.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BaggageError {
    /// A key, value or TTL failed validation
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A batch request carried more entries than the service accepts
    #[error("Batch too large: {0}")]
    BatchTooLarge(String),
}

impl BaggageError {
    /// Returns true for construction-time validation failures.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, BaggageError::InvalidArgument(_))
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for BaggageError {
    fn into_response(self) -> Response {
        let status = match &self {
            BaggageError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
            BaggageError::BatchTooLarge(_) => StatusCode::BAD_REQUEST,
        };

        let body = Json(ErrorResponse::new(self.to_string()));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for baggage operations.
pub type Result<T> = std::result::Result<T, BaggageError>;
