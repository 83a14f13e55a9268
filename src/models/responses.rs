//! Response DTOs for the validation service API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use crate::baggage::{Entry, EntryMetadata, MAX_KEY_LENGTH, MAX_VALUE_LENGTH};
use crate::error::Result;

/// Response body for an accepted entry (POST /entries)
#[derive(Debug, Clone, Serialize)]
pub struct EntryResponse {
    /// The validated key
    pub key: String,
    /// The validated value
    pub value: String,
    /// Propagation metadata
    pub metadata: EntryMetadata,
}

impl From<Entry> for EntryResponse {
    fn from(entry: Entry) -> Self {
        let (key, value, metadata) = entry.into_parts();
        Self {
            key,
            value,
            metadata,
        }
    }
}

/// Outcome of validating one entry in a batch
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum BatchResult {
    /// The entry passed validation
    Valid { entry: EntryResponse },
    /// The entry was rejected
    Invalid { error: String },
}

impl From<Result<Entry>> for BatchResult {
    fn from(result: Result<Entry>) -> Self {
        match result {
            Ok(entry) => BatchResult::Valid {
                entry: entry.into(),
            },
            Err(err) => BatchResult::Invalid {
                error: err.to_string(),
            },
        }
    }
}

/// Response body for batch validation (POST /entries/batch)
#[derive(Debug, Clone, Serialize)]
pub struct BatchResponse {
    /// Number of accepted entries
    pub valid: usize,
    /// Number of rejected entries
    pub invalid: usize,
    /// Per-entry outcomes, in request order
    pub results: Vec<BatchResult>,
}

impl BatchResponse {
    /// Creates a BatchResponse, counting accepted and rejected entries
    pub fn new(results: Vec<BatchResult>) -> Self {
        let valid = results
            .iter()
            .filter(|r| matches!(r, BatchResult::Valid { .. }))
            .count();
        Self {
            valid,
            invalid: results.len() - valid,
            results,
        }
    }
}

/// Response body for the limits endpoint (GET /limits)
#[derive(Debug, Clone, Serialize)]
pub struct LimitsResponse {
    /// Maximum key length in characters
    pub max_key_length: usize,
    /// Maximum value length in characters
    pub max_value_length: usize,
}

impl LimitsResponse {
    /// Creates a LimitsResponse from the entry length constants
    pub fn current() -> Self {
        Self {
            max_key_length: MAX_KEY_LENGTH,
            max_value_length: MAX_VALUE_LENGTH,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::baggage::EntryTtl;
    use crate::error::BaggageError;

    fn rejected() -> Result<Entry> {
        Err(BaggageError::InvalidArgument("bad".to_string()))
    }

    #[test]
    fn test_entry_response_serialize() {
        let entry = Entry::create("tenant", "acme", EntryMetadata::NO_PROPAGATION).unwrap();
        let json = serde_json::to_value(EntryResponse::from(entry)).unwrap();
        assert_eq!(json["key"], "tenant");
        assert_eq!(json["value"], "acme");
        assert_eq!(json["metadata"]["ttl"], EntryTtl::NoPropagation.as_str());
    }

    #[test]
    fn test_batch_response_counts() {
        let results = vec![
            BatchResult::from(Entry::create("a", "1", EntryMetadata::default())),
            BatchResult::from(rejected()),
            BatchResult::from(Entry::create("b", "", EntryMetadata::default())),
        ];
        let resp = BatchResponse::new(results);
        assert_eq!(resp.valid, 2);
        assert_eq!(resp.invalid, 1);
    }

    #[test]
    fn test_batch_result_serialize() {
        let ok = BatchResult::from(Entry::create("a", "1", EntryMetadata::default()));
        let json = serde_json::to_value(&ok).unwrap();
        assert_eq!(json["entry"]["key"], "a");

        let err = BatchResult::from(rejected());
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["error"], "Invalid argument: bad");
    }

    #[test]
    fn test_limits_response() {
        let resp = LimitsResponse::current();
        assert_eq!(resp.max_key_length, 255);
        assert_eq!(resp.max_value_length, 255);
    }

    #[test]
    fn test_health_response_serialize() {
        let resp = HealthResponse::healthy();
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("healthy"));
        assert!(json.contains("timestamp"));
    }

    #[test]
    fn test_error_response_serialize() {
        let resp = ErrorResponse::new("Something went wrong");
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("error"));
        assert!(json.contains("Something went wrong"));
    }
}
