//! API Handlers
//!
//! HTTP request handlers for each validation service endpoint.

use axum::{extract::State, Json};
use tracing::{debug, info};

use crate::baggage::EntryTtl;
use crate::config::Config;
use crate::error::{BaggageError, Result};
use crate::models::{
    BatchRequest, BatchResponse, BatchResult, EntryRequest, EntryResponse, HealthResponse,
    LimitsResponse,
};

/// Application state shared across all handlers.
///
/// Holds only immutable settings; entries are validated and returned, never stored.
#[derive(Debug, Clone)]
pub struct AppState {
    /// TTL applied when a request names none
    pub default_ttl: EntryTtl,
    /// Maximum number of entries per batch request
    pub max_batch_size: usize,
}

impl AppState {
    /// Creates a new AppState with the given settings.
    pub fn new(default_ttl: EntryTtl, max_batch_size: usize) -> Self {
        Self {
            default_ttl,
            max_batch_size,
        }
    }

    /// Creates a new AppState from configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.default_ttl, config.max_batch_size)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

/// Handler for POST /entries
///
/// Validates a single candidate entry and echoes it back on success.
pub async fn create_entry_handler(
    State(state): State<AppState>,
    Json(req): Json<EntryRequest>,
) -> Result<Json<EntryResponse>> {
    let entry = req.into_entry(state.default_ttl)?;
    debug!("Accepted entry with key '{}'", entry.key());

    Ok(Json(entry.into()))
}

/// Handler for POST /entries/batch
///
/// Validates each entry independently; one rejection does not fail the batch.
pub async fn batch_handler(
    State(state): State<AppState>,
    Json(req): Json<BatchRequest>,
) -> Result<Json<BatchResponse>> {
    if req.entries.len() > state.max_batch_size {
        return Err(BaggageError::BatchTooLarge(format!(
            "{} entries exceeds maximum of {}",
            req.entries.len(),
            state.max_batch_size
        )));
    }

    let results: Vec<BatchResult> = req
        .entries
        .into_iter()
        .map(|entry_req| entry_req.into_entry(state.default_ttl).into())
        .collect();
    let response = BatchResponse::new(results);

    info!(
        "Batch validated: {} accepted, {} rejected",
        response.valid, response.invalid
    );

    Ok(Json(response))
}

/// Handler for GET /limits
///
/// Returns the key and value length limits.
pub async fn limits_handler() -> Json<LimitsResponse> {
    Json(LimitsResponse::current())
}

/// Handler for GET /health
///
/// Returns health status of the server.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
