//! Request and Response models for the validation service API
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! serializing/deserializing HTTP request and response bodies.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::{BatchRequest, EntryRequest};
pub use responses::{
    BatchResponse, BatchResult, EntryResponse, ErrorResponse, HealthResponse, LimitsResponse,
};
