//! API Module
//!
//! HTTP handlers and routing for the entry validation service.
//!
//! # Endpoints
//! - `POST /entries` - Validate a single entry
//! - `POST /entries/batch` - Validate a batch of entries
//! - `GET /limits` - Key and value length limits
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
