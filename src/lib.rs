//! Baggage Entries - validated key/value pairs for cross-process context
//!
//! Provides immutable baggage entries with propagation metadata, and a small
//! HTTP service that validates candidate entries against the same rules.

pub mod api;
pub mod baggage;
pub mod config;
pub mod error;
pub mod models;

pub use api::AppState;
pub use baggage::{Entry, EntryMetadata, EntryTtl};
pub use config::Config;
pub use error::{BaggageError, Result};
