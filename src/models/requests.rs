//! Request DTOs for the validation service API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;

use crate::baggage::{Entry, EntryMetadata, EntryTtl};
use crate::error::Result;

/// Request body for a single entry (POST /entries)
///
/// # Fields
/// - `key`: The candidate entry key
/// - `value`: The candidate entry value
/// - `ttl`: Optional TTL name (uses the configured default if not specified)
#[derive(Debug, Clone, Deserialize)]
pub struct EntryRequest {
    /// The candidate key
    pub key: String,
    /// The candidate value
    pub value: String,
    /// Optional TTL name, kept as text so unknown names are reported like
    /// any other invalid argument
    #[serde(default)]
    pub ttl: Option<String>,
}

impl EntryRequest {
    /// Builds a validated entry from the request.
    ///
    /// Falls back to `default_ttl` when the request names no TTL.
    pub fn into_entry(self, default_ttl: EntryTtl) -> Result<Entry> {
        let ttl = match self.ttl {
            Some(name) => name.parse::<EntryTtl>()?,
            None => default_ttl,
        };
        Entry::create(self.key, self.value, EntryMetadata::create(ttl))
    }
}

/// Request body for batch validation (POST /entries/batch)
#[derive(Debug, Clone, Deserialize)]
pub struct BatchRequest {
    /// Entries to validate independently
    pub entries: Vec<EntryRequest>,
}
