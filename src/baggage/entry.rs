//! Baggage Entry Module
//!
//! Defines the immutable key/value entry and its construction-time validation.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::baggage::{is_printable, EntryMetadata, MAX_KEY_LENGTH, MAX_VALUE_LENGTH};
use crate::error::{BaggageError, Result};

// == Entry ==
/// A validated, immutable baggage entry.
///
/// The only way to obtain an `Entry` is through [`Entry::create`] (or
/// deserialization, which runs the same checks), so every instance holds a
/// key of 1..=255 and a value of 0..=255 printable ASCII characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawEntry")]
pub struct Entry {
    key: String,
    value: String,
    metadata: EntryMetadata,
}

/// Unvalidated wire shape of an entry.
#[derive(Deserialize)]
struct RawEntry {
    key: String,
    value: String,
    #[serde(default)]
    metadata: EntryMetadata,
}

impl Entry {
    /// Maximum allowed key length in characters
    pub const MAX_KEY_LENGTH: usize = MAX_KEY_LENGTH;

    /// Maximum allowed value length in characters
    pub const MAX_VALUE_LENGTH: usize = MAX_VALUE_LENGTH;

    /// Default metadata for entries that propagate without limit
    pub const METADATA_UNLIMITED_PROPAGATION: EntryMetadata =
        EntryMetadata::UNLIMITED_PROPAGATION;

    // == Constructor ==
    /// Creates a new entry after validating key and value.
    ///
    /// # Errors
    /// Returns [`BaggageError::InvalidArgument`] listing every violation when
    /// the key is empty, longer than 255 characters or not printable ASCII,
    /// or when the value is longer than 255 characters or not printable ASCII.
    pub fn create(
        key: impl Into<String>,
        value: impl Into<String>,
        metadata: EntryMetadata,
    ) -> Result<Self> {
        let key = key.into();
        let value = value.into();

        let mut violations = key_violations(&key);
        violations.extend(value_violations(&value));

        if !violations.is_empty() {
            let message = violations.join("; ");
            debug!(
                key_len = key.len(),
                value_len = value.len(),
                "Rejected baggage entry: {}",
                message
            );
            return Err(BaggageError::InvalidArgument(message));
        }

        Ok(Self {
            key,
            value,
            metadata,
        })
    }

    // == Accessors ==
    /// Returns the entry key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the entry value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns the metadata supplied at construction.
    pub fn metadata(&self) -> EntryMetadata {
        self.metadata
    }

    /// Consumes the entry, returning its key, value and metadata.
    pub fn into_parts(self) -> (String, String, EntryMetadata) {
        (self.key, self.value, self.metadata)
    }

    // == Validation Predicates ==
    /// Returns true if `key` would be accepted by [`Entry::create`].
    pub fn is_key_valid(key: &str) -> bool {
        key_violations(key).is_empty()
    }

    /// Returns true if `value` would be accepted by [`Entry::create`].
    pub fn is_value_valid(value: &str) -> bool {
        value_violations(value).is_empty()
    }
}

impl TryFrom<RawEntry> for Entry {
    type Error = BaggageError;

    fn try_from(raw: RawEntry) -> Result<Self> {
        Entry::create(raw.key, raw.value, raw.metadata)
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}

// == Validation ==
fn key_violations(key: &str) -> Vec<String> {
    let mut violations = Vec::new();
    let len = key.chars().count();

    if len == 0 {
        violations.push("key must not be empty".to_string());
    }
    if len > MAX_KEY_LENGTH {
        violations.push(format!(
            "key length {} exceeds maximum of {}",
            len, MAX_KEY_LENGTH
        ));
    }
    if !is_printable(key) {
        violations.push("key contains non-printable or non-ASCII characters".to_string());
    }
    violations
}

fn value_violations(value: &str) -> Vec<String> {
    let mut violations = Vec::new();
    let len = value.chars().count();

    // Empty values are allowed.
    if len > MAX_VALUE_LENGTH {
        violations.push(format!(
            "value length {} exceeds maximum of {}",
            len, MAX_VALUE_LENGTH
        ));
    }
    if !is_printable(value) {
        violations.push("value contains non-printable or non-ASCII characters".to_string());
    }
    violations
}
