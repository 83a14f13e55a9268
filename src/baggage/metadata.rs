//! Entry Metadata Module
//!
//! Propagation scope attached to every baggage entry.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::BaggageError;

// == Entry TTL ==
/// How far an entry may travel across process boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntryTtl {
    /// Entry may be forwarded across any number of hops
    UnlimitedPropagation,
    /// Entry must not leave the process that created it
    NoPropagation,
}

impl EntryTtl {
    /// Returns the canonical name, as used in configuration and JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryTtl::UnlimitedPropagation => "UNLIMITED_PROPAGATION",
            EntryTtl::NoPropagation => "NO_PROPAGATION",
        }
    }

    /// Returns true if an entry with this TTL may be sent to another process.
    pub fn allows_propagation(&self) -> bool {
        match self {
            EntryTtl::UnlimitedPropagation => true,
            EntryTtl::NoPropagation => false,
        }
    }
}

impl fmt::Display for EntryTtl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntryTtl {
    type Err = BaggageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "UNLIMITED_PROPAGATION" => Ok(EntryTtl::UnlimitedPropagation),
            "NO_PROPAGATION" => Ok(EntryTtl::NoPropagation),
            other => Err(BaggageError::InvalidArgument(format!(
                "unknown entry TTL '{}'",
                other
            ))),
        }
    }
}

// == Entry Metadata ==
/// Immutable propagation metadata for a single entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntryMetadata {
    ttl: EntryTtl,
}

impl EntryMetadata {
    /// Metadata for entries that propagate without limit.
    pub const UNLIMITED_PROPAGATION: EntryMetadata =
        EntryMetadata::create(EntryTtl::UnlimitedPropagation);

    /// Metadata for entries that stay in the creating process.
    pub const NO_PROPAGATION: EntryMetadata = EntryMetadata::create(EntryTtl::NoPropagation);

    /// Creates metadata with the given TTL. Never fails.
    pub const fn create(ttl: EntryTtl) -> Self {
        Self { ttl }
    }

    /// Returns the propagation TTL.
    pub const fn ttl(&self) -> EntryTtl {
        self.ttl
    }
}

impl Default for EntryMetadata {
    fn default() -> Self {
        Self::UNLIMITED_PROPAGATION
    }
}

impl From<EntryTtl> for EntryMetadata {
    fn from(ttl: EntryTtl) -> Self {
        Self::create(ttl)
    }
}
