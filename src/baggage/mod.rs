//! Baggage Module
//!
//! Validated, immutable baggage entries and their propagation metadata.

mod entry;
mod metadata;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use entry::Entry;
pub use metadata::{EntryMetadata, EntryTtl};

// == Public Constants ==
/// Maximum allowed key length in characters
pub const MAX_KEY_LENGTH: usize = 255;

/// Maximum allowed value length in characters
pub const MAX_VALUE_LENGTH: usize = 255;

/// Returns true if every character is printable ASCII (0x20..=0x7E).
pub(crate) fn is_printable(s: &str) -> bool {
    s.bytes().all(|b| (0x20..=0x7E).contains(&b))
}
