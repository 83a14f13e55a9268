//! Property-Based Tests for Baggage Module
//!
//! Uses proptest to check the entry validation rules over generated inputs.

use proptest::prelude::*;
use std::collections::HashSet;

use crate::baggage::{Entry, EntryMetadata, EntryTtl, MAX_KEY_LENGTH, MAX_VALUE_LENGTH};
use crate::error::BaggageError;

// == Strategies ==
/// Generates valid keys (printable ASCII, 1..=255 characters)
fn valid_key_strategy() -> impl Strategy<Value = String> {
    "[ -~]{1,255}".prop_map(|s| s)
}

/// Generates valid values (printable ASCII, 0..=255 characters)
fn valid_value_strategy() -> impl Strategy<Value = String> {
    "[ -~]{0,255}".prop_map(|s| s)
}

fn metadata_strategy() -> impl Strategy<Value = EntryMetadata> {
    prop_oneof![
        Just(EntryMetadata::create(EntryTtl::UnlimitedPropagation)),
        Just(EntryMetadata::create(EntryTtl::NoPropagation)),
    ]
}

/// Generates a character outside 0x20..=0x7E (control, DEL, or non-ASCII)
fn unprintable_char_strategy() -> impl Strategy<Value = char> {
    prop_oneof![
        (0u8..0x20).prop_map(char::from),
        Just('\u{7f}'),
        any::<char>().prop_filter("non-ASCII", |c| !c.is_ascii()),
    ]
}

/// Inserts `c` into `s` at a position derived from `index`.
fn insert_at(s: &str, index: usize, c: char) -> String {
    let mut out = s.to_string();
    out.insert(index % (s.len() + 1), c);
    out
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Any printable key and value within bounds constructs, and the
    // accessors return the inputs unchanged.
    #[test]
    fn prop_valid_entry_roundtrip(
        key in valid_key_strategy(),
        value in valid_value_strategy(),
        metadata in metadata_strategy()
    ) {
        let entry = Entry::create(key.clone(), value.clone(), metadata).unwrap();

        prop_assert_eq!(entry.key(), key.as_str());
        prop_assert_eq!(entry.value(), value.as_str());
        prop_assert_eq!(entry.metadata(), metadata);
        prop_assert!(Entry::is_key_valid(&key));
        prop_assert!(Entry::is_value_valid(&value));
    }

    // A single unprintable character anywhere in the key rejects the entry.
    #[test]
    fn prop_unprintable_key_rejected(
        key in "[ -~]{0,200}",
        c in unprintable_char_strategy(),
        index in any::<usize>()
    ) {
        let key = insert_at(&key, index, c);
        let result = Entry::create(key, "value", EntryMetadata::default());
        prop_assert!(matches!(result, Err(BaggageError::InvalidArgument(_))));
    }

    // A single unprintable character anywhere in the value rejects the entry.
    #[test]
    fn prop_unprintable_value_rejected(
        value in "[ -~]{0,200}",
        c in unprintable_char_strategy(),
        index in any::<usize>()
    ) {
        let value = insert_at(&value, index, c);
        let result = Entry::create("key", value, EntryMetadata::default());
        prop_assert!(matches!(result, Err(BaggageError::InvalidArgument(_))));
    }

    // Keys and values longer than the maximum are rejected.
    #[test]
    fn prop_over_length_rejected(extra in 1usize..64) {
        let key = "k".repeat(MAX_KEY_LENGTH + extra);
        prop_assert!(Entry::create(key, "v", EntryMetadata::default()).is_err());

        let value = "v".repeat(MAX_VALUE_LENGTH + extra);
        prop_assert!(Entry::create("k", value, EntryMetadata::default()).is_err());
    }

    // Equal inputs give equal entries; entries in a set are deduplicated
    // exactly when their (key, value, metadata) triples coincide.
    #[test]
    fn prop_structural_equality(
        triples in prop::collection::vec(
            ("[a-c]{1,2}", "[x-z]{0,2}", metadata_strategy()),
            1..30
        )
    ) {
        let mut entries = HashSet::new();
        let mut distinct = HashSet::new();

        for (key, value, metadata) in triples {
            let entry = Entry::create(key.clone(), value.clone(), metadata).unwrap();
            prop_assert_eq!(
                &entry,
                &Entry::create(key.clone(), value.clone(), metadata).unwrap()
            );
            entries.insert(entry);
            distinct.insert((key, value, metadata.ttl()));
        }

        prop_assert_eq!(entries.len(), distinct.len());
    }

    // Serialized entries deserialize to an equal entry.
    #[test]
    fn prop_serde_preserves_equality(
        key in valid_key_strategy(),
        value in valid_value_strategy(),
        metadata in metadata_strategy()
    ) {
        let entry = Entry::create(key, value, metadata).unwrap();
        let json = serde_json::to_string(&entry).unwrap();
        let decoded: Entry = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(decoded, entry);
    }
}
