//! Insert-unique helpers for string map fields.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use thiserror::Error;

/// A map entry helper was given a key that is already present.
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash)]
#[error("duplicate key `{key}` in `{field}`")]
pub struct DuplicateKeyError {
    field: &'static str,
    key: String,
}

impl DuplicateKeyError {
    /// Wire name of the map field the insert targeted.
    pub fn field(&self) -> &'static str {
        self.field
    }

    /// The offending key.
    pub fn key(&self) -> &str {
        &self.key
    }
}

/// Inserts `key → value` into a lazily allocated map.
///
/// An existing entry is never overwritten; the map is left untouched and a
/// [`DuplicateKeyError`] is returned instead.
pub(crate) fn insert_unique(
    map: &mut Option<BTreeMap<String, String>>,
    field: &'static str,
    key: String,
    value: String,
) -> Result<(), DuplicateKeyError> {
    match map.get_or_insert_with(BTreeMap::new).entry(key) {
        Entry::Occupied(occupied) => Err(DuplicateKeyError {
            field,
            key: occupied.key().clone(),
        }),
        Entry::Vacant(vacant) => {
            vacant.insert(value);
            Ok(())
        }
    }
}
