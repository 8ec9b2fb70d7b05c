//! # Persistent Records
//!
//! String-keyed records built on `im::HashMap`. Cloning a record is O(1)
//! thanks to structural sharing, so operations that "modify" a record can
//! return a new one and leave the caller's copy intact.
//!
//! ## Example
//!
//! ```
//! use listkit_common::record::{self, Record};
//!
//! let user: Record<&str> = record::from_entries([("username", "JX01"), ("status", "offline")]);
//!
//! // update returns a NEW record (functional update)
//! let online = user.update("status".to_string(), "online");
//!
//! assert_eq!(user.get("status"), Some(&"offline"));
//! assert_eq!(online.get("status"), Some(&"online"));
//! ```

use im::HashMap as ImHashMap;

/// A persistent mapping from string keys to values.
///
/// Keys are unique; inserting an existing key replaces its value.
pub type Record<V> = ImHashMap<String, V>;

/// Builds a record from `(key, value)` entries; later entries win.
pub fn from_entries<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Record<V>
where
    K: Into<String>,
    V: Clone,
{
    entries
        .into_iter()
        .fold(Record::new(), |acc, (key, value)| acc.update(key.into(), value))
}

/// Returns a record holding every entry of `base`, overwritten by `overrides`.
///
/// Neither input is modified.
///
/// ```
/// use listkit_common::record::{from_entries, overlay};
///
/// let base = from_entries([("a", 1), ("b", 2)]);
/// let merged = overlay(&base, &from_entries([("a", 3)]));
///
/// assert_eq!(merged, from_entries([("a", 3), ("b", 2)]));
/// assert_eq!(base.get("a"), Some(&1));
/// ```
#[must_use]
pub fn overlay<V: Clone>(base: &Record<V>, overrides: &Record<V>) -> Record<V> {
    overrides
        .iter()
        .fold(base.clone(), |acc, (key, value)| acc.update(key.clone(), value.clone()))
}

/// Returns the record's keys in sorted order.
pub fn sorted_keys<V>(record: &Record<V>) -> Vec<&str> {
    let mut keys: Vec<&str> = record.keys().map(String::as_str).collect();
    keys.sort_unstable();
    keys
}
