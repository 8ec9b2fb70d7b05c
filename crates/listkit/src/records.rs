//! Record transforms: lookup tables, pairs to records, and shallow merges.
//!
//! Collisions always resolve the same way: the later item, pair or record
//! wins.

use listkit_common::record::overlay;
use listkit_common::{ListError, Record, Result, ToKey};
use tracing::trace;

/// Builds a lookup table from each record's `key` field to the record.
///
/// The field's value is turned into a key with [`ToKey`]. Records sharing a
/// key value overwrite earlier ones.
///
/// # Errors
///
/// Returns [`ListError::MissingKey`] if any record lacks `key`.
///
/// # Examples
/// ```
/// use listkit::records::array_into_object;
/// use listkit_common::record::from_entries;
///
/// let users = vec![
///     from_entries([("username", "JX01"), ("status", "offline")]),
///     from_entries([("username", "yazeedBee"), ("status", "online")]),
/// ];
///
/// let by_status = array_into_object("status", &users).unwrap();
/// assert_eq!(by_status.get("online"), Some(&users[1]));
/// ```
pub fn array_into_object<V>(key: &str, list: &[Record<V>]) -> Result<Record<Record<V>>>
where
    V: ToKey + Clone,
{
    list.iter()
        .enumerate()
        .try_fold(Record::new(), |table, (index, item)| {
            let value = item.get(key).ok_or_else(|| {
                trace!(key, index, "record has no such field");
                ListError::MissingKey {
                    key: key.to_string(),
                    index,
                }
            })?;
            Ok(table.update(value.to_key(), item.clone()))
        })
}

/// Builds a lookup table keyed by `key(item)`.
///
/// This is the infallible form of [`array_into_object`] for any item type:
/// the caller decides how each item is keyed.
///
/// # Examples
/// ```
/// use listkit::records::index_by;
///
/// let table = index_by(|(id, _)| *id, &[(7, "seven"), (9, "nine")]);
/// assert_eq!(table.get("9"), Some(&(9, "nine")));
/// ```
pub fn index_by<T, K, F>(key: F, list: &[T]) -> Record<T>
where
    T: Clone,
    K: ToKey,
    F: Fn(&T) -> K,
{
    list.iter().fold(Record::new(), |table, item| {
        table.update(key(item).to_key(), item.clone())
    })
}

/// Builds a record from `(key, value)` pairs; later pairs win.
///
/// # Examples
/// ```
/// use listkit::records::from_pairs;
///
/// let record = from_pairs(&[("a", 1), ("b", 2), ("a", 3)]);
/// assert_eq!(record.get("a"), Some(&3));
/// assert_eq!(record.len(), 2);
/// ```
pub fn from_pairs<K: ToKey, V: Clone>(pairs: &[(K, V)]) -> Record<V> {
    pairs.iter().fold(Record::new(), |record, (key, value)| {
        record.update(key.to_key(), value.clone())
    })
}

/// Shallow-merges records left to right; later fields overwrite earlier ones.
///
/// Nested values are replaced whole, never merged.
///
/// # Examples
/// ```
/// use listkit::records::{from_pairs, merge_all};
///
/// let merged = merge_all(&[
///     from_pairs(&[("a", 1)]),
///     from_pairs(&[("b", 2)]),
///     from_pairs(&[("a", 3)]),
/// ]);
/// assert_eq!(merged, from_pairs(&[("a", 3), ("b", 2)]));
/// ```
pub fn merge_all<V: Clone>(records: &[Record<V>]) -> Record<V> {
    records
        .iter()
        .fold(Record::new(), |merged, record| overlay(&merged, record))
}
