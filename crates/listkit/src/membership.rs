//! Filtering and membership: `includes`, `compact` and deduplication.
//!
//! Deduplication comes in three flavors because "equal" is a choice:
//!
//! - [`deduplicate`] compares whole values (`Eq + Hash`).
//! - [`deduplicate_by`] compares a caller-chosen key.
//! - [`deduplicate_coerced`] compares the values' record keys
//!   ([`ToKey`]), so `1` and `"1"` collapse and two lists with the same
//!   elements collapse. Use it when matching string-keyed lookups elsewhere.
//!
//! All three keep the first occurrence and preserve order.

use std::collections::HashSet;
use std::hash::Hash;

use listkit_common::{ToKey, Truthy};

/// Returns `true` if some element equals `item`.
///
/// # Examples
/// ```
/// use listkit::membership::includes;
///
/// assert!(includes(&3, &[1, 2, 3]));
/// assert!(!includes(&3, &[1, 2]));
/// assert!(!includes(&0, &[]));
/// ```
pub fn includes<T: PartialEq>(item: &T, list: &[T]) -> bool {
    list.iter().any(|value| value == item)
}

/// Keeps only the truthy elements.
///
/// See [`Truthy`] for the falsy table.
///
/// # Examples
/// ```
/// use listkit::membership::compact;
///
/// let readings = [Some(0.0), None, Some(1.0), Some(f64::NAN), Some(2.0)];
/// assert_eq!(compact(&readings), vec![Some(1.0), Some(2.0)]);
///
/// assert_eq!(compact(&["", "a", "", "b"]), vec!["a", "b"]);
/// ```
pub fn compact<T: Truthy + Clone>(list: &[T]) -> Vec<T> {
    list.iter().filter(|value| value.is_truthy()).cloned().collect()
}

/// Removes repeated elements, keeping the first of each.
///
/// # Examples
/// ```
/// use listkit::membership::deduplicate;
///
/// assert_eq!(deduplicate(&[1, 1, 2, 3]), vec![1, 2, 3]);
/// assert_eq!(deduplicate(&[vec![1], vec![1], vec![2]]), vec![vec![1], vec![2]]);
/// ```
pub fn deduplicate<T: Eq + Hash + Clone>(list: &[T]) -> Vec<T> {
    let mut seen = HashSet::with_capacity(list.len());
    list.iter()
        .filter(|value| seen.insert(*value))
        .cloned()
        .collect()
}

/// Removes elements whose `key` was already produced by an earlier element.
///
/// # Examples
/// ```
/// use listkit::membership::deduplicate_by;
///
/// let names = ["Ada", "alan", "ADA", "Grace"];
/// assert_eq!(
///     deduplicate_by(|s| s.to_lowercase(), &names),
///     vec!["Ada", "alan", "Grace"]
/// );
/// ```
pub fn deduplicate_by<T, K, F>(key: F, list: &[T]) -> Vec<T>
where
    T: Clone,
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    let mut seen = HashSet::with_capacity(list.len());
    list.iter()
        .filter(|value| seen.insert(key(value)))
        .cloned()
        .collect()
}

/// Removes elements whose record key ([`ToKey`]) was already seen.
///
/// Values that spell the same key are duplicates even when they differ:
/// JSON `1` and JSON `"1"` share the key `"1"`, and `f64::NAN` matches
/// itself. Values that are structurally equal always share a key.
///
/// # Examples
/// ```
/// use listkit::membership::deduplicate_coerced;
///
/// assert_eq!(deduplicate_coerced(&[1.0, f64::NAN, 1.0, f64::NAN]).len(), 2);
/// assert_eq!(
///     deduplicate_coerced(&[vec![1, 2], vec![1, 2], vec![2]]),
///     vec![vec![1, 2], vec![2]]
/// );
/// ```
pub fn deduplicate_coerced<T: ToKey + Clone>(list: &[T]) -> Vec<T> {
    deduplicate_by(ToKey::to_key, list)
}
