//! Sequence generators.

use tracing::trace;

/// Enumerates the integers from `from` to `to`, inclusive.
///
/// When `to < from` the range is empty, whatever the gap.
///
/// # Examples
/// ```
/// use listkit::generate::range;
///
/// assert_eq!(range(1, 5), vec![1, 2, 3, 4, 5]);
/// assert_eq!(range(5, 5), vec![5]);
/// assert!(range(5, 1).is_empty());
/// ```
pub fn range(from: i64, to: i64) -> Vec<i64> {
    if to < from {
        trace!(from, to, "range end precedes start, returning empty");
    }
    (from..=to).collect()
}

/// Returns `count` copies of `item`.
///
/// Each slot is a `clone` of `item`. To share one value across all slots,
/// pass a shared handle such as `Rc<T>`.
///
/// # Examples
/// ```
/// use listkit::generate::repeat;
/// use std::rc::Rc;
///
/// assert_eq!(repeat(&"x", 3), vec!["x", "x", "x"]);
///
/// let shared = Rc::new(vec![1, 2]);
/// let slots = repeat(&shared, 2);
/// assert!(Rc::ptr_eq(&slots[0], &slots[1]));
/// ```
pub fn repeat<T: Clone>(item: &T, count: usize) -> Vec<T> {
    vec![item.clone(); count]
}

/// Calls `f` with each index in `0..count` and collects the results.
///
/// # Examples
/// ```
/// use listkit::generate::times;
///
/// assert_eq!(times(|i| i * 2, 3), vec![0, 2, 4]);
/// ```
pub fn times<T, F>(f: F, count: usize) -> Vec<T>
where
    F: FnMut(usize) -> T,
{
    (0..count).map(f).collect()
}
