//! Index-targeted updates.

use tracing::trace;

/// Replaces the element at `index` with `f(element)`.
///
/// Every other element is cloned unchanged. An out-of-range `index` leaves
/// the whole list as it was.
///
/// # Examples
/// ```
/// use listkit::update::adjust;
///
/// assert_eq!(adjust(1, |x| x * 2, &[1, 2, 3]), vec![1, 4, 3]);
/// assert_eq!(adjust(4, |x| x * 2, &[1, 2, 3]), vec![1, 2, 3]);
/// ```
pub fn adjust<T, F>(index: usize, f: F, list: &[T]) -> Vec<T>
where
    T: Clone,
    F: FnOnce(&T) -> T,
{
    let mut result = list.to_vec();
    match list.get(index) {
        Some(target) => result[index] = f(target),
        None => trace!(index, len = list.len(), "adjust index out of range, list unchanged"),
    }
    result
}

/// Replaces the element at `index` with `value`.
///
/// Shorthand for `adjust(index, |_| value, list)`.
pub fn update<T: Clone>(index: usize, value: T, list: &[T]) -> Vec<T> {
    adjust(index, |_| value, list)
}
