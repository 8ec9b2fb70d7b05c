//! List shape transforms.
//!
//! Every function here borrows its input and builds a new `Vec`, so the
//! caller's list is never modified.

use listkit_common::Tree;
use tracing::trace;

/// Places `separator` between each pair of adjacent elements.
///
/// A list of `n > 0` elements becomes `2n - 1` long; an empty list stays
/// empty.
///
/// # Examples
/// ```
/// use listkit::shape::intersperse;
///
/// assert_eq!(intersperse(&0, &[1, 2, 3]), vec![1, 0, 2, 0, 3]);
/// assert!(intersperse(&0, &[]).is_empty());
/// ```
pub fn intersperse<T: Clone>(separator: &T, list: &[T]) -> Vec<T> {
    let mut result = Vec::with_capacity((2 * list.len()).saturating_sub(1));
    for (index, value) in list.iter().enumerate() {
        if index > 0 {
            result.push(separator.clone());
        }
        result.push(value.clone());
    }
    result
}

/// Inserts `item` just before the element at `index`.
///
/// An `index` at or past the end appends `item`.
///
/// # Examples
/// ```
/// use listkit::shape::insert;
///
/// assert_eq!(insert(0, 9, &[1, 2, 3]), vec![9, 1, 2, 3]);
/// assert_eq!(insert(10, 9, &[1, 2, 3]), vec![1, 2, 3, 9]);
/// ```
pub fn insert<T: Clone>(index: usize, item: T, list: &[T]) -> Vec<T> {
    let (before, after) = list.split_at(insertion_point(index, list.len()));

    let mut result = Vec::with_capacity(list.len() + 1);
    result.extend_from_slice(before);
    result.push(item);
    result.extend_from_slice(after);
    result
}

/// Splices all of `items`, in order, just before the element at `index`.
///
/// An `index` at or past the end appends the whole of `items`.
///
/// # Examples
/// ```
/// use listkit::shape::insert_all;
///
/// assert_eq!(insert_all(1, &[7, 8], &[1, 2, 3]), vec![1, 7, 8, 2, 3]);
/// assert_eq!(insert_all(3, &[7, 8], &[1, 2, 3]), vec![1, 2, 3, 7, 8]);
/// ```
pub fn insert_all<T: Clone>(index: usize, items: &[T], list: &[T]) -> Vec<T> {
    let (before, after) = list.split_at(insertion_point(index, list.len()));

    let mut result = Vec::with_capacity(list.len() + items.len());
    result.extend_from_slice(before);
    result.extend_from_slice(items);
    result.extend_from_slice(after);
    result
}

/// Clamps an insertion index to `len`; anything past the end appends.
fn insertion_point(index: usize, len: usize) -> usize {
    if index >= len {
        trace!(index, len, "insert position past the end, appending");
    }
    index.min(len)
}

/// Returns the elements in reverse order.
///
/// # Examples
/// ```
/// use listkit::shape::reverse;
///
/// let original = vec![1, 2, 3];
/// assert_eq!(reverse(&original), vec![3, 2, 1]);
/// assert_eq!(original, vec![1, 2, 3]);
/// ```
pub fn reverse<T: Clone>(list: &[T]) -> Vec<T> {
    list.iter().rev().cloned().collect()
}

/// Concatenates a list of lists, removing exactly one level of nesting.
///
/// Elements that are themselves lists stay lists:
/// `flatten(&[vec![vec![1, 2]], vec![vec![3]]])` is `[[1, 2], [3]]`.
///
/// # Examples
/// ```
/// use listkit::shape::flatten;
///
/// assert_eq!(flatten(&[vec![1, 2], vec![3, 4]]), vec![1, 2, 3, 4]);
/// assert_eq!(flatten(&[vec![1], vec![], vec![2, 3]]), vec![1, 2, 3]);
/// ```
pub fn flatten<T, L>(lists: &[L]) -> Vec<T>
where
    T: Clone,
    L: AsRef<[T]>,
{
    let total = lists.iter().map(|list| list.as_ref().len()).sum();
    let mut result = Vec::with_capacity(total);
    for list in lists {
        result.extend_from_slice(list.as_ref());
    }
    result
}

/// Flattens one level of a list whose elements may be leaves or lists.
///
/// Each [`Tree::Branch`] has its children spliced in place; each
/// [`Tree::Leaf`] passes through. Deeper branches survive as branches.
///
/// # Examples
/// ```
/// use listkit::shape::flatten_tree;
/// use listkit_common::Tree;
///
/// // [[1, 2], [[3, 4]]] => [1, 2, [3, 4]]
/// let nested = vec![
///     Tree::branch_of([1, 2]),
///     Tree::Branch(vec![Tree::branch_of([3, 4])]),
/// ];
/// assert_eq!(
///     flatten_tree(&nested),
///     vec![Tree::Leaf(1), Tree::Leaf(2), Tree::branch_of([3, 4])]
/// );
/// ```
pub fn flatten_tree<T: Clone>(items: &[Tree<T>]) -> Vec<Tree<T>> {
    let mut result = Vec::with_capacity(items.len());
    for item in items {
        match item {
            Tree::Leaf(_) => result.push(item.clone()),
            Tree::Branch(children) => result.extend_from_slice(children),
        }
    }
    result
}

/// Maps each element to a sequence and concatenates the sequences.
///
/// Equivalent to flattening the mapped list by one level.
///
/// # Examples
/// ```
/// use listkit::shape::flat_map;
///
/// assert_eq!(flat_map(|n: &i32| [*n, *n], &[1, 2]), vec![1, 1, 2, 2]);
/// let words = |s: &&str| s.split(' ').map(String::from).collect::<Vec<_>>();
/// assert_eq!(
///     flat_map(words, &["flatMap", "should be", "mapFlat"]),
///     vec!["flatMap", "should", "be", "mapFlat"]
/// );
/// ```
pub fn flat_map<T, U, I, F>(f: F, list: &[T]) -> Vec<U>
where
    F: Fn(&T) -> I,
    I: IntoIterator<Item = U>,
{
    list.iter().flat_map(f).collect()
}
