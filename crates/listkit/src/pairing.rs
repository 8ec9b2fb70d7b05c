//! Pairing two lists: positional (`zip`) and exhaustive (`xprod`).

/// A pair of values, one drawn from each list.
pub type Pair<A, B> = (A, B);

/// Pairs up elements by position, stopping at the shorter list.
///
/// The result has `min(left.len(), right.len())` pairs; extra elements of
/// the longer list are dropped.
///
/// # Examples
/// ```
/// use listkit::pairing::zip;
///
/// assert_eq!(zip(&[1, 3], &[2, 4]), vec![(1, 2), (3, 4)]);
/// assert_eq!(zip(&[1, 3, 5], &[2, 4]), vec![(1, 2), (3, 4)]);
/// assert_eq!(zip(&["Decode", "secret"], &["this", "message!"]),
///            vec![("Decode", "this"), ("secret", "message!")]);
/// ```
pub fn zip<A: Clone, B: Clone>(left: &[A], right: &[B]) -> Vec<Pair<A, B>> {
    left.iter().cloned().zip(right.iter().cloned()).collect()
}

/// Pairs every element of `left` with every element of `right`.
///
/// Ordering is `left`-major: all pairs for `left[0]` come first, each in
/// `right` order. The result has `left.len() * right.len()` pairs.
///
/// # Examples
/// ```
/// use listkit::pairing::xprod;
///
/// assert_eq!(xprod(&[1, 2], &['a', 'b']), vec![(1, 'a'), (1, 'b'), (2, 'a'), (2, 'b')]);
/// ```
pub fn xprod<A: Clone, B: Clone>(left: &[A], right: &[B]) -> Vec<Pair<A, B>> {
    let mut pairs = Vec::with_capacity(left.len() * right.len());
    for a in left {
        pairs.extend(right.iter().map(|b| (a.clone(), b.clone())));
    }
    pairs
}

/// Splits a list of pairs back into two lists.
///
/// `unzip(&zip(a, b))` recovers `a` and `b` truncated to the shorter length.
pub fn unzip<A: Clone, B: Clone>(pairs: &[Pair<A, B>]) -> (Vec<A>, Vec<B>) {
    pairs.iter().cloned().unzip()
}
