//! # Nested Values
//!
//! A list element that may itself be a list. Dynamic languages let a single
//! sequence hold both plain items and sub-lists; in Rust that choice is made
//! explicit with an enum.
//!
//! ## Example
//!
//! ```
//! use listkit_common::Tree;
//!
//! // [1, [2, 3]]
//! let tree = Tree::Branch(vec![Tree::Leaf(1), Tree::branch_of([2, 3])]);
//!
//! assert!(!tree.is_leaf());
//! assert!(Tree::Leaf(1).is_leaf());
//! ```

/// Either a single item or a nested list of trees.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Tree<T> {
    Leaf(T),
    Branch(Vec<Tree<T>>),
}

impl<T> Tree<T> {
    /// Builds a one-level branch whose children are all leaves.
    ///
    /// ```
    /// use listkit_common::Tree;
    /// assert_eq!(
    ///     Tree::branch_of([1, 2]),
    ///     Tree::Branch(vec![Tree::Leaf(1), Tree::Leaf(2)])
    /// );
    /// ```
    pub fn branch_of(items: impl IntoIterator<Item = T>) -> Self {
        Tree::Branch(items.into_iter().map(Tree::Leaf).collect())
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Tree::Leaf(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_branch_of() {
        let tree = Tree::branch_of(vec!['a', 'b']);
        assert_eq!(tree, Tree::Branch(vec![Tree::Leaf('a'), Tree::Leaf('b')]));
        assert!(Tree::Leaf(1).is_leaf());
        assert!(!tree.is_leaf());
    }
}
