//! Errors reported by [`Tree`][crate::linked::Tree].

use thiserror::Error;

/// Everything that can go wrong when working with a [`Tree`][crate::linked::Tree].
///
/// "Not found" is not an error: lookups return `Option` instead.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// [`Tree::try_insert`][crate::linked::Tree::try_insert] was given a value that compares equal
    /// to one already in the tree.
    #[error("an equal value is already present in the tree")]
    Duplicate,

    /// The node at this in-order position is ordered before its predecessor, or sits in a left
    /// subtree without being strictly less than the subtree's parent.
    ///
    /// Only reported by [`Tree::validate`][crate::linked::Tree::validate]. No safe API can build a
    /// tree in this state; it is a diagnostic for trees corrupted through `unsafe` code.
    #[error("node at in-order position {position} breaks the search order")]
    OutOfOrder {
        /// Zero-based in-order index of the offending node.
        position: usize,
    },

    /// A child of the node at this in-order position doesn't point back at it.
    ///
    /// Only reported by [`Tree::validate`][crate::linked::Tree::validate]. No safe API can build a
    /// tree in this state; it is a diagnostic for trees corrupted through `unsafe` code.
    #[error("a child of the node at in-order position {position} has the wrong parent link")]
    BrokenParentLink {
        /// Zero-based in-order index of the parent whose child is inconsistent.
        position: usize,
    },
}

/// Shorthand for results carrying this crate's [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
