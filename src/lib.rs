//! This crate exposes an unbalanced Binary Search Tree (BST) whose nodes link back to their
//! parents, mostly for educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to insert and find stored
//! values. BSTs are typically defined recursively using the notion of a `Node`. A `Node` stores a
//! value and may have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a value less than its
//!    own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a value greater than,
//!    or equal to, its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Visiting the left subtree, then the subtree root, then the right subtree ("in-order") visits
//! values in sorted order. If every `Node` also knows its parent we can step from any `Node` to
//! the next one in sorted order (its "in-order successor") without keeping a stack. The
//! [`methods`] module uses this to answer "which values lie between `min` and `max`?" by finding
//! where `min` would be and walking forwards, instead of scanning every subtree that might hold a
//! value in range.
//!
//! ## Ordering
//!
//! Values are ordered by a [`Comparator`][compare::Comparator] given once, when the tree is
//! created. [`Natural`][compare::Natural] uses the value's own [`Ord`]; any
//! `Fn(&T, &T) -> Ordering` closure works too.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod compare;
pub mod error;
pub mod linked;
pub mod methods;

mod util;


/// A tree that values can be inserted into and searched for.
pub trait SearchTree<T> {
    /// What a successful search returns.
    type Node;

    /// Adds `value` to the tree.
    fn insert(&mut self, value: T);

    /// Finds the node holding a value equal to `value`, if there is one.
    fn contains(&self, value: &T) -> Option<&Self::Node>;
}
