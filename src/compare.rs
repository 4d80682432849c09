//! Orderings used to place values in a [`Tree`][crate::linked::Tree].
//!
//! A tree is handed its ordering once, when it is created, and every node
//! inserted afterwards shares that same ordering. Anything implementing
//! [`Comparator`] will do: [`Natural`] for types that are already [`Ord`], or
//! any closure of the shape `Fn(&T, &T) -> Ordering`.
//!
//! # Examples
//!
//! ```
//! use std::cmp::Ordering;
//!
//! use bst::compare::{Comparator, Natural};
//!
//! assert_eq!(Natural.compare(&1, &2), Ordering::Less);
//!
//! // Closures need their argument types spelled out so they accept any lifetime.
//! let reverse = |a: &i32, b: &i32| b.cmp(a);
//! assert_eq!(reverse.compare(&1, &2), Ordering::Greater);
//! ```

use std::cmp::Ordering;

/// A total order over `T`.
///
/// Implementations must be consistent: the tree assumes that if `a < b` and
/// `b < c` then `a < c`, and that comparing the same two values always gives
/// the same answer. An inconsistent comparator won't cause memory unsafety but
/// searches and range queries will give meaningless results.
pub trait Comparator<T: ?Sized> {
    /// Compares `a` against `b`.
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

/// The ordering given by `T`'s own [`Ord`] implementation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Natural;

impl<T> Comparator<T> for Natural
where
    T: Ord + ?Sized,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

impl<T, F> Comparator<T> for F
where
    T: ?Sized,
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}
