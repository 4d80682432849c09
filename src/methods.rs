//! Algorithms over the nodes of a [`Tree`][crate::linked::Tree]. None of them mutate the tree:
//! they walk child links down and parent links up.
//!
//! Each takes the node to start from, so they work on any subtree. Pass
//! [`Tree::root`][crate::linked::Tree::root] to work on the whole tree.
//!
//! # Examples
//!
//! ```
//! use bst::linked::Tree;
//! use bst::methods::{find_elements_between, find_elements_between_fast, find_max};
//!
//! let mut tree = Tree::new(5);
//! for x in [1, -10, 4, 26, 14, 34, 9, 17, 7, 11, 15, 25] {
//!     tree.insert(x);
//! }
//!
//! assert_eq!(find_max(tree.root()), &34);
//! assert_eq!(find_elements_between(tree.root(), &13, &25), vec![&14, &15, &17, &25]);
//! assert_eq!(find_elements_between_fast(tree.root(), &13, &25), vec![&14, &15, &17, &25]);
//! ```

use std::cmp::Ordering;
use std::ptr;

use crate::compare::Comparator;
use crate::linked::Node;

/// The node holding the smallest value in the subtree rooted at `node`.
pub fn leftmost<T, C>(node: &Node<T, C>) -> &Node<T, C> {
    let mut current = node;
    while let Some(left) = current.left() {
        current = left;
    }
    current
}

/// The node holding the largest value in the subtree rooted at `node`. With duplicates this is
/// the last of them in-order.
pub fn rightmost<T, C>(node: &Node<T, C>) -> &Node<T, C> {
    let mut current = node;
    while let Some(right) = current.right() {
        current = right;
    }
    current
}

/// The largest value in the subtree rooted at `node`. A node without a right child is its own
/// maximum.
pub fn find_max<T, C>(node: &Node<T, C>) -> &T {
    rightmost(node).value()
}

/// The node that comes after `node` in-order, or `None` if `node` holds the largest value of its
/// tree.
///
/// If `node` has a right subtree its successor is the leftmost node there. Otherwise it's the
/// closest ancestor whose left subtree contains `node`.
///
/// # Examples
///
/// ```
/// use bst::linked::Tree;
/// use bst::methods::inorder_successor;
///
/// let mut tree = Tree::new(5);
/// tree.insert(3);
/// tree.insert(7);
///
/// let three = tree.contains(&3).unwrap();
/// let seven = tree.contains(&7).unwrap();
///
/// assert_eq!(inorder_successor(three).map(|n| *n.value()), Some(5));
/// assert!(inorder_successor(seven).is_none());
/// ```
pub fn inorder_successor<T, C>(node: &Node<T, C>) -> Option<&Node<T, C>> {
    if let Some(right) = node.right() {
        return Some(leftmost(right));
    }

    let mut child = node;
    loop {
        let parent = child.parent()?;
        if parent.left().is_some_and(|left| ptr::eq(left, child)) {
            return Some(parent);
        }
        child = parent;
    }
}

/// Descends from `node` towards `target` for as long as there is a child in the right direction
/// and returns the node it stops at.
///
/// That is the first node equal to `target` on the way down or, when there is none, the last node
/// of the search path. The latter is either the largest value below `target` or the smallest
/// value above it, whichever the shape of the tree leads to, so it isn't a floor search (see
/// [`floor`]). It is still a sound place to start an in-order walk towards values `>= target`:
/// nothing before it in-order is `>= target`.
pub fn find_next_smallest<'a, T, C>(node: &'a Node<T, C>, target: &T) -> &'a Node<T, C>
where
    C: Comparator<T>,
{
    let comparator = node.comparator();
    let mut current = node;
    loop {
        let next = match comparator.compare(current.value(), target) {
            Ordering::Less => current.right(),
            Ordering::Equal => None,
            Ordering::Greater => current.left(),
        };
        match next {
            Some(next) => current = next,
            None => return current,
        }
    }
}

/// The node holding the largest value `<= target` in the subtree rooted at `node`, or `None` if
/// every value there is greater than `target`. With duplicates the last of them in-order is
/// returned.
///
/// # Examples
///
/// ```
/// use bst::linked::Tree;
/// use bst::methods::floor;
///
/// let mut tree = Tree::new(10);
/// tree.insert(5);
/// tree.insert(20);
///
/// assert_eq!(floor(tree.root(), &7).map(|n| *n.value()), Some(5));
/// assert_eq!(floor(tree.root(), &20).map(|n| *n.value()), Some(20));
/// assert!(floor(tree.root(), &4).is_none());
/// ```
pub fn floor<'a, T, C>(node: &'a Node<T, C>, target: &T) -> Option<&'a Node<T, C>>
where
    C: Comparator<T>,
{
    let comparator = node.comparator();
    let mut best = None;
    let mut current = Some(node);
    while let Some(n) = current {
        current = match comparator.compare(n.value(), target) {
            Ordering::Greater => n.left(),
            Ordering::Less | Ordering::Equal => {
                best = Some(n);
                n.right()
            }
        };
    }
    best
}

/// The distinct values `v` with `min <= v <= max` in the subtree rooted at `node`, found by a
/// depth-first scan that skips subtrees which can't hold anything in range:
///
/// - below `min`, only the right subtree can hold values in range;
/// - above `max`, only the left subtree can;
/// - in range, the value is kept and both subtrees are scanned.
///
/// The result is in ascending order with one entry per group of equal values: the one closest to
/// the root. If `min > max` nothing is in range.
pub fn find_elements_between<'a, T, C>(node: &'a Node<T, C>, min: &T, max: &T) -> Vec<&'a T>
where
    C: Comparator<T>,
{
    let mut values = Vec::new();
    collect_between(node, min, max, &mut values);
    log::debug!("bounded scan found {} values in range", values.len());

    // Values are collected parent first, so a stable sort keeps the topmost of equal values ahead
    // of its duplicates.
    let comparator = node.comparator();
    values.sort_by(|a, b| comparator.compare(*a, *b));
    values.dedup_by(|a, b| comparator.compare(*a, *b) == Ordering::Equal);
    values
}

fn collect_between<'a, T, C>(node: &'a Node<T, C>, min: &T, max: &T, values: &mut Vec<&'a T>)
where
    C: Comparator<T>,
{
    let comparator = node.comparator();
    let mut stack = vec![node];
    while let Some(node) = stack.pop() {
        let below_min = comparator.compare(node.value(), min) == Ordering::Less;
        let above_max = comparator.compare(node.value(), max) == Ordering::Greater;

        // Right is pushed before left so every node is recorded before its descendants.
        if below_min {
            stack.extend(node.right());
        }
        if above_max {
            stack.extend(node.left());
        }
        if !below_min && !above_max {
            values.push(node.value());
            stack.extend(node.right());
            stack.extend(node.left());
        }
    }
}

/// The same values as [`find_elements_between`], found by starting at
/// [`find_next_smallest`]`(node, min)` and following [`inorder_successor`] until a value above
/// `max` is reached. This visits `O(height + k)` nodes for `k` values in range.
///
/// The walk never leaves the subtree rooted at `node`: it also stops once that subtree's largest
/// node has been visited.
pub fn find_elements_between_fast<'a, T, C>(node: &'a Node<T, C>, min: &T, max: &T) -> Vec<&'a T>
where
    C: Comparator<T>,
{
    let comparator = node.comparator();
    let last = rightmost(node);
    let mut values: Vec<&T> = Vec::new();
    let mut visited = 0;
    let mut next = Some(find_next_smallest(node, min));

    while let Some(current) = next {
        let value = current.value();
        if comparator.compare(value, max) == Ordering::Greater {
            break;
        }
        visited += 1;

        let in_range = comparator.compare(value, min) != Ordering::Less;
        let repeated = values
            .last()
            .is_some_and(|previous| comparator.compare(*previous, value) == Ordering::Equal);
        if in_range && !repeated {
            values.push(value);
        }

        if ptr::eq(current, last) {
            break;
        }
        next = inorder_successor(current);
    }

    log::debug!(
        "successor walk visited {} nodes, {} values in range",
        visited,
        values.len()
    );
    values
}
