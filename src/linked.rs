//! A parent-linked, unbalanced BST. Every node knows its parent, which lets the algorithms in
//! [`methods`][crate::methods] walk to a node's in-order successor without a stack.
//!
//! A tree is never empty: it starts life as a single root holding a seed value and only ever
//! grows. Nodes are never removed or changed once inserted.
//!
//! # Examples
//!
//! ```
//! use bst::linked::Tree;
//!
//! let mut tree = Tree::new(5);
//! for x in [3, 7, 2, 4, 6, 8] {
//!     tree.insert(x);
//! }
//!
//! assert_eq!(tree.to_string(), "2, 3, 4, 5, 6, 7, 8");
//! assert_eq!(tree.contains(&4).map(|n| *n.value()), Some(4));
//! assert!(tree.contains(&42).is_none());
//!
//! // Equal values are kept, to the right of the value they equal.
//! tree.insert(5);
//! assert_eq!(tree.to_string(), "2, 3, 4, 5, 5, 6, 7, 8");
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;
use std::ptr::{self, NonNull};
use std::rc::Rc;

use crate::compare::{Comparator, Natural};
use crate::error::{Error, Result};
use crate::methods;
use crate::util::Side;
use crate::SearchTree;

/// An unbalanced Binary Search Tree whose nodes link back to their parents. The ordering `C` is
/// fixed when the tree is created and shared by every node.
///
/// Values comparing equal to one already present are inserted into its right subtree, so the
/// tree behaves like a sorted multiset. Use [`Tree::try_insert`] for set semantics.
///
/// `Tree` is neither `Send` nor `Sync`.
pub struct Tree<T, C = Natural> {
    // This is a pointer to a boxed node instead of a `Node` so that the `Tree` can be moved
    // around without the children's parent pointers breaking.
    root: NonNull<Node<T, C>>,
    len: usize,
    _owns: PhantomData<Box<Node<T, C>>>,
}

impl<T, C> Drop for Tree<T, C> {
    fn drop(&mut self) {
        let mut stack = vec![self.root];
        while let Some(node) = stack.pop() {
            // SAFETY: Every node was allocated with `Box::new` (in `Node::new_boxed`) and is
            // reachable through exactly one child link, or is the root, so each one is freed
            // exactly once. `Node` has no `Drop` of its own so freeing it leaves its children to
            // this loop.
            let node = unsafe { Box::from_raw(node.as_ptr()) };
            stack.extend(node.left.0);
            stack.extend(node.right.0);
        }
    }
}

impl<T, C> Clone for Tree<T, C>
where
    T: Clone,
    C: Comparator<T>,
{
    fn clone(&self) -> Self {
        let root = self.root();
        let mut tree = Self::from_shared(root.value.clone(), Rc::clone(&root.comparator));

        // Every parent is inserted before its children so each value retraces its original path
        // and lands in the same position.
        let mut stack: Vec<_> = root.children().collect();
        while let Some(node) = stack.pop() {
            tree.insert(node.value.clone());
            stack.extend(node.children());
        }
        tree
    }
}

impl<T, C> fmt::Debug for Tree<T, C>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree").field("root", self.root()).finish()
    }
}

impl<T, C> fmt::Display for Tree<T, C>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.root(), f)
    }
}

impl<T> Tree<T>
where
    T: Ord,
{
    /// Generates a new `Tree` holding only `value`, ordered by `T`'s own [`Ord`].
    pub fn new(value: T) -> Self {
        Self::with_comparator(value, Natural)
    }
}

impl<T, C> Tree<T, C> {
    /// Generates a new `Tree` holding only `value`, ordered by `comparator`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::linked::Tree;
    ///
    /// let mut tree = Tree::with_comparator(5, |a: &i32, b: &i32| b.cmp(a));
    /// tree.insert(3);
    /// tree.insert(7);
    ///
    /// assert_eq!(tree.to_string(), "7, 5, 3");
    /// ```
    pub fn with_comparator(value: T, comparator: C) -> Self
    where
        C: Comparator<T>,
    {
        Self::from_shared(value, Rc::new(comparator))
    }

    fn from_shared(value: T, comparator: Rc<C>) -> Self {
        let root = Node::new_boxed(value, comparator, Link(None));
        Self {
            root: NonNull::from(Box::leak(root)),
            len: 1,
            _owns: PhantomData,
        }
    }

    /// The root node. Every node of the tree can be reached from here.
    pub fn root(&self) -> &Node<T, C> {
        // SAFETY: The root is allocated in `from_shared` and only freed when the `Tree` is
        // dropped, so it is valid for as long as `self` is. Because we take `&self` here there can
        // be no aliasing `&mut Node`: those only exist inside `insert`, which takes `&mut self`.
        unsafe { self.root.as_ref() }
    }

    /// The ordering this tree was created with.
    pub fn comparator(&self) -> &C {
        self.root().comparator()
    }

    /// The number of values in the tree, counting duplicates. Never zero.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.len
    }

    /// The number of nodes on the longest path from the root to a leaf. A tree holding a single
    /// value has a height of 1.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack = vec![(self.root(), 1)];
        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            stack.extend(node.children().map(|child| (child, depth + 1)));
        }
        height
    }

    /// Inserts `value` as a new leaf. Values comparing equal to an existing value go into that
    /// value's right subtree, so nothing is ever replaced.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::linked::Tree;
    ///
    /// let mut tree = Tree::new(2);
    /// tree.insert(1);
    /// tree.insert(2);
    ///
    /// assert_eq!(tree.len(), 3);
    /// assert_eq!(tree.root().left().map(|n| *n.value()), Some(1));
    /// assert_eq!(tree.root().right().map(|n| *n.value()), Some(2));
    /// ```
    pub fn insert(&mut self, value: T)
    where
        C: Comparator<T>,
    {
        let mut current = self.root;
        let mut depth = 1;
        loop {
            // SAFETY: `&mut self` means nothing else references any node of this tree, and the
            // walk only holds one `&mut Node` at a time.
            let node = unsafe { current.as_mut() };
            let side = Side::of(node.comparator.compare(&value, &node.value));
            match node.link(side).0 {
                Some(child) => {
                    current = child;
                    depth += 1;
                }
                None => {
                    let comparator = Rc::clone(&node.comparator);
                    let leaf = Node::new_boxed(value, comparator, Link(Some(current)));
                    *node.link_mut(side) = Link(Some(NonNull::from(Box::leak(leaf))));
                    self.len += 1;
                    log::trace!("attached leaf at depth {} ({} nodes)", depth + 1, self.len);

                    if cfg!(debug_assertions) {
                        if let Some(left) = node.left() {
                            let ordering = node.comparator.compare(&left.value, &node.value);
                            assert_eq!(ordering, Ordering::Less);
                        }
                        if let Some(right) = node.right() {
                            let ordering = node.comparator.compare(&right.value, &node.value);
                            assert_ne!(ordering, Ordering::Less);
                        }
                    }
                    return;
                }
            }
        }
    }

    /// Inserts `value` unless an equal value is already present, in which case the tree is left
    /// untouched and [`Error::Duplicate`] is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::error::Error;
    /// use bst::linked::Tree;
    ///
    /// let mut tree = Tree::new(1);
    ///
    /// assert_eq!(tree.try_insert(2), Ok(()));
    /// assert_eq!(tree.try_insert(2), Err(Error::Duplicate));
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn try_insert(&mut self, value: T) -> Result<()>
    where
        C: Comparator<T>,
    {
        if self.contains(&value).is_some() {
            log::debug!("rejected duplicate insert into tree of {} nodes", self.len);
            return Err(Error::Duplicate);
        }
        self.insert(value);
        Ok(())
    }

    /// Finds the node holding a value equal to `value`, or `None` if there isn't one.
    pub fn contains(&self, value: &T) -> Option<&Node<T, C>>
    where
        C: Comparator<T>,
    {
        self.root().contains(value)
    }

    /// The smallest value in the tree.
    pub fn min(&self) -> &T {
        methods::leftmost(self.root()).value()
    }

    /// The largest value in the tree.
    pub fn max(&self) -> &T {
        methods::find_max(self.root())
    }

    /// The distinct values `v` with `min <= v <= max`, in ascending order. See
    /// [`find_elements_between_fast`][methods::find_elements_between_fast].
    ///
    /// # Examples
    ///
    /// ```
    /// use bst::linked::Tree;
    ///
    /// let mut tree = Tree::new(5);
    /// for x in [1, 9, 3, 7, 3] {
    ///     tree.insert(x);
    /// }
    ///
    /// assert_eq!(tree.range(&2, &7), vec![&3, &5, &7]);
    /// ```
    pub fn range(&self, min: &T, max: &T) -> Vec<&T>
    where
        C: Comparator<T>,
    {
        methods::find_elements_between_fast(self.root(), min, max)
    }

    /// Checks that the search order holds and that every child links back to its parent.
    ///
    /// Ordering is checked in-order with an explicit stack so the parent links under test are
    /// never followed. A node with a left child must be strictly greater than its in-order
    /// predecessor; any other node must not be less than it.
    pub fn validate(&self) -> Result<()>
    where
        C: Comparator<T>,
    {
        let root = self.root();
        let comparator = root.comparator();
        let mut stack = Vec::new();
        let mut current = Some(root);
        let mut previous: Option<&Node<T, C>> = None;
        let mut position = 0;

        loop {
            while let Some(node) = current {
                stack.push(node);
                current = node.left();
            }
            let Some(node) = stack.pop() else {
                return Ok(());
            };

            if let Some(previous) = previous {
                let ordering = comparator.compare(previous.value(), node.value());
                let ordered = match node.left {
                    Link(Some(_)) => ordering == Ordering::Less,
                    Link(None) => ordering != Ordering::Greater,
                };
                if !ordered {
                    return Err(Error::OutOfOrder { position });
                }
            }

            let this = NonNull::from(node);
            let children_linked = node.children().all(|child| child.parent.0 == Some(this));
            let root_unlinked = !ptr::eq(node, root) || node.parent.0.is_none();
            if !children_linked || !root_unlinked {
                return Err(Error::BrokenParentLink { position });
            }

            previous = Some(node);
            position += 1;
            current = node.right();
        }
    }
}

impl<T, C> SearchTree<T> for Tree<T, C>
where
    C: Comparator<T>,
{
    type Node = Node<T, C>;

    fn insert(&mut self, value: T) {
        Tree::insert(self, value)
    }

    fn contains(&self, value: &T) -> Option<&Self::Node> {
        Tree::contains(self, value)
    }
}

/// Pointer to a node. Whether it owns what it points at depends on which field holds it: `left`
/// and `right` own their nodes, `parent` never does.
struct Link<T, C>(Option<NonNull<Node<T, C>>>);

impl<T, C> Clone for Link<T, C> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<T, C> Copy for Link<T, C> {}

impl<T, C> Link<T, C> {
    fn get(&self) -> Option<&Node<T, C>> {
        // SAFETY: If the link is not `None` then it points at a live `Node` of the same tree, and
        // nodes are only freed when the whole tree is dropped. Shared references to nodes are only
        // handed out from `&Tree`, so no `&mut Node` (which needs `&mut Tree`) can alias them.
        unsafe { self.0.map(|ptr| ptr.as_ref()) }
    }
}

/// A single node of a [`Tree`]: a value, its children and a link back to its parent.
///
/// Nodes can only be borrowed from a `Tree`, never owned or mutated by callers.
pub struct Node<T, C = Natural> {
    value: T,
    comparator: Rc<C>,
    left: Link<T, C>,
    right: Link<T, C>,
    parent: Link<T, C>,
}

impl<T, C> fmt::Debug for Node<T, C>
where
    T: fmt::Debug,
{
    /// Writes the same nesting `debug_struct` would, e.g.
    /// `Node { value: 2, left: Some(Node { .. }), right: None }`, with an explicit stack so deep
    /// trees can be printed.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        enum Piece<'a, T, C> {
            Node(&'a Node<T, C>),
            Child(Option<&'a Node<T, C>>),
            Text(&'static str),
        }

        let mut stack = vec![Piece::Node(self)];
        while let Some(piece) = stack.pop() {
            match piece {
                Piece::Node(node) => {
                    f.write_str("Node { value: ")?;
                    fmt::Debug::fmt(&node.value, f)?;
                    stack.extend([
                        Piece::Text(" }"),
                        Piece::Child(node.right()),
                        Piece::Text(", right: "),
                        Piece::Child(node.left()),
                        Piece::Text(", left: "),
                    ]);
                }
                Piece::Child(None) => f.write_str("None")?,
                Piece::Child(Some(child)) => {
                    f.write_str("Some(")?;
                    stack.extend([Piece::Text(")"), Piece::Node(child)]);
                }
                Piece::Text(text) => f.write_str(text)?,
            }
        }
        Ok(())
    }
}

/// Renders the subtree rooted at this node as its in-order values separated by `", "`.
impl<T, C> fmt::Display for Node<T, C>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let last = methods::rightmost(self);
        let mut current = methods::leftmost(self);
        write!(f, "{}", current.value)?;
        while !ptr::eq(current, last) {
            match methods::inorder_successor(current) {
                Some(next) => current = next,
                None => break,
            }
            write!(f, ", {}", current.value)?;
        }
        Ok(())
    }
}

impl<T, C> Node<T, C> {
    fn new_boxed(value: T, comparator: Rc<C>, parent: Link<T, C>) -> Box<Self> {
        Box::new(Node {
            value,
            comparator,
            left: Link(None),
            right: Link(None),
            parent,
        })
    }

    /// The value stored in this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The ordering shared by every node of the tree.
    pub fn comparator(&self) -> &C {
        &self.comparator
    }

    /// The root of the subtree holding values ordered before this one.
    pub fn left(&self) -> Option<&Self> {
        self.left.get()
    }

    /// The root of the subtree holding values ordered after, or equal to, this one.
    pub fn right(&self) -> Option<&Self> {
        self.right.get()
    }

    /// The node this one hangs from. `None` only for the root.
    pub fn parent(&self) -> Option<&Self> {
        self.parent.get()
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.0.is_none() && self.right.0.is_none()
    }

    /// Whether this node is the root of its tree.
    pub fn is_root(&self) -> bool {
        self.parent.0.is_none()
    }

    /// Searches the subtree rooted at this node for a value equal to `value`. If several nodes
    /// hold an equal value, the one closest to this node is returned.
    pub fn contains(&self, value: &T) -> Option<&Self>
    where
        C: Comparator<T>,
    {
        let mut current = self;
        loop {
            current = match self.comparator.compare(value, &current.value) {
                Ordering::Less => current.left()?,
                Ordering::Equal => return Some(current),
                Ordering::Greater => current.right()?,
            };
        }
    }

    fn link(&self, side: Side) -> Link<T, C> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    fn link_mut(&mut self, side: Side) -> &mut Link<T, C> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    fn children(&self) -> impl Iterator<Item = &Self> {
        self.left().into_iter().chain(self.right())
    }
}
