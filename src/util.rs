use std::cmp::Ordering;

/// Which child slot of a `Node` a comparison sends a value towards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Side {
    /// The value ordered strictly before the node's value.
    Left,
    /// The value ordered after, or equal to, the node's value. Equal values go right so inserting
    /// a duplicate never displaces an existing node.
    Right,
}

impl Side {
    /// The side a value belongs on given `value.cmp(node_value)`.
    pub(crate) fn of(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Less => Self::Left,
            Ordering::Equal | Ordering::Greater => Self::Right,
        }
    }
}
