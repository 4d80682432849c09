#[macro_use]
extern crate quickcheck_macros;

mod linked;
mod methods;

use bst::linked::Tree;

/// Builds a tree from a seed and the values inserted after it.
pub(crate) fn tree_of(seed: i8, xs: &[i8]) -> Tree<i8> {
    let mut tree = Tree::new(seed);
    for x in xs {
        tree.insert(*x);
    }
    tree
}
