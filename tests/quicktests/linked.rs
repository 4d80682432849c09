use std::collections::HashSet;

use bst::methods::{inorder_successor, leftmost};

use crate::tree_of;

#[quickcheck]
fn in_order_is_sorted(seed: i8, xs: Vec<i8>) -> bool {
    let tree = tree_of(seed, &xs);

    let mut expected = xs;
    expected.push(seed);
    expected.sort();
    let expected = expected
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");

    tree.to_string() == expected && tree.validate().is_ok()
}

#[quickcheck]
fn contains(seed: i8, xs: Vec<i8>) -> bool {
    let tree = tree_of(seed, &xs);

    xs.iter()
        .chain(Some(&seed))
        .all(|x| tree.contains(x).map(|n| n.value()) == Some(x))
}

#[quickcheck]
fn contains_not(seed: i8, xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree = tree_of(seed, &xs);
    let added: HashSet<_> = xs.into_iter().chain(Some(seed)).collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| tree.contains(x).is_none())
}

#[quickcheck]
fn len_counts_duplicates(seed: i8, xs: Vec<i8>) -> bool {
    tree_of(seed, &xs).len() == xs.len() + 1
}

#[quickcheck]
fn successor_is_next_in_sorted_order(seed: i8, xs: Vec<i8>) -> bool {
    let tree = tree_of(seed, &xs);
    let mut sorted = xs;
    sorted.push(seed);
    sorted.sort();

    // Walking successors from the smallest node visits every node exactly once, in order.
    let mut walked = Vec::new();
    let mut next = Some(leftmost(tree.root()));
    while let Some(node) = next {
        if let Some(successor) = inorder_successor(node) {
            // Nothing lies strictly between a node and its successor.
            let (a, b) = (*node.value(), *successor.value());
            if a > b || sorted.iter().any(|x| a < *x && *x < b) {
                return false;
            }
        }
        walked.push(*node.value());
        next = inorder_successor(node);
    }

    walked == sorted
}

#[quickcheck]
fn try_insert_is_a_set(seed: i8, xs: Vec<i8>) -> bool {
    let mut tree = bst::linked::Tree::new(seed);
    let mut added = HashSet::new();
    added.insert(seed);

    for x in &xs {
        let inserted = tree.try_insert(*x).is_ok();
        if inserted != added.insert(*x) {
            return false;
        }
    }

    tree.len() == added.len() && tree.validate().is_ok()
}
