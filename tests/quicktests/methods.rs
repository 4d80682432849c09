use std::collections::BTreeSet;

use bst::methods::{
    find_elements_between, find_elements_between_fast, find_max, find_next_smallest, floor,
};

use crate::tree_of;

#[quickcheck]
fn range_scans_agree(seed: i8, xs: Vec<i8>, min: i8, max: i8) -> bool {
    let tree = tree_of(seed, &xs);

    find_elements_between(tree.root(), &min, &max)
        == find_elements_between_fast(tree.root(), &min, &max)
}

#[quickcheck]
fn range_scans_agree_on_subtrees(seed: i8, xs: Vec<i8>, min: i8, max: i8) -> bool {
    let tree = tree_of(seed, &xs);

    xs.iter().all(|x| {
        let node = tree.contains(x).unwrap();
        find_elements_between(node, &min, &max) == find_elements_between_fast(node, &min, &max)
    })
}

#[quickcheck]
fn range_matches_filter(seed: i8, xs: Vec<i8>, min: i8, max: i8) -> bool {
    let tree = tree_of(seed, &xs);
    let expected: Vec<i8> = xs
        .iter()
        .chain(Some(&seed))
        .copied()
        .filter(|x| min <= *x && *x <= max)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    let found: Vec<i8> = tree.range(&min, &max).into_iter().copied().collect();
    found == expected
}

#[quickcheck]
fn find_max_is_largest(seed: i8, xs: Vec<i8>) -> bool {
    let tree = tree_of(seed, &xs);
    let largest = xs.iter().copied().chain(Some(seed)).max();

    Some(*find_max(tree.root())) == largest
}

#[quickcheck]
fn find_next_smallest_lands_next_to_target(seed: i8, xs: Vec<i8>, target: i8) -> bool {
    let tree = tree_of(seed, &xs);
    let landed = *find_next_smallest(tree.root(), &target).value();
    let values: BTreeSet<i8> = xs.iter().copied().chain(Some(seed)).collect();

    // Either the target itself, the largest value below it or the smallest value above it.
    let below = values.range(..target).next_back().copied();
    let above = values.range(target..).next().copied();
    Some(landed) == below || Some(landed) == above
}

#[quickcheck]
fn floor_is_largest_not_above(seed: i8, xs: Vec<i8>, target: i8) -> bool {
    let tree = tree_of(seed, &xs);
    let expected = xs
        .iter()
        .copied()
        .chain(Some(seed))
        .filter(|x| *x <= target)
        .max();

    floor(tree.root(), &target).map(|n| *n.value()) == expected
}
