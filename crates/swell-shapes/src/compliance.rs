//! Enumeration invariant test helpers.
//!
//! These functions verify that a constructed [`ShapeEnum`] satisfies the
//! structural invariants of the enumeration contract. Reused across the
//! test modules of this crate (construction, lookup, superset merge).

use crate::enumeration::ShapeEnum;
use indexmap::IndexSet;

/// Assert that every ordinal maps to a distinct node.
pub fn assert_ordinals_distinct<const D: usize>(shape: &ShapeEnum<D>) {
    let mut seen = IndexSet::new();
    for i in 0..shape.n_entries() {
        let node = shape.at(i).unwrap_or_else(|e| panic!("at({i}) failed: {e}"));
        assert!(
            seen.insert(node),
            "ordinal {i} maps to {node}, already produced by an earlier ordinal"
        );
    }
    assert_eq!(seen.len(), shape.n_entries());
}

/// Assert that coordinate sums are non-decreasing in ordinal order and that
/// each slice holds exactly its own sum, strictly ascending.
pub fn assert_slice_order<const D: usize>(shape: &ShapeEnum<D>) {
    for (islice, slice) in shape.slices().iter().enumerate() {
        for node in slice.iter() {
            assert_eq!(
                node.sum() as usize,
                islice,
                "node {node} stored in slice {islice}"
            );
        }
        for w in slice.nodes().windows(2) {
            assert!(
                w[0] < w[1],
                "slice {islice} not strictly ascending: {} before {}",
                w[0],
                w[1]
            );
        }
    }
}

/// Assert that slice offsets partition `[0, n_entries)` contiguously.
pub fn assert_offsets_contiguous<const D: usize>(shape: &ShapeEnum<D>) {
    let mut expected = 0;
    for (islice, slice) in shape.slices().iter().enumerate() {
        assert_eq!(
            slice.offset(),
            expected,
            "slice {islice} offset {} breaks contiguity, expected {expected}",
            slice.offset()
        );
        expected += slice.len();
    }
    assert_eq!(expected, shape.n_entries(), "slice sizes do not sum to n_entries");
}

/// Assert the ordinal round-trip: `at(offset + find(k)) == k` for every node.
pub fn assert_round_trip<const D: usize>(shape: &ShapeEnum<D>) {
    for slice in shape.slices() {
        for node in slice.iter() {
            let position = slice
                .find(node)
                .unwrap_or_else(|e| panic!("find({node}) failed: {e}"));
            let ordinal = slice.offset() + position;
            assert_eq!(shape.at(ordinal).unwrap(), *node);
            assert_eq!(shape.ordinal(node).unwrap(), ordinal);
        }
    }
}

/// Assert that backward neighbours present in the shape resolve to their
/// exact positions in the previous slice.
pub fn assert_backward_neighbours_resolve<const D: usize>(shape: &ShapeEnum<D>) {
    for (islice, slice) in shape.slices().iter().enumerate() {
        let prev = shape.slice(islice as isize - 1);
        for node in slice.iter() {
            let positions = prev.find_backward_neighbours(node);
            for d in 0..D {
                if node[d] > 0 && shape.contains(&node.backward(d)) {
                    assert_eq!(
                        prev[positions[d]],
                        node.backward(d),
                        "backward neighbour of {node} on axis {d} misresolved"
                    );
                }
            }
        }
    }
}

/// Assert that the bounding box is the componentwise maximum over all nodes.
pub fn assert_limits_tight<const D: usize>(shape: &ShapeEnum<D>) {
    let mut max = [0u32; D];
    for node in shape.iter() {
        for d in 0..D {
            max[d] = max[d].max(node[d]);
        }
    }
    for d in 0..D {
        assert_eq!(
            shape.limit(d),
            max[d],
            "limit({d}) disagrees with the node maximum"
        );
    }
}

/// Assert the sentinel contract: out-of-range slice indices yield empty
/// slices with offsets 0 and n_entries.
pub fn assert_sentinels<const D: usize>(shape: &ShapeEnum<D>) {
    let lower = shape.slice(-1);
    assert!(lower.is_empty());
    assert_eq!(lower.offset(), 0);

    let upper = shape.slice(shape.n_slices() as isize);
    assert!(upper.is_empty());
    assert_eq!(upper.offset(), shape.n_entries());
}

/// Run all enumeration invariant checks on a shape.
pub fn run_full_compliance<const D: usize>(shape: &ShapeEnum<D>) {
    assert_ordinals_distinct(shape);
    assert_slice_order(shape);
    assert_offsets_contiguous(shape);
    assert_round_trip(shape);
    assert_backward_neighbours_resolve(shape);
    assert_limits_tight(shape);
    assert_sentinels(shape);
}
