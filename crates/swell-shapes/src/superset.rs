//! Union ("superset") of shape enumerations.

use crate::enumeration::ShapeEnum;
use crate::slice::ShapeSlice;
use smallvec::SmallVec;
use swell_core::MultiIndex;

/// The union enumeration of several shapes.
///
/// Merges the sorted slice tables of the inputs sum by sum, eliminating
/// duplicates, and recomputes offsets, entry count, and the bounding box.
/// Multi-component wavepackets share one coefficient layout by evaluating
/// their basis over the superset of their component shapes.
///
/// The sorted-slice representation makes this a linear merge per slice; no
/// per-node searches are needed. Merging valid enumerations cannot fail,
/// and an empty input yields the empty enumeration.
///
/// # Examples
///
/// ```
/// use swell_core::MultiIndex;
/// use swell_shapes::{superset, ShapeEnum};
///
/// let a = ShapeEnum::from_nodes([[0, 0], [1, 0]].map(MultiIndex::new)).unwrap();
/// let b = ShapeEnum::from_nodes([[0, 0], [0, 1]].map(MultiIndex::new)).unwrap();
/// let u = superset(&[&a, &b]);
///
/// assert_eq!(u.n_entries(), 3);
/// assert!(u.contains(&MultiIndex::new([1, 0])));
/// assert!(u.contains(&MultiIndex::new([0, 1])));
/// ```
pub fn superset<const D: usize>(enums: &[&ShapeEnum<D>]) -> ShapeEnum<D> {
    let n_slices = enums.iter().map(|e| e.n_slices()).max().unwrap_or(0);

    let mut limits = MultiIndex::zeros();
    for shape in enums {
        for d in 0..D {
            if shape.limit(d) > limits[d] {
                limits[d] = shape.limit(d);
            }
        }
    }

    let mut slices = Vec::with_capacity(n_slices);
    let mut offset = 0;
    for islice in 0..n_slices {
        let sources: SmallVec<[&[MultiIndex<D>]; 4]> = enums
            .iter()
            .map(|e| e.slice(islice as isize).nodes())
            .filter(|t| !t.is_empty())
            .collect();
        let merged = merge_sorted(&sources);
        let len = merged.len();
        slices.push(ShapeSlice::new(merged, offset));
        offset += len;
    }

    ShapeEnum::from_parts(slices, offset, limits)
}

/// Duplicate-eliminating k-way merge of sorted node tables.
fn merge_sorted<const D: usize>(sources: &[&[MultiIndex<D>]]) -> Vec<MultiIndex<D>> {
    let mut cursors: SmallVec<[(usize, &[MultiIndex<D>]); 4]> =
        sources.iter().map(|t| (0, *t)).collect();
    let capacity = sources.iter().map(|t| t.len()).max().unwrap_or(0);
    let mut merged = Vec::with_capacity(capacity);

    loop {
        let mut next: Option<MultiIndex<D>> = None;
        for (pos, table) in &cursors {
            if let Some(&node) = table.get(*pos) {
                next = Some(match next {
                    Some(best) if best <= node => best,
                    _ => node,
                });
            }
        }
        let Some(node) = next else {
            break;
        };
        merged.push(node);
        // Advance every cursor sitting on the emitted node.
        for (pos, table) in &mut cursors {
            if table.get(*pos) == Some(&node) {
                *pos += 1;
            }
        }
    }

    merged
}
