//! One coordinate-sum stratum of a shape enumeration.

use crate::error::ShapeError;
use std::ops::Index;
use swell_core::MultiIndex;

/// The `s`-th slice of a shape enumeration: all nodes whose coordinates
/// sum to `s`, sorted ascending by the [`MultiIndex`] order.
///
/// A slice owns its node table and the `offset` — the number of nodes in
/// all slices with smaller sum, which is also the global ordinal of this
/// slice's first node. Adding the offset to a position returned by
/// [`find`](Self::find) or [`try_find`](Self::try_find) yields the node's
/// global ordinal, the index consumers use into flat coefficient arrays.
///
/// Slices are immutable after construction and only ever built by
/// [`ShapeEnum`](crate::ShapeEnum) construction or the superset merge.
#[derive(Debug, Clone)]
pub struct ShapeSlice<const D: usize> {
    offset: usize,
    table: Vec<MultiIndex<D>>,
}

impl<const D: usize> ShapeSlice<D> {
    /// Build a slice from a sorted, duplicate-free node table.
    ///
    /// Callers (enumeration construction, superset merge) are responsible
    /// for sort order and uniqueness.
    pub(crate) fn new(table: Vec<MultiIndex<D>>, offset: usize) -> Self {
        debug_assert!(table.windows(2).all(|w| w[0] < w[1]));
        Self { offset, table }
    }

    /// An empty slice carrying only an offset. Used for the lower and
    /// upper sentinels of an enumeration.
    pub(crate) fn sentinel(offset: usize) -> Self {
        Self {
            offset,
            table: Vec::new(),
        }
    }

    /// Number of nodes in all slices with smaller coordinate sum.
    ///
    /// Equivalently, the global ordinal of the first node in this slice.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Number of nodes in this slice.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// `true` if the slice holds no nodes.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// The node table, sorted ascending.
    pub fn nodes(&self) -> &[MultiIndex<D>] {
        &self.table
    }

    /// Iterate over the nodes in slice-local order.
    pub fn iter(&self) -> std::slice::Iter<'_, MultiIndex<D>> {
        self.table.iter()
    }

    /// Local position of `node` in this slice, if present.
    ///
    /// Binary search; logarithmic in the slice length. Positions are
    /// 0-based and local — add [`offset`](Self::offset) for the global
    /// ordinal.
    pub fn try_find(&self, node: &MultiIndex<D>) -> Option<usize> {
        self.table.binary_search(node).ok()
    }

    /// Local position of `node`, failing if the slice does not contain it.
    ///
    /// # Errors
    ///
    /// [`ShapeError::NodeNotFound`] if `node` is absent.
    pub fn find(&self, node: &MultiIndex<D>) -> Result<usize, ShapeError> {
        self.try_find(node).ok_or_else(|| ShapeError::NodeNotFound {
            node: node.as_slice().to_vec(),
            sum: node.sum(),
        })
    }

    /// Local positions of all backward neighbours `k - e^d` of a node `k`
    /// belonging to the *next* slice.
    ///
    /// `node` has coordinate sum `s + 1` where `s` is this slice's sum;
    /// its backward neighbours all live here. Axes where `node` has a zero
    /// coordinate have no backward neighbour and yield the sentinel
    /// position 0.
    ///
    /// The search anchors at the highest nonzero axis and walks down to
    /// axis 0, restricting each binary search to the window bounded by the
    /// previous result. This is sound because the node order compares
    /// axis 0 first: decrementing a lower axis always yields a smaller
    /// node, so the positions found are non-decreasing in axis number.
    ///
    /// `node` must be a member of the enumerated shape; calling this with
    /// an outside node returns unspecified positions.
    pub fn find_backward_neighbours(&self, node: &MultiIndex<D>) -> [usize; D] {
        let mut positions = [0usize; D];

        // Highest axis with a nonzero coordinate anchors the window.
        let Some(dlast) = (0..D).rev().find(|&d| node[d] != 0) else {
            return positions;
        };

        let anchor = node.backward(dlast);
        let hi = self.table.partition_point(|k| *k < anchor);
        positions[dlast] = hi;

        let mut lo = 0;
        for d in 0..dlast {
            if node[d] != 0 {
                let neighbour = node.backward(d);
                lo += self.table[lo..hi].partition_point(|k| *k < neighbour);
                positions[d] = lo;
            }
        }

        positions
    }
}

/// Node at a local position. Out-of-range positions are a contract
/// violation and panic, as with any slice index.
impl<const D: usize> Index<usize> for ShapeSlice<D> {
    type Output = MultiIndex<D>;

    fn index(&self, position: usize) -> &MultiIndex<D> {
        &self.table[position]
    }
}

impl<'a, const D: usize> IntoIterator for &'a ShapeSlice<D> {
    type Item = &'a MultiIndex<D>;
    type IntoIter = std::slice::Iter<'a, MultiIndex<D>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Slices are equal iff their node tables are identical. The offset is
/// excluded: it describes the surrounding enumeration, not the slice.
impl<const D: usize> PartialEq for ShapeSlice<D> {
    fn eq(&self, other: &Self) -> bool {
        self.table == other.table
    }
}

impl<const D: usize> Eq for ShapeSlice<D> {}
