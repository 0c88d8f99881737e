//! The complete, ordered enumeration of a basis shape.

use crate::error::ShapeError;
use crate::slice::ShapeSlice;
use swell_core::MultiIndex;

/// A complete, ordered enumeration of all lattice nodes in a basis shape,
/// partitioned into [`ShapeSlice`]s by coordinate sum.
///
/// A shape description only answers membership queries, but the library
/// must associate coefficients and basis values with nodes. The
/// enumeration assigns every node a global *ordinal* so that per-node data
/// lives in flat arrays: the ordinal of node `k` is
/// `slice(k.sum()).offset() + slice(k.sum()).find(&k)`, packaged as
/// [`ordinal`](Self::ordinal).
///
/// Recursive evaluation formulas compute a value at node `k` from the
/// values at its backward neighbours `k - e^d`, which all live in the
/// previous slice. [`slice`](Self::slice) therefore accepts out-of-range
/// slice indices and returns empty sentinel slices, so recurrence code can
/// ask for `slice(s - 1)` without boundary cases.
///
/// An enumeration is constructed once, atomically, and is immutable
/// afterwards; it is shared read-only (`&ShapeEnum` or `Arc<ShapeEnum>`)
/// across concurrent readers for the lifetime of a simulation. Changing
/// the shape means constructing a new enumeration.
///
/// # Examples
///
/// ```
/// use swell_core::MultiIndex;
/// use swell_shapes::ShapeEnum;
///
/// // All 2D nodes with coordinate sum <= 2.
/// let nodes = [[0, 0], [1, 0], [0, 1], [2, 0], [1, 1], [0, 2]];
/// let shape = ShapeEnum::from_nodes(nodes.map(MultiIndex::new)).unwrap();
///
/// assert_eq!(shape.n_entries(), 6);
/// assert_eq!(shape.n_slices(), 3);
/// assert_eq!(shape.at(4).unwrap(), MultiIndex::new([1, 1]));
/// assert_eq!(shape.ordinal(&MultiIndex::new([1, 1])).unwrap(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct ShapeEnum<const D: usize> {
    slices: Vec<ShapeSlice<D>>,
    lower: ShapeSlice<D>,
    upper: ShapeSlice<D>,
    n_entries: usize,
    limits: MultiIndex<D>,
}

impl<const D: usize> ShapeEnum<D> {
    /// Build an enumeration from per-slice node vectors.
    ///
    /// This is the producer boundary: `tables[s]` holds the nodes of
    /// coordinate sum `s`, in any order; `n_entries` is the total node
    /// count and `limits` the componentwise maximum over all nodes, both
    /// as declared by the producer. Each table is sorted here; offsets and
    /// sentinels are derived.
    ///
    /// # Errors
    ///
    /// - [`ShapeError::MisplacedNode`] if a node's coordinate sum differs
    ///   from its slice index.
    /// - [`ShapeError::DuplicateNode`] if a slice contains a node twice.
    /// - [`ShapeError::EntryCountMismatch`] if `n_entries` disagrees with
    ///   the slice contents.
    pub fn from_slices(
        mut tables: Vec<Vec<MultiIndex<D>>>,
        n_entries: usize,
        limits: MultiIndex<D>,
    ) -> Result<Self, ShapeError> {
        let mut actual = 0usize;
        for (islice, table) in tables.iter_mut().enumerate() {
            table.sort_unstable();
            for node in table.iter() {
                if node.sum() as usize != islice {
                    return Err(ShapeError::MisplacedNode {
                        node: node.as_slice().to_vec(),
                        islice,
                    });
                }
            }
            if let Some(w) = table.windows(2).find(|w| w[0] == w[1]) {
                return Err(ShapeError::DuplicateNode {
                    node: w[0].as_slice().to_vec(),
                    islice,
                });
            }
            actual += table.len();
        }
        if actual != n_entries {
            return Err(ShapeError::EntryCountMismatch {
                declared: n_entries,
                actual,
            });
        }

        let mut slices = Vec::with_capacity(tables.len());
        let mut offset = 0;
        for table in tables {
            let len = table.len();
            slices.push(ShapeSlice::new(table, offset));
            offset += len;
        }

        Ok(Self::from_parts(slices, n_entries, limits))
    }

    /// Assemble an enumeration from already-sorted, contiguous slices.
    ///
    /// Invariants (sorted tables, correct offsets, matching entry count)
    /// are the caller's responsibility; used by construction and by the
    /// superset merge.
    pub(crate) fn from_parts(
        slices: Vec<ShapeSlice<D>>,
        n_entries: usize,
        limits: MultiIndex<D>,
    ) -> Self {
        debug_assert_eq!(
            slices.iter().map(ShapeSlice::len).sum::<usize>(),
            n_entries
        );
        Self {
            slices,
            lower: ShapeSlice::sentinel(0),
            upper: ShapeSlice::sentinel(n_entries),
            n_entries,
            limits,
        }
    }

    /// Build an enumeration from an arbitrary node sequence, deriving the
    /// slice partition, entry count, and limits.
    ///
    /// Convenience for producers (and tests) that hold nodes in no
    /// particular order.
    ///
    /// # Errors
    ///
    /// [`ShapeError::DuplicateNode`] if the sequence repeats a node.
    pub fn from_nodes(
        nodes: impl IntoIterator<Item = MultiIndex<D>>,
    ) -> Result<Self, ShapeError> {
        let mut tables: Vec<Vec<MultiIndex<D>>> = Vec::new();
        let mut limits = MultiIndex::zeros();
        let mut count = 0usize;
        for node in nodes {
            let sum = node.sum() as usize;
            if tables.len() <= sum {
                tables.resize_with(sum + 1, Vec::new);
            }
            tables[sum].push(node);
            for d in 0..D {
                if node[d] > limits[d] {
                    limits[d] = node[d];
                }
            }
            count += 1;
        }
        Self::from_slices(tables, count, limits)
    }

    /// The slice of coordinate sum `islice`.
    ///
    /// Total: a negative index returns the lower sentinel (empty, offset
    /// 0) and an index at or beyond [`n_slices`](Self::n_slices) returns
    /// the upper sentinel (empty, offset [`n_entries`](Self::n_entries)),
    /// so recurrence code can query `slice(s - 1)` and consumers can walk
    /// past the last slice without boundary checks.
    pub fn slice(&self, islice: isize) -> &ShapeSlice<D> {
        if islice < 0 {
            &self.lower
        } else if islice as usize >= self.slices.len() {
            &self.upper
        } else {
            &self.slices[islice as usize]
        }
    }

    /// All real slices, in increasing coordinate-sum order.
    pub fn slices(&self) -> &[ShapeSlice<D>] {
        &self.slices
    }

    /// The node with the given global ordinal.
    ///
    /// Scans the slices accumulating offsets; linear in the slice count,
    /// which is small next to the entry count for realistic shapes.
    ///
    /// # Errors
    ///
    /// [`ShapeError::OrdinalOutOfRange`] if `ordinal >= n_entries()`.
    pub fn at(&self, ordinal: usize) -> Result<MultiIndex<D>, ShapeError> {
        for slice in &self.slices {
            if slice.offset() + slice.len() > ordinal {
                return Ok(slice[ordinal - slice.offset()]);
            }
        }
        Err(ShapeError::OrdinalOutOfRange {
            ordinal,
            n_entries: self.n_entries,
        })
    }

    /// The global ordinal of `node`: its slice's offset plus its local
    /// position.
    ///
    /// # Errors
    ///
    /// [`ShapeError::NodeNotFound`] if the shape does not contain `node`.
    pub fn ordinal(&self, node: &MultiIndex<D>) -> Result<usize, ShapeError> {
        let slice = self.slice(node.sum() as isize);
        Ok(slice.offset() + slice.find(node)?)
    }

    /// `true` if the shape contains `node`.
    pub fn contains(&self, node: &MultiIndex<D>) -> bool {
        self.slice(node.sum() as isize).try_find(node).is_some()
    }

    /// Iterate over all nodes in global ordinal order.
    pub fn iter(&self) -> impl Iterator<Item = &MultiIndex<D>> {
        self.slices.iter().flat_map(|s| s.iter())
    }

    /// Total number of nodes.
    pub fn n_entries(&self) -> usize {
        self.n_entries
    }

    /// Number of slices.
    pub fn n_slices(&self) -> usize {
        self.slices.len()
    }

    /// The minimum bounding box: componentwise maximum over all nodes.
    pub fn limits(&self) -> MultiIndex<D> {
        self.limits
    }

    /// The bounding-box extent along one axis.
    pub fn limit(&self, axis: usize) -> u32 {
        self.limits[axis]
    }
}

/// Enumerations are equal iff their entry counts match and every
/// corresponding slice pair is equal. Comparison saturates into the
/// sentinel slices, so trailing empty slices do not break equality.
impl<const D: usize> PartialEq for ShapeEnum<D> {
    fn eq(&self, other: &Self) -> bool {
        if self.n_entries != other.n_entries {
            return false;
        }
        let n = self.slices.len().max(other.slices.len());
        (0..n).all(|i| self.slice(i as isize) == other.slice(i as isize))
    }
}

impl<const D: usize> Eq for ShapeEnum<D> {}
