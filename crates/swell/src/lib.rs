//! Swell: a simulation library core for semiclassical wavepacket dynamics.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the Swell sub-crates. For most users, adding `swell` as a single
//! dependency is sufficient.
//!
//! The heart of the library is the *shape enumeration*: a canonical,
//! totally ordered materialization of a bounded set of D-dimensional
//! lattice nodes, partitioned into slices by coordinate sum. Recursive
//! basis-evaluation formulas reference the values at a node's backward
//! neighbours, and every flat per-node array (coefficients, basis values)
//! is indexed by the enumeration's ordinals.
//!
//! # Quick start
//!
//! Walk slices in order, resolving backward neighbours against the
//! previous slice, and keep per-node data in one flat array:
//!
//! ```rust
//! use swell::prelude::*;
//!
//! // All 2D nodes with coordinate sum <= 3.
//! let mut nodes = Vec::new();
//! for a in 0u32..=3 {
//!     for b in 0..=(3 - a) {
//!         nodes.push(MultiIndex::new([a, b]));
//!     }
//! }
//! let shape = ShapeEnum::from_nodes(nodes).unwrap();
//!
//! // One value per node, indexed by global ordinal. Count the axis paths
//! // from the origin to each node with the usual backward recurrence.
//! let mut paths = vec![0u64; shape.n_entries()];
//! paths[0] = 1;
//! for s in 1..shape.n_slices() {
//!     let slice = shape.slice(s as isize);
//!     let prev = shape.slice(s as isize - 1);
//!     for (i, node) in slice.iter().enumerate() {
//!         let neighbours = prev.find_backward_neighbours(node);
//!         let mut total = 0;
//!         for d in 0..2 {
//!             if node[d] > 0 {
//!                 total += paths[prev.offset() + neighbours[d]];
//!             }
//!         }
//!         paths[slice.offset() + i] = total;
//!     }
//! }
//!
//! // Two axis paths lead to (1, 1); the recurrence found both.
//! let ordinal = shape.ordinal(&MultiIndex::new([1, 1])).unwrap();
//! assert_eq!(paths[ordinal], 2);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for items not in the
//! prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `swell-core` | The [`types::MultiIndex`] lattice node type |
//! | [`shapes`] | `swell-shapes` | Shape enumeration, slices, superset merge, errors |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core index types (`swell-core`).
///
/// Contains [`types::MultiIndex`], the D-dimensional lattice node every
/// shape and coefficient layout is expressed over.
pub use swell_core as types;

/// Basis shape enumeration (`swell-shapes`).
///
/// Provides [`shapes::ShapeEnum`] and [`shapes::ShapeSlice`], the
/// [`shapes::superset()`] merge, and [`shapes::ShapeError`].
pub use swell_shapes as shapes;

/// Common imports for typical Swell usage.
///
/// ```rust
/// use swell::prelude::*;
/// ```
pub mod prelude {
    // Lattice nodes
    pub use swell_core::MultiIndex;

    // Shape enumeration
    pub use swell_shapes::{superset, ShapeEnum, ShapeError, ShapeSlice};
}
