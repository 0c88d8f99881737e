//! Basis shape enumeration for the Swell wavepacket simulation library.
//!
//! A basis shape is a bounded set of D-dimensional lattice nodes. This
//! crate materializes a shape as a [`ShapeEnum`]: a canonical, totally
//! ordered enumeration of its nodes, partitioned into [`ShapeSlice`]s by
//! coordinate sum. The enumeration assigns every node a global ordinal —
//! the index consumers use to lay out coefficients and basis values in
//! flat arrays — and resolves the backward neighbours each recursive
//! basis-evaluation formula references.
//!
//! # Slicing
//!
//! Recurrence formulas compute the value at a node `k` from the values at
//! `k - e^1, ..., k - e^D`, all of which have coordinate sum `k.sum() - 1`.
//! Organizing the enumeration into per-sum slices turns one recurrence
//! step into a walk over consecutive slices; sentinel empty slices below
//! and above the real range keep that walk free of boundary cases.
//!
//! Nodes within a slice are sorted, which makes membership lookups binary
//! searches and slice construction from shape set-operations a linear
//! merge — see [`superset()`].
//!
//! # Construction
//!
//! An external shape builder hands [`ShapeEnum::from_slices`] its
//! per-slice node vectors; [`ShapeEnum::from_nodes`] derives the partition
//! from a bare node sequence. Both validate the producer's input once,
//! at construction; the resulting enumeration is immutable and safely
//! shared across threads.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod enumeration;
pub mod error;
pub mod slice;
pub mod superset;

#[cfg(test)]
pub(crate) mod compliance;

pub use enumeration::ShapeEnum;
pub use error::ShapeError;
pub use slice::ShapeSlice;
pub use superset::superset;
