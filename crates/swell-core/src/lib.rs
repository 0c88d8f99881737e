//! Core index types for the Swell wavepacket simulation library.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! [`MultiIndex`], the D-dimensional lattice node type that basis shapes,
//! coefficient layouts, and recurrence formulas are expressed over.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod index;

pub use index::MultiIndex;
