//! Benchmark profiles for the Swell shape enumeration core.
//!
//! Provides deterministic shape fixtures shared by the criterion benches:
//!
//! - [`hypercube`]: the full box `[0, limit]^D`
//! - [`hyperbolic_cut`]: box nodes with `prod(1 + k_d) <= cut`, the
//!   sparse shape family realistic wavepacket bases use in higher
//!   dimensions

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use swell_core::MultiIndex;
use swell_shapes::ShapeEnum;

/// All nodes of the box `[0, limit]^D`, in odometer order.
pub fn box_nodes<const D: usize>(limit: u32) -> Vec<MultiIndex<D>> {
    let mut nodes = Vec::new();
    let mut current = [0u32; D];
    'outer: loop {
        nodes.push(MultiIndex::new(current));
        for d in 0..D {
            if current[d] < limit {
                current[d] += 1;
                continue 'outer;
            }
            current[d] = 0;
        }
        break;
    }
    nodes
}

/// The full hypercube shape `[0, limit]^D`.
pub fn hypercube<const D: usize>(limit: u32) -> ShapeEnum<D> {
    ShapeEnum::from_nodes(box_nodes(limit)).unwrap()
}

/// A hyperbolic-cut shape: box nodes satisfying `prod(1 + k_d) <= cut`.
///
/// Keeps the low-order corner of the lattice dense and the mixed
/// high-order region sparse, matching the basis shapes used for
/// higher-dimensional wavepackets.
pub fn hyperbolic_cut<const D: usize>(limit: u32, cut: u64) -> ShapeEnum<D> {
    let nodes = box_nodes::<D>(limit)
        .into_iter()
        .filter(|k| {
            k.as_slice()
                .iter()
                .map(|&c| u64::from(c) + 1)
                .product::<u64>()
                <= cut
        })
        .collect::<Vec<_>>();
    ShapeEnum::from_nodes(nodes).unwrap()
}
