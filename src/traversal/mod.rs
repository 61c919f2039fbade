// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/pvdcore

//! Pure, invertible pixel reorderings.
//!
//! The codec is agnostic to traversal: it only ever sees a flat sequence,
//! and round-tripping requires nothing more than encode and decode agreeing
//! on the same ordering. These helpers produce such orderings and their
//! inverses:
//!
//! - [`serpentine::serpentine_order`]: boustrophedon scan of a row-major
//!   grid, so that horizontally adjacent pixels stay adjacent across row
//!   ends.
//! - [`permute::keyed_order`]: seed-keyed Fisher–Yates permutation, so that
//!   carrier positions are not predictable without the key.
//!
//! An order is a `Vec<usize>` mapping output position to source index;
//! [`apply_order`] gathers by it and [`invert_order`] produces the inverse
//! mapping.

pub mod permute;
pub mod serpentine;

/// Gather `data` into a new vector following `order`:
/// `out[i] = data[order[i]]`.
///
/// `order` must be a permutation of `0..data.len()`.
pub fn apply_order(data: &[u8], order: &[usize]) -> Vec<u8> {
    debug_assert_eq!(data.len(), order.len());
    order.iter().map(|&src| data[src]).collect()
}

/// Invert a permutation: `invert_order(o)[o[i]] == i`.
pub fn invert_order(order: &[usize]) -> Vec<usize> {
    let mut inverse = vec![0usize; order.len()];
    for (dst, &src) in order.iter().enumerate() {
        inverse[src] = dst;
    }
    inverse
}
