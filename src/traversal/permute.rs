// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/pvdcore

//! Keyed pixel-order permutation.
//!
//! Applies a Fisher–Yates shuffle to the traversal order using a ChaCha20
//! PRNG seeded from a caller-supplied 32-byte key. Encoder and decoder
//! derive the identical order from the same seed, so carrier positions are
//! scattered across the image rather than clustered at its start.
//!
//! # Cross-platform portability
//!
//! The shuffle draws `u32` ranges (not `usize`): `usize` is 32-bit on WASM
//! but 64-bit on native, which makes `gen_range` consume different amounts
//! of PRNG entropy per step and would produce a different order per
//! platform for the same seed.

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

/// Seed-keyed permutation of `0..len`.
pub fn keyed_order(len: usize, seed: &[u8; 32]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..len).collect();
    let mut rng = ChaCha20Rng::from_seed(*seed);
    for i in (1..len).rev() {
        let j = rng.gen_range(0..=(i as u32)) as usize;
        order.swap(i, j);
    }
    order
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traversal::{apply_order, invert_order};

    #[test]
    fn deterministic_for_seed() {
        let a = keyed_order(100, &[42u8; 32]);
        let b = keyed_order(100, &[42u8; 32]);
        assert_eq!(a, b);
    }

    #[test]
    fn different_seeds_differ() {
        let a = keyed_order(100, &[1u8; 32]);
        let b = keyed_order(100, &[2u8; 32]);
        assert_ne!(a, b);
    }

    #[test]
    fn is_a_permutation() {
        let mut order = keyed_order(257, &[7u8; 32]);
        order.sort_unstable();
        assert!(order.iter().copied().eq(0..257));
    }

    #[test]
    fn degenerate_lengths() {
        assert!(keyed_order(0, &[0u8; 32]).is_empty());
        assert_eq!(keyed_order(1, &[0u8; 32]), vec![0]);
    }

    #[test]
    fn shuffle_round_trip() {
        let data: Vec<u8> = (0..=255).collect();
        let order = keyed_order(data.len(), &[99u8; 32]);
        let shuffled = apply_order(&data, &order);
        assert_ne!(shuffled, data);
        let restored = apply_order(&shuffled, &invert_order(&order));
        assert_eq!(restored, data);
    }
}
