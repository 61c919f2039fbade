// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/pvdcore

//! Embedding capacity computation.
//!
//! Unlike cost-based schemes, PVD capacity is exact rather than an
//! estimate: a pair's eligibility depends only on its *original* values,
//! pairs never overlap, and the encoder fills every eligible pair in order.
//! The capacity of a cover is therefore the sum of the bit budgets of its
//! eligible pairs, and `encode` succeeds iff `8 * secret_len` fits in it.

use super::adjust::fits_in_range;
use super::ranges::RangeTable;

/// Exact number of secret bits the cover sequence can carry.
pub fn capacity_bits(cover: &[u8], table: &RangeTable) -> usize {
    let mut bits = 0usize;
    let mut block = 0usize;

    while block + 1 < cover.len() {
        let g = (cover[block] as i32, cover[block + 1] as i32);
        let d = g.1 - g.0;

        let k = table.band_of(d.unsigned_abs() as u16);
        let n = table.bit_budget(k);

        if n > 0 && fits_in_range(g, d, table.upper_value(k) as i32) {
            bits += n as usize;
        }

        block += 2;
    }

    bits
}

/// Whole bytes the cover sequence can carry.
pub fn capacity_bytes(cover: &[u8], table: &RangeTable) -> usize {
    capacity_bits(cover, table) / 8
}
