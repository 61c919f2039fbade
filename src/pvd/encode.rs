// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/pvdcore

//! PVD embedding.
//!
//! A single deterministic pass over the cover sequence, two pixels at a
//! time. Each eligible pair absorbs `bit_budget(k)` secret bits by moving
//! its delta magnitude to `lower_bound(k) + bits` inside its band; pairs
//! failing the falling-off-boundary probe are left untouched and consume no
//! secret bits, which is what lets the decoder skip them symmetrically.

use super::adjust::{fits_in_range, inv_calc};
use super::bits::take_bits;
use super::error::{PvdError, Result};
use super::ranges::RangeTable;

/// Embed `secret` into `cover`, returning the stego sequence.
///
/// The cover is taken by value and mutated in place; pairs are the
/// non-overlapping `(cover[2i], cover[2i+1])`. The pass stops as soon as all
/// secret bits are embedded, leaving the remainder of the cover untouched.
///
/// # Errors
/// Returns [`PvdError::CoverTooSmall`] if the pairs run out before the whole
/// secret is embedded. The partially written buffer is dropped, never
/// returned: a silently truncated secret would be indistinguishable from a
/// complete one on the decode side.
pub fn encode(mut cover: Vec<u8>, secret: &[u8], table: &RangeTable) -> Result<Vec<u8>> {
    let total_bits = secret.len() * 8;

    let mut block = 0usize;
    let mut bit_pos = 0usize;

    while block + 1 < cover.len() && bit_pos < total_bits {
        let g = (cover[block] as i32, cover[block + 1] as i32);
        let d = g.1 - g.0;

        let k = table.band_of(d.unsigned_abs() as u16);
        let n = table.bit_budget(k);

        // A width-1 band fits no bits; the pair still consumes two slots.
        if n > 0 && fits_in_range(g, d, table.upper_value(k) as i32) {
            let v = take_bits(secret, bit_pos, n) as i32;

            // Target delta: the band floor plus the secret bits, keeping
            // the original delta's sign.
            let mut d_new = table.lower_bound(k) as i32 + v;
            if d < 0 {
                d_new = -d_new;
            }

            let (g1, g2) = inv_calc(g, d_new - d, d);
            debug_assert!((0..=255).contains(&g1) && (0..=255).contains(&g2));
            cover[block] = g1 as u8;
            cover[block + 1] = g2 as u8;

            bit_pos += n as usize;
        }

        block += 2;
    }

    if bit_pos < total_bits {
        return Err(PvdError::CoverTooSmall);
    }
    Ok(cover)
}
