// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/pvdcore

//! PVD extraction.
//!
//! The decoder replays the encoder's pass read-only: for every pair it
//! recomputes the band and runs the same falling-off-boundary probe the
//! encoder ran. A pair failing the probe was skipped during embedding and
//! contributes nothing; a pair passing it carried exactly
//! `bit_budget(k)` bits, recovered as `|d*| - lower_bound(k)`.
//!
//! The bit-group width is the band's intrinsic budget — the same
//! `floor(log2(width))` the encoder used to draw bits — never a width
//! recomputed from the live pair, so encoder and decoder group lengths
//! always agree.

use super::adjust::fits_in_range;
use super::bits::BitSink;
use super::error::{PvdError, Result};
use super::ranges::RangeTable;

/// Recover up to `secret_len` bytes from a stego sequence.
///
/// Returns fewer bytes when the stream runs out of carrier pairs first; the
/// caller detects that as a length mismatch (or uses [`decode_exact`]).
/// Requesting a length shorter than the embedded payload returns exactly
/// that many bytes, with the bit-group crossing the cut contributing its
/// low bits per the front-trim rule.
pub fn decode(stego: &[u8], secret_len: usize, table: &RangeTable) -> Vec<u8> {
    let target_bits = secret_len * 8;

    let mut sink = BitSink::new();
    let mut block = 0usize;

    while block + 1 < stego.len() && sink.len_bits() < target_bits {
        let g = (stego[block] as i32, stego[block + 1] as i32);
        let d = g.1 - g.0;

        let k = table.band_of(d.unsigned_abs() as u16);
        let n = table.bit_budget(k);

        if n > 0 && fits_in_range(g, d, table.upper_value(k) as i32) {
            let group = (d.unsigned_abs() - table.lower_bound(k) as u32) as u16;

            // The last group may overshoot the requested length; drop the
            // excess from its front (the encoder's final truncated read put
            // the real bits in the low positions).
            let overflow = (sink.len_bits() + n as usize).saturating_sub(target_bits);
            let take = n - overflow as u32;
            sink.write_bits(group & ((1u16 << take) - 1), take);
        }

        block += 2;
    }

    sink.finish()
}

/// Like [`decode`], but a short result is an error instead of a shorter
/// vector.
///
/// # Errors
/// Returns [`PvdError::ShortRecovery`] when the stego stream is exhausted
/// before `secret_len` bytes are recovered.
pub fn decode_exact(stego: &[u8], secret_len: usize, table: &RangeTable) -> Result<Vec<u8>> {
    let out = decode(stego, secret_len, table);
    if out.len() < secret_len {
        return Err(PvdError::ShortRecovery {
            wanted: secret_len,
            got: out.len(),
        });
    }
    Ok(out)
}
