// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/pvdcore

//! Range table: the banded partition of the delta domain.
//!
//! A [`RangeTable`] partitions the absolute-delta domain `[0, 256)` into
//! contiguous bands `[lo, hi)`. A pair whose `|d|` falls in a band of width
//! `w` can carry `floor(log2(w))` secret bits. The table is validated once
//! at construction and immutable afterwards, so it can be shared read-only
//! across any number of concurrent encode/decode calls.

use super::error::{PvdError, Result};

/// The classic Wu–Tsai band partition: widths 8, 8, 16, 32, 64, 128.
///
/// Small deltas (smooth image regions) carry 3 bits per pair; the widest
/// band (strong edges) carries 7.
pub const WU_TSAI_BANDS: [(u16, u16); 6] =
    [(0, 8), (8, 16), (16, 32), (32, 64), (64, 128), (128, 256)];

/// A single band `[lo, hi)` of the delta domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Band {
    lo: u16,
    hi: u16,
}

/// Validated, immutable partition of `[0, 256)` into contiguous delta bands.
#[derive(Debug, Clone)]
pub struct RangeTable {
    bands: Vec<Band>,
}

impl RangeTable {
    /// Build a table from `(lo, hi)` half-open intervals, ordered by `lo`.
    ///
    /// # Errors
    /// Returns [`PvdError::InvalidTable`] unless the bands are non-empty,
    /// start at 0, are contiguous (no gap or overlap), and their widths sum
    /// to exactly 256.
    pub fn new(bands: &[(u16, u16)]) -> Result<Self> {
        if bands.is_empty() {
            return Err(PvdError::InvalidTable("no bands"));
        }
        if bands[0].0 != 0 {
            return Err(PvdError::InvalidTable("first band must start at 0"));
        }
        let mut expected_lo = 0u16;
        for &(lo, hi) in bands {
            if lo != expected_lo {
                return Err(PvdError::InvalidTable("bands must be contiguous"));
            }
            if hi <= lo {
                return Err(PvdError::InvalidTable("band is empty or inverted"));
            }
            expected_lo = hi;
        }
        // Contiguity from 0 makes the width sum equal to the last hi.
        if expected_lo != 256 {
            return Err(PvdError::InvalidTable("band widths must sum to 256"));
        }
        Ok(Self {
            bands: bands.iter().map(|&(lo, hi)| Band { lo, hi }).collect(),
        })
    }

    /// The classic Wu–Tsai table ([`WU_TSAI_BANDS`]).
    pub fn wu_tsai() -> Self {
        // The constant satisfies the invariant; new() cannot fail on it.
        match Self::new(&WU_TSAI_BANDS) {
            Ok(t) => t,
            Err(_) => unreachable!("WU_TSAI_BANDS is a valid partition of [0,256)"),
        }
    }

    /// Number of bands.
    pub fn len(&self) -> usize {
        self.bands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bands.is_empty()
    }

    /// Index of the band containing `abs_delta`.
    ///
    /// `abs_delta` is at most 255 for any pixel pair, and a validated table
    /// covers all of `[0, 256)`, so the lookup always succeeds.
    pub fn band_of(&self, abs_delta: u16) -> usize {
        debug_assert!(abs_delta < 256);
        for (k, b) in self.bands.iter().enumerate() {
            if abs_delta >= b.lo && abs_delta < b.hi {
                return k;
            }
        }
        unreachable!("validated table covers [0,256)")
    }

    /// Width `hi - lo` of band `k`.
    pub fn width(&self, k: usize) -> u16 {
        self.bands[k].hi - self.bands[k].lo
    }

    /// Lowest delta magnitude of band `k`.
    pub fn lower_bound(&self, k: usize) -> u16 {
        self.bands[k].lo
    }

    /// Highest representable delta magnitude of band `k` (`hi - 1`).
    pub fn upper_value(&self, k: usize) -> u16 {
        self.bands[k].hi - 1
    }

    /// Number of secret bits a pair in band `k` can carry:
    /// `floor(log2(width))`. Zero for a width-1 band — such pairs are
    /// skipped by both the encoder and the decoder.
    pub fn bit_budget(&self, k: usize) -> u32 {
        let w = self.width(k) as u32;
        31 - w.leading_zeros()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wu_tsai_is_valid() {
        let t = RangeTable::wu_tsai();
        assert_eq!(t.len(), 6);
        let widths: u32 = (0..t.len()).map(|k| t.width(k) as u32).sum();
        assert_eq!(widths, 256);
    }

    #[test]
    fn sum_255_rejected() {
        // The original PoC's table: widths 1,2,4,8,16,32,64,128 = 255.
        let bands = [
            (0, 1),
            (1, 3),
            (3, 7),
            (7, 15),
            (15, 31),
            (31, 63),
            (63, 127),
            (127, 255),
        ];
        assert_eq!(
            RangeTable::new(&bands).unwrap_err(),
            PvdError::InvalidTable("band widths must sum to 256")
        );
    }

    #[test]
    fn sum_257_rejected() {
        let bands = [(0, 128), (128, 257)];
        assert!(RangeTable::new(&bands).is_err());
    }

    #[test]
    fn gap_rejected() {
        let bands = [(0, 8), (9, 256)];
        assert_eq!(
            RangeTable::new(&bands).unwrap_err(),
            PvdError::InvalidTable("bands must be contiguous")
        );
    }

    #[test]
    fn overlap_rejected() {
        let bands = [(0, 16), (8, 256)];
        assert!(RangeTable::new(&bands).is_err());
    }

    #[test]
    fn nonzero_start_rejected() {
        let bands = [(1, 256)];
        assert!(RangeTable::new(&bands).is_err());
    }

    #[test]
    fn empty_band_rejected() {
        let bands = [(0, 0), (0, 256)];
        assert!(RangeTable::new(&bands).is_err());
    }

    #[test]
    fn empty_table_rejected() {
        assert!(RangeTable::new(&[]).is_err());
    }

    #[test]
    fn band_lookup() {
        let t = RangeTable::wu_tsai();
        assert_eq!(t.band_of(0), 0);
        assert_eq!(t.band_of(7), 0);
        assert_eq!(t.band_of(8), 1);
        assert_eq!(t.band_of(30), 2);
        assert_eq!(t.band_of(255), 5);
    }

    #[test]
    fn bounds_and_budgets() {
        let t = RangeTable::wu_tsai();
        assert_eq!(t.lower_bound(2), 16);
        assert_eq!(t.upper_value(2), 31);
        assert_eq!(t.width(2), 16);
        assert_eq!(t.bit_budget(0), 3);
        assert_eq!(t.bit_budget(2), 4);
        assert_eq!(t.bit_budget(5), 7);
    }

    #[test]
    fn width_one_band_has_zero_budget() {
        let t = RangeTable::new(&[(0, 1), (1, 256)]).unwrap();
        assert_eq!(t.bit_budget(0), 0);
        // Non-power-of-two width: floor(log2(255)) = 7.
        assert_eq!(t.bit_budget(1), 7);
    }
}
