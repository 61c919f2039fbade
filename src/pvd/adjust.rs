// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/pvdcore

//! Pixel-pair adjustment arithmetic and the falling-off-boundary probe.
//!
//! [`inv_calc`] realizes a delta adjustment `m` by splitting it between the
//! two pixels of a pair, with a floor/ceil split biased by the parity of the
//! pair's current delta `d`. The split is exactly what makes the transform
//! composable: adjusting by `a + b` in one step equals adjusting by `a`
//! then `b`, with the parity re-derived from the intermediate delta. The
//! encoder depends on that to land on the exact target delta, the decoder
//! to reproduce the encoder's eligibility decisions.
//!
//! [`fits_in_range`] is the eligibility gate: it probes, without committing,
//! whether pushing the pair's delta to its band's upper edge would keep both
//! pixels inside `0..=255`. Encode and decode share this one predicate; any
//! divergence between the two sides breaks round-tripping for pairs near
//! the intensity limits.

/// Split the adjustment `m` between the two pixels of a pair.
///
/// `d` is the pair's current signed delta; only its parity matters.
/// Arithmetic is over `i32` because intermediate values may leave `[0,255]`
/// — that is exactly what the boundary probe checks for.
pub fn inv_calc(g: (i32, i32), m: i32, d: i32) -> (i32, i32) {
    // Mathematical floor/ceil halves, not truncating division:
    // m = -5 splits into -3 and -2.
    let half_floor = m.div_euclid(2);
    let half_ceil = m - half_floor;

    if d % 2 == 0 {
        (g.0 - half_floor, g.1 + half_ceil)
    } else {
        (g.0 - half_ceil, g.1 + half_floor)
    }
}

/// Falling-off-boundary probe: would pushing the pair's delta to
/// `upper_value` (the band's highest magnitude) keep both pixels inside
/// `0..=255`?
///
/// `d` is the pair's current signed delta and `upper_value` the band's
/// `hi - 1`. The probe never mutates the real pair. The predicate is
/// inclusive at both ends on both the encode and decode paths; this is a
/// contract (see `boundary_predicate_includes_zero` below and the
/// round-trip tests with pixel value 0).
pub fn fits_in_range(g: (i32, i32), d: i32, upper_value: i32) -> bool {
    let (h1, h2) = inv_calc(g, upper_value - d, d);
    (0..=255).contains(&h1) && (0..=255).contains(&h2)
}
