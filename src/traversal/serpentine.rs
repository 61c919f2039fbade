// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/pvdcore

//! Serpentine (boustrophedon) scan order for row-major pixel grids.
//!
//! Even rows are read left to right, odd rows right to left. Unlike a plain
//! raster scan, the last pixel of one row and the first pixel of the next
//! are spatially adjacent, so pair deltas at row boundaries stay small in
//! natural images — small deltas fall in narrow bands, which is where PVD
//! distortion is least visible.

/// Scan order for a `width × height` row-major grid: even rows left→right,
/// odd rows right→left.
pub fn serpentine_order(width: usize, height: usize) -> Vec<usize> {
    let mut order = Vec::with_capacity(width * height);
    for row in 0..height {
        let base = row * width;
        if row % 2 == 0 {
            order.extend(base..base + width);
        } else {
            order.extend((base..base + width).rev());
        }
    }
    order
}
