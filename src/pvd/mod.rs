// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/pvdcore

//! The PVD embedding/extraction engine.
//!
//! A cover sequence is processed as non-overlapping pairs of adjacent
//! intensities. Each pair's signed delta `d = g2 - g1` falls into a band of
//! the [`RangeTable`](ranges::RangeTable); the band's width determines how
//! many secret bits the pair can carry, and the secret bits are encoded by
//! moving `|d|` to a new position inside the same band. The adjustment is
//! split between the two pixels by [`adjust::inv_calc`], and a pair is only
//! used when the falling-off-boundary probe ([`adjust::fits_in_range`])
//! shows that the worst-case in-band adjustment keeps both pixels inside
//! `0..=255`. The decoder runs the identical probe to tell carrier pairs
//! from skipped ones without any side channel.

pub mod error;
pub mod ranges;
pub mod bits;
pub mod adjust;
pub mod encode;
pub mod decode;
pub mod capacity;
pub mod frame;
pub mod pipeline;

pub use encode::encode;
pub use decode::{decode, decode_exact};
