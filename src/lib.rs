// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/pvdcore

//! # pvd-core
//!
//! Pure-Rust adaptive pixel-value-differencing (Wu–Tsai PVD) steganography
//! codec. Hides a secret byte stream in the intensity differences of adjacent
//! pixel pairs of a grayscale cover sequence, and recovers it from the stego
//! sequence.
//!
//! The codec operates on flat, in-memory `u8` intensity sequences only. Image
//! file parsing/encoding and the choice of pixel traversal order are the
//! caller's responsibility; the `traversal` module provides pure, invertible
//! reorderings (serpentine scan, keyed permutation) for callers that want
//! them, but the codec itself never assumes one. Encode and decode must
//! simply agree on the same ordering.
//!
//! # Quick start
//!
//! ```rust
//! use pvd_core::{embed_message, extract_message, RangeTable};
//!
//! let table = RangeTable::wu_tsai();
//! let cover: Vec<u8> = (0..512).map(|i| (i * 37 % 251) as u8).collect();
//!
//! let stego = embed_message(cover, b"meet at dawn", &table).unwrap();
//! let recovered = extract_message(&stego, &table).unwrap();
//! assert_eq!(recovered, b"meet at dawn");
//! ```
//!
//! The lower-level [`encode`]/[`decode`] pair works on raw secrets without
//! the length/CRC frame, for callers that transmit the secret length out of
//! band.

pub mod pvd;
pub mod traversal;

pub use pvd::error::{PvdError, Result};
pub use pvd::ranges::{RangeTable, WU_TSAI_BANDS};
pub use pvd::{decode, decode_exact, encode};
pub use pvd::capacity::{capacity_bits, capacity_bytes};
pub use pvd::pipeline::{embed_message, extract_message};
pub use pvd::frame::FRAME_OVERHEAD;
