// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/pvdcore

//! Bit-level access to the secret stream.
//!
//! [`take_bits`] is the read side: a pure function over
//! `(secret, bit_pos, count)` in MSB-first bit order, crossing at most one
//! byte boundary (`count <= 16`). The cursor position is plain caller state
//! threaded between calls; there is no reader object.
//!
//! [`BitSink`] is the write side used during extraction: it packs recovered
//! bit-groups back into bytes, MSB-first.

/// Read `count` bits (0–16) starting at absolute bit offset `bit_pos`,
/// right-aligned in the result.
///
/// Bytes are treated MSB-first. When the read straddles into the following
/// byte, that byte is appended to the window; when `bit_pos` falls in the
/// final byte there is no follow byte, and a request running past the end
/// returns only the bits that exist (right-truncated). The encoder relies on
/// that truncation only for the very last bit-group of the secret, where the
/// decoder's front-trim rule restores the exact bits.
pub fn take_bits(secret: &[u8], bit_pos: usize, count: u32) -> u16 {
    debug_assert!(count <= 16);
    if count == 0 {
        return 0;
    }

    let byte_idx = bit_pos / 8;
    let offset = (bit_pos % 8) as u32;
    debug_assert!(byte_idx < secret.len(), "bit cursor past end of secret");

    // 16-bit window: current byte plus the follow byte when one exists.
    let (window, window_bits) = if byte_idx + 1 < secret.len() {
        (
            ((secret[byte_idx] as u32) << 8) | secret[byte_idx + 1] as u32,
            16,
        )
    } else {
        (secret[byte_idx] as u32, 8)
    };

    let avail = window_bits - offset;
    let take = count.min(avail);
    ((window >> (window_bits - offset - take)) & ((1u32 << take) - 1)) as u16
}

/// MSB-first bit accumulator that packs written bit-groups into bytes.
pub struct BitSink {
    output: Vec<u8>,
    buf: u8,
    bits_used: u32,
}

impl BitSink {
    pub fn new() -> Self {
        Self {
            output: Vec::new(),
            buf: 0,
            bits_used: 0,
        }
    }

    /// Write `count` bits (0–16) from the low bits of `value`, MSB-first.
    pub fn write_bits(&mut self, value: u16, count: u32) {
        debug_assert!(count <= 16);
        for i in (0..count).rev() {
            let bit = (value >> i) & 1;
            self.buf = (self.buf << 1) | bit as u8;
            self.bits_used += 1;
            if self.bits_used == 8 {
                self.output.push(self.buf);
                self.buf = 0;
                self.bits_used = 0;
            }
        }
    }

    /// Total bits written so far.
    pub fn len_bits(&self) -> usize {
        self.output.len() * 8 + self.bits_used as usize
    }

    /// Flush into bytes. A trailing partial group (possible only on short
    /// recovery) is emitted right-aligned in the final byte.
    pub fn finish(mut self) -> Vec<u8> {
        if self.bits_used > 0 {
            self.output.push(self.buf);
        }
        self.output
    }
}

impl Default for BitSink {
    fn default() -> Self {
        Self::new()
    }
}
