// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/pvdcore

//! Framed embed/extract entry points.
//!
//! The convenience layer over the raw codec: [`embed_message`] wraps the
//! payload in the length/CRC frame before embedding, so that
//! [`extract_message`] can recover it without knowing its length in
//! advance. Callers that transmit the length out of band can use
//! [`encode`](super::encode::encode)/[`decode`](super::decode::decode)
//! directly and skip the 6-byte overhead.

use super::capacity::capacity_bytes;
use super::decode::decode;
use super::encode::encode;
use super::error::{PvdError, Result};
use super::frame::{build_frame, parse_frame, FRAME_OVERHEAD};
use super::ranges::RangeTable;

/// Frame `payload` and embed it into `cover`.
///
/// # Errors
/// - [`PvdError::PayloadTooLarge`](super::error::PvdError::PayloadTooLarge)
///   when the payload exceeds the frame's u16 length prefix.
/// - [`PvdError::CoverTooSmall`](super::error::PvdError::CoverTooSmall)
///   when the cover cannot hold the framed payload.
pub fn embed_message(cover: Vec<u8>, payload: &[u8], table: &RangeTable) -> Result<Vec<u8>> {
    let frame = build_frame(payload)?;
    encode(cover, &frame, table)
}

/// Recover a framed payload from a stego sequence.
///
/// Two passes. The first decodes the stream's entire capacity — computed
/// from the stego values, which reproduce the encoder's eligibility
/// decisions — to read the frame's length prefix without any front-trim
/// firing inside it. The second decodes again with the exact frame length,
/// so that the trim on the final bit-group matches the encoder's truncated
/// final read bit for bit. Decoding the frame at any other length would
/// misalign its last byte whenever the frame size is not a multiple of the
/// final pair's bit budget.
///
/// # Errors
/// Returns [`PvdError::FrameCorrupted`](super::error::PvdError::FrameCorrupted)
/// when the stream holds no intact frame (not a stego sequence for this
/// table, or a damaged one).
pub fn extract_message(stego: &[u8], table: &RangeTable) -> Result<Vec<u8>> {
    let recoverable = capacity_bytes(stego, table);
    let header = decode(stego, recoverable, table);
    if header.len() < 2 {
        return Err(PvdError::FrameCorrupted);
    }

    let payload_len = u16::from_be_bytes([header[0], header[1]]) as usize;
    let frame = decode(stego, FRAME_OVERHEAD + payload_len, table);
    parse_frame(&frame)
}
