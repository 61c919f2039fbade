// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/pvdcore

//! Payload frame construction and parsing.
//!
//! The raw codec needs the secret length transmitted out of band. The frame
//! wraps the payload in a self-describing container so that
//! [`extract_message`](super::pipeline::extract_message) needs nothing but
//! the stego sequence and the table:
//!
//! ```text
//! [2 bytes] payload length (big-endian u16)
//! [N bytes] payload
//! [4 bytes] CRC-32 of everything above
//! ```
//!
//! Total frame size = 6 + payload_len bytes.

use super::error::{PvdError, Result};

/// Fixed overhead: length(2) + crc(4) = 6 bytes.
pub const FRAME_OVERHEAD: usize = 2 + 4;

/// Maximum payload length representable by the u16 length prefix.
pub const MAX_PAYLOAD_BYTES: usize = u16::MAX as usize;

/// Build a frame around `payload`.
///
/// # Errors
/// Returns [`PvdError::PayloadTooLarge`] when the payload exceeds the
/// 2-byte length prefix (65,535 bytes).
pub fn build_frame(payload: &[u8]) -> Result<Vec<u8>> {
    if payload.len() > MAX_PAYLOAD_BYTES {
        return Err(PvdError::PayloadTooLarge);
    }

    let mut frame = Vec::with_capacity(FRAME_OVERHEAD + payload.len());
    frame.extend_from_slice(&(payload.len() as u16).to_be_bytes());
    frame.extend_from_slice(payload);

    let crc = crc32fast::hash(&frame);
    frame.extend_from_slice(&crc.to_be_bytes());

    Ok(frame)
}

/// Parse a frame from the front of `bytes`, returning the payload.
///
/// Trailing bytes beyond the frame are ignored; the decoder recovers the
/// full capacity of the stego stream, which usually extends past the frame.
///
/// # Errors
/// Returns [`PvdError::FrameCorrupted`] when `bytes` is too short for the
/// declared length or the CRC does not match.
pub fn parse_frame(bytes: &[u8]) -> Result<Vec<u8>> {
    if bytes.len() < FRAME_OVERHEAD {
        return Err(PvdError::FrameCorrupted);
    }

    let payload_len = u16::from_be_bytes([bytes[0], bytes[1]]) as usize;
    let crc_at = 2 + payload_len;
    if bytes.len() < crc_at + 4 {
        return Err(PvdError::FrameCorrupted);
    }

    let expected = u32::from_be_bytes([
        bytes[crc_at],
        bytes[crc_at + 1],
        bytes[crc_at + 2],
        bytes[crc_at + 3],
    ]);
    if crc32fast::hash(&bytes[..crc_at]) != expected {
        return Err(PvdError::FrameCorrupted);
    }

    Ok(bytes[2..crc_at].to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip() {
        let frame = build_frame(b"hello").unwrap();
        assert_eq!(frame.len(), 6 + 5);
        assert_eq!(parse_frame(&frame).unwrap(), b"hello");
    }

    #[test]
    fn empty_payload() {
        let frame = build_frame(b"").unwrap();
        assert_eq!(frame.len(), FRAME_OVERHEAD);
        assert_eq!(parse_frame(&frame).unwrap(), b"");
    }

    #[test]
    fn trailing_bytes_ignored() {
        let mut frame = build_frame(b"payload").unwrap();
        frame.extend_from_slice(&[0xDE, 0xAD, 0xBE, 0xEF]);
        assert_eq!(parse_frame(&frame).unwrap(), b"payload");
    }

    #[test]
    fn crc_mismatch_detected() {
        let mut frame = build_frame(b"payload").unwrap();
        frame[3] ^= 0x01;
        assert_eq!(parse_frame(&frame), Err(PvdError::FrameCorrupted));
    }

    #[test]
    fn truncated_frame_detected() {
        let frame = build_frame(b"payload").unwrap();
        assert_eq!(
            parse_frame(&frame[..frame.len() - 2]),
            Err(PvdError::FrameCorrupted)
        );
        assert_eq!(parse_frame(&[0x00]), Err(PvdError::FrameCorrupted));
    }

    #[test]
    fn oversized_payload_rejected() {
        let payload = vec![0u8; MAX_PAYLOAD_BYTES + 1];
        assert_eq!(build_frame(&payload), Err(PvdError::PayloadTooLarge));
    }
}
