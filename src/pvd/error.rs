// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/pvdcore

//! Error types for the PVD codec.
//!
//! [`PvdError`] covers all failure modes from range table validation through
//! embedding, extraction and payload framing.

use core::fmt;

/// Errors that can occur during PVD encoding or decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PvdError {
    /// The range table fails the contiguous-partition-of-[0,256) invariant.
    InvalidTable(&'static str),
    /// The cover sequence ran out of eligible pairs before the whole secret
    /// was embedded.
    CoverTooSmall,
    /// Fewer bytes than requested could be recovered from the stego stream.
    ShortRecovery {
        /// Bytes requested by the caller.
        wanted: usize,
        /// Bytes actually recovered before the stream was exhausted.
        got: usize,
    },
    /// The payload exceeds the frame format's 2-byte length prefix.
    PayloadTooLarge,
    /// CRC check failed on the extracted payload frame.
    FrameCorrupted,
}

impl fmt::Display for PvdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidTable(msg) => write!(f, "invalid range table: {msg}"),
            Self::CoverTooSmall => write!(f, "cover sequence too small to hide the secret"),
            Self::ShortRecovery { wanted, got } => {
                write!(f, "short recovery: wanted {wanted} bytes, got {got}")
            }
            Self::PayloadTooLarge => write!(f, "payload too large for frame (max 65535 bytes)"),
            Self::FrameCorrupted => write!(f, "payload frame CRC mismatch"),
        }
    }
}

impl std::error::Error for PvdError {}

pub type Result<T> = std::result::Result<T, PvdError>;
