//! Error types for the glyph-bundle client.
//!
//! # Design
//! Decode failures and transport failures are kept apart. `DecodeError`
//! describes a malformed bundle header and is produced by pure code;
//! `TransportError` is produced by whatever performs the network I/O and is
//! carried through `BackendError::Transport` without being reinterpreted.

use thiserror::Error;

/// Errors returned when a glyph-bundle header cannot be decoded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The first four bytes are not `BSAC`. Usually means the server sent
    /// something other than a glyph bundle (an HTML error page, a font base).
    #[error("invalid glyph bundle magic number: {}", String::from_utf8_lossy(.found))]
    InvalidMagicNumber { found: [u8; 4] },

    /// The buffer ended before the fixed-size header was fully read.
    #[error("truncated glyph bundle header: needed {needed} bytes, got {available}")]
    TruncatedHeader { needed: usize, available: usize },
}

/// Errors reported by a `Transport` implementation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// The request never produced a response (DNS, connect, I/O).
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a non-2xx status.
    #[error("HTTP {status}")]
    Status { status: u16, body: Vec<u8> },
}

/// Errors returned by `BackendService` operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BackendError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Decode(#[from] DecodeError),
}
