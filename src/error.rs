//! Error types for rmdwire
//!
//! Provides a unified error type for all operations.
//!
//! Decoding a frame never fails structurally: every 8-byte buffer decodes to
//! *some* value for every field. The only decode-time error is an enumerated
//! byte the protocol does not define ([`RmdError::UnknownVariant`]).

use thiserror::Error;

/// Result type alias using RmdError
pub type Result<T> = std::result::Result<T, RmdError>;

/// Unified error type for rmdwire operations
#[derive(Debug, Error)]
pub enum RmdError {
    // -------------------------------------------------------------------------
    // Decode Errors
    // -------------------------------------------------------------------------
    #[error("Unknown {kind} value: 0x{value:02x}")]
    UnknownVariant { kind: &'static str, value: u8 },

    #[error("Unexpected reply command: expected 0x{expected:02x}, got 0x{got:02x}")]
    UnexpectedReply { expected: u8, got: u8 },

    // -------------------------------------------------------------------------
    // Frame Construction Errors
    // -------------------------------------------------------------------------
    #[error("Frame must be exactly 8 bytes, got {0}")]
    FrameLength(usize),

    #[error("Invalid hex frame: {0}")]
    InvalidHex(String),

    // -------------------------------------------------------------------------
    // Transport Errors
    // -------------------------------------------------------------------------
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("No reply from actuator {actuator_id} within {timeout_ms} ms")]
    Timeout { actuator_id: u32, timeout_ms: u64 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}
