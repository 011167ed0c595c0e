//! Frame
//!
//! The unit of wire transport: one CAN data field of exactly 8 bytes.
//!
//! ```text
//! ┌────┬────┬────┬────┬────┬────┬────┬────┐
//! │ b0 │ b1 │ b2 │ b3 │ b4 │ b5 │ b6 │ b7 │
//! └────┴────┴────┴────┴────┴────┴────┴────┘
//! ```
//!
//! A frame has no identity beyond its content. Typed messages build frames
//! starting from [`Frame::zeroed`], so every byte a layout does not assign is
//! `0x00`.

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, RmdError};

/// Number of bytes in every frame
pub const FRAME_LEN: usize = 8;

/// An 8-byte wire frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Frame([u8; FRAME_LEN]);

impl Frame {
    /// A frame with every byte set to `0x00`
    pub const fn zeroed() -> Self {
        Self([0; FRAME_LEN])
    }

    /// Wrap raw bytes received from the bus
    pub const fn from_bytes(bytes: [u8; FRAME_LEN]) -> Self {
        Self(bytes)
    }

    /// Build a frame from a slice, which must be exactly 8 bytes long
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let bytes: [u8; FRAME_LEN] = bytes
            .try_into()
            .map_err(|_| RmdError::FrameLength(bytes.len()))?;
        Ok(Self(bytes))
    }

    /// Read-only view of the bytes
    pub const fn as_bytes(&self) -> &[u8; FRAME_LEN] {
        &self.0
    }

    /// Consume the frame, returning its bytes
    pub const fn into_bytes(self) -> [u8; FRAME_LEN] {
        self.0
    }

    /// Byte at `offset`
    ///
    /// Panics if `offset >= FRAME_LEN`.
    pub const fn byte(&self, offset: usize) -> u8 {
        self.0[offset]
    }

    /// Four bytes starting at `offset`
    pub(crate) fn word(&self, offset: usize) -> [u8; 4] {
        [
            self.0[offset],
            self.0[offset + 1],
            self.0[offset + 2],
            self.0[offset + 3],
        ]
    }

    pub(crate) fn with_byte(mut self, offset: usize, byte: u8) -> Self {
        self.0[offset] = byte;
        self
    }

    pub(crate) fn with_word(mut self, offset: usize, word: [u8; 4]) -> Self {
        self.0[offset..offset + 4].copy_from_slice(&word);
        self
    }
}

impl From<[u8; FRAME_LEN]> for Frame {
    fn from(bytes: [u8; FRAME_LEN]) -> Self {
        Self(bytes)
    }
}

impl From<Frame> for [u8; FRAME_LEN] {
    fn from(frame: Frame) -> Self {
        frame.0
    }
}

impl TryFrom<&[u8]> for Frame {
    type Error = RmdError;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        Self::from_slice(bytes)
    }
}

impl AsRef<[u8]> for Frame {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Formats as eight space-separated hex bytes, e.g. `01 80 00 00 00 00 00 00`
impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, byte) in self.0.iter().enumerate() {
            if idx > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{:02X}", byte)?;
        }
        Ok(())
    }
}

/// Parses hex bytes separated by whitespace, commas or colons.
/// A single unseparated run of 16 hex digits is accepted too.
/// Each byte is exactly two hex digits, with an optional `0x` prefix.
impl FromStr for Frame {
    type Err = RmdError;

    fn from_str(s: &str) -> Result<Self> {
        let tokens: Vec<&str> = s
            .split(|c: char| c.is_whitespace() || c == ',' || c == ':')
            .filter(|t| !t.is_empty())
            .map(|t| t.strip_prefix("0x").or_else(|| t.strip_prefix("0X")).unwrap_or(t))
            .collect();

        let tokens: Vec<&str> = match tokens.as_slice() {
            [run] if run.len() == FRAME_LEN * 2 => {
                if !run.is_ascii() {
                    return Err(RmdError::InvalidHex(s.to_string()));
                }
                (0..FRAME_LEN).map(|i| &run[i * 2..i * 2 + 2]).collect()
            }
            _ => tokens,
        };

        let bytes = tokens
            .iter()
            .map(|t| parse_hex_byte(t))
            .collect::<Result<Vec<u8>>>()?;

        Self::from_slice(&bytes)
    }
}

/// Exactly two hex digits, no sign
fn parse_hex_byte(token: &str) -> Result<u8> {
    let valid = token.len() == 2 && token.bytes().all(|b| b.is_ascii_hexdigit());
    if !valid {
        return Err(RmdError::InvalidHex(token.to_string()));
    }
    u8::from_str_radix(token, 16).map_err(|_| RmdError::InvalidHex(token.to_string()))
}
