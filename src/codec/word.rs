//! 32-bit value fields
//!
//! Single-value commands carry a 4-byte word at frame offsets 4..8. Integers
//! are little-endian. Floats come in two flavours, see the module docs of
//! [`crate::codec`].

/// Split a `u32` into 4 bytes, least-significant first
pub fn pack_u32_le(value: u32) -> [u8; 4] {
    value.to_le_bytes()
}

/// Assemble a `u32` from 4 bytes, least-significant first
pub fn unpack_u32_le(bytes: [u8; 4]) -> u32 {
    u32::from_le_bytes(bytes)
}

/// Write an `f32` in the platform's native float memory order
pub fn pack_f32_native(value: f32) -> [u8; 4] {
    value.to_ne_bytes()
}

/// Read an `f32` stored in the platform's native float memory order
pub fn unpack_f32_native(bytes: [u8; 4]) -> f32 {
    f32::from_ne_bytes(bytes)
}

/// Write an `f32` so that [`unpack_f32_reversed`] reads it back exactly
pub fn pack_f32_reversed(value: f32) -> [u8; 4] {
    let word = value.to_bits();
    [
        word as u8,
        (word >> 8) as u8,
        (word >> 16) as u8,
        (word >> 24) as u8,
    ]
}

/// Read an `f32` by assembling the word MSB-first from the last byte down to
/// the first, then reinterpreting its bits
///
/// `bytes` are frame offsets 4..8, so `bytes[3]` (offset 7) is the MSB.
pub fn unpack_f32_reversed(bytes: [u8; 4]) -> f32 {
    let word = (u32::from(bytes[3]) << 24)
        | (u32::from(bytes[2]) << 16)
        | (u32::from(bytes[1]) << 8)
        | u32::from(bytes[0]);
    f32::from_bits(word)
}
