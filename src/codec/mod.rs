//! Codec Module
//!
//! Pure value codecs shared by every typed message.
//!
//! ## Responsibilities
//! - Linear quantization of bounded physical quantities to N-bit integers
//! - 32-bit integers to/from 4 little-endian bytes
//! - IEEE-754 floats to/from 4 bytes, in both conventions the protocol uses
//!
//! ## Float Conventions
//! ```text
//! native-order     : f32 memory order, written by gain *set* requests
//! byte-reversed    : b7 b6 b5 b4 assembled MSB-first into a u32, then
//!                    bit-cast, read from gain replies
//! ```
//! The two are kept as separate code paths. On little-endian targets they
//! agree byte-for-byte; the protocol does not promise that elsewhere.
//!
//! Nothing here allocates, blocks or holds state, so every function is safe to
//! call from any thread.

mod quantize;
mod word;

pub use quantize::{dequantize, quantize, FieldRange, KD, KP, POSITION, TORQUE, VELOCITY};
pub use word::{
    pack_f32_native, pack_f32_reversed, pack_u32_le, unpack_f32_native, unpack_f32_reversed,
    unpack_u32_le,
};
