//! Actuator State Module
//!
//! Value types that appear inside frames: the enumerated indices carried in
//! byte 1 of single-value commands, and the feedback record decoded from a
//! motion-control reply.
//!
//! Enumerated indices convert from a raw byte with `TryFrom<u8>`, which fails
//! with [`crate::RmdError::UnknownVariant`] for bytes the protocol does not
//! define. The raw byte itself is always structurally valid.

mod function_control_type;
mod gain_type;
mod motion_control_status;

pub use function_control_type::FunctionControlType;
pub use gain_type::GainType;
pub use motion_control_status::MotionControlStatus;

/// Parse a decimal or `0x`-prefixed hex byte
pub(crate) fn parse_index(s: &str) -> Option<u8> {
    match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u8::from_str_radix(hex, 16).ok(),
        None => s.parse().ok(),
    }
}
