//! Linear quantization
//!
//! Maps a bounded `f32` onto the low `bits` bits of an unsigned integer and
//! back.
//!
//! ## Clamping
//! Inputs outside `[min, max]` are **silently clamped** before mapping. A
//! torque request of 100 Nm goes out on the wire as 24 Nm; no error is
//! raised. NaN maps to 0.
//!
//! ## Rounding
//! The scaled value is truncated toward zero (an `as` cast), so a value
//! exactly at the middle of a symmetric range lands one below the integer
//! midpoint: 0.0 rad in a 16-bit position field encodes as `0x7FFF`.

/// A bounded physical range and the integer width it is quantized to
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldRange {
    /// Lowest representable value
    pub min: f32,
    /// Highest representable value
    pub max: f32,
    /// Width of the wire field, 1..=16
    pub bits: u32,
}

/// Desired/echoed position, radians
pub const POSITION: FieldRange = FieldRange {
    min: -12.5,
    max: 12.5,
    bits: 16,
};

/// Desired/echoed velocity, rad/s
pub const VELOCITY: FieldRange = FieldRange {
    min: -45.0,
    max: 45.0,
    bits: 12,
};

/// Position gain
pub const KP: FieldRange = FieldRange {
    min: 0.0,
    max: 500.0,
    bits: 12,
};

/// Velocity gain
pub const KD: FieldRange = FieldRange {
    min: 0.0,
    max: 5.0,
    bits: 12,
};

/// Feedforward/echoed torque, Nm
pub const TORQUE: FieldRange = FieldRange {
    min: -24.0,
    max: 24.0,
    bits: 12,
};

impl FieldRange {
    /// Create a range
    ///
    /// Panics if `bits` is not in `1..=16` or `min >= max`.
    pub fn new(min: f32, max: f32, bits: u32) -> Self {
        assert!((1..=16).contains(&bits), "field width must be 1..=16 bits, got {bits}");
        assert!(min < max, "field range must satisfy min < max, got [{min}, {max}]");
        Self { min, max, bits }
    }

    /// Largest integer the field can hold (`2^bits - 1`)
    pub fn max_int(&self) -> u16 {
        max_int(self.bits)
    }

    /// Physical size of one integer step
    pub fn step(&self) -> f32 {
        (self.max - self.min) / f32::from(self.max_int())
    }

    /// Clamp then quantize `value` into this field
    pub fn quantize(&self, value: f32) -> u16 {
        quantize(value, self.min, self.max, self.bits)
    }

    /// Map a raw field value back into physical units
    pub fn dequantize(&self, raw: u16) -> f32 {
        dequantize(raw, self.min, self.max, self.bits)
    }
}

/// Quantize `value` into the low `bits` bits of a `u16`
///
/// Out-of-range values are clamped to `[min, max]` first. See the module docs.
pub fn quantize(value: f32, min: f32, max: f32, bits: u32) -> u16 {
    debug_assert!((1..=16).contains(&bits));
    debug_assert!(min < max);

    let clamped = value.max(min).min(max);
    let span = max - min;
    let max_int = f32::from(max_int(bits));

    // f32::max discards NaN, so NaN clamps to min
    ((clamped - min) * max_int / span) as u16
}

/// Inverse of [`quantize`], exact up to one quantization step
pub fn dequantize(raw: u16, min: f32, max: f32, bits: u32) -> f32 {
    debug_assert!((1..=16).contains(&bits));
    debug_assert!(min < max);

    let span = max - min;
    let max_int = f32::from(max_int(bits));
    f32::from(raw) * span / max_int + min
}

fn max_int(bits: u32) -> u16 {
    ((1u32 << bits) - 1) as u16
}
