//! Codec Tests
//!
//! Tests verify:
//! - Linear quantization and its inverse for every protocol range
//! - Silent clamping of out-of-range input
//! - Truncating rounding rule
//! - Integer and float word conventions

use rmdwire::codec::{
    dequantize, pack_f32_native, pack_f32_reversed, pack_u32_le, quantize, unpack_f32_native,
    unpack_f32_reversed, unpack_u32_le, FieldRange, KD, KP, POSITION, TORQUE, VELOCITY,
};

const RANGES: [FieldRange; 5] = [POSITION, VELOCITY, KP, KD, TORQUE];

fn sweep(range: FieldRange, samples: usize) -> impl Iterator<Item = f32> {
    (0..=samples).map(move |i| range.min + (range.max - range.min) * i as f32 / samples as f32)
}

// =============================================================================
// Quantize Tests
// =============================================================================

#[test]
fn test_protocol_ranges() {
    assert_eq!((POSITION.min, POSITION.max, POSITION.bits), (-12.5, 12.5, 16));
    assert_eq!((VELOCITY.min, VELOCITY.max, VELOCITY.bits), (-45.0, 45.0, 12));
    assert_eq!((KP.min, KP.max, KP.bits), (0.0, 500.0, 12));
    assert_eq!((KD.min, KD.max, KD.bits), (0.0, 5.0, 12));
    assert_eq!((TORQUE.min, TORQUE.max, TORQUE.bits), (-24.0, 24.0, 12));
}

#[test]
fn test_max_int() {
    assert_eq!(POSITION.max_int(), 0xFFFF);
    assert_eq!(VELOCITY.max_int(), 0x0FFF);
    assert_eq!(FieldRange::new(0.0, 1.0, 1).max_int(), 1);
}

#[test]
fn test_quantize_bounds() {
    for range in RANGES {
        assert_eq!(range.quantize(range.min), 0, "{:?}", range);
        assert_eq!(range.quantize(range.max), range.max_int(), "{:?}", range);
    }
}

#[test]
fn test_quantize_zero_truncates_below_midpoint() {
    // (0 - min) * max_int / span lands on x.5 for symmetric ranges
    assert_eq!(POSITION.quantize(0.0), 0x7FFF);
    assert_eq!(VELOCITY.quantize(0.0), 0x7FF);
    assert_eq!(TORQUE.quantize(0.0), 0x7FF);
    assert_eq!(KP.quantize(0.0), 0);
    assert_eq!(KD.quantize(0.0), 0);
}

#[test]
fn test_quantize_clamps_out_of_range() {
    for range in RANGES {
        for delta in [0.001, 1.0, 1000.0, f32::INFINITY] {
            assert_eq!(range.quantize(range.max + delta), range.quantize(range.max));
            assert_eq!(range.quantize(range.min - delta), range.quantize(range.min));
        }
    }
}

#[test]
fn test_quantize_nan_maps_to_zero() {
    assert_eq!(TORQUE.quantize(f32::NAN), 0);
    assert_eq!(POSITION.quantize(f32::NAN), 0);
}

#[test]
fn test_free_functions_match_field_range() {
    assert_eq!(quantize(3.3, -12.5, 12.5, 16), POSITION.quantize(3.3));
    assert_eq!(quantize(-7.0, -24.0, 24.0, 12), TORQUE.quantize(-7.0));
    assert_eq!(dequantize(1234, 0.0, 500.0, 12), KP.dequantize(1234));
}

#[test]
fn test_dequantize_bounds() {
    for range in RANGES {
        assert!((range.dequantize(0) - range.min).abs() < 1e-6);
        assert!((range.dequantize(range.max_int()) - range.max).abs() < 1e-4);
    }
}

#[test]
fn test_round_trip_within_one_step() {
    for range in RANGES {
        let tolerance = range.step() + 1e-4;
        for value in sweep(range, 997) {
            let decoded = range.dequantize(range.quantize(value));
            assert!(
                (decoded - value).abs() <= tolerance,
                "{:?}: {} -> {} (step {})",
                range,
                value,
                decoded,
                range.step()
            );
        }
    }
}

#[test]
fn test_round_trip_never_overshoots() {
    // Truncation only ever rounds down
    for range in [VELOCITY, KD] {
        for value in sweep(range, 101) {
            assert!(range.dequantize(range.quantize(value)) <= value + 1e-4);
        }
    }
}

#[test]
fn test_step() {
    assert!((KD.step() - 5.0 / 4095.0).abs() < 1e-9);
    assert!((POSITION.step() - 25.0 / 65535.0).abs() < 1e-9);
}

#[test]
#[should_panic]
fn test_zero_bit_range_panics() {
    FieldRange::new(0.0, 1.0, 0);
}

#[test]
#[should_panic]
fn test_oversized_range_panics() {
    FieldRange::new(0.0, 1.0, 17);
}

#[test]
#[should_panic]
fn test_inverted_range_panics() {
    FieldRange::new(5.0, -5.0, 12);
}

// =============================================================================
// Word Tests
// =============================================================================

#[test]
fn test_u32_little_endian() {
    assert_eq!(pack_u32_le(123), [0x7B, 0x00, 0x00, 0x00]);
    assert_eq!(pack_u32_le(0x1234_5678), [0x78, 0x56, 0x34, 0x12]);
    assert_eq!(unpack_u32_le([0x78, 0x56, 0x34, 0x12]), 0x1234_5678);
    assert_eq!(unpack_u32_le([0xFF; 4]), u32::MAX);
}

#[test]
fn test_reversed_float_reads_msb_last() {
    assert_eq!(unpack_f32_reversed([0x00, 0x00, 0x80, 0x3F]), 1.0);
    assert_eq!(unpack_f32_reversed([0x00, 0x00, 0x20, 0xC0]), -2.5);
    assert_eq!(unpack_f32_reversed([0x00; 4]), 0.0);
}

#[test]
fn test_reversed_float_pack_is_exact_inverse() {
    assert_eq!(pack_f32_reversed(-2.5), [0x00, 0x00, 0x20, 0xC0]);
    for value in [0.0f32, -0.0, 0.3, 1.0e-20, 123.456, f32::MAX, f32::MIN_POSITIVE] {
        let decoded = unpack_f32_reversed(pack_f32_reversed(value));
        assert_eq!(decoded.to_bits(), value.to_bits());
    }
}

#[test]
fn test_native_float_round_trip() {
    for value in [0.3f32, -17.25, 1.0] {
        assert_eq!(pack_f32_native(value), value.to_ne_bytes());
        assert_eq!(unpack_f32_native(pack_f32_native(value)), value);
    }
}

#[cfg(target_endian = "little")]
#[test]
fn test_float_conventions_agree_on_little_endian() {
    for value in [1.0f32, -2.5, 0.3] {
        assert_eq!(pack_f32_native(value), pack_f32_reversed(value));
        assert_eq!(unpack_f32_reversed(pack_f32_native(value)), value);
    }
}
