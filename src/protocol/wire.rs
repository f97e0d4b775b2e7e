//! Primitive wire codec
//!
//! Fixed 4-byte big-endian encode/decode for 32-bit integers and floats,
//! plus the fixed-point scaling convention used by every power, coefficient,
//! and consumption value on the wire.
//!
//! The unpack functions perform no bounds checking; the message codec
//! validates buffer lengths before slicing into them.

/// Fixed-point scale factor: values travel as milliwatts
pub const MILLI_SCALE: f64 = 1000.0;

/// Encode an unsigned 32-bit integer as 4 big-endian bytes
#[must_use]
pub fn pack_u32(value: u32) -> [u8; 4] {
    value.to_be_bytes()
}

/// Decode an unsigned 32-bit integer from 4 big-endian bytes
///
/// Caller must ensure the slice holds at least 4 bytes.
#[must_use]
pub fn unpack_u32(bytes: &[u8]) -> u32 {
    u32::from_be_bytes(bytes[0..4].try_into().unwrap())
}

/// Encode a signed 32-bit integer as 4 big-endian bytes
#[must_use]
pub fn pack_i32(value: i32) -> [u8; 4] {
    value.to_be_bytes()
}

/// Decode a signed 32-bit integer from 4 big-endian bytes
///
/// Caller must ensure the slice holds at least 4 bytes.
#[must_use]
pub fn unpack_i32(bytes: &[u8]) -> i32 {
    i32::from_be_bytes(bytes[0..4].try_into().unwrap())
}

/// Encode a 32-bit float as 4 big-endian bytes
#[must_use]
pub fn pack_f32(value: f32) -> [u8; 4] {
    value.to_be_bytes()
}

/// Decode a 32-bit float from 4 big-endian bytes
///
/// Caller must ensure the slice holds at least 4 bytes.
#[must_use]
pub fn unpack_f32(bytes: &[u8]) -> f32 {
    f32::from_be_bytes(bytes[0..4].try_into().unwrap())
}

/// Scale a real value to its fixed-point wire form (nearest integer to value x 1000)
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn to_milli(value: f64) -> i32 {
    (value * MILLI_SCALE).round() as i32
}

/// Recover a real value from its fixed-point wire form
#[must_use]
pub fn from_milli(raw: i32) -> f64 {
    f64::from(raw) / MILLI_SCALE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_u32_roundtrip() {
        for value in [0u32, 1, 0xDEAD_BEEF, u32::MAX] {
            assert_eq!(unpack_u32(&pack_u32(value)), value);
        }
    }

    #[test]
    fn test_i32_roundtrip() {
        for value in [0i32, -1, 1_500, -200_000, i32::MIN, i32::MAX] {
            assert_eq!(unpack_i32(&pack_i32(value)), value);
        }
    }

    #[test]
    fn test_f32_roundtrip() {
        for value in [0.0f32, -1.5, 3.25e6] {
            assert!((unpack_f32(&pack_f32(value)) - value).abs() < f32::EPSILON);
        }
    }

    #[test]
    fn test_big_endian_layout() {
        assert_eq!(pack_u32(0x0102_0304), [0x01, 0x02, 0x03, 0x04]);
        assert_eq!(pack_i32(-1), [0xFF, 0xFF, 0xFF, 0xFF]);
    }

    #[test]
    fn test_milli_scaling() {
        assert_eq!(to_milli(12.5), 12_500);
        assert_eq!(to_milli(-0.2), -200);
        // Nearest integer, not truncation
        assert_eq!(to_milli(0.0015), 2);
        assert!((from_milli(12_500) - 12.5).abs() < 1e-9);
    }

    #[test]
    fn test_unpack_ignores_trailing_bytes() {
        let mut bytes = pack_u32(42).to_vec();
        bytes.extend_from_slice(&[0xAA, 0xBB]);
        assert_eq!(unpack_u32(&bytes), 42);
    }
}
