//! Fixed-width string codec
//!
//! Strings occupy fixed-width, null-padded fields so composite messages keep
//! fixed offsets. Decoding is lenient by default: invalid UTF-8 sequences are
//! dropped rather than raised, favoring partial recovery of telemetry from
//! noisy embedded links. Callers needing exactness opt into
//! [`unpack_string_strict`].

use super::Result;

/// Pack a string into a fixed-width field
///
/// UTF-8 encodes the text, truncates to `width` bytes, and right-pads with
/// null bytes to exactly `width` bytes. Truncation is byte-wise; a multi-byte
/// character split at the boundary is dropped by the lenient decoder.
#[must_use]
pub fn pack_string(text: &str, width: usize) -> Vec<u8> {
    let mut bytes = text.as_bytes().to_vec();
    bytes.truncate(width);
    bytes.resize(width, 0);
    bytes
}

/// Unpack a null-padded string field, dropping invalid UTF-8 sequences
#[must_use]
pub fn unpack_string(bytes: &[u8]) -> String {
    let mut rest = strip_trailing_nulls(bytes);
    let mut out = String::with_capacity(rest.len());

    while !rest.is_empty() {
        match core::str::from_utf8(rest) {
            Ok(valid) => {
                out.push_str(valid);
                break;
            }
            Err(err) => {
                let (valid, after) = rest.split_at(err.valid_up_to());
                // valid_up_to guarantees this slice is well-formed
                out.push_str(core::str::from_utf8(valid).unwrap());
                match err.error_len() {
                    Some(len) => rest = &after[len..],
                    // Truncated sequence at the end of the field
                    None => break,
                }
            }
        }
    }

    out
}

/// Unpack a null-padded string field, rejecting invalid UTF-8
pub fn unpack_string_strict(bytes: &[u8]) -> Result<String> {
    Ok(String::from_utf8(strip_trailing_nulls(bytes).to_vec())?)
}

fn strip_trailing_nulls(bytes: &[u8]) -> &[u8] {
    let end = bytes.iter().rposition(|&b| b != 0).map_or(0, |i| i + 1);
    &bytes[..end]
}
