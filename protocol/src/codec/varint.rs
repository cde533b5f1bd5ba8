//! Unsigned LEB128 varints.
//!
//! Every length prefix and every operation/variant id on the wire is a varint:
//! seven payload bits per byte, least significant group first, with the high
//! bit set on every byte except the last. Encodings are always minimal; a
//! padded encoding would change the digest.

use crate::error::{Error, Result};

/// Longest encoding a `u32` can need.
pub const MAX_VARINT32_LENGTH: usize = 5;

/// Number of bytes `value` occupies on the wire.
///
/// ```
/// use hive_protocol::codec::varint::varint32_len;
///
/// assert_eq!(varint32_len(0), 1);
/// assert_eq!(varint32_len(127), 1);
/// assert_eq!(varint32_len(128), 2);
/// assert_eq!(varint32_len(u32::MAX), 5);
/// ```
pub fn varint32_len(value: u32) -> usize {
    if value < 1 << 7 {
        1
    } else if value < 1 << 14 {
        2
    } else if value < 1 << 21 {
        3
    } else if value < 1 << 28 {
        4
    } else {
        5
    }
}

/// Writes `value` into the front of `out`, returning the bytes used.
///
/// `out` must hold at least [`varint32_len`] bytes; the writer reserves the
/// space before calling this.
pub(crate) fn encode_varint32_into(mut value: u32, out: &mut [u8]) -> usize {
    let mut i = 0;
    while value >= 0x80 {
        out[i] = (value & 0x7f) as u8 | 0x80;
        value >>= 7;
        i += 1;
    }
    out[i] = value as u8;
    i + 1
}

/// Encode a `u32` as a minimal LEB128 varint.
///
/// ```
/// use hive_protocol::codec::varint::encode_varint32;
///
/// assert_eq!(encode_varint32(0), vec![0x00]);
/// assert_eq!(encode_varint32(49), vec![0x31]);
/// assert_eq!(encode_varint32(300), vec![0xac, 0x02]);
/// ```
pub fn encode_varint32(value: u32) -> Vec<u8> {
    let mut out = [0u8; MAX_VARINT32_LENGTH];
    let len = encode_varint32_into(value, &mut out);
    out[..len].to_vec()
}

/// Decode a varint from the front of `input`.
///
/// Returns the value and the number of bytes consumed.
///
/// # Errors
///
/// [`Error::Range`] if the input ends mid-varint, if the value does not fit in
/// 32 bits, or if the encoding is not minimal (a trailing zero group).
pub fn decode_varint32(input: &[u8]) -> Result<(u32, usize)> {
    let mut value: u64 = 0;
    for (i, &byte) in input.iter().enumerate().take(MAX_VARINT32_LENGTH) {
        value |= u64::from(byte & 0x7f) << (7 * i);
        if byte & 0x80 == 0 {
            if i > 0 && byte == 0 {
                return Err(Error::Range(format!(
                    "overlong varint: {} bytes for value {}",
                    i + 1,
                    value
                )));
            }
            let value = u32::try_from(value)
                .map_err(|_| Error::Range(format!("varint exceeds 32 bits: {}", value)))?;
            return Ok((value, i + 1));
        }
    }
    if input.len() >= MAX_VARINT32_LENGTH {
        Err(Error::Range("varint exceeds 5 bytes".to_string()))
    } else {
        Err(Error::Range(format!(
            "truncated varint: {} bytes without terminator",
            input.len()
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries_use_minimal_length() {
        for (value, len) in [
            (0u32, 1usize),
            (0x7f, 1),
            (0x80, 2),
            (0x3fff, 2),
            (0x4000, 3),
            (0x1f_ffff, 3),
            (0x20_0000, 4),
            (0x0fff_ffff, 4),
            (0x1000_0000, 5),
            (u32::MAX, 5),
        ] {
            let encoded = encode_varint32(value);
            assert_eq!(encoded.len(), len, "length for {value:#x}");
            assert_eq!(varint32_len(value), len);
            assert_eq!(decode_varint32(&encoded).unwrap(), (value, len));
        }
    }

    #[test]
    fn known_encodings() {
        assert_eq!(encode_varint32(127), vec![0x7f]);
        assert_eq!(encode_varint32(128), vec![0x80, 0x01]);
        assert_eq!(encode_varint32(u32::MAX), vec![0xff, 0xff, 0xff, 0xff, 0x0f]);
    }

    #[test]
    fn decode_ignores_trailing_bytes() {
        assert_eq!(decode_varint32(&[0xac, 0x02, 0xff]).unwrap(), (300, 2));
    }

    #[test]
    fn truncated_input_is_range_error() {
        assert!(matches!(decode_varint32(&[]), Err(Error::Range(_))));
        assert!(matches!(decode_varint32(&[0x80, 0x80]), Err(Error::Range(_))));
    }

    #[test]
    fn overlong_and_oversized_are_rejected() {
        // 0 padded to two bytes.
        assert!(matches!(decode_varint32(&[0x80, 0x00]), Err(Error::Range(_))));
        // 2^35 does not fit in 32 bits.
        assert!(matches!(
            decode_varint32(&[0x80, 0x80, 0x80, 0x80, 0x7f]),
            Err(Error::Range(_))
        ));
        assert!(matches!(
            decode_varint32(&[0x80, 0x80, 0x80, 0x80, 0x80, 0x01]),
            Err(Error::Range(_))
        ));
    }
}
