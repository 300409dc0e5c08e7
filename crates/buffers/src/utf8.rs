//! Scalar-granular UTF-8 codec.
//!
//! OAB frames strings by Unicode scalar *count*, not byte count, so the
//! decoder has to consume exactly N scalars to find a string's end. This
//! module encodes and decodes one scalar value at a time; bulk byte copies
//! are not enough at that framing.

use crate::BufferError;

/// Highest valid Unicode scalar value.
pub const MAX_SCALAR: u32 = 0x10FFFF;

/// Encodes one Unicode scalar value into 1-4 UTF-8 bytes.
///
/// Returns the encoded bytes and how many of them are significant.
/// Codepoints above U+10FFFF are rejected with
/// [`BufferError::ScalarOutOfRange`].
pub fn encode_scalar(cp: u32) -> Result<([u8; 4], usize), BufferError> {
    let mut buf = [0u8; 4];
    let len = if cp <= 0x7F {
        buf[0] = cp as u8;
        1
    } else if cp <= 0x7FF {
        buf[0] = 0b1100_0000 | (cp >> 6) as u8;
        buf[1] = 0b1000_0000 | (cp & 0b11_1111) as u8;
        2
    } else if cp <= 0xFFFF {
        buf[0] = 0b1110_0000 | (cp >> 12) as u8;
        buf[1] = 0b1000_0000 | ((cp >> 6) & 0b11_1111) as u8;
        buf[2] = 0b1000_0000 | (cp & 0b11_1111) as u8;
        3
    } else if cp <= MAX_SCALAR {
        buf[0] = 0b1111_0000 | (cp >> 18) as u8;
        buf[1] = 0b1000_0000 | ((cp >> 12) & 0b11_1111) as u8;
        buf[2] = 0b1000_0000 | ((cp >> 6) & 0b11_1111) as u8;
        buf[3] = 0b1000_0000 | (cp & 0b11_1111) as u8;
        4
    } else {
        return Err(BufferError::ScalarOutOfRange);
    };
    Ok((buf, len))
}

/// Decodes one Unicode scalar value from the front of `input`.
///
/// Returns the codepoint and the number of bytes consumed. A leading byte
/// matching none of the recognized bit patterns fails with
/// [`BufferError::InvalidUtf8`]; a sequence cut short by the end of the
/// input fails with [`BufferError::EndOfBuffer`].
pub fn decode_scalar(input: &[u8]) -> Result<(u32, usize), BufferError> {
    let byte1 = *input.first().ok_or(BufferError::EndOfBuffer)?;
    if byte1 <= 0x7F {
        return Ok((byte1 as u32, 1));
    }
    let len = if byte1 & 0b1110_0000 == 0b1100_0000 {
        2
    } else if byte1 & 0b1111_0000 == 0b1110_0000 {
        3
    } else if byte1 & 0b1111_1000 == 0b1111_0000 {
        4
    } else {
        return Err(BufferError::InvalidUtf8);
    };
    if input.len() < len {
        return Err(BufferError::EndOfBuffer);
    }
    // Mask off the length marker bits of the leading byte.
    let mut cp = (byte1 & (0x7F >> len)) as u32;
    for &cont in &input[1..len] {
        cp = (cp << 6) | (cont & 0b11_1111) as u32;
    }
    Ok((cp, len))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encoded_length_boundaries() {
        for (cp, expected) in [
            (0x00u32, 1usize),
            (0x7F, 1),
            (0x80, 2),
            (0x7FF, 2),
            (0x800, 3),
            (0xFFFF, 3),
            (0x10000, 4),
            (0x10FFFF, 4),
        ] {
            let (_, len) = encode_scalar(cp).unwrap();
            assert_eq!(len, expected, "scalar {cp:#x}");
        }
    }

    #[test]
    fn test_scalar_out_of_range() {
        assert_eq!(encode_scalar(0x110000), Err(BufferError::ScalarOutOfRange));
    }

    #[test]
    fn test_roundtrip() {
        for cp in [0u32, 0x41, 0x7F, 0xE9, 0x7FF, 0x20AC, 0xFFFD, 0x1F600] {
            let (buf, len) = encode_scalar(cp).unwrap();
            assert_eq!(decode_scalar(&buf[..len]), Ok((cp, len)));
        }
    }

    #[test]
    fn test_matches_std_encoding() {
        for c in ['a', 'é', '€', '😀'] {
            let (buf, len) = encode_scalar(c as u32).unwrap();
            let mut std_buf = [0u8; 4];
            assert_eq!(&buf[..len], c.encode_utf8(&mut std_buf).as_bytes());
        }
    }

    #[test]
    fn test_invalid_leading_byte() {
        // A lone continuation byte is not a valid sequence start.
        assert_eq!(decode_scalar(&[0b1000_0001]), Err(BufferError::InvalidUtf8));
        assert_eq!(decode_scalar(&[0xFF]), Err(BufferError::InvalidUtf8));
    }

    #[test]
    fn test_truncated_sequence() {
        let (buf, _) = encode_scalar(0x20AC).unwrap();
        assert_eq!(decode_scalar(&buf[..2]), Err(BufferError::EndOfBuffer));
        assert_eq!(decode_scalar(&[]), Err(BufferError::EndOfBuffer));
    }
}
