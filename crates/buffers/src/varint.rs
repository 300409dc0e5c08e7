//! LEB128 varint helpers shared by [`Writer`](crate::Writer) and
//! [`Reader`](crate::Reader).
//!
//! Unsigned integers are emitted 7 bits per byte, low-order group first, with
//! the high bit of every byte except the last acting as a continuation flag.
//! Signed integers are mapped onto the unsigned form with zigzag encoding so
//! small-magnitude negatives stay short on the wire.

/// Maps a signed integer onto an unsigned one by interleaving the sign into
/// the low bit: `0 -> 0`, `-1 -> 1`, `1 -> 2`, `-2 -> 3`, ...
#[inline]
pub fn zigzag_encode(n: i64) -> u64 {
    ((n << 1) ^ (n >> 63)) as u64
}

/// Reverses [`zigzag_encode`]: the low bit carries the sign, the remaining
/// bits the magnitude.
#[inline]
pub fn zigzag_decode(n: u64) -> i64 {
    ((n >> 1) as i64) ^ -((n & 1) as i64)
}

/// Number of bytes `vu(n)` produces: `max(1, ceil(bitlength(n) / 7))`.
#[inline]
pub fn encoded_len(n: u64) -> usize {
    if n == 0 {
        1
    } else {
        (64 - n.leading_zeros() as usize).div_ceil(7)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zigzag_small_values() {
        assert_eq!(zigzag_encode(0), 0);
        assert_eq!(zigzag_encode(-1), 1);
        assert_eq!(zigzag_encode(1), 2);
        assert_eq!(zigzag_encode(-2), 3);
        assert_eq!(zigzag_encode(2), 4);
    }

    #[test]
    fn test_zigzag_roundtrip() {
        for n in [
            0i64,
            1,
            -1,
            63,
            -64,
            64,
            i32::MAX as i64,
            i32::MIN as i64,
            i64::MAX,
            i64::MIN,
        ] {
            assert_eq!(zigzag_decode(zigzag_encode(n)), n);
        }
    }

    #[test]
    fn test_encoded_len_boundaries() {
        assert_eq!(encoded_len(0), 1);
        assert_eq!(encoded_len(127), 1);
        assert_eq!(encoded_len(128), 2);
        assert_eq!(encoded_len(16_383), 2);
        assert_eq!(encoded_len(16_384), 3);
        assert_eq!(encoded_len(u64::MAX), 10);
    }
}
