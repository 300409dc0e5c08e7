//! Binary buffer writer with auto-growing capacity.

use crate::utf8;
use crate::varint::zigzag_encode;
use crate::BufferError;

/// A binary buffer writer that grows automatically as needed.
///
/// The region between the last flush position `x0` and the cursor `x` is the
/// pending message; [`flush`](Writer::flush) drains it, while
/// [`written`](Writer::written) only peeks at it.
///
/// # Example
///
/// ```
/// use oab_buffers::Writer;
///
/// let mut writer = Writer::new();
/// writer.u8(0x01);
/// writer.vu(300);
/// let data = writer.flush();
/// assert_eq!(data, [0x01, 0xac, 0x02]);
/// ```
pub struct Writer {
    /// The underlying byte buffer.
    pub uint8: Vec<u8>,
    /// Position where last flush happened.
    pub x0: usize,
    /// Current cursor position.
    pub x: usize,
    /// Allocation size when buffer needs to grow.
    alloc_size: usize,
}

impl Default for Writer {
    fn default() -> Self {
        Self::new()
    }
}

impl Writer {
    /// Creates a new writer with default allocation size (64KB).
    pub fn new() -> Self {
        Self::with_alloc_size(64 * 1024)
    }

    /// Creates a new writer with custom allocation size.
    pub fn with_alloc_size(alloc_size: usize) -> Self {
        let uint8 = vec![0u8; alloc_size];
        Self {
            uint8,
            x0: 0,
            x: 0,
            alloc_size,
        }
    }

    /// Ensures the buffer has at least `capacity` bytes available.
    pub fn ensure_capacity(&mut self, capacity: usize) {
        let remaining = self.uint8.len() - self.x;
        if remaining < capacity {
            let total = self.uint8.len() - self.x0;
            let required = capacity - remaining;
            let total_required = total + required;
            let new_size = if total_required <= self.alloc_size {
                self.alloc_size
            } else {
                total_required * 2
            };
            self.grow(new_size);
        }
    }

    fn grow(&mut self, new_size: usize) {
        let x0 = self.x0;
        let x = self.x;
        let mut new_buf = vec![0u8; new_size];
        new_buf[..x - x0].copy_from_slice(&self.uint8[x0..x]);
        self.uint8 = new_buf;
        self.x = x - x0;
        self.x0 = 0;
    }

    /// Drops any pending bytes and restarts the pending region at the cursor.
    pub fn reset(&mut self) {
        self.x0 = self.x;
    }

    /// Returns the written data and advances the flush position.
    pub fn flush(&mut self) -> Vec<u8> {
        let result = self.uint8[self.x0..self.x].to_vec();
        self.x0 = self.x;
        result
    }

    /// Returns a view of everything written since the last flush without
    /// draining it.
    pub fn written(&self) -> &[u8] {
        &self.uint8[self.x0..self.x]
    }

    /// Writes an unsigned 8-bit integer.
    #[inline]
    pub fn u8(&mut self, val: u8) {
        self.ensure_capacity(1);
        self.uint8[self.x] = val;
        self.x += 1;
    }

    /// Writes a 32-bit floating point number (big-endian).
    #[inline]
    pub fn f32(&mut self, val: f32) {
        self.ensure_capacity(4);
        let bytes = val.to_be_bytes();
        self.uint8[self.x..self.x + 4].copy_from_slice(&bytes);
        self.x += 4;
    }

    /// Writes a 64-bit floating point number (big-endian).
    #[inline]
    pub fn f64(&mut self, val: f64) {
        self.ensure_capacity(8);
        let bytes = val.to_be_bytes();
        self.uint8[self.x..self.x + 8].copy_from_slice(&bytes);
        self.x += 8;
    }

    /// Writes a byte slice.
    pub fn buf(&mut self, buf: &[u8]) {
        let length = buf.len();
        self.ensure_capacity(length);
        self.uint8[self.x..self.x + length].copy_from_slice(buf);
        self.x += length;
    }

    /// Writes an unsigned integer as a LEB128 varint.
    ///
    /// 7 bits per byte, low-order group first, continuation bit set on every
    /// byte except the last. Minimal length: `vu(0)` is a single zero byte.
    pub fn vu(&mut self, mut num: u64) {
        loop {
            let mut part = (num & 0x7F) as u8;
            num >>= 7;
            if num != 0 {
                part |= 0x80;
            }
            self.u8(part);
            if num == 0 {
                break;
            }
        }
    }

    /// Writes a signed integer as a zigzag-mapped varint.
    pub fn vi(&mut self, num: i64) {
        self.vu(zigzag_encode(num));
    }

    /// Fixed-width 32-bit varint fast path.
    ///
    /// Callers narrowing wider integers to `u32` get wraparound, the same
    /// truncation the historical `num >>>= 0` cast performed. The 64-bit
    /// [`vu`](Writer::vu) is the canonical path.
    pub fn vu32(&mut self, num: u32) {
        self.vu(num as u64);
    }

    /// Encodes one Unicode scalar value as 1-4 UTF-8 bytes.
    pub fn utf8_scalar(&mut self, cp: u32) -> Result<(), BufferError> {
        let (bytes, len) = utf8::encode_scalar(cp)?;
        self.buf(&bytes[..len]);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::varint::encoded_len;

    #[test]
    fn test_u8() {
        let mut writer = Writer::new();
        writer.u8(0x01);
        writer.u8(0x02);
        assert_eq!(writer.flush(), [0x01, 0x02]);
    }

    #[test]
    fn test_flush_multiple() {
        let mut writer = Writer::new();
        writer.u8(0x01);
        assert_eq!(writer.flush(), [0x01]);
        writer.u8(0x02);
        assert_eq!(writer.flush(), [0x02]);
    }

    #[test]
    fn test_written_is_non_destructive() {
        let mut writer = Writer::new();
        writer.u8(0x0a);
        writer.u8(0x0b);
        assert_eq!(writer.written(), [0x0a, 0x0b]);
        assert_eq!(writer.written(), [0x0a, 0x0b]);
        assert_eq!(writer.flush(), [0x0a, 0x0b]);
        assert_eq!(writer.written(), [] as [u8; 0]);
    }

    #[test]
    fn test_vu_zero_is_single_byte() {
        let mut writer = Writer::new();
        writer.vu(0);
        assert_eq!(writer.flush(), [0x00]);
    }

    #[test]
    fn test_vu_continuation_bits() {
        let mut writer = Writer::new();
        writer.vu(300);
        assert_eq!(writer.flush(), [0xac, 0x02]);
    }

    #[test]
    fn test_vu_minimal_length() {
        for n in [0u64, 1, 127, 128, 16_383, 16_384, 1 << 62, u64::MAX] {
            let mut writer = Writer::new();
            writer.vu(n);
            assert_eq!(writer.flush().len(), encoded_len(n), "n = {n}");
        }
    }

    #[test]
    fn test_vi_small_negatives_stay_short() {
        let mut writer = Writer::new();
        writer.vi(-1);
        assert_eq!(writer.flush(), [0x01]);
        writer.vi(1);
        assert_eq!(writer.flush(), [0x02]);
    }

    #[test]
    fn test_grow_beyond_alloc_size() {
        let mut writer = Writer::with_alloc_size(4);
        for i in 0..64 {
            writer.u8(i);
        }
        let data = writer.flush();
        assert_eq!(data.len(), 64);
        assert_eq!(data[63], 63);
    }

    #[test]
    fn test_utf8_scalar() {
        let mut writer = Writer::new();
        writer.utf8_scalar('€' as u32).unwrap();
        assert_eq!(writer.flush(), "€".as_bytes());
        assert_eq!(
            writer.utf8_scalar(0x110000),
            Err(BufferError::ScalarOutOfRange)
        );
    }
}
