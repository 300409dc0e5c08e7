//! Binary buffer reader with cursor tracking.

use crate::utf8;
use crate::varint::zigzag_decode;
use crate::BufferError;

/// A binary buffer reader over an immutable byte slice.
///
/// The reader maintains a monotonically advancing cursor. Strict `try_*`
/// reads return `Err(BufferError::EndOfBuffer)` without moving the cursor
/// when the buffer runs out; the `*_lenient` variants instead substitute a
/// default and stop at the end, which exists only to reproduce historical
/// permissive streams.
///
/// Reading never mutates the underlying buffer, so any number of readers may
/// share one slice.
///
/// # Example
///
/// ```
/// use oab_buffers::Reader;
///
/// let data = [0xac, 0x02, 0x07];
/// let mut reader = Reader::new(&data);
///
/// assert_eq!(reader.try_vu(), Ok(300));
/// assert_eq!(reader.try_u8(), Ok(0x07));
/// ```
pub struct Reader<'a> {
    /// The underlying byte slice.
    pub uint8: &'a [u8],
    /// Current cursor position.
    pub x: usize,
}

impl<'a> Reader<'a> {
    /// Creates a new reader for the given byte slice.
    pub fn new(uint8: &'a [u8]) -> Self {
        Self { uint8, x: 0 }
    }

    /// Returns the number of remaining bytes.
    pub fn size(&self) -> usize {
        self.uint8.len() - self.x
    }

    /// Advances the cursor by the given number of bytes.
    pub fn skip(&mut self, length: usize) {
        self.x += length;
    }

    /// Returns the unread tail as a zero-copy view.
    pub fn rest(&self) -> &'a [u8] {
        &self.uint8[self.x..]
    }

    /// Checks that `n` more bytes are available from the current cursor.
    #[inline]
    fn check(&self, n: usize) -> Result<(), BufferError> {
        if self.x + n > self.uint8.len() {
            Err(BufferError::EndOfBuffer)
        } else {
            Ok(())
        }
    }

    /// Peeks at the current byte without advancing.
    pub fn try_peek(&self) -> Result<u8, BufferError> {
        self.check(1)?;
        Ok(self.uint8[self.x])
    }

    /// Reads an unsigned 8-bit integer.
    #[inline]
    pub fn try_u8(&mut self) -> Result<u8, BufferError> {
        self.check(1)?;
        let val = self.uint8[self.x];
        self.x += 1;
        Ok(val)
    }

    /// Reads a 32-bit big-endian float.
    #[inline]
    pub fn try_f32(&mut self) -> Result<f32, BufferError> {
        self.check(4)?;
        let val = f32::from_be_bytes([
            self.uint8[self.x],
            self.uint8[self.x + 1],
            self.uint8[self.x + 2],
            self.uint8[self.x + 3],
        ]);
        self.x += 4;
        Ok(val)
    }

    /// Reads a 64-bit big-endian float.
    #[inline]
    pub fn try_f64(&mut self) -> Result<f64, BufferError> {
        self.check(8)?;
        let val = f64::from_be_bytes([
            self.uint8[self.x],
            self.uint8[self.x + 1],
            self.uint8[self.x + 2],
            self.uint8[self.x + 3],
            self.uint8[self.x + 4],
            self.uint8[self.x + 5],
            self.uint8[self.x + 6],
            self.uint8[self.x + 7],
        ]);
        self.x += 8;
        Ok(val)
    }

    /// Reads `size` raw bytes and advances the cursor.
    pub fn try_buf(&mut self, size: usize) -> Result<&'a [u8], BufferError> {
        self.check(size)?;
        let x = self.x;
        let end = x + size;
        let bin = &self.uint8[x..end];
        self.x = end;
        Ok(bin)
    }

    /// Decodes a LEB128 varint, reading groups while the continuation bit is
    /// set.
    ///
    /// Fails with [`BufferError::EndOfBuffer`] if the buffer ends while the
    /// continuation bit is still set. Septet groups beyond bit 63 are
    /// discarded, so the loop is bounded by the remaining buffer length.
    pub fn try_vu(&mut self) -> Result<u64, BufferError> {
        let start = self.x;
        let mut out = 0u64;
        let mut shift = 0u32;
        loop {
            let byte = match self.try_u8() {
                Ok(b) => b,
                Err(e) => {
                    self.x = start;
                    return Err(e);
                }
            };
            if shift < 64 {
                out |= ((byte & 0x7F) as u64) << shift;
            }
            if byte & 0x80 == 0 {
                return Ok(out);
            }
            shift += 7;
        }
    }

    /// Permissive legacy varint decode: stops at the end of the buffer and
    /// returns the partial accumulation instead of failing. Opt-in only,
    /// never a default code path.
    pub fn vu_lenient(&mut self) -> u64 {
        let mut out = 0u64;
        let mut shift = 0u32;
        while let Ok(byte) = self.try_u8() {
            if shift < 64 {
                out |= ((byte & 0x7F) as u64) << shift;
            }
            if byte & 0x80 == 0 {
                break;
            }
            shift += 7;
        }
        out
    }

    /// Decodes a zigzag-mapped signed varint.
    pub fn try_vi(&mut self) -> Result<i64, BufferError> {
        Ok(zigzag_decode(self.try_vu()?))
    }

    /// Fixed-width 32-bit varint fast path; wraps like the historical
    /// unsigned cast. See [`Writer::vu32`](crate::Writer::vu32).
    pub fn try_vu32(&mut self) -> Result<u32, BufferError> {
        Ok(self.try_vu()? as u32)
    }

    /// Decodes one Unicode scalar value from the current position.
    pub fn try_utf8_scalar(&mut self) -> Result<u32, BufferError> {
        let (cp, len) = utf8::decode_scalar(self.rest())?;
        self.x += len;
        Ok(cp)
    }

}
