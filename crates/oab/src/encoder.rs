//! `OabEncoder` — recursive tagged-value encoder.

use oab_buffers::Writer;

use crate::constants::*;
use crate::{FloatWidth, OabError, OabOptions, StringMode, Value};

/// Encodes [`Value`] trees into the OAB wire format.
///
/// The encoder owns a growable [`Writer`]; [`write`](OabEncoder::write) is
/// chainable and appends one value per call, [`serialize`](OabEncoder::serialize)
/// snapshots the accumulated bytes, and [`flush`](OabEncoder::flush) drains
/// them. One encoder serves one encode session at a time; a failed `write`
/// may leave a partial payload in the buffer, so callers needing atomicity
/// should stage onto a scratch encoder and commit on success.
///
/// # Example
///
/// ```
/// use oab::{OabEncoder, OabDecoder, Value};
///
/// let mut encoder = OabEncoder::new();
/// encoder.write(&Value::Str("Hello!".into())).unwrap();
/// let bytes = encoder.flush();
///
/// let mut decoder = OabDecoder::new(&bytes);
/// assert_eq!(decoder.read().unwrap(), Value::Str("Hello!".into()));
/// ```
pub struct OabEncoder {
    pub writer: Writer,
    opts: OabOptions,
}

impl Default for OabEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl OabEncoder {
    /// Creates an encoder with the canonical strict configuration.
    pub fn new() -> Self {
        Self::with_options(OabOptions::new())
    }

    /// Creates an encoder with the given configuration.
    pub fn with_options(opts: OabOptions) -> Self {
        Self {
            writer: Writer::new(),
            opts,
        }
    }

    /// Appends one value to the output buffer. Chainable.
    pub fn write(&mut self, value: &Value) -> Result<&mut Self, OabError> {
        self.write_any(value)?;
        Ok(self)
    }

    /// Encodes a single value from a clean buffer and drains the result.
    pub fn encode(&mut self, value: &Value) -> Result<Vec<u8>, OabError> {
        self.writer.reset();
        self.write_any(value)?;
        Ok(self.writer.flush())
    }

    /// Encodes a `serde_json::Value` directly.
    pub fn encode_json(&mut self, value: &serde_json::Value) -> Result<Vec<u8>, OabError> {
        self.encode(&Value::from(value.clone()))
    }

    /// Non-destructive snapshot of everything written since the last flush.
    pub fn serialize(&self) -> Vec<u8> {
        self.writer.written().to_vec()
    }

    /// Returns the accumulated bytes and resets the buffer to empty.
    pub fn flush(&mut self) -> Vec<u8> {
        self.writer.flush()
    }

    /// Checked unsigned-varint emitter for callers holding signed counts.
    ///
    /// A negative input is a programming error, surfaced as
    /// [`OabError::NegativeVarint`] rather than cast-and-encoded.
    pub fn vu_checked(&mut self, num: i64) -> Result<&mut Self, OabError> {
        if num < 0 {
            return Err(OabError::NegativeVarint(num));
        }
        self.writer.vu(num as u64);
        Ok(self)
    }

    fn write_any(&mut self, value: &Value) -> Result<(), OabError> {
        match value {
            Value::Null => {
                self.writer.u8(TAG_NULL);
                Ok(())
            }
            Value::Undefined => {
                self.writer.u8(TAG_UNDEFINED);
                Ok(())
            }
            Value::Bool(b) => {
                self.writer.u8(if *b { TAG_TRUE } else { TAG_FALSE });
                Ok(())
            }
            Value::Integer(i) => {
                self.write_integer(*i);
                Ok(())
            }
            Value::UInteger(u) => {
                self.writer.u8(TAG_POS_INT);
                self.writer.vu(*u);
                Ok(())
            }
            Value::Float(f) => self.write_float(*f),
            Value::Str(s) => {
                self.writer.u8(TAG_STR);
                self.write_str_payload(s)
            }
            Value::Array(arr) => self.write_arr(arr),
            Value::Object(obj) => self.write_obj(obj),
        }
    }

    fn write_integer(&mut self, int: i64) {
        if int >= 0 {
            self.writer.u8(TAG_POS_INT);
            self.writer.vu(int as u64);
        } else {
            // unsigned_abs keeps i64::MIN representable.
            self.writer.u8(TAG_NEG_INT);
            self.writer.vu(int.unsigned_abs());
        }
    }

    fn write_float(&mut self, f: f64) -> Result<(), OabError> {
        if !f.is_finite() {
            if !self.opts.allow_non_finite {
                return Err(OabError::UnsupportedValue(format!(
                    "non-finite number {f}"
                )));
            }
            let tag = if f.is_nan() {
                TAG_EXT_NAN
            } else if f > 0.0 {
                TAG_EXT_POS_INF
            } else {
                TAG_EXT_NEG_INF
            };
            self.writer.u8(tag);
            return Ok(());
        }
        self.writer.u8(TAG_FLOAT);
        match self.opts.float_width {
            FloatWidth::F32 => self.writer.f32(f as f32),
            FloatWidth::F64 => self.writer.f64(f),
        }
        Ok(())
    }

    fn write_arr(&mut self, arr: &[Value]) -> Result<(), OabError> {
        self.writer.u8(TAG_ARR);
        self.writer.vu(arr.len() as u64);
        for item in arr {
            self.write_any(item)?;
        }
        Ok(())
    }

    fn write_obj(&mut self, obj: &[(String, Value)]) -> Result<(), OabError> {
        self.writer.u8(TAG_OBJ);
        self.writer.vu(obj.len() as u64);
        for (key, val) in obj {
            self.write_key(key)?;
            self.write_any(val)?;
        }
        Ok(())
    }

    fn write_key(&mut self, key: &str) -> Result<(), OabError> {
        let index = self.opts.lookup.as_ref().and_then(|l| l.index_of(key));
        match index {
            Some(i) => {
                self.writer.u8(KEY_LOOKUP);
                self.writer.vu(i as u64);
            }
            None => {
                if let Some(on_miss) = &self.opts.on_lookup_miss {
                    on_miss(key);
                }
                self.writer.u8(KEY_INLINE);
                self.write_str_payload(key)?;
            }
        }
        Ok(())
    }

    fn write_str_payload(&mut self, s: &str) -> Result<(), OabError> {
        match self.opts.string_mode {
            StringMode::LengthPrefixed => {
                // Framed by scalar count, not byte count; the bytes of a
                // Rust `str` are already the per-scalar UTF-8 encoding.
                self.writer.vu(s.chars().count() as u64);
                self.writer.buf(s.as_bytes());
                Ok(())
            }
            StringMode::NullTerminated => {
                if s.contains('\0') {
                    return Err(OabError::UnsupportedValue(
                        "U+0000 in null-terminated string mode".to_owned(),
                    ));
                }
                self.writer.buf(s.as_bytes());
                self.writer.u8(0);
                Ok(())
            }
        }
    }
}
