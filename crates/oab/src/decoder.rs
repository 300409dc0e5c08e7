//! `OabDecoder` — recursive tagged-value decoder.

use oab_buffers::{BufferError, Reader};

use crate::constants::*;
use crate::{FloatWidth, OabError, OabOptions, StringMode, Value};

/// Key substituted for an out-of-range lookup index under the permissive
/// flag. Historical streams produced this literal when an undefined key was
/// coerced to a property name.
const UNDEFINED_KEY: &str = "undefined";

/// Decodes OAB wire bytes back into [`Value`] trees.
///
/// The decoder owns a monotonic cursor over an immutable input slice.
/// [`read`](OabDecoder::read) consumes one top-level value per call, so a
/// concatenation of values decodes through repeated calls;
/// [`rest`](OabDecoder::rest) exposes the unread tail as a zero-copy view.
///
/// Under the strict default configuration every malformed input surfaces an
/// [`OabError`]. The permissive `fail_on_*` flags substitute defaults
/// instead — garbage by design, for byte-exact replay of historical
/// non-conformant streams — and are guaranteed to terminate because the
/// cursor never rewinds past the substitution point.
pub struct OabDecoder<'a> {
    pub reader: Reader<'a>,
    opts: OabOptions,
}

impl<'a> OabDecoder<'a> {
    /// Creates a decoder over `input` with the canonical strict
    /// configuration.
    pub fn new(input: &'a [u8]) -> Self {
        Self::with_options(input, OabOptions::new())
    }

    /// Creates a decoder over `input` with the given configuration.
    pub fn with_options(input: &'a [u8], opts: OabOptions) -> Self {
        Self {
            reader: Reader::new(input),
            opts,
        }
    }

    /// Consumes one value from the current cursor position.
    pub fn read(&mut self) -> Result<Value, OabError> {
        self.read_any()
    }

    /// Decodes one value and converts it to JSON.
    pub fn read_json(&mut self) -> Result<serde_json::Value, OabError> {
        Ok(self.read_any()?.into())
    }

    /// The unread tail of the input.
    pub fn rest(&self) -> &'a [u8] {
        self.reader.rest()
    }

    fn read_any(&mut self) -> Result<Value, OabError> {
        let tag = match self.reader.try_u8() {
            Ok(tag) => tag,
            Err(_) if !self.opts.fail_on_buffer_underrun => return Ok(Value::Null),
            Err(e) => return Err(e.into()),
        };
        match tag {
            TAG_NULL => Ok(Value::Null),
            TAG_UNDEFINED => Ok(Value::Undefined),
            TAG_FALSE => Ok(Value::Bool(false)),
            TAG_TRUE => Ok(Value::Bool(true)),
            TAG_POS_INT => {
                let magnitude = self.read_vu()?;
                Ok(if magnitude <= i64::MAX as u64 {
                    Value::Integer(magnitude as i64)
                } else {
                    Value::UInteger(magnitude)
                })
            }
            TAG_NEG_INT => {
                let magnitude = self.read_vu()?;
                if magnitude <= i64::MAX as u64 {
                    Ok(Value::Integer(-(magnitude as i64)))
                } else if magnitude == (i64::MAX as u64) + 1 {
                    Ok(Value::Integer(i64::MIN))
                } else {
                    Err(OabError::UnsupportedValue(format!(
                        "negative magnitude {magnitude} exceeds i64"
                    )))
                }
            }
            TAG_FLOAT => self.read_float(),
            TAG_STR => Ok(Value::Str(self.read_str_payload()?)),
            TAG_ARR => self.read_arr(),
            TAG_OBJ => self.read_obj(),
            TAG_EXT_NAN if self.opts.allow_non_finite => Ok(Value::Float(f64::NAN)),
            TAG_EXT_POS_INF if self.opts.allow_non_finite => Ok(Value::Float(f64::INFINITY)),
            TAG_EXT_NEG_INF if self.opts.allow_non_finite => Ok(Value::Float(f64::NEG_INFINITY)),
            _ if !self.opts.fail_on_unknown_tag => Ok(Value::Undefined),
            _ => Err(OabError::UnknownTag(tag)),
        }
    }

    fn read_vu(&mut self) -> Result<u64, OabError> {
        match self.reader.try_vu() {
            Ok(n) => Ok(n),
            Err(_) if !self.opts.fail_on_buffer_underrun => Ok(self.reader.vu_lenient()),
            Err(e) => Err(e.into()),
        }
    }

    fn read_float(&mut self) -> Result<Value, OabError> {
        let result = match self.opts.float_width {
            FloatWidth::F32 => self.reader.try_f32().map(f64::from),
            FloatWidth::F64 => self.reader.try_f64(),
        };
        match result {
            Ok(f) => Ok(Value::Float(f)),
            Err(_) if !self.opts.fail_on_buffer_underrun => {
                self.reader.skip(self.reader.size());
                Ok(Value::Float(0.0))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Decodes one scalar, honoring the permissive flags. `Ok(None)` means
    /// the input ended under permissive underrun handling and the string
    /// should stop here.
    fn read_scalar(&mut self) -> Result<Option<char>, OabError> {
        match self.reader.try_utf8_scalar() {
            Ok(cp) => match char::from_u32(cp) {
                Some(c) => Ok(Some(c)),
                // Surrogate halves decode structurally but are not scalar
                // values.
                None if !self.opts.fail_on_malformed_utf8 => {
                    Ok(Some(char::REPLACEMENT_CHARACTER))
                }
                None => Err(OabError::MalformedUtf8),
            },
            Err(BufferError::InvalidUtf8) => {
                if self.opts.fail_on_malformed_utf8 {
                    Err(OabError::MalformedUtf8)
                } else {
                    self.reader.skip(1);
                    Ok(Some(char::REPLACEMENT_CHARACTER))
                }
            }
            Err(BufferError::EndOfBuffer) => {
                if self.opts.fail_on_buffer_underrun {
                    Err(OabError::BufferUnderrun)
                } else {
                    Ok(None)
                }
            }
            Err(e) => Err(e.into()),
        }
    }

    fn read_str_payload(&mut self) -> Result<String, OabError> {
        match self.opts.string_mode {
            StringMode::LengthPrefixed => {
                let count = self.read_vu()?;
                let mut out = String::with_capacity((count as usize).min(self.reader.size()));
                for _ in 0..count {
                    match self.read_scalar()? {
                        Some(c) => out.push(c),
                        None => break,
                    }
                }
                Ok(out)
            }
            StringMode::NullTerminated => {
                let mut out = String::new();
                loop {
                    match self.read_scalar()? {
                        Some('\0') | None => break,
                        Some(c) => out.push(c),
                    }
                }
                Ok(out)
            }
        }
    }

    fn read_arr(&mut self) -> Result<Value, OabError> {
        let count = self.read_vu()?;
        // A lying count field cannot allocate more than the input could
        // possibly hold.
        let mut arr = Vec::with_capacity((count as usize).min(self.reader.size()));
        for _ in 0..count {
            if self.reader.size() == 0 && !self.opts.fail_on_buffer_underrun {
                break;
            }
            arr.push(self.read_any()?);
        }
        Ok(Value::Array(arr))
    }

    fn read_obj(&mut self) -> Result<Value, OabError> {
        let count = self.read_vu()?;
        let mut obj = Vec::with_capacity((count as usize).min(self.reader.size()));
        for _ in 0..count {
            if self.reader.size() == 0 && !self.opts.fail_on_buffer_underrun {
                break;
            }
            let key = self.read_key()?;
            let val = self.read_any()?;
            obj.push((key, val));
        }
        Ok(Value::Object(obj))
    }

    fn read_key(&mut self) -> Result<String, OabError> {
        let sub_tag = match self.reader.try_u8() {
            Ok(b) => b,
            Err(_) if !self.opts.fail_on_buffer_underrun => return Ok(String::new()),
            Err(e) => return Err(e.into()),
        };
        match sub_tag {
            KEY_INLINE => self.read_str_payload(),
            KEY_LOOKUP => {
                let index = self.read_vu()?;
                let entry = self
                    .opts
                    .lookup
                    .as_ref()
                    .and_then(|l| l.get(index as usize));
                match entry {
                    Some(key) => Ok(key.to_owned()),
                    None if !self.opts.fail_on_lookup_out_of_range => {
                        Ok(UNDEFINED_KEY.to_owned())
                    }
                    None => Err(OabError::LookupOutOfRange(index)),
                }
            }
            other => Err(OabError::UnknownTag(other)),
        }
    }
}
