//! Codec error type.

use oab_buffers::BufferError;
use thiserror::Error;

/// Error type for OAB encoding and decoding operations.
///
/// Every error is surfaced synchronously to the caller of the failing
/// `write`/`read`; the codec never swallows an error in its default strict
/// configuration. The permissive `fail_on_*` flags convert specific classes
/// into substituted values instead, and are never the default.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum OabError {
    /// A read ran past the end of the input buffer (tag, count, or payload).
    #[error("unexpected end of input buffer")]
    BufferUnderrun,
    /// A string payload contained an unrecognized UTF-8 leading byte.
    #[error("malformed UTF-8 in string payload")]
    MalformedUtf8,
    /// The decoder hit a tag byte outside the recognized table.
    #[error("unknown tag byte 0x{0:02x}")]
    UnknownTag(u8),
    /// A lookup-tagged key referenced an index the table does not hold.
    #[error("lookup index {0} out of range")]
    LookupOutOfRange(u64),
    /// The encoder was handed a value the wire format cannot carry, or the
    /// decoder a payload no [`Value`](crate::Value) variant can represent.
    #[error("unsupported value: {0}")]
    UnsupportedValue(String),
    /// A negative quantity was passed to the unsigned varint encoder.
    #[error("cannot encode negative value {0} as unsigned varint")]
    NegativeVarint(i64),
}

impl From<BufferError> for OabError {
    fn from(err: BufferError) -> Self {
        match err {
            BufferError::EndOfBuffer => OabError::BufferUnderrun,
            BufferError::InvalidUtf8 => OabError::MalformedUtf8,
            BufferError::ScalarOutOfRange => {
                OabError::UnsupportedValue("Unicode scalar value above U+10FFFF".to_owned())
            }
        }
    }
}
