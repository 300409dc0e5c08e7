//! Wire-format tag bytes.
//!
//! Every value on the wire is one tag byte followed by a tag-specific
//! payload. Object keys carry their own one-byte sub-tag. The extended
//! non-finite tags exist only behind the `allow_non_finite` compatibility
//! flag and are not part of the canonical table.

/// Null, no payload.
pub const TAG_NULL: u8 = 0;
/// Undefined, no payload.
pub const TAG_UNDEFINED: u8 = 1;
/// Boolean false, no payload.
pub const TAG_FALSE: u8 = 2;
/// Boolean true, no payload.
pub const TAG_TRUE: u8 = 3;
/// Positive integer, varint magnitude.
pub const TAG_POS_INT: u8 = 4;
/// Negative integer, varint magnitude (negated on decode).
pub const TAG_NEG_INT: u8 = 5;
/// Float, 4 or 8 big-endian bytes per the configured width.
pub const TAG_FLOAT: u8 = 6;
/// String, varint scalar count followed by that many UTF-8 scalars.
pub const TAG_STR: u8 = 7;
/// Array, varint element count followed by that many values.
pub const TAG_ARR: u8 = 8;
/// Object, varint pair count followed by that many (key, value) pairs.
pub const TAG_OBJ: u8 = 9;

/// NaN, no payload. Extended tag, `allow_non_finite` only.
pub const TAG_EXT_NAN: u8 = 10;
/// +Infinity, no payload. Extended tag, `allow_non_finite` only.
pub const TAG_EXT_POS_INF: u8 = 11;
/// -Infinity, no payload. Extended tag, `allow_non_finite` only.
pub const TAG_EXT_NEG_INF: u8 = 12;

/// Object-key sub-tag: an inline string follows (same framing as `TAG_STR`).
pub const KEY_INLINE: u8 = 0;
/// Object-key sub-tag: a varint lookup-table index follows.
pub const KEY_LOOKUP: u8 = 1;
