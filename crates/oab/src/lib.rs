//! OAB — a compact tagged binary serialization codec.
//!
//! Converts JSON-like values to and from a dense byte stream: one tag byte
//! per value, LEB128 varints for integers and counts, strings framed by
//! Unicode scalar count, and an optional out-of-band [`Lookup`] table that
//! shrinks repeated object keys to varint indices. Built for wire and
//! storage contexts where payload size and decode speed matter more than
//! human readability.
//!
//! ```
//! use oab::{OabDecoder, OabEncoder, Value};
//!
//! let mut encoder = OabEncoder::new();
//! encoder
//!     .write(&Value::Str("Hello!".into()))
//!     .unwrap()
//!     .write(&Value::Integer(123))
//!     .unwrap();
//! let bytes = encoder.flush();
//!
//! let mut decoder = OabDecoder::new(&bytes);
//! assert_eq!(decoder.read().unwrap(), Value::Str("Hello!".into()));
//! assert_eq!(decoder.read().unwrap(), Value::Integer(123));
//! ```

pub mod constants;

mod decoder;
mod encoder;
mod error;
mod lookup;
mod options;
mod value;

pub use decoder::OabDecoder;
pub use encoder::OabEncoder;
pub use error::OabError;
pub use lookup::Lookup;
pub use options::{FloatWidth, LookupMissFn, OabOptions, StringMode};
pub use value::Value;
