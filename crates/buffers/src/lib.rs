//! Byte-level primitives for the OAB binary codec.
//!
//! This crate provides the growable [`Writer`] and cursor-tracking [`Reader`]
//! the tagged-value codec is built on, together with the two wire primitives
//! every OAB payload is made of: LEB128 variable-length integers
//! ([`varint`]) and scalar-granular UTF-8 ([`utf8`]).

mod reader;
mod writer;

pub mod utf8;
pub mod varint;

pub use reader::Reader;
pub use writer::Writer;

use thiserror::Error;

/// Error type for byte-level buffer operations.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BufferError {
    /// A read ran past the end of the input buffer.
    #[error("unexpected end of buffer")]
    EndOfBuffer,
    /// A leading byte matched none of the recognized UTF-8 bit patterns.
    #[error("invalid UTF-8 sequence")]
    InvalidUtf8,
    /// A codepoint above U+10FFFF was given to the UTF-8 encoder.
    #[error("Unicode scalar value out of range")]
    ScalarOutOfRange,
}
