//! Field codec core implementation
//!
//! This module provides the hex representation, field value types, the
//! pure encode/decode functions, and record layouts built on them.

mod codec;
mod error;
mod hex_string;
mod record;
mod types;

pub use codec::{
    decode_boolean, decode_bytes, decode_integer, decode_text, empty_field, encode_boolean,
    encode_integer, encode_raw_bytes, encode_text,
};
pub use error::{DecodeError, Error, ErrorKind, Result};
pub use hex_string::HexString;
pub use record::{FieldSpec, RecordLayout};
pub use types::{FieldKind, FieldValue, PadDirection};

/// Hex digits used to represent one byte
pub const HEX_DIGITS_PER_BYTE: usize = 2;

/// Widest integer field that can be decoded (`u64`)
pub const MAX_INTEGER_WIDTH: usize = 8;

/// Text terminator byte
pub const NULL_TERMINATOR: u8 = 0;
