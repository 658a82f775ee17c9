//! hexfield - Fixed-width hexadecimal field codec
//!
//! Encodes typed values (integers, booleans, text, raw bytes) into
//! byte-exact lower-case hexadecimal fragments of agreed widths, and decodes
//! such fragments back. Fragments are concatenated in protocol-defined order
//! to build a binary record.
//!
//! # Quick Start
//!
//! ```rust
//! use hexfield::{PadDirection, encode_integer, encode_text, decode_text};
//!
//! let id = encode_integer(1, Some(2), PadDirection::Leading)?;
//! assert_eq!(id.as_str(), "0001");
//!
//! let name = encode_text("AB", Some(4), PadDirection::Trailing, false)?;
//! assert_eq!(name.as_str(), "41420000");
//!
//! assert_eq!(decode_text("486900", true)?, "Hi");
//! # Ok::<(), hexfield::Error>(())
//! ```
//!
//! # Records
//!
//! [`RecordLayout`] sequences several [`FieldSpec`]s so a whole record can be
//! encoded from a slice of [`FieldValue`]s, or sliced and decoded back.
//!
//! ```rust
//! use hexfield::{FieldKind, FieldSpec, FieldValue, PadDirection, RecordLayout};
//!
//! let layout = RecordLayout::new()
//!     .field(FieldSpec::new("room", FieldKind::Integer, Some(2), PadDirection::Leading))
//!     .field(FieldSpec::new("open", FieldKind::Boolean, Some(1), PadDirection::Leading))
//!     .field(FieldSpec::new(
//!         "code",
//!         FieldKind::Text { null_terminated: false },
//!         Some(4),
//!         PadDirection::Trailing,
//!     ));
//!
//! let values = vec![
//!     FieldValue::from(12u64),
//!     FieldValue::from(true),
//!     FieldValue::from("A1"),
//! ];
//! let record = layout.encode(&values)?;
//! assert_eq!(record.as_str(), "000c0141310000");
//! assert_eq!(layout.decode(record.as_str())?, values);
//! # Ok::<(), hexfield::Error>(())
//! ```
//!
//! # Features
//!
//! - **Explicit width policy** - overflowing a field is an error, never truncation
//! - **Explicit padding direction** - `Leading` or `Trailing`, chosen by the caller
//! - **Single-byte text** - characters above U+00FF are rejected
//! - **`serde`** - optional derives for layouts and values

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod field;

pub use field::{
    DecodeError, Error, ErrorKind, FieldKind, FieldSpec, FieldValue, HexString, PadDirection,
    RecordLayout, Result, decode_boolean, decode_bytes, decode_integer, decode_text, empty_field,
    encode_boolean, encode_integer, encode_raw_bytes, encode_text,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
