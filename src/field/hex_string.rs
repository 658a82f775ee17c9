//! Lower-case hexadecimal strings

use std::fmt;
use std::str::FromStr;

use super::{DecodeError, Error, HEX_DIGITS_PER_BYTE, Result};

/// Even-length, lower-case hexadecimal string (two digits per byte)
///
/// Every value produced by this crate upholds the invariant; foreign input
/// enters through [`HexString::parse`], which validates and lower-cases it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct HexString(String);

impl HexString {
    /// Create an empty hex string
    #[must_use]
    pub const fn new() -> Self {
        Self(String::new())
    }

    /// Encode bytes
    #[must_use]
    pub fn from_bytes(bytes: impl AsRef<[u8]>) -> Self {
        Self(hex::encode(bytes))
    }

    /// Parse foreign hex input (case-insensitive)
    pub fn parse(input: &str) -> Result<Self> {
        let bytes = hex::decode(input).map_err(|err| DecodeError::from_hex(err, input))?;
        Ok(Self::from_bytes(bytes))
    }

    /// `width` zero bytes
    #[must_use]
    pub fn zeroes(width: usize) -> Self {
        Self("00".repeat(width))
    }

    /// Get the digits
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Take the digits
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }

    /// Number of bytes represented
    #[must_use]
    pub fn byte_len(&self) -> usize {
        self.0.len() / HEX_DIGITS_PER_BYTE
    }

    /// Check if empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Append another fragment
    pub fn push(&mut self, fragment: &HexString) {
        self.0.push_str(&fragment.0);
    }

    /// Decode back to bytes
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        hex::decode(&self.0).map_err(|err| DecodeError::from_hex(err, &self.0).into())
    }
}

impl fmt::Display for HexString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for HexString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for HexString {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl From<HexString> for String {
    fn from(hex: HexString) -> Self {
        hex.0
    }
}

impl<'a> FromIterator<&'a HexString> for HexString {
    fn from_iter<I: IntoIterator<Item = &'a HexString>>(iter: I) -> Self {
        let mut joined = Self::new();
        for fragment in iter {
            joined.push(fragment);
        }
        joined
    }
}
