//! Field value types and padding policy

use std::fmt;

use bytes::Bytes;

/// Where zero padding goes when a value is narrower than its field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PadDirection {
    /// Zero bytes before the value (right-aligned)
    Leading,
    /// Zero bytes after the value (left-aligned)
    Trailing,
}

impl fmt::Display for PadDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Leading => "Leading",
            Self::Trailing => "Trailing",
        };
        write!(f, "{name}")
    }
}

/// Kind of value a record field carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FieldKind {
    /// Unsigned big-endian integer
    Integer,
    /// 0 or 1
    Boolean,
    /// Single-byte characters
    Text {
        /// Append a zero byte after the characters
        null_terminated: bool,
    },
    /// Opaque bytes
    RawBytes,
}

impl FieldKind {
    /// Kind name used in error messages
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Integer => "integer",
            Self::Boolean => "boolean",
            Self::Text { .. } => "text",
            Self::RawBytes => "raw bytes",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Typed application value destined for one field
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FieldValue {
    /// Non-negative integer
    Integer(u64),
    /// Boolean flag
    Boolean(bool),
    /// Text of single-byte characters
    Text(String),
    /// Raw bytes
    RawBytes(Bytes),
}

impl FieldValue {
    /// Kind name used in error messages
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Integer(_) => FieldKind::Integer.name(),
            Self::Boolean(_) => FieldKind::Boolean.name(),
            Self::Text(_) => FieldKind::Text {
                null_terminated: false,
            }
            .name(),
            Self::RawBytes(_) => FieldKind::RawBytes.name(),
        }
    }

    /// Get the integer, if this is one
    #[must_use]
    pub const fn as_integer(&self) -> Option<u64> {
        match self {
            Self::Integer(value) => Some(*value),
            _ => None,
        }
    }

    /// Get the boolean, if this is one
    #[must_use]
    pub const fn as_boolean(&self) -> Option<bool> {
        match self {
            Self::Boolean(value) => Some(*value),
            _ => None,
        }
    }

    /// Get the text, if this is text
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            _ => None,
        }
    }

    /// Get the raw bytes, if this is raw bytes
    #[must_use]
    pub fn as_raw_bytes(&self) -> Option<&Bytes> {
        match self {
            Self::RawBytes(value) => Some(value),
            _ => None,
        }
    }
}

impl From<u64> for FieldValue {
    fn from(value: u64) -> Self {
        Self::Integer(value)
    }
}

impl From<u32> for FieldValue {
    fn from(value: u32) -> Self {
        Self::Integer(u64::from(value))
    }
}

impl From<u16> for FieldValue {
    fn from(value: u16) -> Self {
        Self::Integer(u64::from(value))
    }
}

impl From<u8> for FieldValue {
    fn from(value: u8) -> Self {
        Self::Integer(u64::from(value))
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<Bytes> for FieldValue {
    fn from(value: Bytes) -> Self {
        Self::RawBytes(value)
    }
}

impl From<Vec<u8>> for FieldValue {
    fn from(value: Vec<u8>) -> Self {
        Self::RawBytes(Bytes::from(value))
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{value}"),
            Self::Boolean(value) => write!(f, "{value}"),
            Self::Text(value) => write!(f, "{value:?}"),
            Self::RawBytes(value) => write!(f, "0x{}", hex::encode(value)),
        }
    }
}
