//! Field codec error types

use thiserror::Error;

/// Field codec errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Character cannot be represented in a single byte
    #[error("character {character:?} at position {position} is outside the single-byte range")]
    Encoding {
        /// Offending character
        character: char,
        /// Character index within the text
        position: usize,
    },

    /// Natural encoding does not fit in the field
    #[error("value needs {needed} bytes but the field is {width} bytes wide")]
    Overflow {
        /// Bytes required by the natural encoding
        needed: usize,
        /// Requested field width
        width: usize,
    },

    /// Malformed hex input
    #[error("decoding error: {0}")]
    Decoding(#[from] DecodeError),

    /// Failure inside a named record field
    #[error("field `{field}`: {source}")]
    Field {
        /// Field name
        field: String,
        /// Underlying error
        #[source]
        source: Box<Error>,
    },

    /// Number of values does not match the record layout
    #[error("record has {expected} fields, got {got} values")]
    FieldCount {
        /// Fields in the layout
        expected: usize,
        /// Values supplied
        got: usize,
    },

    /// Value kind does not match the field kind
    #[error("field `{field}` expects {expected}, got {got}")]
    KindMismatch {
        /// Field name
        field: String,
        /// Kind declared by the layout
        expected: &'static str,
        /// Kind of the supplied value
        got: &'static str,
    },

    /// Variable-width field in a position that cannot be sliced
    #[error("field `{field}` has no width and is not the last field")]
    UnboundedField {
        /// Field name
        field: String,
    },

    /// Record input shorter or longer than the layout
    #[error("record needs {expected} bytes, got {got}")]
    RecordLength {
        /// Bytes described by the layout
        expected: usize,
        /// Bytes supplied
        got: usize,
    },
}

/// Reasons a hex fragment cannot be decoded
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// Hex input has an odd number of digits
    #[error("odd number of hex digits: {len}")]
    OddLength {
        /// Input length
        len: usize,
    },

    /// Non-hexadecimal character in the input
    #[error("invalid hex digit {digit:?} at position {position}")]
    InvalidDigit {
        /// Offending character
        digit: char,
        /// Offset within the input
        position: usize,
    },

    /// Integer magnitude wider than `u64`
    #[error("integer needs {bytes} bytes (max {max})", max = super::MAX_INTEGER_WIDTH)]
    IntegerTooWide {
        /// Significant bytes found
        bytes: usize,
    },

    /// Boolean field holds something other than 0 or 1
    #[error("invalid boolean value: {value}")]
    InvalidBoolean {
        /// Decoded integer
        value: u64,
    },
}

impl DecodeError {
    /// Map a `hex` failure onto the input's characters
    ///
    /// `hex` reports byte offsets and checks length before digits; positions
    /// here are character indices and invalid digits are reported first.
    pub(crate) fn from_hex(err: hex::FromHexError, input: &str) -> Self {
        let invalid = input
            .chars()
            .enumerate()
            .find(|(_, c)| !c.is_ascii_hexdigit());
        match (invalid, err) {
            (Some((position, digit)), _) => Self::InvalidDigit { digit, position },
            (None, hex::FromHexError::InvalidHexCharacter { c, index }) => Self::InvalidDigit {
                digit: c,
                position: index,
            },
            (None, _) => Self::OddLength {
                len: input.chars().count(),
            },
        }
    }
}

/// Error categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Value not representable under the encoding rules
    Encoding,
    /// Value wider than its field
    Overflow,
    /// Malformed hex input
    Decoding,
    /// Record layout contract violated
    Layout,
}

impl Error {
    /// Classify the error, looking through field context
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Encoding { .. } => ErrorKind::Encoding,
            Self::Overflow { .. } => ErrorKind::Overflow,
            Self::Decoding(_) => ErrorKind::Decoding,
            Self::Field { source, .. } => source.kind(),
            Self::FieldCount { .. }
            | Self::KindMismatch { .. }
            | Self::UnboundedField { .. }
            | Self::RecordLength { .. } => ErrorKind::Layout,
        }
    }

    /// Attach the name of the field that failed
    #[must_use]
    pub(crate) fn in_field(self, field: &str) -> Self {
        Self::Field {
            field: field.to_owned(),
            source: Box::new(self),
        }
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
