//! Record layouts
//!
//! A record is an ordered sequence of fields whose hex fragments are
//! concatenated on encode and sliced by width on decode.

use bytes::Bytes;
use tracing::{debug, instrument, trace};

use super::codec::{self, latin1, trim_leading_zeros, trim_trailing_zeros};
use super::{
    Error, FieldKind, FieldValue, HEX_DIGITS_PER_BYTE, HexString, NULL_TERMINATOR, PadDirection,
    Result,
};

/// One positional field of a record
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldSpec {
    name: String,
    kind: FieldKind,
    width: Option<usize>,
    direction: PadDirection,
}

impl FieldSpec {
    /// Create a field; `width: None` makes it variable-length
    pub fn new(
        name: impl Into<String>,
        kind: FieldKind,
        width: Option<usize>,
        direction: PadDirection,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            width,
            direction,
        }
    }

    /// Get field name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get field kind
    #[must_use]
    pub const fn kind(&self) -> FieldKind {
        self.kind
    }

    /// Get field width in bytes
    #[must_use]
    pub const fn width(&self) -> Option<usize> {
        self.width
    }

    /// Get padding direction
    #[must_use]
    pub const fn direction(&self) -> PadDirection {
        self.direction
    }

    /// Encode a value into this field
    ///
    /// Errors are returned bare; [`RecordLayout`] adds the field name.
    pub fn encode(&self, value: &FieldValue) -> Result<HexString> {
        let (width, direction) = (self.width, self.direction);
        match (self.kind, value) {
            (FieldKind::Integer, FieldValue::Integer(v)) => {
                codec::encode_integer(*v, width, direction)
            }
            (FieldKind::Boolean, FieldValue::Boolean(v)) => {
                codec::encode_boolean(*v, width, direction)
            }
            (FieldKind::Text { null_terminated }, FieldValue::Text(v)) => {
                codec::encode_text(v, width, direction, null_terminated)
            }
            (FieldKind::RawBytes, FieldValue::RawBytes(v)) => {
                codec::encode_raw_bytes(v, width, direction)
            }
            (kind, value) => Err(Error::KindMismatch {
                field: self.name.clone(),
                expected: kind.name(),
                got: value.kind_name(),
            }),
        }
    }

    /// Decode this field from its hex fragment
    ///
    /// Text padding zeros are stripped on the padded side, along with the
    /// terminator for null-terminated text. Raw bytes keep the whole field.
    pub fn decode(&self, hex: &str) -> Result<FieldValue> {
        match self.kind {
            FieldKind::Integer => {
                codec::decode_integer(hex, self.direction).map(FieldValue::Integer)
            }
            FieldKind::Boolean => {
                codec::decode_boolean(hex, self.direction).map(FieldValue::Boolean)
            }
            FieldKind::Text { null_terminated } => {
                let bytes = codec::decode_bytes(hex)?;
                let text = self.strip_text_padding(&bytes, null_terminated);
                Ok(FieldValue::Text(latin1(text)))
            }
            FieldKind::RawBytes => {
                codec::decode_bytes(hex).map(|bytes| FieldValue::RawBytes(Bytes::from(bytes)))
            }
        }
    }

    fn strip_text_padding<'a>(&self, bytes: &'a [u8], null_terminated: bool) -> &'a [u8] {
        // Trailing padding also swallows the terminator.
        let text = match (self.width, self.direction) {
            (Some(_), PadDirection::Trailing) => trim_trailing_zeros(bytes),
            (Some(_), PadDirection::Leading) => trim_leading_zeros(bytes),
            (None, _) => bytes,
        };
        match text.split_last() {
            Some((&NULL_TERMINATOR, rest)) if null_terminated => rest,
            _ => text,
        }
    }
}

/// Ordered field layout of a record
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RecordLayout {
    fields: Vec<FieldSpec>,
}

impl RecordLayout {
    /// Create an empty layout
    #[must_use]
    pub const fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Append a field (builder style)
    #[must_use]
    pub fn field(mut self, spec: FieldSpec) -> Self {
        self.fields.push(spec);
        self
    }

    /// Append a field
    pub fn push(&mut self, spec: FieldSpec) {
        self.fields.push(spec);
    }

    /// Get fields in wire order
    #[must_use]
    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// Number of fields
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if there are no fields
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Total record width in bytes, if every field is fixed-width
    ///
    /// `None` also when the widths do not sum within `usize`.
    #[must_use]
    pub fn fixed_width(&self) -> Option<usize> {
        self.fields
            .iter()
            .try_fold(0usize, |total, spec| total.checked_add(spec.width()?))
    }

    /// Encode a full record; fails at the first invalid field
    #[instrument(level = "trace", skip_all, fields(fields = self.fields.len()))]
    pub fn encode(&self, values: &[FieldValue]) -> Result<HexString> {
        if values.len() != self.fields.len() {
            return Err(Error::FieldCount {
                expected: self.fields.len(),
                got: values.len(),
            });
        }

        let mut record = HexString::new();
        for (spec, value) in self.fields.iter().zip(values) {
            trace!(
                field = spec.name(),
                width = ?spec.width(),
                offset = record.byte_len(),
                "encoding field"
            );
            let fragment = spec.encode(value).map_err(|err| {
                debug!(field = spec.name(), error = %err, "record encoding failed");
                err.in_field(spec.name())
            })?;
            record.push(&fragment);
        }

        Ok(record)
    }

    /// Slice and decode a full record
    ///
    /// Only the last field may be variable-width; it takes the remainder.
    #[instrument(level = "trace", skip_all, fields(fields = self.fields.len(), len = hex.len()))]
    pub fn decode(&self, hex: &str) -> Result<Vec<FieldValue>> {
        let record = HexString::parse(hex)?;
        let digits = record.as_str();
        let total = record.byte_len();

        let mut values = Vec::with_capacity(self.fields.len());
        let mut offset = 0;
        let last = self.fields.len().saturating_sub(1);

        for (index, spec) in self.fields.iter().enumerate() {
            let width = match spec.width() {
                Some(width) => width,
                None if index == last => total.saturating_sub(offset),
                None => {
                    return Err(Error::UnboundedField {
                        field: spec.name().to_owned(),
                    });
                }
            };

            // `end <= total` keeps the digit offsets below within the input.
            let Some(end) = offset.checked_add(width).filter(|&end| end <= total) else {
                return Err(Error::RecordLength {
                    expected: self.expected_len(offset, width),
                    got: total,
                });
            };

            trace!(field = spec.name(), width, offset, "decoding field");
            let fragment = &digits[offset * HEX_DIGITS_PER_BYTE..end * HEX_DIGITS_PER_BYTE];
            let value = spec.decode(fragment).map_err(|err| {
                debug!(field = spec.name(), error = %err, "record decoding failed");
                err.in_field(spec.name())
            })?;
            values.push(value);
            offset = end;
        }

        if offset != total {
            return Err(Error::RecordLength {
                expected: offset,
                got: total,
            });
        }

        Ok(values)
    }

    // Best description of the required length when input runs short.
    fn expected_len(&self, offset: usize, width: usize) -> usize {
        self.fixed_width()
            .unwrap_or_else(|| offset.saturating_add(width))
    }
}
