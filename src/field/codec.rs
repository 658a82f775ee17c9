//! Field codec (encode/decode)
//!
//! Pure, stateless conversions between typed values and hex fragments.
//! Nothing here allocates shared state, performs I/O, or logs; every
//! precondition violation is returned as an [`Error`].

use bytes::{BufMut, BytesMut};

use super::{
    DecodeError, Error, HexString, MAX_INTEGER_WIDTH, NULL_TERMINATOR, PadDirection, Result,
};

/// Encode an unsigned integer
///
/// The natural encoding is the minimal big-endian form, at least one byte
/// (zero encodes as `00`). With a `width`, the result is padded with zero
/// bytes on the `direction` side to exactly `width` bytes.
///
/// # Errors
///
/// Returns [`Error::Overflow`] if the natural encoding is wider than `width`.
pub fn encode_integer(
    value: u64,
    width: Option<usize>,
    direction: PadDirection,
) -> Result<HexString> {
    let bytes = value.to_be_bytes();
    let leading_zeros = (value.leading_zeros() / 8) as usize;
    // Keep at least one byte for zero.
    let start = leading_zeros.min(bytes.len() - 1);
    fit(&bytes[start..], width, direction)
}

/// Encode a boolean as the integer 1 or 0
pub fn encode_boolean(
    value: bool,
    width: Option<usize>,
    direction: PadDirection,
) -> Result<HexString> {
    encode_integer(u64::from(value), width, direction)
}

/// Encode text of single-byte characters
///
/// Each character becomes one byte with its code point. With
/// `null_terminate`, a zero byte is appended unless the text already ends
/// with one; the terminator counts toward `width`.
///
/// # Errors
///
/// - [`Error::Encoding`] if a character is above U+00FF
/// - [`Error::Overflow`] if characters plus terminator exceed `width`
pub fn encode_text(
    value: &str,
    width: Option<usize>,
    direction: PadDirection,
    null_terminate: bool,
) -> Result<HexString> {
    let mut natural = Vec::with_capacity(value.len() + 1);
    for (position, character) in value.chars().enumerate() {
        let byte =
            u8::try_from(character).map_err(|_| Error::Encoding { character, position })?;
        natural.push(byte);
    }

    if null_terminate && natural.last() != Some(&NULL_TERMINATOR) {
        natural.push(NULL_TERMINATOR);
    }

    fit(&natural, width, direction)
}

/// Encode raw bytes as-is
///
/// # Errors
///
/// Returns [`Error::Overflow`] if `bytes` is longer than `width`.
pub fn encode_raw_bytes(
    bytes: &[u8],
    width: Option<usize>,
    direction: PadDirection,
) -> Result<HexString> {
    fit(bytes, width, direction)
}

/// `width` zero bytes
#[must_use]
pub fn empty_field(width: usize) -> HexString {
    HexString::zeroes(width)
}

/// Decode a hex fragment into bytes (case-insensitive)
///
/// # Errors
///
/// Returns [`Error::Decoding`] on odd length or a non-hex character.
pub fn decode_bytes(hex: &str) -> Result<Vec<u8>> {
    hex::decode(hex).map_err(|err| DecodeError::from_hex(err, hex).into())
}

/// Decode a hex fragment into text, one character per byte
///
/// With `strip_null_terminator`, a single final zero byte is dropped.
pub fn decode_text(hex: &str, strip_null_terminator: bool) -> Result<String> {
    let mut bytes = decode_bytes(hex)?;
    if strip_null_terminator && bytes.last() == Some(&NULL_TERMINATOR) {
        bytes.pop();
    }
    Ok(latin1(&bytes))
}

/// Decode a big-endian unsigned integer field
///
/// With [`PadDirection::Trailing`], trailing zero bytes are treated as
/// padding and dropped first, so integers whose natural encoding ends in a
/// zero byte (256, 65536, ...) only round-trip with leading padding.
///
/// # Errors
///
/// - [`Error::Decoding`] on malformed hex
/// - [`DecodeError::IntegerTooWide`] if the magnitude needs more than 8 bytes
pub fn decode_integer(hex: &str, direction: PadDirection) -> Result<u64> {
    let bytes = decode_bytes(hex)?;
    let field = match direction {
        PadDirection::Leading => bytes.as_slice(),
        PadDirection::Trailing => trim_trailing_zeros(&bytes),
    };

    let significant = trim_leading_zeros(field);
    if significant.len() > MAX_INTEGER_WIDTH {
        return Err(DecodeError::IntegerTooWide {
            bytes: significant.len(),
        }
        .into());
    }

    Ok(significant
        .iter()
        .fold(0u64, |acc, &byte| (acc << 8) | u64::from(byte)))
}

/// Decode a boolean field (0 or 1)
///
/// # Errors
///
/// Returns [`DecodeError::InvalidBoolean`] for any other value.
pub fn decode_boolean(hex: &str, direction: PadDirection) -> Result<bool> {
    match decode_integer(hex, direction)? {
        0 => Ok(false),
        1 => Ok(true),
        value => Err(DecodeError::InvalidBoolean { value }.into()),
    }
}

/// Pad a natural encoding to `width` bytes
fn fit(natural: &[u8], width: Option<usize>, direction: PadDirection) -> Result<HexString> {
    let Some(width) = width else {
        return Ok(HexString::from_bytes(natural));
    };

    let needed = natural.len();
    if needed > width {
        return Err(Error::Overflow { needed, width });
    }

    let padding = width - needed;
    let mut field = BytesMut::with_capacity(width);
    match direction {
        PadDirection::Leading => {
            field.put_bytes(0, padding);
            field.put_slice(natural);
        }
        PadDirection::Trailing => {
            field.put_slice(natural);
            field.put_bytes(0, padding);
        }
    }

    Ok(HexString::from_bytes(field))
}

pub(crate) fn trim_leading_zeros(bytes: &[u8]) -> &[u8] {
    let start = bytes.iter().take_while(|&&b| b == 0).count();
    &bytes[start..]
}

pub(crate) fn trim_trailing_zeros(bytes: &[u8]) -> &[u8] {
    let end = bytes.len() - bytes.iter().rev().take_while(|&&b| b == 0).count();
    &bytes[..end]
}

/// Map each byte to the character with that code point
pub(crate) fn latin1(bytes: &[u8]) -> String {
    bytes.iter().copied().map(char::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PadDirection::{Leading, Trailing};

    #[test]
    fn test_integer_natural_encoding() {
        assert_eq!(encode_integer(0, None, Leading).unwrap().as_str(), "00");
        assert_eq!(encode_integer(0x0F, None, Leading).unwrap().as_str(), "0f");
        assert_eq!(encode_integer(0x100, None, Leading).unwrap().as_str(), "0100");
        assert_eq!(
            encode_integer(u64::MAX, None, Trailing).unwrap().as_str(),
            "ffffffffffffffff"
        );
    }

    #[test]
    fn test_integer_padding_direction() {
        assert_eq!(encode_integer(1, Some(2), Leading).unwrap().as_str(), "0001");
        assert_eq!(encode_integer(1, Some(2), Trailing).unwrap().as_str(), "0100");
        assert_eq!(encode_integer(0x1234, Some(2), Trailing).unwrap().as_str(), "1234");
    }

    #[test]
    fn test_integer_overflow() {
        for direction in [Leading, Trailing] {
            let result = encode_integer(256, Some(1), direction);
            assert_eq!(result, Err(Error::Overflow { needed: 2, width: 1 }));
        }
        assert!(matches!(
            encode_integer(0, Some(0), Leading),
            Err(Error::Overflow { needed: 1, width: 0 })
        ));
    }

    #[test]
    fn test_boolean_mapping() {
        assert_eq!(encode_boolean(true, Some(1), Leading).unwrap().as_str(), "01");
        assert_eq!(encode_boolean(false, Some(1), Trailing).unwrap().as_str(), "00");
        assert_eq!(encode_boolean(true, Some(2), Trailing).unwrap().as_str(), "0100");
    }

    #[test]
    fn test_text_encoding() {
        assert_eq!(
            encode_text("AB", Some(4), Trailing, false).unwrap().as_str(),
            "41420000"
        );
        assert_eq!(
            encode_text("AB", Some(4), Leading, false).unwrap().as_str(),
            "00004142"
        );
        assert_eq!(encode_text("", None, Trailing, false).unwrap().as_str(), "");
        assert_eq!(encode_text("", None, Trailing, true).unwrap().as_str(), "00");
    }

    #[test]
    fn test_text_null_termination_not_duplicated() {
        let plain = encode_text("Hi", None, Trailing, true).unwrap();
        let terminated = encode_text("Hi\0", None, Trailing, true).unwrap();
        assert_eq!(plain.as_str(), "486900");
        assert_eq!(plain, terminated);
    }

    #[test]
    fn test_text_terminator_counts_toward_width() {
        assert_eq!(
            encode_text("Hi", Some(3), Trailing, true).unwrap().as_str(),
            "486900"
        );
        assert_eq!(
            encode_text("Hi", Some(2), Trailing, true),
            Err(Error::Overflow { needed: 3, width: 2 })
        );
    }

    #[test]
    fn test_text_latin1_accepted() {
        // U+00E9 fits in one byte
        assert_eq!(encode_text("é", None, Trailing, false).unwrap().as_str(), "e9");
        assert_eq!(decode_text("e9", false).unwrap(), "é");
    }

    #[test]
    fn test_text_out_of_range_character() {
        let result = encode_text("aĀ", Some(8), Trailing, false);
        assert_eq!(
            result,
            Err(Error::Encoding {
                character: 'Ā',
                position: 1
            })
        );
        assert!(matches!(
            encode_text("€", None, Leading, true),
            Err(Error::Encoding { .. })
        ));
    }

    #[test]
    fn test_raw_bytes() {
        assert_eq!(
            encode_raw_bytes(&[0xDE, 0xAD], Some(3), Trailing).unwrap().as_str(),
            "dead00"
        );
        assert!(matches!(
            encode_raw_bytes(&[1, 2, 3], Some(2), Leading),
            Err(Error::Overflow { needed: 3, width: 2 })
        ));
    }

    #[test]
    fn test_empty_field() {
        assert_eq!(empty_field(3).as_str(), "000000");
        assert_eq!(empty_field(3), encode_integer(0, Some(3), Leading).unwrap());
        assert!(empty_field(0).is_empty());
    }

    #[test]
    fn test_decode_bytes() {
        assert_eq!(decode_bytes("00ff7A").unwrap(), vec![0x00, 0xFF, 0x7A]);
        assert_eq!(decode_bytes("").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_decode_malformed() {
        assert_eq!(
            decode_bytes("0a1"),
            Err(Error::Decoding(DecodeError::OddLength { len: 3 }))
        );
        assert!(matches!(
            decode_bytes("zz"),
            Err(Error::Decoding(DecodeError::InvalidDigit { digit: 'z', .. }))
        ));
    }

    #[test]
    fn test_decode_reports_non_ascii_digit() {
        assert_eq!(
            decode_bytes("\u{e9}"),
            Err(Error::Decoding(DecodeError::InvalidDigit {
                digit: '\u{e9}',
                position: 0
            }))
        );
        assert_eq!(
            decode_bytes("0\u{e9}"),
            Err(Error::Decoding(DecodeError::InvalidDigit {
                digit: '\u{e9}',
                position: 1
            }))
        );
    }

    #[test]
    fn test_decode_text() {
        assert_eq!(decode_text("486900", true).unwrap(), "Hi");
        assert_eq!(decode_text("486900", false).unwrap(), "Hi\0");
        assert_eq!(decode_text("4869", true).unwrap(), "Hi");
        // Only the final terminator is removed
        assert_eq!(decode_text("48690000", true).unwrap(), "Hi\0");
    }

    #[test]
    fn test_decode_integer() {
        assert_eq!(decode_integer("0001", Leading).unwrap(), 1);
        assert_eq!(decode_integer("0100", Trailing).unwrap(), 1);
        assert_eq!(decode_integer("0100", Leading).unwrap(), 256);
        assert_eq!(decode_integer("", Leading).unwrap(), 0);
        assert_eq!(decode_integer("0000", Trailing).unwrap(), 0);
        assert_eq!(
            decode_integer("00ffffffffffffffff", Leading).unwrap(),
            u64::MAX
        );
        assert_eq!(
            decode_integer("010000000000000000", Leading),
            Err(Error::Decoding(DecodeError::IntegerTooWide { bytes: 9 }))
        );
    }

    #[test]
    fn test_decode_boolean() {
        assert!(decode_boolean("01", Leading).unwrap());
        assert!(!decode_boolean("0000", Trailing).unwrap());
        assert!(decode_boolean("0100", Trailing).unwrap());
        assert_eq!(
            decode_boolean("02", Leading),
            Err(Error::Decoding(DecodeError::InvalidBoolean { value: 2 }))
        );
    }

    #[test]
    fn test_errors_carry_no_output() {
        let err = encode_integer(1 << 16, Some(2), Leading).unwrap_err();
        assert_eq!(err.kind(), crate::ErrorKind::Overflow);
    }

    // Property-based tests
    #[cfg(test)]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn direction_strategy() -> impl Strategy<Value = PadDirection> {
            prop_oneof![Just(Leading), Just(Trailing)]
        }

        fn natural_width(value: u64) -> usize {
            encode_integer(value, None, Leading).unwrap().byte_len()
        }

        proptest! {
            /// Property: raw bytes survive encode then decode
            #[test]
            fn prop_raw_bytes_roundtrip(bytes in prop::collection::vec(any::<u8>(), 0..256)) {
                let hex = encode_raw_bytes(&bytes, None, Leading).unwrap();
                prop_assert_eq!(decode_bytes(hex.as_str()).unwrap(), bytes);
            }

            /// Property: every produced fragment has even length
            #[test]
            fn prop_output_even_length(
                value in any::<u64>(),
                text in "[ -~]{0,32}",
                direction in direction_strategy(),
                null_terminate in any::<bool>(),
            ) {
                let int = encode_integer(value, None, direction).unwrap();
                prop_assert_eq!(int.as_str().len() % 2, 0);

                let txt = encode_text(&text, None, direction, null_terminate).unwrap();
                prop_assert_eq!(txt.as_str().len() % 2, 0);
            }

            /// Property: a fitting value always fills the field exactly
            #[test]
            fn prop_fixed_width_exact(
                value in any::<u64>(),
                extra in 0usize..8,
                direction in direction_strategy(),
            ) {
                let width = natural_width(value) + extra;
                let hex = encode_integer(value, Some(width), direction).unwrap();
                prop_assert_eq!(hex.as_str().len(), 2 * width);
            }

            /// Property: a value wider than its field is always rejected
            #[test]
            fn prop_overflow_rejected(value in 1u64.., direction in direction_strategy()) {
                let width = natural_width(value) - 1;
                let result = encode_integer(value, Some(width), direction);
                let is_overflow = matches!(result, Err(Error::Overflow { .. }));
                prop_assert!(is_overflow);
            }

            /// Property: leading-padded integers decode to the original value
            #[test]
            fn prop_integer_roundtrip(value in any::<u64>(), extra in 0usize..4) {
                let width = natural_width(value) + extra;
                let hex = encode_integer(value, Some(width), Leading).unwrap();
                prop_assert_eq!(decode_integer(hex.as_str(), Leading).unwrap(), value);
            }

            /// Property: single-byte text decodes to the original text
            #[test]
            fn prop_text_roundtrip(text in "[\\x01-\\xff]{0,32}") {
                let hex = encode_text(&text, None, Trailing, true).unwrap();
                prop_assert_eq!(decode_text(hex.as_str(), true).unwrap(), text);
            }

            /// Property: decoding accepts upper-case digits
            #[test]
            fn prop_decode_case_insensitive(bytes in prop::collection::vec(any::<u8>(), 0..64)) {
                let upper = hex::encode_upper(&bytes);
                prop_assert_eq!(decode_bytes(&upper).unwrap(), bytes);
            }
        }
    }
}
