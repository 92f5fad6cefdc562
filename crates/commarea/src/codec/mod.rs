//! Field codecs: one encode/decode pair per field kind.
//!
//! Codecs work on a single field and know nothing about its position or
//! path. They report failures as [`FieldError`], which the engine turns into
//! a [`CommAreaError`] carrying the field path.

mod numeric;
mod text;

use commarea_encoding::{CodePage, EncodingError};

use crate::error::CommAreaError;
use crate::layout::{NumericPicture, TextPicture};
use crate::record::FieldValue;

/// Failure of a single field codec, before the field path is known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum FieldError {
    Overflow { required: usize, capacity: usize },
    Unsupported(String),
    InvalidLiteral(String),
    Transcoding(String),
}

impl FieldError {
    /// Attach the field path.
    pub(crate) fn at(self, field: &str) -> CommAreaError {
        let field = field.to_string();
        match self {
            FieldError::Overflow { required, capacity } => CommAreaError::FieldOverflow {
                field,
                required,
                capacity,
            },
            FieldError::Unsupported(reason) => CommAreaError::UnsupportedFieldKind { field, reason },
            FieldError::InvalidLiteral(literal) => {
                CommAreaError::InvalidNumericLiteral { field, literal }
            }
            FieldError::Transcoding(message) => CommAreaError::Transcoding { field, message },
        }
    }
}

impl From<EncodingError> for FieldError {
    fn from(err: EncodingError) -> Self {
        match err {
            EncodingError::Overflow { required, capacity } => {
                FieldError::Overflow { required, capacity }
            }
            EncodingError::InvalidLiteral { literal } => FieldError::InvalidLiteral(literal),
            other => FieldError::Transcoding(other.to_string()),
        }
    }
}

pub(crate) type FieldResult<T> = std::result::Result<T, FieldError>;

/// Encode one numeric field.
pub(crate) fn encode_numeric(
    picture: &NumericPicture,
    value: &FieldValue,
    code_page: &CodePage,
) -> FieldResult<Vec<u8>> {
    numeric::encode(picture, value, code_page)
}

/// Decode one numeric field from exactly `picture.byte_len()` bytes.
pub(crate) fn decode_numeric(
    picture: &NumericPicture,
    bytes: &[u8],
    code_page: &CodePage,
) -> FieldResult<FieldValue> {
    numeric::decode(picture, bytes, code_page)
}

/// Encode one text field.
pub(crate) fn encode_text(
    picture: &TextPicture,
    value: &FieldValue,
    code_page: &CodePage,
) -> FieldResult<Vec<u8>> {
    text::encode(picture, value, code_page)
}

/// Decode one text field from exactly `picture.byte_len()` bytes.
pub(crate) fn decode_text(
    picture: &TextPicture,
    bytes: &[u8],
    code_page: &CodePage,
) -> FieldResult<FieldValue> {
    text::decode(picture, bytes, code_page)
}

/// Blank in the trimming sense: space and every control character below it.
fn is_blank(ch: char) -> bool {
    ch <= ' '
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_error_carries_path() {
        let err = FieldError::Overflow {
            required: 6,
            capacity: 5,
        }
        .at("AMT");
        assert_eq!(
            err,
            CommAreaError::FieldOverflow {
                field: "AMT".to_string(),
                required: 6,
                capacity: 5
            }
        );
    }

    #[test]
    fn test_encoding_errors_map_to_field_errors() {
        let err: FieldError = EncodingError::InvalidLiteral {
            literal: "12X".to_string(),
        }
        .into();
        assert_eq!(err, FieldError::InvalidLiteral("12X".to_string()));

        let err: FieldError = EncodingError::Unmappable {
            ch: '€',
            code_page: "CP037",
        }
        .into();
        assert!(matches!(err, FieldError::Transcoding(msg) if msg.contains("CP037")));
    }

    #[test]
    fn test_is_blank() {
        assert!(is_blank(' '));
        assert!(is_blank('\0'));
        assert!(is_blank('\t'));
        assert!(!is_blank('0'));
    }
}
