//! Error type shared by the code page and decimal primitives.

use thiserror::Error;

/// Errors raised while converting values to or from mainframe bytes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodingError {
    /// Generic conversion failure.
    #[error("Conversion failed: {message}")]
    ConversionFailed { message: String },

    /// Code page name or CCSID not recognized.
    #[error("Unknown code page: {0}")]
    InvalidCodePage(String),

    /// Character has no byte in the target code page.
    #[error("Character {ch:?} cannot be encoded in {code_page}")]
    Unmappable { ch: char, code_page: &'static str },

    /// Byte is undefined in the source code page.
    #[error("Byte 0x{byte:02X} is undefined in {code_page}")]
    UndefinedByte { byte: u8, code_page: &'static str },

    /// Digit string is wider than the field.
    #[error("Value requires {required} digits but only {capacity} available")]
    Overflow { required: usize, capacity: usize },

    /// Text is not a valid digit string, nibble string or overpunch.
    #[error("Invalid numeric literal '{literal}'")]
    InvalidLiteral { literal: String },
}

impl EncodingError {
    pub(crate) fn invalid_literal(literal: impl Into<String>) -> Self {
        EncodingError::InvalidLiteral {
            literal: literal.into(),
        }
    }
}
