//! Decimal data type support for COBOL numeric formats.
//!
//! COMMAREA numeric fields are built from plain digit strings:
//!
//! - **Zoned Decimal (DISPLAY)**: the digit string left-padded with `'0'`,
//!   optionally with the sign overpunched into the last character
//! - **Packed Decimal (COMP-3)**: the digit string plus a sign token,
//!   packed two hex nibbles per byte
//!
//! The implied decimal point is never stored. [`scaled_digits`] drops it on
//! the way in and [`decimal_from_literal`] reinserts it on the way out.

mod packed;
mod zoned;

pub use packed::{pack_digits, packed_len, unpack_digits};
pub use zoned::{overpunch, unoverpunch, zone_digits, NEGATIVE_OVERPUNCH, POSITIVE_OVERPUNCH};

use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::EncodingError;

/// Result type for decimal operations.
pub type Result<T> = std::result::Result<T, EncodingError>;

/// Widest digit string a field may declare (the precision of [`Decimal`]).
pub const MAX_DIGITS: usize = 28;

/// Sign representation in COBOL numeric formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    /// Positive value (sign token 'C')
    Positive,
    /// Negative value (sign token 'D')
    Negative,
    /// Unsigned value (sign token 'F', treated as positive)
    Unsigned,
}

impl Sign {
    /// Sign token written as the last packed nibble.
    pub fn to_packed_token(self) -> char {
        match self {
            Sign::Positive => 'C',
            Sign::Negative => 'D',
            Sign::Unsigned => 'F',
        }
    }

    /// Read a packed sign token. Only 'D' is negative; 'F' is unsigned and
    /// every other token is taken as positive.
    pub fn from_packed_token(token: char) -> Self {
        match token.to_ascii_uppercase() {
            'D' => Sign::Negative,
            'F' => Sign::Unsigned,
            _ => Sign::Positive,
        }
    }

    /// Whether the sign is negative.
    pub fn is_negative(self) -> bool {
        self == Sign::Negative
    }
}

/// Render the magnitude of `value` as an unsigned digit string with exactly
/// `decimals` implied fractional digits.
///
/// The value is rounded half-even to `decimals` places first, so
/// `12.345` with two decimals becomes `"1234"`.
///
/// # Errors
/// Returns `EncodingError::Overflow` if the scaled value exceeds the
/// precision of [`Decimal`].
pub fn scaled_digits(value: &Decimal, decimals: u32) -> Result<String> {
    let mut scaled = value
        .abs()
        .round_dp_with_strategy(decimals, RoundingStrategy::MidpointNearestEven);
    scaled.rescale(decimals);
    if scaled.scale() != decimals {
        return Err(EncodingError::Overflow {
            required: MAX_DIGITS + 1,
            capacity: MAX_DIGITS,
        });
    }
    Ok(scaled.mantissa().unsigned_abs().to_string())
}

/// Parse a signed digit string (`"+00123"`, `"-45"`, `"0099"`) and place the
/// implied decimal point `decimals` digits from the right.
///
/// # Errors
/// Returns `EncodingError::InvalidLiteral` if the text is not an optional
/// sign followed by ASCII digits, or is too wide for [`Decimal`].
pub fn decimal_from_literal(literal: &str, decimals: u32) -> Result<Decimal> {
    let digits = literal
        .strip_prefix(|c| c == '+' || c == '-')
        .unwrap_or(literal);
    if digits.is_empty() || !is_digit_string(digits) {
        return Err(EncodingError::invalid_literal(literal));
    }
    let mantissa: i128 = literal
        .parse()
        .map_err(|_| EncodingError::invalid_literal(literal))?;
    Decimal::try_from_i128_with_scale(mantissa, decimals)
        .map_err(|_| EncodingError::invalid_literal(literal))
}

/// Whether every byte of `digits` is an ASCII digit.
pub(crate) fn is_digit_string(digits: &str) -> bool {
    digits.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_sign_tokens() {
        assert_eq!(Sign::Positive.to_packed_token(), 'C');
        assert_eq!(Sign::Negative.to_packed_token(), 'D');
        assert_eq!(Sign::Unsigned.to_packed_token(), 'F');
    }

    #[test]
    fn test_sign_from_token_only_d_is_negative() {
        assert_eq!(Sign::from_packed_token('D'), Sign::Negative);
        assert_eq!(Sign::from_packed_token('F'), Sign::Unsigned);
        assert_eq!(Sign::from_packed_token('C'), Sign::Positive);
        // B is a negative nibble on the host, but only D is honoured here.
        assert_eq!(Sign::from_packed_token('B'), Sign::Positive);
        assert_eq!(Sign::from_packed_token('7'), Sign::Positive);
    }

    #[test]
    fn test_scaled_digits() {
        let value = Decimal::from_str("123.45").unwrap();
        assert_eq!(scaled_digits(&value, 2).unwrap(), "12345");
        assert_eq!(scaled_digits(&value, 3).unwrap(), "123450");
        assert_eq!(scaled_digits(&-value, 0).unwrap(), "123");
        assert_eq!(scaled_digits(&Decimal::ZERO, 2).unwrap(), "0");
    }

    #[test]
    fn test_scaled_digits_rounds_half_even() {
        let value = Decimal::from_str("0.125").unwrap();
        assert_eq!(scaled_digits(&value, 2).unwrap(), "12");
        let value = Decimal::from_str("0.135").unwrap();
        assert_eq!(scaled_digits(&value, 2).unwrap(), "14");
    }

    #[test]
    fn test_decimal_from_literal() {
        assert_eq!(
            decimal_from_literal("0012345", 2).unwrap(),
            Decimal::from_str("123.45").unwrap()
        );
        assert_eq!(
            decimal_from_literal("-0012345", 2).unwrap(),
            Decimal::from_str("-123.45").unwrap()
        );
        assert_eq!(decimal_from_literal("+42", 0).unwrap(), Decimal::from(42));
        assert_eq!(
            decimal_from_literal("5", 3).unwrap(),
            Decimal::from_str("0.005").unwrap()
        );
    }

    #[test]
    fn test_decimal_from_literal_rejects_garbage() {
        for literal in ["", "-", "12a4", "1.5", " 12", "+-1"] {
            assert!(
                matches!(
                    decimal_from_literal(literal, 0),
                    Err(EncodingError::InvalidLiteral { .. })
                ),
                "{literal:?}"
            );
        }
    }
}
