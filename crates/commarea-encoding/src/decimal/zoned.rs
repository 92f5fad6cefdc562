//! Zoned Decimal (DISPLAY) digit strings and sign overpunch.
//!
//! Zoned decimal format stores one digit per character. Unsigned fields are
//! the digit string itself; signed fields replace the last digit with an
//! overpunch character that carries both the digit and the sign.
//!
//! # Overpunch
//!
//! | digit | 0 | 1 | 2 | 3 | 4 | 5 | 6 | 7 | 8 | 9 |
//! |-------|---|---|---|---|---|---|---|---|---|---|
//! | +     | { | A | B | C | D | E | F | G | H | I |
//! | -     | } | J | K | L | M | N | O | P | Q | R |
//!
//! Transcoded to EBCDIC these are exactly the C-zone and D-zone bytes
//! (0xC0-0xC9 and 0xD0-0xD9), so `+12345` in PIC S9(5) becomes the text
//! `"1234E"` and the bytes 0xF1 0xF2 0xF3 0xF4 0xC5.

use super::{is_digit_string, Result};
use crate::error::EncodingError;

/// Overpunch characters for non-negative values, indexed by the last digit.
pub static POSITIVE_OVERPUNCH: [char; 10] = ['{', 'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I'];

/// Overpunch characters for negative values, indexed by the last digit.
pub static NEGATIVE_OVERPUNCH: [char; 10] = ['}', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R'];

/// Left-pad an unsigned digit string with `'0'` to `total_digits`.
///
/// # Errors
/// Returns `EncodingError::Overflow` if `digits` is longer than
/// `total_digits`, or `EncodingError::InvalidLiteral` if it contains
/// anything but ASCII digits.
pub fn zone_digits(digits: &str, total_digits: usize) -> Result<String> {
    if !is_digit_string(digits) {
        return Err(EncodingError::invalid_literal(digits));
    }
    if digits.len() > total_digits {
        return Err(EncodingError::Overflow {
            required: digits.len(),
            capacity: total_digits,
        });
    }
    Ok(format!("{digits:0>total_digits$}"))
}

/// Replace the last digit of a zoned digit string with its overpunch
/// character.
///
/// # Errors
/// Returns `EncodingError::InvalidLiteral` if the string is empty or does
/// not end in a digit.
pub fn overpunch(zoned: &str, negative: bool) -> Result<String> {
    let mut chars = zoned.to_string();
    let digit = chars
        .pop()
        .and_then(|last| last.to_digit(10))
        .ok_or_else(|| EncodingError::invalid_literal(zoned))?;

    let table = if negative {
        &NEGATIVE_OVERPUNCH
    } else {
        &POSITIVE_OVERPUNCH
    };
    chars.push(table[digit as usize]);
    Ok(chars)
}

/// Turn an overpunched zoned string back into a signed digit string.
///
/// `"0001239I"` becomes `"+00012399"` and `"0001239R"` becomes
/// `"-00012399"`. A plain digit in the last position is read as
/// non-negative.
///
/// # Errors
/// Returns `EncodingError::InvalidLiteral` if the last character is neither
/// a digit nor an overpunch character, or the rest is not all digits.
pub fn unoverpunch(text: &str) -> Result<String> {
    let mut chars = text.chars();
    let last = chars
        .next_back()
        .ok_or_else(|| EncodingError::invalid_literal(text))?;
    let head = chars.as_str();
    if !is_digit_string(head) {
        return Err(EncodingError::invalid_literal(text));
    }

    let (sign, digit) = if let Some(d) = last.to_digit(10) {
        ('+', d as usize)
    } else if let Some(d) = POSITIVE_OVERPUNCH.iter().position(|&c| c == last) {
        ('+', d)
    } else if let Some(d) = NEGATIVE_OVERPUNCH.iter().position(|&c| c == last) {
        ('-', d)
    } else {
        return Err(EncodingError::invalid_literal(text));
    };

    Ok(format!("{sign}{head}{digit}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zone_digits_pads_left() {
        assert_eq!(zone_digits("123", 6).unwrap(), "000123");
        assert_eq!(zone_digits("", 4).unwrap(), "0000");
        assert_eq!(zone_digits("1234", 4).unwrap(), "1234");
    }

    #[test]
    fn test_zone_digits_overflow() {
        assert_eq!(
            zone_digits("12345", 4).unwrap_err(),
            EncodingError::Overflow {
                required: 5,
                capacity: 4
            }
        );
    }

    #[test]
    fn test_overpunch_positive() {
        assert_eq!(overpunch("00012399", false).unwrap(), "0001239I");
        assert_eq!(overpunch("00000", false).unwrap(), "0000{");
    }

    #[test]
    fn test_overpunch_negative() {
        assert_eq!(overpunch("00012399", true).unwrap(), "0001239R");
        assert_eq!(overpunch("10", true).unwrap(), "1}");
    }

    #[test]
    fn test_overpunch_empty() {
        assert!(overpunch("", false).is_err());
    }

    #[test]
    fn test_unoverpunch() {
        assert_eq!(unoverpunch("0001239I").unwrap(), "+00012399");
        assert_eq!(unoverpunch("0001239R").unwrap(), "-00012399");
        assert_eq!(unoverpunch("0000{").unwrap(), "+00000");
        assert_eq!(unoverpunch("}").unwrap(), "-0");
    }

    #[test]
    fn test_unoverpunch_plain_digit_is_positive() {
        assert_eq!(unoverpunch("0042").unwrap(), "+0042");
    }

    #[test]
    fn test_unoverpunch_rejects_unknown_characters() {
        for text in ["001S", "00X1", "12-", ""] {
            assert!(
                matches!(unoverpunch(text), Err(EncodingError::InvalidLiteral { .. })),
                "{text:?}"
            );
        }
    }

    #[test]
    fn test_overpunch_roundtrip_every_digit() {
        for digit in 0..10 {
            for negative in [false, true] {
                let zoned = format!("12{digit}");
                let punched = overpunch(&zoned, negative).unwrap();
                let sign = if negative { '-' } else { '+' };
                assert_eq!(unoverpunch(&punched).unwrap(), format!("{sign}{zoned}"));
            }
        }
    }
}
