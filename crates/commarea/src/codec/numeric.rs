//! Zoned (DISPLAY) and packed (COMP-3) numeric fields, signed and unsigned.

use commarea_encoding::decimal::{
    decimal_from_literal, overpunch, pack_digits, scaled_digits, unoverpunch, unpack_digits,
    zone_digits, Sign,
};
use commarea_encoding::CodePage;
use rust_decimal::Decimal;

use super::{is_blank, FieldError, FieldResult};
use crate::layout::{NumericPicture, NumericRepr};
use crate::record::FieldValue;

/// Unsigned digit string of a value plus its sign.
#[derive(Debug, PartialEq, Eq)]
struct Magnitude {
    digits: String,
    negative: bool,
}

/// Digits to store for `value`, or `None` when the value is absent.
///
/// Decimal values are scaled to the picture's fractional digits; integers
/// and digit strings are stored unscaled. Leading zeros are dropped and a
/// zero magnitude is never negative.
fn magnitude(picture: &NumericPicture, value: &FieldValue) -> FieldResult<Option<Magnitude>> {
    let (digits, negative) = match value {
        FieldValue::Null => return Ok(None),
        FieldValue::Integer(v) => (v.unsigned_abs().to_string(), *v < 0),
        FieldValue::Decimal(v) => (
            scaled_digits(v, picture.decimals() as u32)?,
            v.is_sign_negative(),
        ),
        FieldValue::Text(text) => {
            let text = text.trim_matches(is_blank);
            if text.is_empty() {
                return Ok(None);
            }
            let (negative, digits) = match text.strip_prefix('-') {
                Some(rest) => (true, rest),
                None => (false, text.strip_prefix('+').unwrap_or(text)),
            };
            if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
                return Err(FieldError::InvalidLiteral(text.to_string()));
            }
            (digits.to_string(), negative)
        }
    };

    let digits = match digits.trim_start_matches('0') {
        "" => String::new(),
        significant => significant.to_string(),
    };
    let negative = negative && !digits.is_empty();
    Ok(Some(Magnitude { digits, negative }))
}

pub(super) fn encode(
    picture: &NumericPicture,
    value: &FieldValue,
    code_page: &CodePage,
) -> FieldResult<Vec<u8>> {
    let total = picture.total_digits();
    let magnitude = magnitude(picture, value)?;

    if picture.packed() {
        let (digits, sign) = match magnitude {
            None => (String::new(), Sign::Unsigned),
            Some(m) if !picture.signed() => (m.digits, Sign::Unsigned),
            Some(m) if m.negative => (m.digits, Sign::Negative),
            Some(m) => (m.digits, Sign::Positive),
        };
        return Ok(pack_digits(&digits, sign, total)?);
    }

    let zoned = match magnitude {
        None => zone_digits("", total)?,
        Some(m) => {
            let zoned = zone_digits(&m.digits, total)?;
            if picture.signed() {
                overpunch(&zoned, m.negative)?
            } else {
                zoned
            }
        }
    };
    Ok(code_page.encode(&zoned)?)
}

pub(super) fn decode(
    picture: &NumericPicture,
    bytes: &[u8],
    code_page: &CodePage,
) -> FieldResult<FieldValue> {
    let literal = if picture.packed() {
        let (digits, sign) = unpack_digits(bytes)?;
        // Even digit counts carry a leading pad nibble.
        let pad = digits.len().saturating_sub(picture.total_digits());
        let digits = match digits.get(..pad) {
            Some(lead) if lead.bytes().all(|b| b == b'0') => digits[pad..].to_string(),
            _ => digits,
        };
        if sign.is_negative() {
            format!("-{digits}")
        } else {
            digits
        }
    } else {
        let text = code_page.decode(bytes)?;
        let text = text.trim_matches(is_blank);
        if text.is_empty() {
            return Ok(FieldValue::Null);
        }
        if picture.signed() {
            unoverpunch(text)?
        } else if text.bytes().all(|b| b.is_ascii_digit()) {
            text.to_string()
        } else {
            return Err(FieldError::InvalidLiteral(text.to_string()));
        }
    };
    coerce(picture, literal)
}

/// Convert a signed digit string into the picture's value type.
fn coerce(picture: &NumericPicture, literal: String) -> FieldResult<FieldValue> {
    match picture.repr() {
        NumericRepr::Text => Ok(FieldValue::Text(literal)),
        NumericRepr::Integer => {
            let value = decimal_from_literal(&literal, 0)?;
            i64::try_from(value)
                .map(FieldValue::Integer)
                .map_err(|_| FieldError::InvalidLiteral(literal))
        }
        NumericRepr::Decimal => {
            let value: Decimal = decimal_from_literal(&literal, picture.decimals() as u32)?;
            Ok(FieldValue::Decimal(value))
        }
    }
}
