//! Packed Decimal (COMP-3) encoding and decoding.
//!
//! Packed decimal format stores two decimal digits per byte, with the
//! rightmost nibble containing the sign. The digits and the sign token are
//! written as one hex nibble string and packed with the generic hex packer.
//!
//! # Format
//!
//! For a PIC S9(n)V9(m) COMP-3 declaration:
//! - Nibble count = n + m + 1 (the sign), rounded up to even with a
//!   leading zero nibble
//! - Storage size = ceil((n + m + 1) / 2) bytes
//! - Sign token: 'C' positive, 'D' negative, 'F' unsigned
//!
//! Example: +12345 in PIC S9(5) COMP-3
//! - Nibbles: "12345C"
//! - Binary: 0x12 0x34 0x5C (3 bytes)
//!
//! Example: +123456 in PIC S9(6) COMP-3
//! - Nibbles: "0123456C" (leading zero pad for even digits)
//! - Binary: 0x01 0x23 0x45 0x6C (4 bytes)

use super::{is_digit_string, Result, Sign};
use crate::error::EncodingError;

/// Storage size in bytes of a packed field with `total_digits` digits.
///
/// Storage = ceil((total_digits + 1) / 2)
pub fn packed_len(total_digits: usize) -> usize {
    (total_digits + 2) / 2 // +1 for sign nibble, then round up
}

/// Pack an unsigned digit string and a sign into packed decimal bytes.
///
/// # Arguments
/// * `digits` - Magnitude digits, most significant first (may be empty)
/// * `sign` - Sign written into the last nibble
/// * `total_digits` - Declared digit capacity of the field
///
/// # Errors
/// Returns `EncodingError::Overflow` if `digits` is longer than
/// `total_digits`, or `EncodingError::InvalidLiteral` if it contains
/// anything but ASCII digits.
pub fn pack_digits(digits: &str, sign: Sign, total_digits: usize) -> Result<Vec<u8>> {
    if !is_digit_string(digits) {
        return Err(EncodingError::invalid_literal(digits));
    }
    if digits.len() > total_digits {
        return Err(EncodingError::Overflow {
            required: digits.len(),
            capacity: total_digits,
        });
    }

    let nibble_count = packed_len(total_digits) * 2;
    let nibbles = format!(
        "{digits:0>width$}{token}",
        width = nibble_count - 1,
        token = sign.to_packed_token()
    );

    hex::decode(&nibbles).map_err(|e| EncodingError::ConversionFailed {
        message: format!("Failed to pack nibbles '{nibbles}': {e}"),
    })
}

/// Unpack packed decimal bytes into the digit string and sign.
///
/// The digit string keeps its leading zeros, including the pad nibble of
/// even-digit fields.
///
/// # Errors
/// Returns `EncodingError::InvalidLiteral` if any digit nibble is above 9,
/// or `EncodingError::ConversionFailed` for an empty buffer.
pub fn unpack_digits(bytes: &[u8]) -> Result<(String, Sign)> {
    if bytes.is_empty() {
        return Err(EncodingError::ConversionFailed {
            message: "Empty packed decimal".to_string(),
        });
    }

    let mut nibbles = hex::encode_upper(bytes);
    let sign = nibbles.pop().map_or(Sign::Unsigned, Sign::from_packed_token);

    if !is_digit_string(&nibbles) {
        return Err(EncodingError::InvalidLiteral {
            literal: hex::encode_upper(bytes),
        });
    }

    Ok((nibbles, sign))
}
