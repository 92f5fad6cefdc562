//! EBCDIC code pages and decimal primitives for COMMAREA buffers.
//!
//! This crate holds the byte-level building blocks used by the `commarea`
//! record codec:
//!
//! - **EBCDIC Conversion**: CP037, CP500, CP1047, CP1140 and ISO-8859-1,
//!   plus [`CodePage::new`] for caller-supplied tables
//! - **Packed Decimal**: COMP-3 nibble packing with a trailing sign token
//! - **Zoned Decimal**: DISPLAY digit strings and sign overpunch
//!
//! # Example
//!
//! ```rust
//! use commarea_encoding::decimal::{pack_digits, unpack_digits, Sign};
//! use commarea_encoding::ebcdic::CP1047;
//!
//! // EBCDIC conversion
//! let ebcdic = CP1047.encode("HELLO").unwrap();
//! assert_eq!(ebcdic, vec![0xC8, 0xC5, 0xD3, 0xD3, 0xD6]);
//! assert_eq!(CP1047.decode(&ebcdic).unwrap(), "HELLO");
//!
//! // Packed decimal: PIC S9(5) COMP-3
//! let packed = pack_digits("12345", Sign::Negative, 5).unwrap();
//! assert_eq!(packed, vec![0x12, 0x34, 0x5D]);
//! let (digits, sign) = unpack_digits(&packed).unwrap();
//! assert_eq!((digits.as_str(), sign), ("12345", Sign::Negative));
//! ```

pub mod decimal;
pub mod ebcdic;
pub mod error;

pub use decimal::{
    decimal_from_literal, overpunch, pack_digits, packed_len, scaled_digits, unoverpunch,
    unpack_digits, zone_digits, Sign, MAX_DIGITS, NEGATIVE_OVERPUNCH, POSITIVE_OVERPUNCH,
};
pub use ebcdic::{CodePage, CodePageRegistry, CP037, CP1047, CP1140, CP500, ISO8859_1};
pub use error::EncodingError;

/// Result type for encoding operations.
pub type Result<T> = std::result::Result<T, EncodingError>;
