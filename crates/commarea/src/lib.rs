//! Copybook-driven COMMAREA record codec.
//!
//! Converts application records to and from the fixed-width buffers that
//! mainframe transaction programs exchange. A buffer has no framing: it is
//! the concatenation of every field in declaration order, each at the width
//! its picture clause implies.
//!
//! - **Layouts** ([`RecordLayout`]): ordered field descriptors built in code
//!   or read from TOML
//! - **Records** ([`Record`], [`DynamicRecord`]): positional access to field
//!   values
//! - **Engine** ([`CommArea`]): encode and decode against a code page
//! - **Gateway** ([`gateway`]): the seam that flows a buffer to a region
//!
//! # Field kinds
//!
//! | Picture              | Storage                                   |
//! |----------------------|-------------------------------------------|
//! | `9(n)V9(m)`          | zoned digits, one character each          |
//! | `S9(n)V9(m)`         | zoned digits, sign overpunched on the last |
//! | `[S]9(n)V9(m) COMP-3`| packed BCD with a trailing sign nibble    |
//! | `X(n)`               | text, blank padded; or raw bytes as hex/base64 |
//! | group                | nested layout embedded in line            |
//!
//! # Example
//!
//! ```rust
//! use commarea::{CommArea, FieldValue, NumericPicture, RecordLayout, TextPicture};
//! use rust_decimal::Decimal;
//!
//! let layout = RecordLayout::builder("ACCOUNT")
//!     .text("ID", TextPicture::picx(6))
//!     .numeric("BALANCE", NumericPicture::pic_s9(5).v9(2))
//!     .build()
//!     .unwrap();
//!
//! let mut record = layout.new_record();
//! record.set(0, "A-1");
//! record.set(1, Decimal::new(-12399, 2));
//!
//! let codec = CommArea::new();
//! let bytes = codec.encode(&layout, &record).unwrap();
//! assert_eq!(bytes.len(), 13);
//! // -123.99 overpunches its last digit: "0012399" -> "001239R"
//! assert_eq!(codec.code_page().decode(&bytes[6..]).unwrap(), "001239R");
//!
//! let mut decoded = layout.new_record();
//! codec.decode(&layout, &bytes, &mut decoded).unwrap();
//! assert_eq!(decoded.get(1), Some(&FieldValue::Decimal(Decimal::new(-12399, 2))));
//! ```

mod codec;
pub mod config;
pub mod engine;
pub mod error;
pub mod gateway;
pub mod layout;
pub mod record;

pub use commarea_encoding::{CodePage, CodePageRegistry};
pub use config::{ConfigError, GatewayConfig};
pub use engine::CommArea;
pub use error::CommAreaError;
pub use gateway::{Gateway, Transaction, TransactionError};
pub use layout::{
    FieldDescriptor, FieldKind, FieldMapEntry, NumericPicture, NumericRepr, RecordLayout,
    RecordLayoutBuilder, TextEncoding, TextPicture, Usage,
};
pub use record::{DynamicRecord, FieldValue, Record, ValueTypeError};

/// Result type for record encoding and decoding.
pub type Result<T> = std::result::Result<T, CommAreaError>;
