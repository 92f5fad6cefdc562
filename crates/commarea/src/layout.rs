//! Record layouts: the copybook picture of a COMMAREA.
//!
//! A [`RecordLayout`] is an ordered list of [`FieldDescriptor`]s. Field
//! order is the byte order of the buffer; names only matter for error
//! messages and for callers that address fields by name. The byte width of
//! every field, and so of the whole layout, follows from the pictures alone.
//!
//! ```rust
//! use commarea::layout::{NumericPicture, RecordLayout, TextPicture};
//!
//! let address = RecordLayout::builder("ADDRESS")
//!     .text("CITY", TextPicture::picx(20))
//!     .numeric("ZIP", NumericPicture::pic9(5))
//!     .build()
//!     .unwrap();
//!
//! let customer = RecordLayout::builder("CUSTOMER")
//!     .numeric("ID", NumericPicture::pic9(8))
//!     .numeric("BALANCE", NumericPicture::pic_s9(7).v9(2).comp3())
//!     .group("ADDRESS", address)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(customer.byte_len(), 8 + 5 + 25);
//! ```

use std::fmt;

use commarea_encoding::decimal::{packed_len, MAX_DIGITS};
use serde::{Deserialize, Serialize};

use crate::error::CommAreaError;
use crate::record::DynamicRecord;

/// Widest numeric field that decodes into an `i64`.
pub const MAX_INTEGER_DIGITS: usize = 18;

/// Storage usage of a numeric field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Usage {
    /// One character per digit (zoned decimal).
    #[default]
    #[serde(rename = "display")]
    Display,
    /// Two digits per byte plus a sign nibble (packed decimal).
    #[serde(rename = "comp-3")]
    Comp3,
}

/// How a text field's value maps to its bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextEncoding {
    /// Characters transcoded through the code page, blank padded.
    #[default]
    Plain,
    /// Raw bytes written as a hex string, zero padded.
    Hex,
    /// Raw bytes written as base64, zero padded.
    Base64,
}

/// Value type a numeric field decodes into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumericRepr {
    /// `FieldValue::Integer` holding the stored digits, implied point ignored.
    Integer,
    /// `FieldValue::Decimal` with the implied point reinserted.
    Decimal,
    /// `FieldValue::Text` holding the signed digit string.
    Text,
}

/// Picture of a numeric field: `[S]9(digits)[V9(decimals)] [COMP-3]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumericPicture {
    digits: usize,
    decimals: usize,
    signed: bool,
    usage: Usage,
    repr: Option<NumericRepr>,
}

impl NumericPicture {
    /// Unsigned picture `9(digits)`.
    pub fn pic9(digits: usize) -> Self {
        Self {
            digits,
            decimals: 0,
            signed: false,
            usage: Usage::Display,
            repr: None,
        }
    }

    /// Signed picture `S9(digits)`.
    pub fn pic_s9(digits: usize) -> Self {
        Self {
            signed: true,
            ..Self::pic9(digits)
        }
    }

    /// Add `decimals` implied fractional digits (`V9(decimals)`).
    ///
    /// Only `Decimal` values are scaled on encode; an `Integer` is stored as
    /// raw digits, so `Integer(5)` in `9(3)V9(2)` reads back as `0.05`.
    pub fn v9(mut self, decimals: usize) -> Self {
        self.decimals = decimals;
        self
    }

    /// Store as packed decimal.
    pub fn comp3(mut self) -> Self {
        self.usage = Usage::Comp3;
        self
    }

    /// Override the value type produced on decode.
    pub fn decode_as(mut self, repr: NumericRepr) -> Self {
        self.repr = Some(repr);
        self
    }

    /// Declared integer digits.
    pub fn digits(&self) -> usize {
        self.digits
    }

    /// Declared fractional digits.
    pub fn decimals(&self) -> usize {
        self.decimals
    }

    /// Integer plus fractional digits.
    pub fn total_digits(&self) -> usize {
        self.digits + self.decimals
    }

    pub fn signed(&self) -> bool {
        self.signed
    }

    pub fn usage(&self) -> Usage {
        self.usage
    }

    pub fn packed(&self) -> bool {
        self.usage == Usage::Comp3
    }

    /// Decode representation; `Integer` without decimals, `Decimal` with.
    pub fn repr(&self) -> NumericRepr {
        self.repr.unwrap_or(if self.decimals == 0 {
            NumericRepr::Integer
        } else {
            NumericRepr::Decimal
        })
    }

    /// Encoded width in bytes.
    pub fn byte_len(&self) -> usize {
        match self.usage {
            Usage::Display => self.total_digits(),
            Usage::Comp3 => packed_len(self.total_digits()),
        }
    }

    fn validate(&self) -> Result<(), String> {
        let total = self.total_digits();
        if total == 0 || total > MAX_DIGITS {
            return Err(format!(
                "{self} declares {total} digits, supported range is 1 to {MAX_DIGITS}"
            ));
        }
        if self.repr() == NumericRepr::Integer && total > MAX_INTEGER_DIGITS {
            return Err(format!(
                "{self} declares {total} digits, integer fields hold at most {MAX_INTEGER_DIGITS}"
            ));
        }
        Ok(())
    }
}

impl fmt::Display for NumericPicture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.signed {
            write!(f, "S")?;
        }
        write!(f, "9({})", self.digits)?;
        if self.decimals > 0 {
            write!(f, "V9({})", self.decimals)?;
        }
        if self.packed() {
            write!(f, " COMP-3")?;
        }
        Ok(())
    }
}

/// Picture of a text field: `X(width)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextPicture {
    width: usize,
    encoding: TextEncoding,
}

impl TextPicture {
    /// Plain text of `width` characters.
    pub fn picx(width: usize) -> Self {
        Self {
            width,
            encoding: TextEncoding::Plain,
        }
    }

    /// `width` raw bytes exchanged as a hex string.
    pub fn hex(mut self) -> Self {
        self.encoding = TextEncoding::Hex;
        self
    }

    /// `width` raw bytes exchanged as base64.
    pub fn base64(mut self) -> Self {
        self.encoding = TextEncoding::Base64;
        self
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn encoding(&self) -> TextEncoding {
        self.encoding
    }

    /// Encoded width in bytes.
    pub fn byte_len(&self) -> usize {
        self.width
    }
}

impl fmt::Display for TextPicture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "X({})", self.width)?;
        match self.encoding {
            TextEncoding::Plain => Ok(()),
            TextEncoding::Hex => write!(f, " HEX"),
            TextEncoding::Base64 => write!(f, " BASE64"),
        }
    }
}

/// Kind of a field, with everything needed to size and convert it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    Numeric(NumericPicture),
    Text(TextPicture),
    /// Sub-record embedded in line at its own byte range.
    Group(RecordLayout),
}

impl FieldKind {
    /// Encoded width in bytes.
    pub fn byte_len(&self) -> usize {
        match self {
            FieldKind::Numeric(pic) => pic.byte_len(),
            FieldKind::Text(pic) => pic.byte_len(),
            FieldKind::Group(layout) => layout.byte_len(),
        }
    }
}

impl From<NumericPicture> for FieldKind {
    fn from(pic: NumericPicture) -> Self {
        FieldKind::Numeric(pic)
    }
}

impl From<TextPicture> for FieldKind {
    fn from(pic: TextPicture) -> Self {
        FieldKind::Text(pic)
    }
}

impl From<RecordLayout> for FieldKind {
    fn from(layout: RecordLayout) -> Self {
        FieldKind::Group(layout)
    }
}

/// A named field of a record layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    name: String,
    kind: FieldKind,
}

impl FieldDescriptor {
    pub fn new(name: impl Into<String>, kind: impl Into<FieldKind>) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &FieldKind {
        &self.kind
    }

    /// Encoded width in bytes.
    pub fn byte_len(&self) -> usize {
        self.kind.byte_len()
    }

    /// Integer digits of a numeric field, characters of a text field, bytes
    /// of a group.
    pub fn width(&self) -> usize {
        match &self.kind {
            FieldKind::Numeric(pic) => pic.digits(),
            FieldKind::Text(pic) => pic.width(),
            FieldKind::Group(layout) => layout.byte_len(),
        }
    }

    /// Fractional digits; zero for anything but numeric fields.
    pub fn decimals(&self) -> usize {
        match &self.kind {
            FieldKind::Numeric(pic) => pic.decimals(),
            _ => 0,
        }
    }

    pub fn signed(&self) -> bool {
        matches!(&self.kind, FieldKind::Numeric(pic) if pic.signed())
    }

    pub fn packed(&self) -> bool {
        matches!(&self.kind, FieldKind::Numeric(pic) if pic.packed())
    }

    pub fn text_encoding(&self) -> Option<TextEncoding> {
        match &self.kind {
            FieldKind::Text(pic) => Some(pic.encoding()),
            _ => None,
        }
    }

    pub fn nested(&self) -> Option<&RecordLayout> {
        match &self.kind {
            FieldKind::Group(layout) => Some(layout),
            _ => None,
        }
    }

    fn validate(&self) -> Result<(), CommAreaError> {
        let reason = match &self.kind {
            FieldKind::Numeric(pic) => pic.validate().err(),
            FieldKind::Text(pic) if pic.width() == 0 => Some("X(0) has no width".to_string()),
            FieldKind::Text(_) | FieldKind::Group(_) => None,
        };
        match reason {
            Some(reason) => Err(CommAreaError::UnsupportedFieldKind {
                field: self.name.clone(),
                reason,
            }),
            None => Ok(()),
        }
    }
}

/// Immutable, validated record layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "LayoutDef", into = "LayoutDef")]
pub struct RecordLayout {
    name: String,
    fields: Vec<FieldDescriptor>,
    byte_len: usize,
}

impl RecordLayout {
    /// Start a layout with the given record name.
    pub fn builder(name: impl Into<String>) -> RecordLayoutBuilder {
        RecordLayoutBuilder {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Parse a layout from its TOML form.
    pub fn from_toml_str(source: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(source)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    /// Total encoded width in bytes.
    pub fn byte_len(&self) -> usize {
        self.byte_len
    }

    /// Position of the first field called `name`.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name == name)
    }

    /// Empty record for this layout: every value null, every group allocated.
    pub fn new_record(&self) -> DynamicRecord {
        let mut record = DynamicRecord::new();
        for (index, field) in self.fields.iter().enumerate() {
            if let FieldKind::Group(layout) = &field.kind {
                record.set_group(index, layout.new_record());
            }
        }
        record
    }

    /// Offset table of every field, groups included, in buffer order.
    pub fn field_map(&self) -> Vec<FieldMapEntry> {
        let mut entries = Vec::new();
        self.collect_map("", 0, &mut entries);
        entries
    }

    fn collect_map(&self, prefix: &str, base: usize, entries: &mut Vec<FieldMapEntry>) {
        let mut offset = base;
        for field in &self.fields {
            let path = format!("{prefix}{}", field.name);
            let picture = match &field.kind {
                FieldKind::Numeric(pic) => pic.to_string(),
                FieldKind::Text(pic) => pic.to_string(),
                FieldKind::Group(_) => "GROUP".to_string(),
            };
            entries.push(FieldMapEntry {
                path: path.clone(),
                offset,
                len: field.byte_len(),
                picture,
            });
            if let FieldKind::Group(layout) = &field.kind {
                layout.collect_map(&format!("{path}."), offset, entries);
            }
            offset += field.byte_len();
        }
    }
}

/// Builder for [`RecordLayout`].
#[derive(Debug)]
pub struct RecordLayoutBuilder {
    name: String,
    fields: Vec<FieldDescriptor>,
}

impl RecordLayoutBuilder {
    pub fn field(mut self, field: FieldDescriptor) -> Self {
        self.fields.push(field);
        self
    }

    pub fn numeric(self, name: impl Into<String>, picture: NumericPicture) -> Self {
        self.field(FieldDescriptor::new(name, picture))
    }

    pub fn text(self, name: impl Into<String>, picture: TextPicture) -> Self {
        self.field(FieldDescriptor::new(name, picture))
    }

    pub fn group(self, name: impl Into<String>, layout: RecordLayout) -> Self {
        self.field(FieldDescriptor::new(name, layout))
    }

    /// Validate every field and fix the layout.
    ///
    /// # Errors
    /// Returns `CommAreaError::UnsupportedFieldKind` for an empty layout or
    /// a picture the codec cannot encode.
    pub fn build(self) -> Result<RecordLayout, CommAreaError> {
        if self.fields.is_empty() {
            return Err(CommAreaError::UnsupportedFieldKind {
                field: self.name,
                reason: "layout has no fields".to_string(),
            });
        }
        for field in &self.fields {
            field.validate()?;
        }
        let byte_len = self.fields.iter().map(FieldDescriptor::byte_len).sum();
        Ok(RecordLayout {
            name: self.name,
            fields: self.fields,
            byte_len,
        })
    }
}

/// One row of [`RecordLayout::field_map`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldMapEntry {
    /// Dotted field path.
    pub path: String,
    /// Byte offset from the start of the buffer.
    pub offset: usize,
    /// Encoded width in bytes.
    pub len: usize,
    /// Picture clause, or `GROUP`.
    pub picture: String,
}

// Serialized form of a layout. Deserialization goes through the builder so
// a layout read from a file is validated like one built in code.

#[derive(Serialize, Deserialize)]
struct LayoutDef {
    name: String,
    fields: Vec<FieldDef>,
}

#[derive(Serialize, Deserialize)]
struct FieldDef {
    name: String,
    #[serde(flatten)]
    picture: PictureDef,
}

#[derive(Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum PictureDef {
    Numeric {
        digits: usize,
        #[serde(default)]
        decimals: usize,
        #[serde(default)]
        signed: bool,
        #[serde(default)]
        usage: Usage,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        repr: Option<NumericRepr>,
    },
    Text {
        width: usize,
        #[serde(default)]
        encoding: TextEncoding,
    },
    Group {
        /// Name of the nested layout when it differs from the field name.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        layout: Option<String>,
        fields: Vec<FieldDef>,
    },
}

impl TryFrom<LayoutDef> for RecordLayout {
    type Error = CommAreaError;

    fn try_from(def: LayoutDef) -> Result<Self, Self::Error> {
        let mut builder = RecordLayout::builder(def.name);
        for field in def.fields {
            builder = builder.field(FieldDescriptor::try_from(field)?);
        }
        builder.build()
    }
}

impl TryFrom<FieldDef> for FieldDescriptor {
    type Error = CommAreaError;

    fn try_from(def: FieldDef) -> Result<Self, Self::Error> {
        let kind = match def.picture {
            PictureDef::Numeric {
                digits,
                decimals,
                signed,
                usage,
                repr,
            } => FieldKind::Numeric(NumericPicture {
                digits,
                decimals,
                signed,
                usage,
                repr,
            }),
            PictureDef::Text { width, encoding } => FieldKind::Text(TextPicture { width, encoding }),
            PictureDef::Group { layout, fields } => {
                FieldKind::Group(RecordLayout::try_from(LayoutDef {
                    name: layout.unwrap_or_else(|| def.name.clone()),
                    fields,
                })?)
            }
        };
        Ok(FieldDescriptor {
            name: def.name,
            kind,
        })
    }
}

impl From<RecordLayout> for LayoutDef {
    fn from(layout: RecordLayout) -> Self {
        LayoutDef {
            name: layout.name,
            fields: layout.fields.into_iter().map(FieldDef::from).collect(),
        }
    }
}

impl From<FieldDescriptor> for FieldDef {
    fn from(field: FieldDescriptor) -> Self {
        let picture = match field.kind {
            FieldKind::Numeric(pic) => PictureDef::Numeric {
                digits: pic.digits,
                decimals: pic.decimals,
                signed: pic.signed,
                usage: pic.usage,
                repr: pic.repr,
            },
            FieldKind::Text(pic) => PictureDef::Text {
                width: pic.width,
                encoding: pic.encoding,
            },
            FieldKind::Group(layout) => PictureDef::Group {
                layout: (layout.name != field.name).then_some(layout.name),
                fields: layout.fields.into_iter().map(FieldDef::from).collect(),
            },
        };
        FieldDef {
            name: field.name,
            picture,
        }
    }
}
