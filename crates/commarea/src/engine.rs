//! Record engine: walks a layout and runs the field codecs in buffer order.

use commarea_encoding::{CodePage, CP1047};
use tracing::{debug, trace};

use crate::codec::{decode_numeric, decode_text, encode_numeric, encode_text, FieldError};
use crate::error::CommAreaError;
use crate::layout::{FieldKind, RecordLayout};
use crate::record::Record;
use crate::Result;

/// Encoder and decoder for COMMAREA buffers.
///
/// Holds nothing but the code page used for text and zoned fields, so it is
/// `Copy` and can be shared freely across threads.
///
/// ```rust
/// use commarea::{CommArea, DynamicRecord, NumericPicture, RecordLayout, TextPicture};
///
/// let layout = RecordLayout::builder("REQ")
///     .text("NAME", TextPicture::picx(5))
///     .numeric("AMT", NumericPicture::pic_s9(3).comp3())
///     .build()
///     .unwrap();
///
/// let mut record = layout.new_record();
/// record.set(0, "AB");
/// record.set(1, -12i64);
///
/// let codec = CommArea::new();
/// let bytes = codec.encode(&layout, &record).unwrap();
/// assert_eq!(bytes, vec![0xC1, 0xC2, 0x40, 0x40, 0x40, 0x01, 0x2D]);
///
/// let mut decoded = DynamicRecord::new();
/// assert_eq!(codec.decode(&layout, &bytes, &mut decoded).unwrap(), 7);
/// assert_eq!(decoded, record);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct CommArea<'cp> {
    code_page: &'cp CodePage,
}

impl Default for CommArea<'static> {
    fn default() -> Self {
        Self { code_page: &CP1047 }
    }
}

impl CommArea<'static> {
    /// Codec using CP1047.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<'cp> CommArea<'cp> {
    /// Codec using the given code page.
    pub fn with_code_page(code_page: &'cp CodePage) -> Self {
        Self { code_page }
    }

    pub fn code_page(&self) -> &'cp CodePage {
        self.code_page
    }

    /// Encode `record` into a buffer of exactly `layout.byte_len()` bytes.
    ///
    /// # Errors
    /// Any field failure aborts the call; no partial buffer is returned.
    pub fn encode(&self, layout: &RecordLayout, record: &dyn Record) -> Result<Vec<u8>> {
        let mut out = Vec::with_capacity(layout.byte_len());
        self.encode_into(layout, record, &mut out)?;
        debug!(
            layout = %layout.name(),
            bytes = out.len(),
            code_page = %self.code_page.name,
            "Record encoded"
        );
        Ok(out)
    }

    fn encode_into(
        &self,
        layout: &RecordLayout,
        record: &dyn Record,
        out: &mut Vec<u8>,
    ) -> Result<()> {
        for (index, field) in layout.fields().iter().enumerate() {
            trace!(field = %field.name(), offset = out.len(), width = field.byte_len(), "Encoding field");
            match field.kind() {
                FieldKind::Numeric(picture) => {
                    let segment = encode_numeric(picture, &record.field(index), self.code_page)
                        .map_err(|e| e.at(field.name()))?;
                    out.extend_from_slice(&segment);
                }
                FieldKind::Text(picture) => {
                    let segment = encode_text(picture, &record.field(index), self.code_page)
                        .map_err(|e| e.at(field.name()))?;
                    out.extend_from_slice(&segment);
                }
                FieldKind::Group(nested) => {
                    let group = record.group(index).ok_or_else(|| {
                        CommAreaError::MissingRequiredNestedValue {
                            field: field.name().to_string(),
                        }
                    })?;
                    self.encode_into(nested, group, out)
                        .map_err(|e| e.within(field.name()))?;
                }
            }
        }
        Ok(())
    }

    /// Decode the start of `buffer` into `record` and return the number of
    /// bytes consumed, always `layout.byte_len()`.
    ///
    /// Bytes past the layout are ignored.
    ///
    /// # Errors
    /// `BufferTooShort` is raised before any field is touched. A field
    /// failure aborts the call, but fields decoded before it keep their new
    /// values.
    pub fn decode(
        &self,
        layout: &RecordLayout,
        buffer: &[u8],
        record: &mut dyn Record,
    ) -> Result<usize> {
        if buffer.len() < layout.byte_len() {
            return Err(CommAreaError::BufferTooShort {
                layout: layout.name().to_string(),
                required: layout.byte_len(),
                actual: buffer.len(),
            });
        }
        let consumed = self.decode_from(layout, buffer, record)?;
        debug!(
            layout = %layout.name(),
            bytes = consumed,
            trailing = buffer.len() - consumed,
            code_page = %self.code_page.name,
            "Record decoded"
        );
        Ok(consumed)
    }

    fn decode_from(
        &self,
        layout: &RecordLayout,
        buffer: &[u8],
        record: &mut dyn Record,
    ) -> Result<usize> {
        let mut cursor = 0;
        for (index, field) in layout.fields().iter().enumerate() {
            let width = field.byte_len();
            trace!(field = %field.name(), offset = cursor, width, "Decoding field");
            let slice = &buffer[cursor..cursor + width];
            let value = match field.kind() {
                FieldKind::Numeric(picture) => decode_numeric(picture, slice, self.code_page),
                FieldKind::Text(picture) => decode_text(picture, slice, self.code_page),
                FieldKind::Group(nested) => {
                    let group = record.group_mut(index).ok_or_else(|| {
                        CommAreaError::MissingRequiredNestedValue {
                            field: field.name().to_string(),
                        }
                    })?;
                    cursor += self
                        .decode_from(nested, &buffer[cursor..], group)
                        .map_err(|e| e.within(field.name()))?;
                    continue;
                }
            };
            let value = value.map_err(|e| e.at(field.name()))?;
            record
                .set_field(index, value)
                .map_err(|e| FieldError::Unsupported(e.to_string()).at(field.name()))?;
            cursor += width;
        }
        Ok(cursor)
    }
}
