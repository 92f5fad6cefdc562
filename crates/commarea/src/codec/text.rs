//! Fixed-width text fields: plain, hex and base64.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use commarea_encoding::CodePage;

use super::{is_blank, FieldError, FieldResult};
use crate::layout::{TextEncoding, TextPicture};
use crate::record::FieldValue;

pub(super) fn encode(
    picture: &TextPicture,
    value: &FieldValue,
    code_page: &CodePage,
) -> FieldResult<Vec<u8>> {
    let width = picture.width();
    match picture.encoding() {
        TextEncoding::Plain => {
            let text = match value {
                FieldValue::Null => String::new(),
                FieldValue::Text(text) => text.clone(),
                FieldValue::Integer(v) => v.to_string(),
                FieldValue::Decimal(v) => v.to_string(),
            };
            let len = text.chars().count();
            if len > width {
                return Err(FieldError::Overflow {
                    required: len,
                    capacity: width,
                });
            }
            Ok(code_page.encode(&format!("{text:<width$}"))?)
        }
        TextEncoding::Hex => {
            let raw = match raw_text(picture, value)? {
                Some(text) => hex::decode(text)
                    .map_err(|e| FieldError::Transcoding(format!("invalid hex '{text}': {e}")))?,
                None => Vec::new(),
            };
            zero_pad(raw, width)
        }
        TextEncoding::Base64 => {
            let raw = match raw_text(picture, value)? {
                Some(text) => STANDARD
                    .decode(text)
                    .map_err(|e| FieldError::Transcoding(format!("invalid base64 '{text}': {e}")))?,
                None => Vec::new(),
            };
            zero_pad(raw, width)
        }
    }
}

/// Text of a hex or base64 field; `None` when there are no bytes to write.
fn raw_text<'v>(picture: &TextPicture, value: &'v FieldValue) -> FieldResult<Option<&'v str>> {
    match value {
        FieldValue::Null => Ok(None),
        FieldValue::Text(text) if text.trim().is_empty() => Ok(None),
        FieldValue::Text(text) => Ok(Some(text.trim())),
        other => Err(FieldError::Unsupported(format!(
            "{picture} takes text, got {}",
            other.type_name()
        ))),
    }
}

fn zero_pad(mut raw: Vec<u8>, width: usize) -> FieldResult<Vec<u8>> {
    if raw.len() > width {
        return Err(FieldError::Overflow {
            required: raw.len(),
            capacity: width,
        });
    }
    raw.resize(width, 0);
    Ok(raw)
}

pub(super) fn decode(
    picture: &TextPicture,
    bytes: &[u8],
    code_page: &CodePage,
) -> FieldResult<FieldValue> {
    let text = match picture.encoding() {
        TextEncoding::Plain => code_page.decode(bytes)?.trim_end_matches(is_blank).to_string(),
        TextEncoding::Hex => hex::encode_upper(bytes),
        TextEncoding::Base64 => STANDARD.encode(bytes),
    };
    Ok(FieldValue::Text(text))
}
