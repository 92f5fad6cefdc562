//! Errors raised by layout construction and the record engine.

use thiserror::Error;

/// Errors that can occur while building a layout or converting a record.
///
/// Field-level variants carry the dotted path of the failing field
/// (`ADDRESS.ZIP`). Every variant aborts the whole encode or decode call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommAreaError {
    /// Encoded value is wider than the declared field
    #[error("Field {field}: value needs {required} positions but the field holds {capacity}")]
    FieldOverflow {
        field: String,
        required: usize,
        capacity: usize,
    },

    /// Layout or value combination the codec cannot handle
    #[error("Field {field}: unsupported field kind: {reason}")]
    UnsupportedFieldKind { field: String, reason: String },

    /// Digit string or overpunch character that does not parse
    #[error("Field {field}: invalid numeric literal '{literal}'")]
    InvalidNumericLiteral { field: String, literal: String },

    /// Group field without a sub-record
    #[error("Field {field}: nested record is required")]
    MissingRequiredNestedValue { field: String },

    /// Text that the code page, hex or base64 conversion rejects
    #[error("Field {field}: {message}")]
    Transcoding { field: String, message: String },

    /// Input buffer is shorter than the layout
    #[error("Buffer too short for {layout}: need {required} bytes, got {actual}")]
    BufferTooShort {
        layout: String,
        required: usize,
        actual: usize,
    },
}

impl CommAreaError {
    /// Prefix the field path with the name of the enclosing group.
    pub fn within(self, group: &str) -> Self {
        let nest = |field: String| format!("{group}.{field}");
        match self {
            CommAreaError::FieldOverflow {
                field,
                required,
                capacity,
            } => CommAreaError::FieldOverflow {
                field: nest(field),
                required,
                capacity,
            },
            CommAreaError::UnsupportedFieldKind { field, reason } => {
                CommAreaError::UnsupportedFieldKind {
                    field: nest(field),
                    reason,
                }
            }
            CommAreaError::InvalidNumericLiteral { field, literal } => {
                CommAreaError::InvalidNumericLiteral {
                    field: nest(field),
                    literal,
                }
            }
            CommAreaError::MissingRequiredNestedValue { field } => {
                CommAreaError::MissingRequiredNestedValue { field: nest(field) }
            }
            CommAreaError::Transcoding { field, message } => CommAreaError::Transcoding {
                field: nest(field),
                message,
            },
            other @ CommAreaError::BufferTooShort { .. } => other,
        }
    }

    /// Path of the failing field, if the error is tied to one.
    pub fn field(&self) -> Option<&str> {
        match self {
            CommAreaError::FieldOverflow { field, .. }
            | CommAreaError::UnsupportedFieldKind { field, .. }
            | CommAreaError::InvalidNumericLiteral { field, .. }
            | CommAreaError::MissingRequiredNestedValue { field }
            | CommAreaError::Transcoding { field, .. } => Some(field),
            CommAreaError::BufferTooShort { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_within_prefixes_field_path() {
        let err = CommAreaError::MissingRequiredNestedValue {
            field: "ZIP".to_string(),
        }
        .within("ADDRESS")
        .within("CUSTOMER");
        assert_eq!(err.field(), Some("CUSTOMER.ADDRESS.ZIP"));
    }

    #[test]
    fn test_buffer_too_short_has_no_field() {
        let err = CommAreaError::BufferTooShort {
            layout: "REQ".to_string(),
            required: 16,
            actual: 4,
        }
        .within("OUTER");
        assert_eq!(err.field(), None);
        assert_eq!(
            err.to_string(),
            "Buffer too short for REQ: need 16 bytes, got 4"
        );
    }
}
