//! JSON form of records: objects keyed by field name.
//!
//! Integers are JSON numbers, decimals are strings (so no precision is lost
//! to floating point), text is a string, null is null and a group is a
//! nested object.

use std::str::FromStr;

use commarea::{DynamicRecord, FieldKind, FieldValue, RecordLayout};
use miette::{miette, Result};
use rust_decimal::Decimal;
use serde_json::{Map, Value};

/// Build a record for `layout` from a JSON object. Missing keys are null.
pub fn record_from_json(layout: &RecordLayout, value: &Value) -> Result<DynamicRecord> {
    let empty = Map::new();
    let null = Value::Null;
    let object = match value {
        Value::Object(object) => object,
        Value::Null => &empty,
        other => return Err(miette!("{}: expected an object, got {other}", layout.name())),
    };

    let mut record = DynamicRecord::new();
    for (index, field) in layout.fields().iter().enumerate() {
        let item = object.get(field.name()).unwrap_or(&null);
        match field.kind() {
            FieldKind::Group(nested) => {
                let group = record_from_json(nested, item)
                    .map_err(|e| miette!("{}.{e}", field.name()))?;
                record.set_group(index, group);
            }
            FieldKind::Numeric(_) => {
                let value = numeric_value(item).ok_or_else(|| {
                    miette!("{}: expected a number or numeric string, got {item}", field.name())
                })?;
                record.set(index, value);
            }
            FieldKind::Text(_) => {
                let value = text_value(item)
                    .ok_or_else(|| miette!("{}: expected a string, got {item}", field.name()))?;
                record.set(index, value);
            }
        }
    }

    for key in object.keys() {
        if layout.index_of(key).is_none() {
            tracing::warn!(layout = %layout.name(), field = %key, "Ignoring unknown field");
        }
    }
    Ok(record)
}

fn numeric_value(item: &Value) -> Option<FieldValue> {
    match item {
        Value::Null => Some(FieldValue::Null),
        Value::Number(n) => {
            if let Some(v) = n.as_i64() {
                Some(FieldValue::Integer(v))
            } else if let Some(v) = n.as_u64() {
                Some(FieldValue::from(v))
            } else {
                Decimal::from_str(&n.to_string())
                    .or_else(|_| Decimal::from_scientific(&n.to_string()))
                    .ok()
                    .map(FieldValue::Decimal)
            }
        }
        // Decimal strings keep their scale; anything else goes to the codec
        // as a digit string and is checked there.
        Value::String(s) => Some(match Decimal::from_str(s.trim()) {
            Ok(v) if s.contains('.') => FieldValue::Decimal(v),
            _ => FieldValue::Text(s.clone()),
        }),
        _ => None,
    }
}

fn text_value(item: &Value) -> Option<FieldValue> {
    match item {
        Value::Null => Some(FieldValue::Null),
        Value::String(s) => Some(FieldValue::Text(s.clone())),
        Value::Number(n) => Some(FieldValue::Text(n.to_string())),
        _ => None,
    }
}

/// Render a decoded record as a JSON object in field order.
pub fn record_to_json(layout: &RecordLayout, record: &DynamicRecord) -> Value {
    let mut object = Map::new();
    for (index, field) in layout.fields().iter().enumerate() {
        let value = match field.kind() {
            FieldKind::Group(nested) => record
                .get_group(index)
                .map_or(Value::Null, |group| record_to_json(nested, group)),
            FieldKind::Numeric(_) | FieldKind::Text(_) => scalar_to_json(record.get(index)),
        };
        object.insert(field.name().to_string(), value);
    }
    Value::Object(object)
}

fn scalar_to_json(value: Option<&FieldValue>) -> Value {
    match value {
        None | Some(FieldValue::Null) => Value::Null,
        Some(FieldValue::Integer(v)) => Value::from(*v),
        Some(FieldValue::Decimal(v)) => Value::String(v.to_string()),
        Some(FieldValue::Text(v)) => Value::String(v.clone()),
    }
}
