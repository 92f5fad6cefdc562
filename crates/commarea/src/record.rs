//! Record values and the positional accessor seam used by the engine.
//!
//! The engine never inspects application types. It reads and writes field
//! values by position through the [`Record`] trait, which application
//! structs implement in a few lines and [`DynamicRecord`] implements for
//! layouts only known at run time.
//!
//! ```rust
//! use commarea::record::{FieldValue, Record, ValueTypeError};
//!
//! struct Header {
//!     tran: String,
//!     seq: Option<i64>,
//! }
//!
//! impl Record for Header {
//!     fn field(&self, index: usize) -> FieldValue {
//!         match index {
//!             0 => self.tran.clone().into(),
//!             1 => self.seq.into(),
//!             _ => FieldValue::Null,
//!         }
//!     }
//!
//!     fn set_field(&mut self, index: usize, value: FieldValue) -> Result<(), ValueTypeError> {
//!         match index {
//!             0 => self.tran = value.try_into()?,
//!             1 => self.seq = value.try_into()?,
//!             _ => {}
//!         }
//!         Ok(())
//!     }
//! }
//! ```

use rust_decimal::Decimal;
use thiserror::Error;

/// Scalar value of one field.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FieldValue {
    /// Absent value; blank or zero on the wire depending on the field.
    #[default]
    Null,
    /// Unscaled digits; an implied decimal point in the picture is ignored.
    Integer(i64),
    Decimal(Decimal),
    Text(String),
}

impl FieldValue {
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    /// Short name of the variant, for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldValue::Null => "null",
            FieldValue::Integer(_) => "integer",
            FieldValue::Decimal(_) => "decimal",
            FieldValue::Text(_) => "text",
        }
    }
}

/// A field value did not fit the destination's type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("expected {expected} value, found {found}")]
pub struct ValueTypeError {
    pub expected: &'static str,
    pub found: String,
}

impl ValueTypeError {
    fn new(expected: &'static str, value: &FieldValue) -> Self {
        let found = match value {
            FieldValue::Integer(v) => format!("integer {v}"),
            FieldValue::Decimal(v) => format!("decimal {v}"),
            other => other.type_name().to_string(),
        };
        Self { expected, found }
    }
}

impl From<i64> for FieldValue {
    fn from(v: i64) -> Self {
        FieldValue::Integer(v)
    }
}

impl From<i32> for FieldValue {
    fn from(v: i32) -> Self {
        FieldValue::Integer(v.into())
    }
}

impl From<u32> for FieldValue {
    fn from(v: u32) -> Self {
        FieldValue::Integer(v.into())
    }
}

impl From<u64> for FieldValue {
    fn from(v: u64) -> Self {
        i64::try_from(v).map_or_else(|_| FieldValue::Decimal(Decimal::from(v)), FieldValue::Integer)
    }
}

impl From<Decimal> for FieldValue {
    fn from(v: Decimal) -> Self {
        FieldValue::Decimal(v)
    }
}

impl From<String> for FieldValue {
    fn from(v: String) -> Self {
        FieldValue::Text(v)
    }
}

impl From<&str> for FieldValue {
    fn from(v: &str) -> Self {
        FieldValue::Text(v.to_string())
    }
}

impl TryFrom<FieldValue> for i64 {
    type Error = ValueTypeError;

    fn try_from(value: FieldValue) -> Result<Self, Self::Error> {
        match value {
            FieldValue::Integer(v) => Ok(v),
            other => Err(ValueTypeError::new("integer", &other)),
        }
    }
}

impl TryFrom<FieldValue> for i32 {
    type Error = ValueTypeError;

    fn try_from(value: FieldValue) -> Result<Self, Self::Error> {
        match value {
            FieldValue::Integer(v) => {
                i32::try_from(v).map_err(|_| ValueTypeError::new("32-bit integer", &value))
            }
            other => Err(ValueTypeError::new("32-bit integer", &other)),
        }
    }
}

impl TryFrom<FieldValue> for u32 {
    type Error = ValueTypeError;

    fn try_from(value: FieldValue) -> Result<Self, Self::Error> {
        match value {
            FieldValue::Integer(v) => u32::try_from(v)
                .map_err(|_| ValueTypeError::new("unsigned 32-bit integer", &value)),
            other => Err(ValueTypeError::new("unsigned 32-bit integer", &other)),
        }
    }
}

impl TryFrom<FieldValue> for u64 {
    type Error = ValueTypeError;

    fn try_from(value: FieldValue) -> Result<Self, Self::Error> {
        match value {
            FieldValue::Integer(v) => u64::try_from(v)
                .map_err(|_| ValueTypeError::new("unsigned 64-bit integer", &value)),
            other => Err(ValueTypeError::new("unsigned 64-bit integer", &other)),
        }
    }
}

impl TryFrom<FieldValue> for Decimal {
    type Error = ValueTypeError;

    fn try_from(value: FieldValue) -> Result<Self, Self::Error> {
        match value {
            FieldValue::Decimal(v) => Ok(v),
            FieldValue::Integer(v) => Ok(Decimal::from(v)),
            other => Err(ValueTypeError::new("decimal", &other)),
        }
    }
}

impl TryFrom<FieldValue> for String {
    type Error = ValueTypeError;

    fn try_from(value: FieldValue) -> Result<Self, Self::Error> {
        match value {
            FieldValue::Text(v) => Ok(v),
            other => Err(ValueTypeError::new("text", &other)),
        }
    }
}

// `Option<T>` maps `None` to and from `FieldValue::Null`.
macro_rules! optional_value {
    ($($ty:ty),* $(,)?) => {$(
        impl From<Option<$ty>> for FieldValue {
            fn from(v: Option<$ty>) -> Self {
                v.map_or(FieldValue::Null, FieldValue::from)
            }
        }

        impl TryFrom<FieldValue> for Option<$ty> {
            type Error = ValueTypeError;

            fn try_from(value: FieldValue) -> Result<Self, Self::Error> {
                match value {
                    FieldValue::Null => Ok(None),
                    other => <$ty>::try_from(other).map(Some),
                }
            }
        }
    )*};
}

optional_value!(i64, i32, u32, u64, Decimal, String);

/// Positional access to a record's fields.
///
/// Indexes follow the field order of the layout the record is used with.
/// Scalar fields go through [`field`](Record::field) and
/// [`set_field`](Record::set_field); group fields expose their sub-record
/// through [`group`](Record::group) and [`group_mut`](Record::group_mut).
pub trait Record {
    /// Value of the scalar field at `index`; `Null` when absent.
    fn field(&self, index: usize) -> FieldValue;

    /// Store a decoded value into the scalar field at `index`.
    fn set_field(&mut self, index: usize, value: FieldValue) -> Result<(), ValueTypeError>;

    /// Sub-record of the group field at `index`.
    fn group(&self, _index: usize) -> Option<&dyn Record> {
        None
    }

    /// Mutable sub-record of the group field at `index`.
    fn group_mut(&mut self, _index: usize) -> Option<&mut dyn Record> {
        None
    }
}

/// One position of a [`DynamicRecord`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Slot {
    Value(FieldValue),
    Group(DynamicRecord),
}

impl Default for Slot {
    fn default() -> Self {
        Slot::Value(FieldValue::Null)
    }
}

/// Record whose shape is only known at run time.
///
/// Positions that were never set read as `Null` and have no group.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DynamicRecord {
    slots: Vec<Slot>,
}

impl DynamicRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of allocated positions.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Scalar value at `index`, if that position holds one.
    pub fn get(&self, index: usize) -> Option<&FieldValue> {
        match self.slots.get(index) {
            Some(Slot::Value(value)) => Some(value),
            _ => None,
        }
    }

    /// Set the scalar value at `index`, growing the record as needed.
    pub fn set(&mut self, index: usize, value: impl Into<FieldValue>) {
        *self.slot_mut(index) = Slot::Value(value.into());
    }

    pub fn get_group(&self, index: usize) -> Option<&DynamicRecord> {
        match self.slots.get(index) {
            Some(Slot::Group(group)) => Some(group),
            _ => None,
        }
    }

    pub fn get_group_mut(&mut self, index: usize) -> Option<&mut DynamicRecord> {
        match self.slots.get_mut(index) {
            Some(Slot::Group(group)) => Some(group),
            _ => None,
        }
    }

    /// Place a sub-record at `index`, growing the record as needed.
    pub fn set_group(&mut self, index: usize, group: DynamicRecord) {
        *self.slot_mut(index) = Slot::Group(group);
    }

    /// Take the sub-record out of `index`, leaving a null value behind.
    pub fn take_group(&mut self, index: usize) -> Option<DynamicRecord> {
        match self.slots.get_mut(index) {
            Some(slot @ Slot::Group(_)) => match std::mem::take(slot) {
                Slot::Group(group) => Some(group),
                Slot::Value(_) => None,
            },
            _ => None,
        }
    }

    fn slot_mut(&mut self, index: usize) -> &mut Slot {
        if index >= self.slots.len() {
            self.slots.resize_with(index + 1, Slot::default);
        }
        &mut self.slots[index]
    }
}

impl Record for DynamicRecord {
    fn field(&self, index: usize) -> FieldValue {
        self.get(index).cloned().unwrap_or_default()
    }

    fn set_field(&mut self, index: usize, value: FieldValue) -> Result<(), ValueTypeError> {
        self.set(index, value);
        Ok(())
    }

    fn group(&self, index: usize) -> Option<&dyn Record> {
        self.get_group(index).map(|g| g as &dyn Record)
    }

    fn group_mut(&mut self, index: usize) -> Option<&mut dyn Record> {
        self.get_group_mut(index).map(|g| g as &mut dyn Record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_option_conversions() {
        assert_eq!(FieldValue::from(None::<i64>), FieldValue::Null);
        assert_eq!(FieldValue::from(Some(5i32)), FieldValue::Integer(5));

        let value: Option<String> = FieldValue::Null.try_into().unwrap();
        assert_eq!(value, None);
        let value: Option<String> = FieldValue::from("AB").try_into().unwrap();
        assert_eq!(value.as_deref(), Some("AB"));
    }

    #[test]
    fn test_integer_narrowing() {
        let v: i32 = FieldValue::Integer(-7).try_into().unwrap();
        assert_eq!(v, -7);

        let err = i32::try_from(FieldValue::Integer(i64::MAX)).unwrap_err();
        assert_eq!(err.expected, "32-bit integer");
        assert!(u32::try_from(FieldValue::Integer(-1)).is_err());
        assert_eq!(u64::try_from(FieldValue::Integer(9)).unwrap(), 9);
        assert_eq!(
            FieldValue::from(u64::MAX),
            FieldValue::Decimal(Decimal::from(u64::MAX))
        );
    }

    #[test]
    fn test_decimal_accepts_integer() {
        let v: Decimal = FieldValue::Integer(12).try_into().unwrap();
        assert_eq!(v, Decimal::from(12));
        let v: Decimal = FieldValue::Decimal(Decimal::from_str("1.50").unwrap())
            .try_into()
            .unwrap();
        assert_eq!(v.to_string(), "1.50");
    }

    #[test]
    fn test_type_mismatch_message() {
        let err = i64::try_from(FieldValue::from("12")).unwrap_err();
        assert_eq!(err.to_string(), "expected integer value, found text");
        assert!(String::try_from(FieldValue::Null).is_err());
    }

    #[test]
    fn test_dynamic_record_grows() {
        let mut record = DynamicRecord::new();
        record.set(2, 42i64);
        assert_eq!(record.len(), 3);
        assert_eq!(record.get(0), Some(&FieldValue::Null));
        assert_eq!(record.get(2), Some(&FieldValue::Integer(42)));
        assert_eq!(record.field(9), FieldValue::Null);
    }

    #[test]
    fn test_dynamic_record_groups() {
        let mut inner = DynamicRecord::new();
        inner.set(0, "X");

        let mut record = DynamicRecord::new();
        record.set_group(1, inner.clone());
        assert!(record.group(1).is_some());
        assert!(record.group(0).is_none());
        assert_eq!(record.get(1), None);

        record
            .group_mut(1)
            .unwrap()
            .set_field(0, FieldValue::from("Y"))
            .unwrap();
        assert_eq!(record.get_group(1).unwrap().get(0), Some(&FieldValue::from("Y")));

        let taken = record.take_group(1).unwrap();
        assert_eq!(taken.get(0), Some(&FieldValue::from("Y")));
        assert!(record.get_group(1).is_none());
        assert_eq!(record.get(1), Some(&FieldValue::Null));
    }
}
