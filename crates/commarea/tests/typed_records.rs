//! Application structs as records, against layouts built in code and read
//! from TOML.

use std::str::FromStr;
use std::sync::LazyLock;

use commarea::record::ValueTypeError;
use commarea::{
    CommArea, CommAreaError, FieldValue, NumericPicture, Record, RecordLayout, TextPicture,
};
use commarea_encoding::{CP037, CP1047};
use rust_decimal::Decimal;

static ADDRESS: LazyLock<RecordLayout> = LazyLock::new(|| {
    RecordLayout::builder("ADDRESS")
        .text("CITY", TextPicture::picx(12))
        .numeric("ZIP", NumericPicture::pic9(5))
        .build()
        .unwrap()
});

static CUSTOMER: LazyLock<RecordLayout> = LazyLock::new(|| {
    RecordLayout::builder("CUSTOMER")
        .numeric("ID", NumericPicture::pic9(8))
        .text("NAME", TextPicture::picx(20))
        .numeric("BALANCE", NumericPicture::pic_s9(7).v9(2).comp3())
        .numeric("CREDIT", NumericPicture::pic_s9(5).v9(2))
        .group("ADDRESS", ADDRESS.clone())
        .build()
        .unwrap()
});

#[derive(Debug, Default, Clone, PartialEq)]
struct Address {
    city: String,
    zip: Option<u32>,
}

impl Record for Address {
    fn field(&self, index: usize) -> FieldValue {
        match index {
            0 => self.city.as_str().into(),
            1 => self.zip.into(),
            _ => FieldValue::Null,
        }
    }

    fn set_field(&mut self, index: usize, value: FieldValue) -> Result<(), ValueTypeError> {
        match index {
            0 => self.city = value.try_into()?,
            1 => self.zip = value.try_into()?,
            _ => {}
        }
        Ok(())
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
struct Customer {
    id: Option<i64>,
    name: String,
    balance: Option<Decimal>,
    credit: Option<Decimal>,
    address: Address,
}

impl Record for Customer {
    fn field(&self, index: usize) -> FieldValue {
        match index {
            0 => self.id.into(),
            1 => self.name.as_str().into(),
            2 => self.balance.into(),
            3 => self.credit.into(),
            _ => FieldValue::Null,
        }
    }

    fn set_field(&mut self, index: usize, value: FieldValue) -> Result<(), ValueTypeError> {
        match index {
            0 => self.id = value.try_into()?,
            1 => self.name = value.try_into()?,
            2 => self.balance = value.try_into()?,
            3 => self.credit = value.try_into()?,
            _ => {}
        }
        Ok(())
    }

    fn group(&self, index: usize) -> Option<&dyn Record> {
        (index == 4).then_some(&self.address as &dyn Record)
    }

    fn group_mut(&mut self, index: usize) -> Option<&mut dyn Record> {
        (index == 4).then_some(&mut self.address as &mut dyn Record)
    }
}

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn sample() -> Customer {
    Customer {
        id: Some(1234),
        name: "JANE DOE".to_string(),
        balance: Some(dec("-1234.56")),
        credit: Some(dec("500.00")),
        address: Address {
            city: "SAO PAULO".to_string(),
            zip: Some(1310),
        },
    }
}

#[test]
fn test_customer_width() {
    // 8 + 20 + 5 + 7 + (12 + 5)
    assert_eq!(CUSTOMER.byte_len(), 57);
    let bytes = CommArea::new().encode(&CUSTOMER, &sample()).unwrap();
    assert_eq!(bytes.len(), 57);
}

#[test]
fn test_customer_bytes() {
    let bytes = CommArea::new().encode(&CUSTOMER, &sample()).unwrap();

    assert_eq!(&bytes[..8], CP1047.encode("00001234").unwrap().as_slice());
    assert_eq!(CP1047.decode(&bytes[8..28]).unwrap(), format!("{:<20}", "JANE DOE"));
    assert_eq!(&bytes[28..33], &[0x00, 0x01, 0x23, 0x45, 0x6D]);
    // +500.00 overpunched: 0050000 -> 005000{
    assert_eq!(&bytes[33..40], &[0xF0, 0xF0, 0xF5, 0xF0, 0xF0, 0xF0, 0xC0]);
    assert_eq!(CP1047.decode(&bytes[40..]).unwrap(), "SAO PAULO   01310");
}

#[test]
fn test_customer_roundtrip() {
    let codec = CommArea::new();
    let bytes = codec.encode(&CUSTOMER, &sample()).unwrap();

    let mut decoded = Customer::default();
    let consumed = codec.decode(&CUSTOMER, &bytes, &mut decoded).unwrap();
    assert_eq!(consumed, 57);
    assert_eq!(decoded, sample());
}

#[test]
fn test_absent_values() {
    let codec = CommArea::new();
    let bytes = codec.encode(&CUSTOMER, &Customer::default()).unwrap();

    let mut decoded = Customer::default();
    codec.decode(&CUSTOMER, &bytes, &mut decoded).unwrap();
    // absent numbers come back as zero once written
    assert_eq!(decoded.id, Some(0));
    assert_eq!(decoded.balance, Some(Decimal::ZERO));
    assert_eq!(decoded.credit, Some(Decimal::ZERO));
    assert_eq!(decoded.name, "");
    assert_eq!(decoded.address.zip, Some(0));
}

#[test]
fn test_blank_reply_fields_are_none() {
    // a host program that leaves DISPLAY items blank
    let mut buffer = CommArea::new().encode(&CUSTOMER, &sample()).unwrap();
    buffer[..8].copy_from_slice(&[0x40; 8]);
    buffer[33..40].copy_from_slice(&[0x40; 7]);

    let mut decoded = sample();
    CommArea::new().decode(&CUSTOMER, &buffer, &mut decoded).unwrap();
    assert_eq!(decoded.id, None);
    assert_eq!(decoded.credit, None);
    assert_eq!(decoded.balance, Some(dec("-1234.56")));
}

#[test]
fn test_code_page_changes_text_bytes_only() {
    let mut customer = sample();
    customer.name = "[X]".to_string();

    let in_1047 = CommArea::new().encode(&CUSTOMER, &customer).unwrap();
    let in_037 = CommArea::with_code_page(&CP037).encode(&CUSTOMER, &customer).unwrap();
    assert_ne!(in_1047[8..11], in_037[8..11]);
    assert_eq!(in_1047[..8], in_037[..8]);
    assert_eq!(in_1047[11..], in_037[11..]);

    let mut decoded = Customer::default();
    CommArea::with_code_page(&CP037)
        .decode(&CUSTOMER, &in_037, &mut decoded)
        .unwrap();
    assert_eq!(decoded.name, "[X]");
}

#[test]
fn test_overflow_aborts_encode() {
    let mut customer = sample();
    customer.address.zip = Some(123_456);
    let err = CommArea::new().encode(&CUSTOMER, &customer).unwrap_err();
    assert_eq!(
        err,
        CommAreaError::FieldOverflow {
            field: "ADDRESS.ZIP".to_string(),
            required: 6,
            capacity: 5
        }
    );
}

#[test]
fn test_wrong_destination_type() {
    let layout = RecordLayout::builder("CUSTOMER")
        .text("ID", TextPicture::picx(8))
        .build()
        .unwrap();
    let mut decoded = Customer::default();
    let err = CommArea::new()
        .decode(&layout, &CP1047.encode("ABCDEFGH").unwrap(), &mut decoded)
        .unwrap_err();
    assert!(matches!(err, CommAreaError::UnsupportedFieldKind { field, .. } if field == "ID"));
}

#[test]
fn test_layout_from_toml_matches_builder() {
    let layout = RecordLayout::from_toml_str(
        r#"
        name = "CUSTOMER"

        [[fields]]
        name = "ID"
        type = "numeric"
        digits = 8

        [[fields]]
        name = "NAME"
        type = "text"
        width = 20

        [[fields]]
        name = "BALANCE"
        type = "numeric"
        digits = 7
        decimals = 2
        signed = true
        usage = "comp-3"

        [[fields]]
        name = "CREDIT"
        type = "numeric"
        digits = 5
        decimals = 2
        signed = true

        [[fields]]
        name = "ADDRESS"
        type = "group"

        [[fields.fields]]
        name = "CITY"
        type = "text"
        width = 12

        [[fields.fields]]
        name = "ZIP"
        type = "numeric"
        digits = 5
        "#,
    )
    .unwrap();
    assert_eq!(layout, *CUSTOMER);

    let codec = CommArea::new();
    assert_eq!(
        codec.encode(&layout, &sample()).unwrap(),
        codec.encode(&CUSTOMER, &sample()).unwrap()
    );
}
