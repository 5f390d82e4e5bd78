//! Serde integration for tagline payloads.
//!
//! This module bridges plain `#[derive(Serialize, Deserialize)]` structs and
//! the record-based codec, so call sites stay statically typed against the
//! entry's declared fields. Payload structs must be flat: field values are
//! numbers, strings, booleans, options of those, or unit enum variants
//! (encoded by name).
//!
//! # Example
//!
//! ```rust
//! use serde::{Serialize, Deserialize};
//! use tagline::schema::{Entry, FieldType};
//! use tagline::Tagline;
//!
//! #[derive(Serialize, Deserialize, Debug, PartialEq)]
//! struct GoView {
//!     #[serde(rename = "noteId")]
//!     note_id: f64,
//!     view: String,
//! }
//!
//! let entry = Entry::new("nGoView")
//!     .field("noteId", FieldType::Number)
//!     .field("view", FieldType::Str);
//!
//! let tagline = Tagline::new();
//! let payload = GoView { note_id: 7.0, view: "main".into() };
//!
//! let encoded = tagline::serde::stringify(&tagline, &entry, &payload).unwrap();
//! assert_eq!(encoded, "nGoView|7|main");
//!
//! let decoded: GoView = tagline::serde::parse(&tagline, &entry, &encoded).unwrap();
//! assert_eq!(payload, decoded);
//! ```

mod de;
mod error;
mod ser;

pub use error::SerdeError;

use serde::{Deserialize, Serialize};

use crate::handle::Tagline;
use crate::schema::Entry;
use crate::value::Record;

/// Encode a serializable payload for an entry.
///
/// The payload is first converted to a `Record` and then stringified through
/// the handle, so the same strictness applies: every declared field must be
/// present with the declared kind.
pub fn stringify<T: Serialize>(
    tagline: &Tagline,
    entry: &Entry,
    payload: &T,
) -> Result<String, SerdeError> {
    let record = ser::RecordSerializer::serialize(payload)?;
    Ok(tagline.stringify(entry, &record)?)
}

/// Decode a string produced for an entry into a deserializable payload.
///
/// The decoded record includes the echoed `key` field; derived structs
/// without a `key` field simply ignore it.
pub fn parse<T: for<'de> Deserialize<'de>>(
    tagline: &Tagline,
    entry: &Entry,
    text: &str,
) -> Result<T, SerdeError> {
    let record = tagline.parse(entry, text)?;
    de::RecordDeserializer::deserialize(&record)
}

/// Convert a serializable value to a `Record` without encoding it.
pub fn to_record<T: Serialize>(value: &T) -> Result<Record, SerdeError> {
    ser::RecordSerializer::serialize(value)
}

/// Deserialize a `Record` to a Rust type.
pub fn from_record<T: for<'de> Deserialize<'de>>(record: &Record) -> Result<T, SerdeError> {
    de::RecordDeserializer::deserialize(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::FieldType;
    use crate::value::Value;
    use serde::{Deserialize, Serialize};

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct ParamSet {
        #[serde(rename = "noteId")]
        note_id: i64,
        param: String,
        value: Option<f64>,
    }

    fn param_set_entry() -> Entry {
        Entry::new("nPmSet")
            .field("noteId", FieldType::Number)
            .field("param", FieldType::Str)
            .field("value", FieldType::NullableNumber)
    }

    #[test]
    fn test_to_record() {
        let payload = ParamSet {
            note_id: 3,
            param: "sort".into(),
            value: None,
        };

        let record = to_record(&payload).unwrap();
        assert_eq!(record.get("noteId"), Some(&Value::Number(3.0)));
        assert_eq!(record.get("param"), Some(&Value::Str("sort".into())));
        assert_eq!(record.get("value"), Some(&Value::Null));
    }

    #[test]
    fn test_from_record() {
        let record = crate::value::record(vec![
            ("noteId", 9i64.into()),
            ("param", "limit".into()),
            ("value", Value::Number(2.5)),
        ]);

        let payload: ParamSet = from_record(&record).unwrap();
        assert_eq!(payload.note_id, 9);
        assert_eq!(payload.param, "limit");
        assert_eq!(payload.value, Some(2.5));
    }

    #[test]
    fn test_stringify_parse_roundtrip() {
        let tagline = Tagline::new();
        let entry = param_set_entry();
        let payload = ParamSet {
            note_id: 12,
            param: "order".into(),
            value: Some(1.5),
        };

        let encoded = stringify(&tagline, &entry, &payload).unwrap();
        assert_eq!(encoded, "nPmSet|12|order|1.5");

        let decoded: ParamSet = parse(&tagline, &entry, &encoded).unwrap();
        assert_eq!(payload, decoded);
    }

    #[test]
    fn test_null_roundtrip() {
        let tagline = Tagline::new();
        let entry = param_set_entry();
        let payload = ParamSet {
            note_id: 1,
            param: "p".into(),
            value: None,
        };

        let encoded = stringify(&tagline, &entry, &payload).unwrap();
        assert_eq!(encoded, "nPmSet|1|p|null");

        let decoded: ParamSet = parse(&tagline, &entry, &encoded).unwrap();
        assert_eq!(decoded.value, None);
    }

    #[test]
    fn test_unit_enum_variant_as_string() {
        #[derive(Serialize, Deserialize, Debug, PartialEq)]
        enum View {
            Main,
            Archive,
        }

        #[derive(Serialize, Deserialize, Debug, PartialEq)]
        struct GoView {
            view: View,
        }

        let tagline = Tagline::new();
        let entry = Entry::new("uGoView").field("view", FieldType::Str);
        let payload = GoView { view: View::Archive };

        let encoded = stringify(&tagline, &entry, &payload).unwrap();
        assert_eq!(encoded, "uGoView|Archive");

        let decoded: GoView = parse(&tagline, &entry, &encoded).unwrap();
        assert_eq!(decoded, payload);
    }

    #[test]
    fn test_rejects_non_flat_payload() {
        #[derive(Serialize)]
        struct Inner {
            x: i64,
        }

        #[derive(Serialize)]
        struct Outer {
            inner: Inner,
        }

        let err = to_record(&Outer { inner: Inner { x: 1 } }).unwrap_err();
        assert!(matches!(err, SerdeError::UnsupportedType(_)));
    }

    #[test]
    fn test_rejects_top_level_scalar() {
        let err = to_record(&42i64).unwrap_err();
        assert!(matches!(err, SerdeError::UnsupportedType(_)));
    }

    #[test]
    fn test_integer_types() {
        #[derive(Serialize, Deserialize, Debug, PartialEq)]
        struct IntTypes {
            i8_val: i8,
            i16_val: i16,
            i32_val: i32,
            u8_val: u8,
            u16_val: u16,
            u32_val: u32,
        }

        let obj = IntTypes {
            i8_val: -10,
            i16_val: -1000,
            i32_val: -100000,
            u8_val: 200,
            u16_val: 50000,
            u32_val: 3000000000,
        };

        let record = to_record(&obj).unwrap();
        let decoded: IntTypes = from_record(&record).unwrap();
        assert_eq!(obj, decoded);
    }
}
