//! Round-trip tests: stringify -> parse must reproduce the original record
//! for every field type, as long as string values keep clear of the
//! delimiter.

use pretty_assertions::assert_eq;

use tagline::schema::{Entry, FieldType, Schema};
use tagline::value::{record, Record, Value};
use tagline::Tagline;

/// A small catalog in the shape the codec is meant for: bot callback actions.
fn create_test_schema() -> Schema {
    Schema::from_entries(vec![
        (
            "NOTE_GO_VIEW",
            Entry::new("nGoView")
                .field("noteId", FieldType::Number)
                .field("view", FieldType::Str),
        ),
        (
            "NOTE_PARAM_SWITCH",
            Entry::new("nPmSw")
                .field("noteId", FieldType::Number)
                .field("viewRedirect", FieldType::Str)
                .field("param", FieldType::Str)
                .field("switchValue", FieldType::Bool),
        ),
        (
            "NOTE_PARAM_SET",
            Entry::new("nPmSet")
                .field("noteId", FieldType::Number)
                .field("viewRedirect", FieldType::Str)
                .field("param", FieldType::Str)
                .field("value", FieldType::NullableNumber),
        ),
        ("CALLBACK_CANCEL", Entry::new("cancel")),
    ])
    .unwrap()
}

fn roundtrip(entry: &Entry, payload: Record) {
    let tagline = Tagline::new();
    let encoded = tagline.stringify(entry, &payload).unwrap();
    let decoded = tagline.parse(entry, &encoded).unwrap();

    for (name, value) in &payload {
        assert_eq!(
            decoded.get(name),
            Some(value),
            "field '{}' did not round-trip through {:?}",
            name,
            encoded
        );
    }
    assert_eq!(decoded.get("key"), Some(&Value::Str(entry.key.clone())));
}

// ============================================================================
// Record Round-trip Tests
// ============================================================================

#[test]
fn test_roundtrip_concrete_scenario() {
    let entry = Entry::new("key1")
        .field("payloadNum", FieldType::Number)
        .field("payloadStr", FieldType::Str)
        .field("payloadBool", FieldType::Bool)
        .field("payloadNullNum", FieldType::NullableNumber);

    let tagline = Tagline::new();
    let payload = record(vec![
        ("payloadNum", 1i64.into()),
        ("payloadStr", "str".into()),
        ("payloadBool", true.into()),
        ("payloadNullNum", Value::Null),
    ]);

    let encoded = tagline.stringify(&entry, &payload).unwrap();
    assert_eq!(encoded, "key1|1|str|t|null");

    let decoded = tagline.parse(&entry, &encoded).unwrap();
    assert_eq!(decoded.get("key"), Some(&Value::Str("key1".into())));
    assert_eq!(decoded.get("payloadNum"), Some(&Value::Number(1.0)));
    assert_eq!(decoded.get("payloadStr"), Some(&Value::Str("str".into())));
    assert_eq!(decoded.get("payloadBool"), Some(&Value::Bool(true)));
    assert_eq!(decoded.get("payloadNullNum"), Some(&Value::Null));
}

#[test]
fn test_roundtrip_numbers() {
    let schema = create_test_schema();
    let entry = schema.get_entry("NOTE_GO_VIEW").unwrap();

    for n in [0.0, 1.0, -1.0, 2.5, -0.125, 1e9, f64::MAX] {
        roundtrip(
            entry,
            record(vec![("noteId", n.into()), ("view", "main".into())]),
        );
    }
}

#[test]
fn test_roundtrip_booleans() {
    let schema = create_test_schema();
    let entry = schema.get_entry("NOTE_PARAM_SWITCH").unwrap();

    for flag in [true, false] {
        roundtrip(
            entry,
            record(vec![
                ("noteId", 3i64.into()),
                ("viewRedirect", "list".into()),
                ("param", "pinned".into()),
                ("switchValue", flag.into()),
            ]),
        );
    }
}

#[test]
fn test_roundtrip_nullable_number() {
    let schema = create_test_schema();
    let entry = schema.get_entry("NOTE_PARAM_SET").unwrap();

    for value in [Value::Null, Value::Number(0.0), Value::Number(-7.5)] {
        roundtrip(
            entry,
            record(vec![
                ("noteId", 3i64.into()),
                ("viewRedirect", "list".into()),
                ("param", "limit".into()),
                ("value", value),
            ]),
        );
    }
}

#[test]
fn test_roundtrip_empty_and_unicode_strings() {
    let schema = create_test_schema();
    let entry = schema.get_entry("NOTE_GO_VIEW").unwrap();

    for text in ["", "main", "Hello, \u{4e16}\u{754c}! \u{1f600}", " padded "] {
        roundtrip(
            entry,
            record(vec![("noteId", 1i64.into()), ("view", text.into())]),
        );
    }
}

#[test]
fn test_roundtrip_empty_payload() {
    let schema = create_test_schema();
    let entry = schema.get_entry("CALLBACK_CANCEL").unwrap();

    roundtrip(entry, record(vec![]));
}

#[test]
fn test_roundtrip_custom_delimiter() {
    let tagline = Tagline::with_delimiter(';');
    let entry = Entry::new("nGoView")
        .field("noteId", FieldType::Number)
        .field("view", FieldType::Str);

    // A pipe is ordinary text under a different delimiter.
    let payload = record(vec![("noteId", 8i64.into()), ("view", "a|b".into())]);

    let encoded = tagline.stringify(&entry, &payload).unwrap();
    assert_eq!(encoded, "nGoView;8;a|b");

    let decoded = tagline.parse(&entry, &encoded).unwrap();
    assert_eq!(decoded.get("view"), Some(&Value::Str("a|b".into())));
}

#[test]
fn test_parse_key_selects_entry() {
    let schema = create_test_schema();
    let tagline = Tagline::new();

    let entry = schema.get_entry("NOTE_PARAM_SET").unwrap();
    let encoded = tagline
        .stringify(
            entry,
            &record(vec![
                ("noteId", 21i64.into()),
                ("viewRedirect", "view".into()),
                ("param", "limit".into()),
                ("value", Value::Null),
            ]),
        )
        .unwrap();

    // The receiving side only has the text: key lookup picks the entry.
    let key = tagline.parse_key(&encoded);
    let selected = schema.get_entry_by_key(key).unwrap();
    assert_eq!(selected.key, "nPmSet");

    let decoded = tagline.parse(selected, &encoded).unwrap();
    assert_eq!(decoded.get("noteId"), Some(&Value::Number(21.0)));
}

// ============================================================================
// Serde Round-trip Tests
// ============================================================================

#[cfg(feature = "serde")]
mod serde_tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct ParamSwitch {
        #[serde(rename = "noteId")]
        note_id: i64,
        #[serde(rename = "viewRedirect")]
        view_redirect: String,
        param: String,
        #[serde(rename = "switchValue")]
        switch_value: bool,
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct ParamSet {
        #[serde(rename = "noteId")]
        note_id: i64,
        #[serde(rename = "viewRedirect")]
        view_redirect: String,
        param: String,
        value: Option<f64>,
    }

    #[test]
    fn test_serde_roundtrip_simple() {
        let schema = create_test_schema();
        let entry = schema.get_entry("NOTE_PARAM_SWITCH").unwrap();
        let tagline = Tagline::new();

        let original = ParamSwitch {
            note_id: 4,
            view_redirect: "list".into(),
            param: "pinned".into(),
            switch_value: true,
        };

        let encoded = tagline::serde::stringify(&tagline, entry, &original).unwrap();
        assert_eq!(encoded, "nPmSw|4|list|pinned|t");

        let decoded: ParamSwitch = tagline::serde::parse(&tagline, entry, &encoded).unwrap();
        assert_eq!(original, decoded);
    }

    #[test]
    fn test_serde_roundtrip_optional_some() {
        let schema = create_test_schema();
        let entry = schema.get_entry("NOTE_PARAM_SET").unwrap();
        let tagline = Tagline::new();

        let original = ParamSet {
            note_id: 9,
            view_redirect: "view".into(),
            param: "limit".into(),
            value: Some(2.5),
        };

        let encoded = tagline::serde::stringify(&tagline, entry, &original).unwrap();
        let decoded: ParamSet = tagline::serde::parse(&tagline, entry, &encoded).unwrap();
        assert_eq!(original, decoded);
    }

    #[test]
    fn test_serde_roundtrip_optional_none() {
        let schema = create_test_schema();
        let entry = schema.get_entry("NOTE_PARAM_SET").unwrap();
        let tagline = Tagline::new();

        let original = ParamSet {
            note_id: 9,
            view_redirect: "view".into(),
            param: "limit".into(),
            value: None,
        };

        let encoded = tagline::serde::stringify(&tagline, entry, &original).unwrap();
        assert_eq!(encoded, "nPmSet|9|view|limit|null");

        let decoded: ParamSet = tagline::serde::parse(&tagline, entry, &encoded).unwrap();
        assert_eq!(original, decoded);
    }

    #[test]
    fn test_serde_roundtrip_unicode() {
        let schema = create_test_schema();
        let entry = schema.get_entry("NOTE_PARAM_SWITCH").unwrap();
        let tagline = Tagline::new();

        let original = ParamSwitch {
            note_id: 1,
            view_redirect: "\u{4f60}\u{597d}\u{4e16}\u{754c} \u{1f30d}".into(),
            param: "p".into(),
            switch_value: false,
        };

        let encoded = tagline::serde::stringify(&tagline, entry, &original).unwrap();
        let decoded: ParamSwitch = tagline::serde::parse(&tagline, entry, &encoded).unwrap();
        assert_eq!(original, decoded);
    }
}
