use crate::error::DecodeError;
use crate::schema::{Field, FieldType};
use crate::value::{Record, Value};

/// Decode a delimited string into a `Record` according to a field template.
///
/// The input is split on `delimiter`; a segment count different from the
/// template's field count is the only structural error. Segment content is
/// decoded leniently per the declared type and never fails:
///
/// - number: permissive parse, unparsable text becomes NaN
/// - string: taken verbatim
/// - boolean: `true` iff the segment is exactly `"t"`, anything else is
///   `false`
/// - nullable-number: `Null` iff the segment is exactly `"null"`, otherwise
///   the permissive number parse
///
/// Round-trip fidelity is only guaranteed for strings this codec produced;
/// arbitrary external text resolves through the lenient rules above.
pub fn decode(
    template: &[Field],
    text: &str,
    delimiter: char,
) -> Result<Record, DecodeError> {
    let segments: Vec<&str> = text.split(delimiter).collect();

    if segments.len() != template.len() {
        return Err(DecodeError::SegmentCountMismatch {
            expected: template.len(),
            actual: segments.len(),
        });
    }

    let mut record = Record::with_capacity(template.len());
    for (field, segment) in template.iter().zip(segments) {
        record.insert(field.name.clone(), decode_segment(field, segment));
    }

    Ok(record)
}

fn decode_segment(field: &Field, segment: &str) -> Value {
    match field.field_type {
        FieldType::Number => Value::Number(parse_number(segment)),
        FieldType::Str => Value::Str(segment.to_string()),
        FieldType::Bool => Value::Bool(segment == "t"),
        FieldType::NullableNumber => {
            if segment == "null" {
                Value::Null
            } else {
                Value::Number(parse_number(segment))
            }
        }
    }
}

/// Permissive numeric parse: trimmed, empty text coerces to 0, anything
/// unparsable becomes NaN. Malformed numbers are never a decode error.
fn parse_number(segment: &str) -> f64 {
    let trimmed = segment.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}
