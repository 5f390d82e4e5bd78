use crate::error::EncodeError;
use crate::schema::{Field, FieldType};
use crate::value::{Record, Value};

/// Encode a `Record` into a single delimited string according to a field
/// template.
///
/// Fields are rendered in template order and joined with `delimiter`. The
/// record must supply a value of the declared kind for every template field;
/// extra record keys are ignored. Rendered text is not escaped: a string
/// value containing the delimiter corrupts the output, and keeping it out is
/// the caller's responsibility.
pub fn encode(
    template: &[Field],
    record: &Record,
    delimiter: char,
) -> Result<String, EncodeError> {
    let mut segments: Vec<String> = Vec::with_capacity(template.len());

    for field in template {
        let value = record
            .get(&field.name)
            .ok_or_else(|| EncodeError::MissingField {
                field: field.name.clone(),
            })?;
        segments.push(render_field(field, value)?);
    }

    Ok(segments.join(&delimiter.to_string()))
}

fn render_field(field: &Field, value: &Value) -> Result<String, EncodeError> {
    match field.field_type {
        FieldType::Number => match value {
            Value::Number(n) => Ok(n.to_string()),
            _ => Err(mismatch(field, "number", value)),
        },
        FieldType::Str => match value {
            Value::Str(s) => Ok(s.clone()),
            _ => Err(mismatch(field, "string", value)),
        },
        FieldType::Bool => match value {
            Value::Bool(true) => Ok("t".to_string()),
            Value::Bool(false) => Ok("f".to_string()),
            _ => Err(mismatch(field, "boolean", value)),
        },
        FieldType::NullableNumber => match value {
            Value::Null => Ok("null".to_string()),
            Value::Number(n) => Ok(n.to_string()),
            _ => Err(mismatch(field, "number or null", value)),
        },
    }
}

fn mismatch(field: &Field, expected: &str, actual: &Value) -> EncodeError {
    EncodeError::TypeMismatch {
        field: field.name.clone(),
        expected: expected.into(),
        actual: actual.type_name().into(),
    }
}
