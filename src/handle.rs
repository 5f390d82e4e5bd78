use crate::codec;
use crate::error::{DecodeError, EncodeError};
use crate::schema::{Entry, Field, FieldType, KEY_FIELD};
use crate::value::{Record, Value};

/// Default field delimiter.
pub const DEFAULT_DELIMITER: char = '|';

/// The public codec handle, binding a configured delimiter to the template
/// codec.
///
/// Every operation is stateless given its inputs; the handle only carries the
/// delimiter, fixed at construction. Cheap to copy and safe to share across
/// threads.
///
/// # Example
///
/// ```rust
/// use tagline::schema::{Entry, FieldType};
/// use tagline::value::{record, Value};
/// use tagline::Tagline;
///
/// let entry = Entry::new("nGoView")
///     .field("noteId", FieldType::Number)
///     .field("view", FieldType::Str);
///
/// let tagline = Tagline::new();
/// let encoded = tagline
///     .stringify(&entry, &record(vec![
///         ("noteId", 7i64.into()),
///         ("view", "main".into()),
///     ]))
///     .unwrap();
/// assert_eq!(encoded, "nGoView|7|main");
///
/// assert_eq!(tagline.parse_key(&encoded), "nGoView");
/// let decoded = tagline.parse(&entry, &encoded).unwrap();
/// assert_eq!(decoded.get("view"), Some(&Value::Str("main".into())));
/// assert_eq!(decoded.get("key"), Some(&Value::Str("nGoView".into())));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tagline {
    delimiter: char,
}

impl Tagline {
    /// Create a handle with the default `|` delimiter.
    pub fn new() -> Self {
        Tagline {
            delimiter: DEFAULT_DELIMITER,
        }
    }

    /// Create a handle with a custom single-character delimiter.
    pub fn with_delimiter(delimiter: char) -> Self {
        Tagline { delimiter }
    }

    /// The configured delimiter.
    pub fn delimiter(&self) -> char {
        self.delimiter
    }

    /// Encode a payload record for an entry.
    ///
    /// The discriminator key is always the first segment, followed by the
    /// entry's fields in declaration order. The record must supply every
    /// declared field; extra keys are ignored.
    pub fn stringify(&self, entry: &Entry, payload: &Record) -> Result<String, EncodeError> {
        let template = augmented_template(entry);
        let mut record = payload.clone();
        record.insert(KEY_FIELD.to_string(), Value::Str(entry.key.clone()));
        codec::encode(&template, &record, self.delimiter)
    }

    /// Decode a string previously produced for this entry.
    ///
    /// The returned record contains the entry's fields plus a `key` field
    /// echoing `entry.key`. The embedded key segment of `text` is NOT
    /// compared against the entry: the caller is trusted to have selected the
    /// entry via [`parse_key`](Self::parse_key), and a mismatched string is
    /// accepted silently. Use [`parse_checked`](Self::parse_checked) to
    /// reject mismatches instead.
    pub fn parse(&self, entry: &Entry, text: &str) -> Result<Record, DecodeError> {
        let template = augmented_template(entry);
        let mut record = codec::decode(&template, text, self.delimiter)?;
        // Echo the entry's key rather than whatever the text carried.
        record.insert(KEY_FIELD.to_string(), Value::Str(entry.key.clone()));
        Ok(record)
    }

    /// Like [`parse`](Self::parse), but fails with
    /// [`DecodeError::KeyMismatch`] when the embedded key segment differs
    /// from `entry.key`.
    pub fn parse_checked(&self, entry: &Entry, text: &str) -> Result<Record, DecodeError> {
        let embedded = self.parse_key(text);
        if embedded != entry.key {
            return Err(DecodeError::KeyMismatch {
                expected: entry.key.clone(),
                actual: embedded.to_string(),
            });
        }
        self.parse(entry, text)
    }

    /// Extract the discriminator key (the first delimiter-separated segment)
    /// without any schema knowledge. Used to select which entry to pass into
    /// [`parse`](Self::parse).
    pub fn parse_key<'a>(&self, text: &'a str) -> &'a str {
        text.split(self.delimiter).next().unwrap_or(text)
    }
}

impl Default for Tagline {
    fn default() -> Self {
        Self::new()
    }
}

/// Template for an entry with the synthetic key field prepended.
fn augmented_template(entry: &Entry) -> Vec<Field> {
    let mut template = Vec::with_capacity(entry.fields.len() + 1);
    template.push(Field {
        name: KEY_FIELD.to_string(),
        field_type: FieldType::Str,
    });
    template.extend(entry.fields.iter().cloned());
    template
}
