use std::collections::HashMap;

use crate::error::SchemaError;

/// Field name reserved for the discriminator segment prepended by the handle.
pub const KEY_FIELD: &str = "key";

/// The type of a field in a tagline entry.
///
/// This is a closed set: the codec matches it exhaustively, so widening it
/// without teaching the codec the new kind is a compile error. Marked
/// non-exhaustive so downstream crates cannot rely on the current shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum FieldType {
    /// Integer-or-decimal number.
    Number,
    /// UTF-8 text. The encoder does not escape the delimiter; text values
    /// containing it corrupt the output by contract.
    Str,
    /// Boolean, encoded as `t` / `f`.
    Bool,
    /// A number that may also be the literal `null`.
    NullableNumber,
}

/// A field definition within an entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Field name.
    pub name: String,
    /// The declared type of this field.
    pub field_type: FieldType,
}

/// A schema entry: a discriminator key plus an ordered set of typed fields.
///
/// Field order is load-bearing. It defines the positional encoding order, and
/// the template used to decode must declare the same order as the one used to
/// encode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Short discriminator key, always the first encoded segment.
    pub key: String,
    /// Fields in declaration (= encoding) order.
    pub fields: Vec<Field>,
}

impl Entry {
    /// Create an entry with no payload fields.
    pub fn new(key: impl Into<String>) -> Self {
        Entry {
            key: key.into(),
            fields: Vec::new(),
        }
    }

    /// Append a field, preserving declaration order.
    pub fn field(mut self, name: impl Into<String>, field_type: FieldType) -> Self {
        self.fields.push(Field {
            name: name.into(),
            field_type,
        });
        self
    }

    /// Find a field by name.
    pub fn find_field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// A lookup table from logical names to entries.
///
/// Purely configuration data supplied by the caller; the codec never touches
/// it. Registration validates the invariants the codec itself does not
/// enforce: unique logical names, unique discriminator keys, unique field
/// names per entry, and no payload field shadowing the reserved `key` field.
#[derive(Debug, Clone, Default)]
pub struct Schema {
    /// All entries in registration order.
    entries: Vec<Entry>,
    /// Map from logical name to index in `entries`.
    by_name: HashMap<String, usize>,
    /// Map from discriminator key to index in `entries`.
    by_key: HashMap<String, usize>,
}

impl Schema {
    /// Create an empty schema.
    pub fn new() -> Self {
        Schema::default()
    }

    /// Register an entry under a logical name.
    pub fn insert(&mut self, name: impl Into<String>, entry: Entry) -> Result<(), SchemaError> {
        let name = name.into();
        if self.by_name.contains_key(&name) {
            return Err(SchemaError::DuplicateEntry { name });
        }
        if let Some(&idx) = self.by_key.get(&entry.key) {
            return Err(SchemaError::DuplicateKey {
                key: entry.key,
                first: self.entry_name(idx).to_string(),
                second: name,
            });
        }
        let mut seen = HashMap::new();
        for field in &entry.fields {
            if field.name == KEY_FIELD {
                return Err(SchemaError::ReservedField {
                    key: entry.key,
                    field: field.name.clone(),
                });
            }
            if seen.insert(field.name.clone(), ()).is_some() {
                return Err(SchemaError::DuplicateField {
                    key: entry.key,
                    field: field.name.clone(),
                });
            }
        }

        let idx = self.entries.len();
        self.by_name.insert(name, idx);
        self.by_key.insert(entry.key.clone(), idx);
        self.entries.push(entry);
        Ok(())
    }

    /// Build a schema from (name, entry) pairs.
    pub fn from_entries<N: Into<String>>(pairs: Vec<(N, Entry)>) -> Result<Self, SchemaError> {
        let mut schema = Schema::new();
        for (name, entry) in pairs {
            schema.insert(name, entry)?;
        }
        Ok(schema)
    }

    /// Get an entry by logical name.
    pub fn get_entry(&self, name: &str) -> Option<&Entry> {
        self.by_name.get(name).map(|&idx| &self.entries[idx])
    }

    /// Get an entry by its discriminator key, as returned by `parse_key`.
    pub fn get_entry_by_key(&self, key: &str) -> Option<&Entry> {
        self.by_key.get(key).map(|&idx| &self.entries[idx])
    }

    /// Number of registered entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if no entries are registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }

    fn entry_name(&self, idx: usize) -> &str {
        self.by_name
            .iter()
            .find(|(_, &i)| i == idx)
            .map(|(n, _)| n.as_str())
            .unwrap_or("")
    }
}
