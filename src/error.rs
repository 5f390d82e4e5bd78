/// Errors from schema registration.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    #[error("duplicate entry name '{name}'")]
    DuplicateEntry { name: String },

    #[error("duplicate discriminator key '{key}' (entries '{first}' and '{second}')")]
    DuplicateKey {
        key: String,
        first: String,
        second: String,
    },

    #[error("duplicate field '{field}' in entry '{key}'")]
    DuplicateField { key: String, field: String },

    #[error("field name '{field}' in entry '{key}' is reserved")]
    ReservedField { key: String, field: String },
}

/// Errors from the string encoder.
#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
    #[error("missing value for field '{field}'")]
    MissingField { field: String },

    #[error("type mismatch for field '{field}': expected {expected}, got {actual}")]
    TypeMismatch {
        field: String,
        expected: String,
        actual: String,
    },

    /// Defensive: a template declared a field kind the encoder has no rule
    /// for. Unreachable while `FieldType` stays in sync with the codec.
    #[error("field '{field}' declares an unsupported field type")]
    UnsupportedFieldType { field: String },
}

/// Errors from the string decoder.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("expected {expected} segments but got {actual}")]
    SegmentCountMismatch { expected: usize, actual: usize },

    #[error("discriminator key mismatch: expected '{expected}', got '{actual}'")]
    KeyMismatch { expected: String, actual: String },

    /// Defensive: a template declared a field kind the decoder has no rule
    /// for. Unreachable while `FieldType` stays in sync with the codec.
    #[error("field '{field}' declares an unsupported field type")]
    UnsupportedFieldType { field: String },
}

/// Top-level error type that wraps all sub-errors.
#[derive(Debug, thiserror::Error)]
pub enum TaglineError {
    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error(transparent)]
    Encode(#[from] EncodeError),

    #[error(transparent)]
    Decode(#[from] DecodeError),
}

/// Result type alias for tagline operations.
pub type Result<T> = std::result::Result<T, TaglineError>;
