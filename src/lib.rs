//! Tagline: a reversible codec for key-tagged, delimiter-separated payload
//! strings.
//!
//! Tagline packs small typed records into single short strings for channels
//! that only carry opaque text tokens with a strict byte limit (a callback
//! data slot, a query parameter). A declarative schema entry names the fields
//! and their primitive types; encoding is positional, deterministic, and
//! inverts exactly for strings this codec produced.
//!
//! The wire format is deliberately minimal: segments joined by a
//! one-character delimiter (default `|`), the discriminator key first,
//! booleans as `t`/`f`, a nullable number's null as the literal `null`, and
//! no escaping — string values must not contain the delimiter.
//!
//! # Quick Start
//!
//! ```rust
//! use tagline::schema::{Entry, FieldType};
//! use tagline::value::{record, Value};
//! use tagline::Tagline;
//!
//! let entry = Entry::new("nPmSet")
//!     .field("noteId", FieldType::Number)
//!     .field("param", FieldType::Str)
//!     .field("value", FieldType::NullableNumber);
//!
//! let tagline = Tagline::new();
//! let encoded = tagline
//!     .stringify(&entry, &record(vec![
//!         ("noteId", 42i64.into()),
//!         ("param", "sort".into()),
//!         ("value", Value::Null),
//!     ]))
//!     .unwrap();
//! assert_eq!(encoded, "nPmSet|42|sort|null");
//!
//! let decoded = tagline.parse(&entry, &encoded).unwrap();
//! assert_eq!(decoded.get("noteId"), Some(&Value::Number(42.0)));
//! assert_eq!(decoded.get("value"), Some(&Value::Null));
//! ```

pub mod error;
pub mod value;
pub mod schema;
pub mod codec;
pub mod handle;

#[cfg(feature = "serde")]
pub mod serde;

pub use error::TaglineError;
pub use handle::Tagline;
pub use schema::{Entry, Schema};
pub use value::{Record, Value};
