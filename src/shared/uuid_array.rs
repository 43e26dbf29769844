//! UUID Array Column Codec
//!
//! Converts between an ordered list of UUIDs and the flat PostgreSQL array
//! literal (`{a,b,c}`) used to store it. Boards keep the order of their lists
//! and lists keep the order of their cards in columns of this shape.
//!
//! # Format
//!
//! - Encoding always produces `{e1,e2,...}` with canonical lowercase
//!   hyphenated elements and no whitespace. The empty array is `{}`.
//! - Decoding accepts the braced literal, the same text without braces,
//!   quoted elements (`{"..."}`) and stray whitespace around elements.
//!   Empty elements (from `{}` or a trailing comma) are skipped.
//!
//! Decoding is all-or-nothing: one bad element fails the whole value.
//!
//! # Example
//!
//! ```rust
//! use kanban_backend::shared::uuid_array::{RawValue, UuidArray};
//! use uuid::Uuid;
//!
//! let id = Uuid::parse_str("11111111-1111-1111-1111-111111111111").unwrap();
//! let order = UuidArray::from(vec![id]);
//! assert_eq!(order.to_literal(), "{11111111-1111-1111-1111-111111111111}");
//!
//! let decoded = UuidArray::from_raw(RawValue::Text(&order.to_literal())).unwrap();
//! assert_eq!(decoded, order);
//! ```

use std::borrow::Cow;
use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sqlx::encode::IsNull;
use sqlx::error::BoxDynError;
use sqlx::postgres::{PgArgumentBuffer, PgTypeInfo, PgValueFormat, PgValueRef, Postgres};
use thiserror::Error;
use uuid::Uuid;

/// A raw column value handed over by the storage layer.
///
/// Only `Text` and `Bytes` carry an array literal; everything else is
/// rejected by [`UuidArray::from_raw`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RawValue<'a> {
    Text(&'a str),
    Bytes(&'a [u8]),
    Integer(i64),
    Float(f64),
    Bool(bool),
    Null,
}

impl RawValue<'_> {
    fn kind(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Bytes(_) => "bytes",
            Self::Integer(_) => "integer",
            Self::Float(_) => "float",
            Self::Bool(_) => "bool",
            Self::Null => "null",
        }
    }
}

/// Errors produced while decoding a stored UUID array
#[derive(Debug, Error)]
pub enum UuidArrayError {
    /// The raw value is neither text nor a byte buffer
    #[error("unsupported source representation for identifier-array decoding: {found}")]
    UnsupportedSourceType {
        /// Kind of value that was received
        found: &'static str,
    },

    /// One element of the literal is not a valid UUID
    #[error("failed to parse UUID array element '{token}': {source}")]
    ElementParse {
        /// The offending element after trimming
        token: String,
        /// Diagnostic from the UUID parser
        source: uuid::Error,
    },
}

/// Ordered list of UUIDs stored as a PostgreSQL `uuid[]` literal.
///
/// Order is meaningful (index = display position). Duplicates are kept
/// as-is; callers that need uniqueness check it themselves.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UuidArray(Vec<Uuid>);

impl UuidArray {
    /// Create an empty array
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Consume the array and return the underlying vector
    pub fn into_inner(self) -> Vec<Uuid> {
        self.0
    }

    /// Append an id at the end of the order
    pub fn push(&mut self, id: Uuid) {
        self.0.push(id);
    }

    /// Remove every occurrence of `id`, returning whether anything was removed
    pub fn remove(&mut self, id: Uuid) -> bool {
        let before = self.0.len();
        self.0.retain(|existing| *existing != id);
        self.0.len() != before
    }

    /// Move `id` to `index`, inserting it if it was not present.
    ///
    /// `index` is clamped to the end of the array.
    pub fn move_to(&mut self, id: Uuid, index: usize) {
        self.remove(id);
        let index = index.min(self.0.len());
        self.0.insert(index, id);
    }

    /// Position of the first occurrence of `id`
    pub fn position(&self, id: Uuid) -> Option<usize> {
        self.0.iter().position(|existing| *existing == id)
    }

    /// First id that appears more than once, if any
    pub fn first_duplicate(&self) -> Option<Uuid> {
        let mut seen = std::collections::HashSet::with_capacity(self.0.len());
        self.0.iter().copied().find(|id| !seen.insert(*id))
    }

    /// Encode as a PostgreSQL array literal, e.g. `{a,b}`
    pub fn to_literal(&self) -> String {
        let mut out = String::with_capacity(2 + self.0.len() * (uuid::fmt::Hyphenated::LENGTH + 1));
        let mut buf = Uuid::encode_buffer();
        out.push('{');
        for (i, id) in self.0.iter().enumerate() {
            if i > 0 {
                out.push(',');
            }
            out.push_str(id.hyphenated().encode_lower(&mut buf));
        }
        out.push('}');
        out
    }

    /// Decode a raw storage value into an array
    pub fn from_raw(raw: RawValue<'_>) -> Result<Self, UuidArrayError> {
        let text: Cow<'_, str> = match raw {
            RawValue::Text(text) => Cow::Borrowed(text),
            RawValue::Bytes(bytes) => String::from_utf8_lossy(bytes),
            other => {
                return Err(UuidArrayError::UnsupportedSourceType {
                    found: other.kind(),
                })
            }
        };
        parse_literal(&text)
    }
}

fn parse_literal(text: &str) -> Result<UuidArray, UuidArrayError> {
    let body = text.strip_prefix('{').unwrap_or(text);
    let body = body.strip_suffix('}').unwrap_or(body);

    body.split(',')
        .map(normalize_element)
        .filter(|token| !token.is_empty())
        .map(|token| {
            Uuid::parse_str(token).map_err(|source| UuidArrayError::ElementParse {
                token: token.to_string(),
                source,
            })
        })
        .collect::<Result<Vec<_>, _>>()
        .map(UuidArray)
}

fn normalize_element(token: &str) -> &str {
    token.trim().trim_matches('"').trim()
}

impl fmt::Display for UuidArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_literal())
    }
}

impl FromStr for UuidArray {
    type Err = UuidArrayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_raw(RawValue::Text(s))
    }
}

impl Deref for UuidArray {
    type Target = [Uuid];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<Uuid>> for UuidArray {
    fn from(ids: Vec<Uuid>) -> Self {
        Self(ids)
    }
}

impl From<UuidArray> for Vec<Uuid> {
    fn from(array: UuidArray) -> Self {
        array.0
    }
}

impl FromIterator<Uuid> for UuidArray {
    fn from_iter<I: IntoIterator<Item = Uuid>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a UuidArray {
    type Item = &'a Uuid;
    type IntoIter = std::slice::Iter<'a, Uuid>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

// The array travels as TEXT: writes cast with `$n::uuid[]`, reads select
// `column::text`.
impl sqlx::Type<Postgres> for UuidArray {
    fn type_info() -> PgTypeInfo {
        <String as sqlx::Type<Postgres>>::type_info()
    }

    fn compatible(ty: &PgTypeInfo) -> bool {
        <String as sqlx::Type<Postgres>>::compatible(ty)
    }
}

impl sqlx::Encode<'_, Postgres> for UuidArray {
    fn encode_by_ref(&self, buf: &mut PgArgumentBuffer) -> Result<IsNull, BoxDynError> {
        <String as sqlx::Encode<'_, Postgres>>::encode_by_ref(&self.to_literal(), buf)
    }
}

impl<'r> sqlx::Decode<'r, Postgres> for UuidArray {
    fn decode(value: PgValueRef<'r>) -> Result<Self, BoxDynError> {
        let raw = match value.format() {
            PgValueFormat::Text => RawValue::Text(value.as_str()?),
            PgValueFormat::Binary => RawValue::Bytes(value.as_bytes()?),
        };
        Ok(Self::from_raw(raw)?)
    }
}
