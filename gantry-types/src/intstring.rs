//! Integer values with a string wire form.
//!
//! Large numeric ids lose precision in JavaScript clients when encoded as
//! bare JSON numbers, so Gantry services encode them as decimal strings on
//! the wire. Storage keeps native INTEGER columns. `IntString` is the codec
//! sitting between the two: it deserializes from either wire shape and
//! always serializes back to the string form.

use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// An `i64` that serializes to JSON as a decimal string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IntString(i64);

impl IntString {
    /// Creates an `IntString` from a native integer.
    #[must_use]
    pub const fn new(v: i64) -> Self {
        Self(v)
    }

    /// Returns the native integer value.
    #[must_use]
    pub const fn get(&self) -> i64 {
        self.0
    }

    /// Parses a decimal string, returning zero on failure.
    ///
    /// This is a best-effort conversion helper, distinct from the JSON
    /// decode path: a malformed wire value is a hard decode error, a
    /// malformed string passed here is simply zero.
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        Self(s.trim().parse().unwrap_or(0))
    }

    /// True if the value is a usable positive identifier.
    #[must_use]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }
}

impl From<i64> for IntString {
    fn from(v: i64) -> Self {
        Self(v)
    }
}

impl From<IntString> for i64 {
    fn from(v: IntString) -> i64 {
        v.0
    }
}

impl fmt::Display for IntString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for IntString {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0.to_string())
    }
}

struct IntStringVisitor;

impl Visitor<'_> for IntStringVisitor {
    type Value = IntString;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an integer or a decimal string")
    }

    fn visit_str<E>(self, s: &str) -> Result<IntString, E>
    where
        E: de::Error,
    {
        if s.is_empty() {
            return Ok(IntString(0));
        }
        s.parse()
            .map(IntString)
            .map_err(|_| E::custom(format!("invalid integer string {s:?}")))
    }

    fn visit_i64<E>(self, v: i64) -> Result<IntString, E>
    where
        E: de::Error,
    {
        Ok(IntString(v))
    }

    fn visit_u64<E>(self, v: u64) -> Result<IntString, E>
    where
        E: de::Error,
    {
        i64::try_from(v)
            .map(IntString)
            .map_err(|_| E::custom(format!("integer {v} out of range")))
    }

    fn visit_f64<E>(self, v: f64) -> Result<IntString, E>
    where
        E: de::Error,
    {
        // serde_json hands us integral wire numbers as f64 in some paths;
        // a fractional value is not a valid integer id. The upper bound is
        // exclusive: i64::MAX as f64 rounds up to 2^63, which is out of
        // range for i64.
        if v.fract() == 0.0 && v >= i64::MIN as f64 && v < i64::MAX as f64 {
            Ok(IntString(v as i64))
        } else {
            Err(E::custom(format!("number {v} is not a valid integer")))
        }
    }
}

impl<'de> Deserialize<'de> for IntString {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(IntStringVisitor)
    }
}

impl ToSql for IntString {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.0))
    }
}

impl FromSql for IntString {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        match value {
            ValueRef::Null => Ok(IntString(0)),
            // Covers boolean columns too: SQLite stores them as 0/1.
            ValueRef::Integer(v) => Ok(IntString(v)),
            ValueRef::Real(v) => Ok(IntString(v as i64)),
            ValueRef::Text(bytes) | ValueRef::Blob(bytes) => {
                let s = std::str::from_utf8(bytes)
                    .map_err(|e| FromSqlError::Other(Box::new(e)))?;
                s.trim()
                    .parse()
                    .map(IntString)
                    .map_err(|e| FromSqlError::Other(Box::new(e)))
            }
        }
    }
}
