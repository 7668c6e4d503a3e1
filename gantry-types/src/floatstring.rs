//! Floating-point values with a string wire form.
//!
//! Same wire contract as [`IntString`](crate::IntString), for quantities
//! that carry a fractional part (measurements, percentages, monetary
//! amounts). String on the JSON wire, REAL in the column.

use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// An `f64` that serializes to JSON as a decimal string.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
pub struct FloatString(f64);

impl FloatString {
    /// Creates a `FloatString` from a native float.
    #[must_use]
    pub const fn new(v: f64) -> Self {
        Self(v)
    }

    /// Returns the native float value.
    #[must_use]
    pub const fn get(&self) -> f64 {
        self.0
    }

    /// Parses a decimal string, returning zero on failure.
    ///
    /// Best-effort conversion helper; see
    /// [`IntString::from_str_lossy`](crate::IntString::from_str_lossy) for
    /// why this never errors while the JSON decode path does.
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        Self(s.trim().parse().unwrap_or(0.0))
    }
}

impl From<f64> for FloatString {
    fn from(v: f64) -> Self {
        Self(v)
    }
}

impl From<FloatString> for f64 {
    fn from(v: FloatString) -> f64 {
        v.0
    }
}

impl fmt::Display for FloatString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for FloatString {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0.to_string())
    }
}

struct FloatStringVisitor;

impl Visitor<'_> for FloatStringVisitor {
    type Value = FloatString;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a number or a decimal string")
    }

    fn visit_str<E>(self, s: &str) -> Result<FloatString, E>
    where
        E: de::Error,
    {
        if s.is_empty() {
            return Ok(FloatString(0.0));
        }
        s.parse()
            .map(FloatString)
            .map_err(|_| E::custom(format!("invalid decimal string {s:?}")))
    }

    fn visit_f64<E>(self, v: f64) -> Result<FloatString, E>
    where
        E: de::Error,
    {
        Ok(FloatString(v))
    }

    fn visit_i64<E>(self, v: i64) -> Result<FloatString, E>
    where
        E: de::Error,
    {
        Ok(FloatString(v as f64))
    }

    fn visit_u64<E>(self, v: u64) -> Result<FloatString, E>
    where
        E: de::Error,
    {
        Ok(FloatString(v as f64))
    }
}

impl<'de> Deserialize<'de> for FloatString {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(FloatStringVisitor)
    }
}

impl ToSql for FloatString {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.0))
    }
}

impl FromSql for FloatString {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        match value {
            ValueRef::Null => Ok(FloatString(0.0)),
            ValueRef::Integer(v) => Ok(FloatString(v as f64)),
            ValueRef::Real(v) => Ok(FloatString(v)),
            ValueRef::Text(bytes) | ValueRef::Blob(bytes) => {
                let s = std::str::from_utf8(bytes)
                    .map_err(|e| FromSqlError::Other(Box::new(e)))?;
                s.trim()
                    .parse()
                    .map(FloatString)
                    .map_err(|e| FromSqlError::Other(Box::new(e)))
            }
        }
    }
}
