//! Dynamic JSON access — typed accessors over untyped payload trees.
//!
//! Third-party and cross-service payloads (media provider metadata,
//! inspection form extras) do not have a shape known ahead of decode, so
//! there is no struct to deserialize into. [`Object`] and [`Array`] wrap
//! the untyped `serde_json` tree and expose *total* typed accessors:
//! an absent key or a dynamic-type mismatch is `None`, never an error and
//! never a panic. Interpretation of a miss is pushed to the caller.
//!
//! Two access tiers:
//! - `get_*` — soft miss, returns `Option`
//! - `*_or_default` — lossy, returns the zero value and leaves only a
//!   `tracing` debug line; for callers that treat missing enrichment data
//!   as non-fatal
//!
//! Mutation happens only through [`Object::merge`], which writes top-level
//! keys from any serializable source over the receiver. The merge is
//! intentionally NOT recursive: a nested object in a later source replaces
//! the earlier one wholesale.

use crate::{Error, IntString, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, warn};

fn value_kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// An untyped JSON object with total typed accessors.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Object(Map<String, Value>);

impl Object {
    /// Creates an empty object.
    #[must_use]
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Builds an object by merging each source in order.
    ///
    /// A source that is not a JSON object is logged and skipped; later
    /// sources still merge. Top-level keys from later sources overwrite
    /// earlier ones.
    #[must_use]
    pub fn from_sources<I>(sources: I) -> Self
    where
        I: IntoIterator<Item = Value>,
    {
        let mut obj = Self::new();
        for source in sources {
            obj.merge_lossy(&source);
        }
        obj
    }

    /// Merges the top-level keys of `src` into this object.
    ///
    /// `src` is serialized through JSON and must come out as an object;
    /// each of its top-level keys overwrites any existing key in the
    /// receiver. Nested objects are replaced, not deep-merged.
    pub fn merge<T>(&mut self, src: &T) -> Result<()>
    where
        T: Serialize + ?Sized,
    {
        match serde_json::to_value(src)? {
            Value::Object(map) => {
                for (k, v) in map {
                    self.0.insert(k, v);
                }
                Ok(())
            }
            other => Err(Error::MergeSource {
                found: value_kind(&other),
            }),
        }
    }

    /// Best-effort [`merge`](Self::merge): a failure is logged and the
    /// receiver is left as-is.
    pub fn merge_lossy<T>(&mut self, src: &T)
    where
        T: Serialize + ?Sized,
    {
        if let Err(e) = self.merge(src) {
            warn!("skipping unmergeable source: {e}");
        }
    }

    /// True if the key is present, regardless of its value's type.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Number of top-level keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Raw access to the value under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    // ── soft-miss accessors ──────────────────────────────────────

    /// String value under `key`; `None` on absence or type mismatch.
    #[must_use]
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    /// Boolean value under `key`; `None` on absence or type mismatch.
    #[must_use]
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.0.get(key).and_then(Value::as_bool)
    }

    /// Numeric value under `key`; `None` on absence or type mismatch.
    #[must_use]
    pub fn get_f64(&self, key: &str) -> Option<f64> {
        self.0.get(key).and_then(Value::as_f64)
    }

    /// Identifier value under `key`.
    ///
    /// Producers serialize ids inconsistently, so both a JSON string and a
    /// JSON number leaf are accepted and routed through the scalar codec.
    /// A string that does not parse as an integer is a miss, not an error.
    #[must_use]
    pub fn get_int_string(&self, key: &str) -> Option<IntString> {
        match self.0.get(key)? {
            Value::String(s) => s.trim().parse().ok().map(IntString::new),
            Value::Number(n) => n.as_i64().map(IntString::new),
            _ => None,
        }
    }

    /// Nested object under `key`; `None` on absence or type mismatch.
    #[must_use]
    pub fn get_object(&self, key: &str) -> Option<Object> {
        match self.0.get(key) {
            Some(Value::Object(map)) => Some(Object(map.clone())),
            _ => None,
        }
    }

    /// Nested array under `key`; `None` on absence or type mismatch.
    #[must_use]
    pub fn get_array(&self, key: &str) -> Option<Array> {
        match self.0.get(key) {
            Some(Value::Array(items)) => Some(Array(items.clone())),
            _ => None,
        }
    }

    // ── lossy accessors ──────────────────────────────────────────

    /// [`get_str`](Self::get_str), degrading to `""` on a miss.
    #[must_use]
    pub fn str_or_default(&self, key: &str) -> String {
        self.get_str(key).map_or_else(
            || {
                debug!("no string under key {key:?}, using default");
                String::new()
            },
            str::to_owned,
        )
    }

    /// [`get_bool`](Self::get_bool), degrading to `false` on a miss.
    #[must_use]
    pub fn bool_or_default(&self, key: &str) -> bool {
        self.get_bool(key).unwrap_or_else(|| {
            debug!("no boolean under key {key:?}, using default");
            false
        })
    }

    /// [`get_f64`](Self::get_f64), degrading to `0.0` on a miss.
    #[must_use]
    pub fn f64_or_default(&self, key: &str) -> f64 {
        self.get_f64(key).unwrap_or_else(|| {
            debug!("no number under key {key:?}, using default");
            0.0
        })
    }

    /// [`get_int_string`](Self::get_int_string), degrading to zero on a miss.
    #[must_use]
    pub fn int_string_or_default(&self, key: &str) -> IntString {
        self.get_int_string(key).unwrap_or_else(|| {
            debug!("no id under key {key:?}, using default");
            IntString::default()
        })
    }

    /// [`get_object`](Self::get_object), degrading to empty on a miss.
    #[must_use]
    pub fn object_or_default(&self, key: &str) -> Object {
        self.get_object(key).unwrap_or_else(|| {
            debug!("no object under key {key:?}, using default");
            Object::new()
        })
    }

    /// [`get_array`](Self::get_array), degrading to empty on a miss.
    #[must_use]
    pub fn array_or_default(&self, key: &str) -> Array {
        self.get_array(key).unwrap_or_else(|| {
            debug!("no array under key {key:?}, using default");
            Array::new()
        })
    }
}

impl From<Map<String, Value>> for Object {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl From<Object> for Value {
    fn from(obj: Object) -> Value {
        Value::Object(obj.0)
    }
}

/// An untyped JSON array with all-or-nothing bulk accessors.
///
/// Elements are homogeneously typed by contract, enforced only at the
/// point of a bulk accessor: if ANY element fails the type check the whole
/// result is `None`. Callers must not expect partial results.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Array(Vec<Value>);

impl Array {
    /// Creates an empty array.
    #[must_use]
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Raw access to the element at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.0.get(index)
    }

    /// All elements as strings; `None` if any element is not a string.
    #[must_use]
    pub fn as_str_vec(&self) -> Option<Vec<String>> {
        self.0
            .iter()
            .map(|v| v.as_str().map(str::to_owned))
            .collect()
    }

    /// All elements as booleans; `None` if any element is not a boolean.
    #[must_use]
    pub fn as_bool_vec(&self) -> Option<Vec<bool>> {
        self.0.iter().map(Value::as_bool).collect()
    }

    /// All elements as numbers; `None` if any element is not a number.
    #[must_use]
    pub fn as_f64_vec(&self) -> Option<Vec<f64>> {
        self.0.iter().map(Value::as_f64).collect()
    }

    /// All elements as identifiers (string or number leaves); `None` if
    /// any element is neither.
    #[must_use]
    pub fn as_int_string_vec(&self) -> Option<Vec<IntString>> {
        self.0
            .iter()
            .map(|v| match v {
                Value::String(s) => s.trim().parse().ok().map(IntString::new),
                Value::Number(n) => n.as_i64().map(IntString::new),
                _ => None,
            })
            .collect()
    }

    /// All elements as objects; `None` if any element is not an object.
    #[must_use]
    pub fn as_object_vec(&self) -> Option<Vec<Object>> {
        self.0
            .iter()
            .map(|v| match v {
                Value::Object(map) => Some(Object(map.clone())),
                _ => None,
            })
            .collect()
    }
}

impl From<Vec<Value>> for Array {
    fn from(items: Vec<Value>) -> Self {
        Self(items)
    }
}

impl From<Array> for Value {
    fn from(arr: Array) -> Value {
        Value::Array(arr.0)
    }
}
