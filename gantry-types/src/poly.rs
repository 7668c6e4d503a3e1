//! Shared decode flow for object-or-string polymorphic fields.
//!
//! Several Gantry services "collapse" a referenced entity to just its
//! identity string when the caller did not request full detail, so the same
//! response field arrives as either a structured object or a bare string.
//! [`decode_object_or_string`] is the one place that try/fallback control
//! flow lives; the model types plug in their own mirror struct and
//! collapsed-form constructor.

use serde::de::{self, Deserialize, DeserializeOwned, Deserializer};
use serde_json::Value;

/// Decodes a value that is either a full JSON object or a collapsed
/// identity string.
///
/// Two-phase decode: the input is read into a `serde_json::Value`, then
/// - an object is decoded into the mirror struct `R` and mapped through
///   `from_repr` (a malformed object is a hard error naming `label`);
/// - a string is handed to `from_key`, which populates only the identity
///   field;
/// - any other shape is a hard error, distinguishable from a plain parse
///   failure.
///
/// `R` is the caller's private mirror of its public struct, so the public
/// type's own `Deserialize` impl is never re-entered.
pub fn decode_object_or_string<'de, D, R, T>(
    label: &'static str,
    deserializer: D,
    from_repr: impl FnOnce(R) -> T,
    from_key: impl FnOnce(String) -> T,
) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    R: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    match value {
        Value::Object(_) => serde_json::from_value::<R>(value)
            .map(from_repr)
            .map_err(|e| de::Error::custom(format!("{label}: invalid object form: {e}"))),
        Value::String(s) => Ok(from_key(s)),
        other => Err(de::Error::custom(format!(
            "{label}: expected an object or a string, found {}",
            kind(&other)
        ))),
    }
}

fn kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
