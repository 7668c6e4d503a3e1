use gantry_types::FloatString;
use rusqlite::types::{FromSql, ToSql, ToSqlOutput, Value as SqlValue, ValueRef};

// ── Construction ─────────────────────────────────────────────────

#[test]
fn new_and_get() {
    let v = FloatString::new(1.5);
    assert_eq!(v.get(), 1.5);
}

#[test]
fn default_is_zero() {
    assert_eq!(FloatString::default().get(), 0.0);
}

#[test]
fn lossy_parses_valid() {
    assert_eq!(FloatString::from_str_lossy("2.25").get(), 2.25);
    assert_eq!(FloatString::from_str_lossy("-0.5").get(), -0.5);
    assert_eq!(FloatString::from_str_lossy("10").get(), 10.0);
}

#[test]
fn lossy_returns_zero_on_garbage() {
    assert_eq!(FloatString::from_str_lossy("x").get(), 0.0);
    assert_eq!(FloatString::from_str_lossy("").get(), 0.0);
}

// ── JSON encode / decode ─────────────────────────────────────────

#[test]
fn serializes_as_string() {
    assert_eq!(serde_json::to_string(&FloatString::new(1.5)).unwrap(), "\"1.5\"");
}

#[test]
fn decodes_from_json_string() {
    let v: FloatString = serde_json::from_str("\"3.75\"").unwrap();
    assert_eq!(v.get(), 3.75);
}

#[test]
fn decodes_from_json_number() {
    let v: FloatString = serde_json::from_str("3.75").unwrap();
    assert_eq!(v.get(), 3.75);
}

#[test]
fn decodes_from_json_integer_number() {
    let v: FloatString = serde_json::from_str("4").unwrap();
    assert_eq!(v.get(), 4.0);
}

#[test]
fn empty_string_decodes_to_zero() {
    let v: FloatString = serde_json::from_str("\"\"").unwrap();
    assert_eq!(v.get(), 0.0);
}

#[test]
fn bad_nonempty_string_is_hard_error() {
    assert!(serde_json::from_str::<FloatString>("\"1,5\"").is_err());
}

#[test]
fn wrong_shape_is_hard_error() {
    assert!(serde_json::from_str::<FloatString>("true").is_err());
    assert!(serde_json::from_str::<FloatString>("{}").is_err());
}

#[test]
fn json_roundtrip_preserves_value() {
    let original = FloatString::new(123.456);
    let json = serde_json::to_string(&original).unwrap();
    let decoded: FloatString = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, original);
}

// ── SQL encode / decode ──────────────────────────────────────────

#[test]
fn to_sql_is_native_real() {
    let v = FloatString::new(2.5);
    let out = v.to_sql().unwrap();
    assert_eq!(out, ToSqlOutput::Owned(SqlValue::Real(2.5)));
}

#[test]
fn from_sql_null_is_zero() {
    assert_eq!(FloatString::column_result(ValueRef::Null).unwrap().get(), 0.0);
}

#[test]
fn from_sql_integer_widens() {
    assert_eq!(FloatString::column_result(ValueRef::Integer(3)).unwrap().get(), 3.0);
}

#[test]
fn from_sql_real() {
    assert_eq!(FloatString::column_result(ValueRef::Real(6.5)).unwrap().get(), 6.5);
}

#[test]
fn from_sql_numeric_text() {
    assert_eq!(FloatString::column_result(ValueRef::Text(b"7.5")).unwrap().get(), 7.5);
}

#[test]
fn from_sql_bad_text_is_hard_error() {
    assert!(FloatString::column_result(ValueRef::Text(b"seven")).is_err());
}
