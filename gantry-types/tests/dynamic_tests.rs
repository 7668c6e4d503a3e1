use gantry_types::{Array, Error, Object};
use pretty_assertions::assert_eq;
use serde_json::json;

fn obj(v: serde_json::Value) -> Object {
    serde_json::from_value(v).expect("test fixture must be a JSON object")
}

// ── Soft-miss accessors ──────────────────────────────────────────

#[test]
fn get_str_hit() {
    let o = obj(json!({"a": "x", "b": 5}));
    assert_eq!(o.get_str("a"), Some("x"));
}

#[test]
fn get_str_type_mismatch_is_miss() {
    let o = obj(json!({"a": "x", "b": 5}));
    assert_eq!(o.get_str("b"), None);
}

#[test]
fn get_str_absent_key_is_miss() {
    let o = obj(json!({"a": "x"}));
    assert_eq!(o.get_str("c"), None);
}

#[test]
fn get_bool() {
    let o = obj(json!({"on": true, "s": "true"}));
    assert_eq!(o.get_bool("on"), Some(true));
    assert_eq!(o.get_bool("s"), None);
}

#[test]
fn get_f64() {
    let o = obj(json!({"n": 2.5, "s": "2.5"}));
    assert_eq!(o.get_f64("n"), Some(2.5));
    assert_eq!(o.get_f64("s"), None);
}

#[test]
fn get_object_and_array() {
    let o = obj(json!({"nested": {"k": 1}, "items": [1, 2], "s": "x"}));
    assert!(o.get_object("nested").is_some());
    assert_eq!(o.get_array("items").map(|a| a.len()), Some(2));
    assert_eq!(o.get_object("items"), None);
    assert_eq!(o.get_array("s"), None);
}

#[test]
fn contains_key_ignores_type() {
    let o = obj(json!({"a": null}));
    assert!(o.contains_key("a"));
    assert!(!o.contains_key("b"));
}

// ── IntString routing ────────────────────────────────────────────

#[test]
fn get_int_string_accepts_string_leaf() {
    let o = obj(json!({"id": "123"}));
    assert_eq!(o.get_int_string("id").map(|v| v.get()), Some(123));
}

#[test]
fn get_int_string_accepts_number_leaf() {
    let o = obj(json!({"id": 123}));
    assert_eq!(o.get_int_string("id").map(|v| v.get()), Some(123));
}

#[test]
fn get_int_string_bad_string_is_miss() {
    let o = obj(json!({"id": "abc"}));
    assert_eq!(o.get_int_string("id"), None);
}

// ── Lossy tier ───────────────────────────────────────────────────

#[test]
fn or_default_degrades_to_zero_values() {
    let o = obj(json!({"a": "x"}));
    assert_eq!(o.str_or_default("missing"), "");
    assert!(!o.bool_or_default("missing"));
    assert_eq!(o.f64_or_default("missing"), 0.0);
    assert_eq!(o.int_string_or_default("missing").get(), 0);
    assert!(o.object_or_default("missing").is_empty());
    assert!(o.array_or_default("missing").is_empty());
}

#[test]
fn or_default_passes_through_hits() {
    let o = obj(json!({"a": "x", "id": "9"}));
    assert_eq!(o.str_or_default("a"), "x");
    assert_eq!(o.int_string_or_default("id").get(), 9);
}

// ── Merge ────────────────────────────────────────────────────────

#[test]
fn merge_overwrites_top_level_keys() {
    let mut o = obj(json!({"a": 1}));
    o.merge(&json!({"a": 2, "b": 3})).unwrap();
    assert_eq!(o.get_f64("a"), Some(2.0));
    assert_eq!(o.get_f64("b"), Some(3.0));
}

#[test]
fn merge_is_not_recursive() {
    // A nested object from a later source replaces the earlier one
    // wholesale; its siblings do not survive.
    let mut o = obj(json!({"nested": {"keep": 1, "old": 2}}));
    o.merge(&json!({"nested": {"new": 3}})).unwrap();
    let nested = o.get_object("nested").unwrap();
    assert!(!nested.contains_key("keep"));
    assert!(!nested.contains_key("old"));
    assert_eq!(nested.get_f64("new"), Some(3.0));
}

#[test]
fn merge_accepts_any_serializable_struct() {
    #[derive(serde::Serialize)]
    struct Extra {
        site_id: u32,
    }
    let mut o = Object::new();
    o.merge(&Extra { site_id: 4 }).unwrap();
    assert_eq!(o.get_f64("site_id"), Some(4.0));
}

#[test]
fn merge_rejects_non_object_source() {
    let mut o = Object::new();
    let err = o.merge(&json!([1, 2])).unwrap_err();
    assert!(matches!(err, Error::MergeSource { found: "array" }));
}

#[test]
fn merge_lossy_swallows_the_error() {
    let mut o = obj(json!({"a": 1}));
    o.merge_lossy(&json!("scalar"));
    assert_eq!(o.len(), 1);
}

#[test]
fn from_sources_later_sources_win() {
    let o = Object::from_sources([json!({"a": 1}), json!({"a": 2, "b": 3})]);
    assert_eq!(o.get_f64("a"), Some(2.0));
    assert_eq!(o.get_f64("b"), Some(3.0));
}

#[test]
fn from_sources_skips_bad_source_but_continues() {
    let o = Object::from_sources([json!({"a": 1}), json!(42), json!({"b": 2})]);
    assert_eq!(o.get_f64("a"), Some(1.0));
    assert_eq!(o.get_f64("b"), Some(2.0));
    assert_eq!(o.len(), 2);
}

#[test]
fn from_sources_empty_is_empty_object() {
    assert!(Object::from_sources(Vec::<serde_json::Value>::new()).is_empty());
}

// ── Array bulk accessors ─────────────────────────────────────────

fn arr(v: serde_json::Value) -> Array {
    serde_json::from_value(v).expect("test fixture must be a JSON array")
}

#[test]
fn str_vec_all_strings() {
    let a = arr(json!(["a", "b"]));
    assert_eq!(a.as_str_vec(), Some(vec!["a".to_string(), "b".to_string()]));
}

#[test]
fn str_vec_one_mismatch_voids_all() {
    let a = arr(json!(["a", "b", 3]));
    assert_eq!(a.as_str_vec(), None);
}

#[test]
fn bool_and_f64_vecs() {
    assert_eq!(arr(json!([true, false])).as_bool_vec(), Some(vec![true, false]));
    assert_eq!(arr(json!([1, 2.5])).as_f64_vec(), Some(vec![1.0, 2.5]));
    assert_eq!(arr(json!([1, "2"])).as_f64_vec(), None);
}

#[test]
fn int_string_vec_mixed_leaves() {
    let a = arr(json!(["1", 2, "3"]));
    let ids: Vec<i64> = a.as_int_string_vec().unwrap().iter().map(|v| v.get()).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[test]
fn int_string_vec_bad_element_voids_all() {
    assert_eq!(arr(json!(["1", "x"])).as_int_string_vec(), None);
}

#[test]
fn object_vec() {
    let a = arr(json!([{"k": 1}, {"k": 2}]));
    assert_eq!(a.as_object_vec().map(|v| v.len()), Some(2));
    assert_eq!(arr(json!([{"k": 1}, "x"])).as_object_vec(), None);
}

#[test]
fn empty_array_bulk_accessors_succeed() {
    let a = Array::new();
    assert_eq!(a.as_str_vec(), Some(vec![]));
    assert_eq!(a.as_f64_vec(), Some(vec![]));
}

// ── Serde transparency ───────────────────────────────────────────

#[test]
fn object_roundtrips_transparently() {
    let o = obj(json!({"a": "x", "n": 5}));
    let json = serde_json::to_value(&o).unwrap();
    assert_eq!(json, json!({"a": "x", "n": 5}));
}

#[test]
fn object_as_struct_field() {
    #[derive(serde::Deserialize)]
    struct Payload {
        ref_info: Object,
    }
    let p: Payload = serde_json::from_str(r#"{"ref_info": {"provider": "acme"}}"#).unwrap();
    assert_eq!(p.ref_info.get_str("provider"), Some("acme"));
}
