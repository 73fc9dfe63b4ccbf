//! Typed accessor behaviour on parsed and hand-built objects: defaults,
//! numeric coercion, kind mismatches and view sharing.

use json_bridge::{parse, JsonArray, JsonError, JsonObject, Node};
use serde_json::json;

// ---------------------------------------------------------------------------
// Defaults on absence
// ---------------------------------------------------------------------------

#[test]
fn empty_document_returns_every_default() {
    let object = parse("{}").unwrap();
    assert_eq!(object.get_string("missing", "fallback").unwrap(), "fallback");
    assert_eq!(object.get_int("missing", -1).unwrap(), -1);
    assert_eq!(object.get_long("missing", 7).unwrap(), 7);
    assert_eq!(object.get_float("missing", 1.5).unwrap(), 1.5);
    assert_eq!(object.get_double("missing", 2.5).unwrap(), 2.5);
    assert!(!object.get_bool("missing", false).unwrap());
    assert!(object.get_array("missing").unwrap().is_none());
    assert!(object.get_object("missing").unwrap().is_none());
    assert!(!object.has_key("missing"));
    assert_eq!(object.len(), 0);
}

#[test]
fn reads_do_not_insert_keys() {
    let object = parse(r#"{"a": 1}"#).unwrap();
    let _ = object.get_int("b", 0);
    let _ = object.get_array("c");
    let _ = object.get_object("d");
    assert_eq!(object.keys(), vec!["a".to_string()]);
}

// ---------------------------------------------------------------------------
// Numeric coercion
// ---------------------------------------------------------------------------

#[test]
fn get_int_narrows_wide_integers() {
    let object = parse(r#"{"n": 2147483647, "neg": -12}"#).unwrap();
    assert_eq!(object.get("n"), Some(Node::Long(2_147_483_647)));
    assert_eq!(object.get_int("n", 0).unwrap(), i32::MAX);
    assert_eq!(object.get_int("neg", 0).unwrap(), -12);
}

#[test]
fn get_float_reads_integer_shaped_numbers() {
    let object = parse(r#"{"a": 3, "b": 3.0, "c": -0.25}"#).unwrap();
    assert_eq!(object.get_float("a", 0.0).unwrap(), 3.0);
    assert_eq!(object.get_float("b", 0.0).unwrap(), 3.0);
    assert_eq!(object.get_float("c", 0.0).unwrap(), -0.25);
}

#[test]
fn get_double_reads_every_numeric_kind() {
    let mut object = JsonObject::new();
    object.set_int("i", 2);
    object.set_float("f", 0.5);
    object.set_long("l", 10);
    assert_eq!(object.get_double("i", 0.0).unwrap(), 2.0);
    assert_eq!(object.get_double("f", 0.0).unwrap(), 0.5);
    assert_eq!(object.get_double("l", 0.0).unwrap(), 10.0);
}

#[test]
fn float_survives_text_round_trip() {
    let mut object = JsonObject::new();
    object.set_float("speed", 0.1);
    let text = object.to_json_string().unwrap();
    assert_eq!(text, r#"{"speed":0.1}"#);
    assert_eq!(parse(&text).unwrap().get_float("speed", 0.0).unwrap(), 0.1);
}

// ---------------------------------------------------------------------------
// Type mismatch
// ---------------------------------------------------------------------------

#[test]
fn mismatch_reports_key_and_kinds() {
    let object = parse(r#"{"count": "three"}"#).unwrap();
    match object.get_int("count", 0) {
        Err(JsonError::TypeMismatch { key, expected, found }) => {
            assert_eq!(key, "count");
            assert_eq!(expected, "int");
            assert_eq!(found, "string");
        }
        other => panic!("unexpected: {other:?}"),
    }
}

#[test]
fn long_getter_is_exact() {
    let mut object = JsonObject::new();
    object.set_int("i", 1);
    assert!(object.get_long("i", 0).is_err());
}

#[test]
fn get_object_on_scalar_is_mismatch() {
    let object = parse(r#"{"a": 1}"#).unwrap();
    assert!(matches!(
        object.get_object("a"),
        Err(JsonError::TypeMismatch { expected: "object", .. })
    ));
}

#[test]
fn malformed_text_is_parse_error() {
    assert!(matches!(parse(r#"{"a": }"#), Err(JsonError::Parse(_))));
    assert!(matches!(parse("42"), Err(JsonError::NotAnObject { found: "long" })));
}

// ---------------------------------------------------------------------------
// Shared views
// ---------------------------------------------------------------------------

#[test]
fn adding_to_array_view_is_visible_in_parent_text() {
    let root = parse(r#"{"tags": ["a"]}"#).unwrap();
    let mut tags = root.get_array("tags").unwrap().unwrap();
    tags.add("b");
    assert_eq!(root.to_json_string().unwrap(), r#"{"tags":["a","b"]}"#);
}

#[test]
fn set_array_aliases_the_given_array() {
    let mut root = JsonObject::new();
    let mut list = JsonArray::new();
    root.set_array("list", &list);
    list.add(1);
    list.add(true);
    assert_eq!(root.to_value().unwrap(), json!({"list": [1, true]}));
}

#[test]
fn deep_nested_view_mutation() {
    let root = parse(r#"{"a": {"b": {"c": []}}}"#).unwrap();
    let b = root.get_object("a").unwrap().unwrap().get_object("b").unwrap().unwrap();
    let mut c = b.get_array("c").unwrap().unwrap();
    c.add(JsonObject::new());
    assert_eq!(root.to_value().unwrap(), json!({"a": {"b": {"c": [{}]}}}));
}

#[test]
fn clear_empties_shared_map() {
    let root = parse(r#"{"child": {"x": 1}}"#).unwrap();
    let mut child = root.get_object("child").unwrap().unwrap();
    child.clear();
    assert_eq!(root.to_json_string().unwrap(), r#"{"child":{}}"#);
}
