//! JSON object helper tests.

use less_util::collection::{compact, deep_merge, flatten, merge, select_entries};
use serde_json::{json, Map, Value};

fn obj(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("expected object, got {other}"),
    }
}

#[test]
fn merge_returns_fields_from_both() {
    let merged = merge(&obj(json!({"a": 1})), &obj(json!({"b": 2})));
    assert_eq!(Value::Object(merged), json!({"a": 1, "b": 2}));
}

#[test]
fn merge_prefers_values_from_the_second_object() {
    let merged = merge(&obj(json!({"a": 1, "b": 3})), &obj(json!({"a": 2})));
    assert_eq!(Value::Object(merged), json!({"a": 2, "b": 3}));
}

#[test]
fn deep_merge_recurses_into_nested_objects() {
    let left = json!({"db": {"host": "localhost", "port": 5432}, "debug": false});
    let right = json!({"db": {"port": 6543}, "debug": true});

    assert_eq!(
        deep_merge(&left, &right),
        json!({"db": {"host": "localhost", "port": 6543}, "debug": true})
    );
}

#[test]
fn deep_merge_replaces_non_objects() {
    let left = json!({"tags": [1, 2], "name": {"first": "a"}});
    let right = json!({"tags": [3], "name": "plain"});

    assert_eq!(deep_merge(&left, &right), json!({"tags": [3], "name": "plain"}));
    assert_eq!(deep_merge(&json!(1), &json!({"a": 1})), json!({"a": 1}));
}

#[test]
fn select_entries_filters_by_key_and_value() {
    let map = obj(json!({"a": 1, "b": 2, "c": 3}));
    let even = select_entries(&map, |_, v| v.as_i64().is_some_and(|n| n % 2 == 0));
    assert_eq!(Value::Object(even), json!({"b": 2}));

    let keyed = select_entries(&map, |k, _| k != "a");
    assert_eq!(Value::Object(keyed), json!({"b": 2, "c": 3}));
}

#[test]
fn compact_drops_nulls_only() {
    let items = vec![json!(0), Value::Null, json!(false), json!(""), Value::Null];
    assert_eq!(compact(&items), vec![json!(0), json!(false), json!("")]);
}

#[test]
fn flatten_nested_arrays() {
    assert_eq!(
        flatten(&json!([1, [2, [3, [4]], 5], [], 6])),
        vec![json!(1), json!(2), json!(3), json!(4), json!(5), json!(6)]
    );
    assert_eq!(flatten(&json!("x")), vec![json!("x")]);
}
