use plainkit_util::{deep_clone, deep_merge, flatten_object, is_equal, unflatten_object, FlattenError};
use serde_json::{json, Value};

#[test]
fn test_merge_nested_override() {
    let merged = deep_merge(&json!({"a": 1, "b": {"x": 1}}), &json!({"b": {"y": 2}}));
    assert_eq!(merged, json!({"a": 1, "b": {"x": 1, "y": 2}}));
}

#[test]
fn test_merge_replaces_sequences_wholesale() {
    let merged = deep_merge(&json!({"a": [1, 2]}), &json!({"a": [3]}));
    assert_eq!(merged, json!({"a": [3]}));
}

#[test]
fn test_merge_recurses_with_original_target_value() {
    let target = json!({"cfg": {"db": {"host": "localhost", "port": 5432}, "debug": false}});
    let source = json!({"cfg": {"db": {"port": 6543}, "debug": true}});

    let merged = deep_merge(&target, &source);

    assert_eq!(
        merged,
        json!({"cfg": {"db": {"host": "localhost", "port": 6543}, "debug": true}})
    );
}

#[test]
fn test_merge_result_is_independent_of_both_inputs() {
    let target = json!({"keep": {"a": [1]}});
    let source = json!({"fresh": {"b": [2]}});

    let mut merged = deep_merge(&target, &source);
    merged["keep"]["a"].as_array_mut().unwrap().push(json!(9));
    merged["fresh"]["b"].as_array_mut().unwrap().push(json!(9));

    assert_eq!(target, json!({"keep": {"a": [1]}}));
    assert_eq!(source, json!({"fresh": {"b": [2]}}));
}

#[test]
fn test_flatten_depth_one() {
    assert_eq!(Value::Object(flatten_object(&json!({"a": 1, "b": 2}))), json!({"a": 1, "b": 2}));
}

#[test]
fn test_flatten_nesting_and_empty_leaf() {
    assert_eq!(Value::Object(flatten_object(&json!({"a": {"b": {"c": 1}}}))), json!({"a.b.c": 1}));
    assert_eq!(Value::Object(flatten_object(&json!({"a": {}}))), json!({"a": {}}));
}

#[test]
fn test_unflatten_reports_conflicting_path() {
    let mut flat = serde_json::Map::new();
    flat.insert("server".to_string(), json!("host:80"));
    flat.insert("server.port".to_string(), json!(80));

    let err = unflatten_object(&flat).unwrap_err();
    assert_eq!(err.to_string(), "path `server.port` conflicts with an existing entry");
    assert!(matches!(err, FlattenError::PathConflict { .. }));
}

#[test]
fn test_equality_against_clone() {
    let value = json!({"list": [1, 2.5, "three", null, {"four": [4]}], "flag": true});
    assert!(is_equal(&value, &deep_clone(&value)));
}

#[test]
fn test_equality_mismatched_sequence_lengths() {
    assert!(!is_equal(&json!({"a": [1, 2]}), &json!({"a": [1, 2, null]})));
    assert!(!is_equal(&json!({"a": [1, 2, null]}), &json!({"a": [1, 2]})));
}
