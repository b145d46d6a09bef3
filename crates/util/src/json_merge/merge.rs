use serde_json::{Map, Value};

use crate::json_clone::{clone_map, deep_clone};
use crate::kind::{Plain, PlainOwned};

/// Deep-merges `source` into a copy of `target`.
///
/// Starting from the entries of `target`, each key of `source` is applied:
///
/// - a mapping at a key `target` lacks is attached as a new branch;
/// - a mapping at a key `target` has is merged recursively with the original
///   target value (a non-mapping target value counts as an empty mapping);
/// - anything else overwrites the key wholesale. Sequences are replaced, never
///   concatenated or merged element-wise.
///
/// Keys only present in `target` keep their value and position; new keys are
/// appended in `source` order. A non-mapping `target` contributes no entries
/// and a non-mapping `source` contributes no keys, so the result is always a
/// mapping.
///
/// Both inputs are borrowed and left untouched. Every node of the result is
/// freshly allocated; use [`deep_merge_owned`] to move new branches out of
/// `source` instead of copying them.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use plainkit_util::json_merge::deep_merge;
///
/// let target = json!({"a": 1, "b": {"x": 1}, "list": [1, 2]});
/// let source = json!({"b": {"y": 2}, "list": [3]});
///
/// assert_eq!(
///     deep_merge(&target, &source),
///     json!({"a": 1, "b": {"x": 1, "y": 2}, "list": [3]})
/// );
/// ```
pub fn deep_merge(target: &Value, source: &Value) -> Value {
    let output = match Plain::of(target) {
        Plain::Mapping(obj) => merge_maps(obj, source),
        _ => merge_maps(&Map::new(), source),
    };
    Value::Object(output)
}

fn merge_maps(target: &Map<String, Value>, source: &Value) -> Map<String, Value> {
    let mut output = target.clone();
    let Plain::Mapping(source) = Plain::of(source) else {
        return output;
    };
    for (key, src_val) in source {
        let merged = match Plain::of(src_val) {
            Plain::Mapping(src_obj) => match target.get(key) {
                Some(tgt_val) => deep_merge(tgt_val, src_val),
                None => Value::Object(clone_map(src_obj)),
            },
            _ => deep_clone(src_val),
        };
        output.insert(key.clone(), merged);
    }
    output
}

/// Consuming variant of [`deep_merge`] with identical merge rules.
///
/// A mapping branch introduced from `source` at a key `target` lacks is moved
/// into the result as-is: its nodes are reused, not copied. Untouched target
/// entries are moved as well, so no value is allocated twice.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use plainkit_util::json_merge::deep_merge_owned;
///
/// let merged = deep_merge_owned(json!({"a": [1, 2]}), json!({"a": [3], "b": {"c": true}}));
/// assert_eq!(merged, json!({"a": [3], "b": {"c": true}}));
/// ```
pub fn deep_merge_owned(target: Value, source: Value) -> Value {
    let mut output = match PlainOwned::from(target) {
        PlainOwned::Mapping(obj) => obj,
        _ => Map::new(),
    };
    let PlainOwned::Mapping(source) = PlainOwned::from(source) else {
        return Value::Object(output);
    };
    for (key, src_val) in source {
        let merged = match PlainOwned::from(src_val) {
            PlainOwned::Mapping(src_obj) => match output.get_mut(&key) {
                Some(tgt_val) => deep_merge_owned(tgt_val.take(), Value::Object(src_obj)),
                None => Value::Object(src_obj),
            },
            leaf => leaf.into(),
        };
        output.insert(key, merged);
    }
    Value::Object(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_nested_objects_merge() {
        let merged = deep_merge(&json!({"a": 1, "b": {"x": 1}}), &json!({"b": {"y": 2}}));
        assert_eq!(merged, json!({"a": 1, "b": {"x": 1, "y": 2}}));
    }

    #[test]
    fn test_arrays_are_replaced() {
        let merged = deep_merge(&json!({"a": [1, 2]}), &json!({"a": [3]}));
        assert_eq!(merged, json!({"a": [3]}));
    }

    #[test]
    fn test_primitive_overwrites_object() {
        let merged = deep_merge(&json!({"a": {"x": 1}}), &json!({"a": 5}));
        assert_eq!(merged, json!({"a": 5}));
    }

    #[test]
    fn test_object_over_primitive_target() {
        let merged = deep_merge(&json!({"a": 5}), &json!({"a": {"y": 2}}));
        assert_eq!(merged, json!({"a": {"y": 2}}));
    }

    #[test]
    fn test_object_over_array_target() {
        let merged = deep_merge(&json!({"a": [1]}), &json!({"a": {"y": 2}}));
        assert_eq!(merged, json!({"a": {"y": 2}}));
    }

    #[test]
    fn test_null_overwrites() {
        let merged = deep_merge(&json!({"a": {"x": 1}}), &json!({"a": null}));
        assert_eq!(merged, json!({"a": null}));
    }

    #[test]
    fn test_target_only_keys_keep_position() {
        let merged = deep_merge(&json!({"a": 1, "b": 2, "c": 3}), &json!({"d": 4, "b": 20}));
        let keys: Vec<&String> = merged.as_object().unwrap().keys().collect();
        assert_eq!(keys, ["a", "b", "c", "d"]);
        assert_eq!(merged, json!({"a": 1, "b": 20, "c": 3, "d": 4}));
    }

    #[test]
    fn test_non_object_inputs() {
        assert_eq!(deep_merge(&json!(5), &json!({"a": 1})), json!({"a": 1}));
        assert_eq!(deep_merge(&json!({"a": 1}), &json!("x")), json!({"a": 1}));
        assert_eq!(deep_merge(&json!(null), &json!(7)), json!({}));
    }

    #[test]
    fn test_inputs_are_not_mutated() {
        let target = json!({"a": 1, "b": {"x": 1}});
        let source = json!({"b": {"y": 2}, "c": {"z": 3}});
        let target_before = target.clone();
        let source_before = source.clone();

        let _ = deep_merge(&target, &source);

        assert_eq!(target, target_before);
        assert_eq!(source, source_before);
    }

    #[test]
    fn test_owned_matches_borrowed() {
        let target = json!({"a": 1, "b": {"x": 1, "deep": {"k": [1]}}, "l": [1, 2]});
        let source = json!({"b": {"y": 2, "deep": {"k": [9], "n": null}}, "l": [3], "new": {"q": 1}});

        let borrowed = deep_merge(&target, &source);
        let owned = deep_merge_owned(target, source);
        assert_eq!(borrowed, owned);
    }

    #[test]
    fn test_owned_moves_new_branch_without_copy() {
        let source = json!({"branch": {"text": "shared storage"}});
        let ptr = source["branch"]["text"].as_str().unwrap().as_ptr();

        let merged = deep_merge_owned(json!({"a": 1}), source);

        assert_eq!(merged["branch"]["text"].as_str().unwrap().as_ptr(), ptr);
    }

    #[test]
    fn test_borrowed_copies_new_branch() {
        let source = json!({"branch": {"text": "own storage"}});
        let merged = deep_merge(&json!({"a": 1}), &source);

        assert_eq!(merged["branch"], source["branch"]);
        assert_ne!(
            merged["branch"]["text"].as_str().unwrap().as_ptr(),
            source["branch"]["text"].as_str().unwrap().as_ptr()
        );
    }
}
