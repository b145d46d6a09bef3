use plainkit_util::{deep_clone, deep_merge, deep_merge_owned, flatten_object, is_equal, is_plain_container, unflatten_object};
use proptest::prelude::*;
use serde_json::{json, Map, Value};

fn arb_leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::from),
        (-1.0e6f64..1.0e6).prop_map(|f| json!(f)),
        "[a-z]{0,8}".prop_map(Value::String),
    ]
}

fn arb_value() -> impl Strategy<Value = Value> {
    arb_leaf().prop_recursive(4, 48, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
            prop::collection::vec(("[a-e]{1,3}", inner), 0..6)
                .prop_map(|entries| Value::Object(entries.into_iter().collect::<Map<String, Value>>())),
        ]
    })
}

fn arb_object() -> impl Strategy<Value = Value> {
    prop::collection::vec(("[a-e]{1,3}", arb_value()), 0..6)
        .prop_map(|entries| Value::Object(entries.into_iter().collect::<Map<String, Value>>()))
}

proptest! {
    #[test]
    fn clone_is_equal_to_original(v in arb_value()) {
        let cloned = deep_clone(&v);
        prop_assert!(is_equal(&v, &cloned));
        prop_assert_eq!(&v, &cloned);
    }

    #[test]
    fn mutating_clone_does_not_touch_original(v in arb_object()) {
        let before = deep_clone(&v);
        let mut cloned = deep_clone(&v);
        if let Value::Object(map) = &mut cloned {
            map.insert("__added".to_string(), json!(1));
            for (_, child) in map.iter_mut() {
                if let Value::Array(arr) = child {
                    arr.push(Value::Null);
                }
            }
        }
        prop_assert_eq!(&v, &before);
    }

    #[test]
    fn mutating_original_does_not_touch_clone(v in arb_object()) {
        let mut original = deep_clone(&v);
        let cloned = deep_clone(&original);
        let snapshot = deep_clone(&cloned);
        if let Value::Object(map) = &mut original {
            for (_, child) in map.iter_mut() {
                match child {
                    Value::Array(arr) => arr.push(json!("appended")),
                    Value::Object(nested) => {
                        nested.insert("__nested".to_string(), json!({"deep": [1]}));
                    }
                    other => *other = json!({"replaced": true}),
                }
            }
            map.insert("__added".to_string(), json!(1));
        }
        prop_assert_eq!(&cloned, &snapshot);
    }

    #[test]
    fn equality_is_reflexive(v in arb_value()) {
        prop_assert!(is_equal(&v, &v));
    }

    #[test]
    fn equality_is_symmetric(a in arb_value(), b in arb_value()) {
        prop_assert_eq!(is_equal(&a, &b), is_equal(&b, &a));
    }

    #[test]
    fn merge_does_not_mutate_inputs(target in arb_object(), source in arb_object()) {
        let target_before = deep_clone(&target);
        let source_before = deep_clone(&source);
        let _ = deep_merge(&target, &source);
        prop_assert!(is_equal(&target, &target_before));
        prop_assert!(is_equal(&source, &source_before));
    }

    #[test]
    fn merge_keeps_target_keys_and_applies_source_leaves(target in arb_object(), source in arb_object()) {
        let merged = deep_merge(&target, &source);
        let merged = merged.as_object().unwrap();
        for key in target.as_object().unwrap().keys() {
            prop_assert!(merged.contains_key(key));
        }
        for (key, value) in source.as_object().unwrap() {
            if !is_plain_container(value) {
                prop_assert!(is_equal(&merged[key], value));
            }
        }
    }

    #[test]
    fn owned_merge_agrees_with_borrowed(target in arb_object(), source in arb_object()) {
        let borrowed = deep_merge(&target, &source);
        let owned = deep_merge_owned(target, source);
        prop_assert_eq!(borrowed, owned);
    }

    #[test]
    fn merge_with_empty_source_is_identity(target in arb_object()) {
        let empty = json!({});
        prop_assert!(is_equal(&deep_merge(&target, &empty), &target));
    }

    #[test]
    fn flatten_emits_no_non_empty_mappings(v in arb_object()) {
        for leaf in flatten_object(&v).values() {
            if let Value::Object(map) = leaf {
                prop_assert!(map.is_empty());
            }
        }
    }

    #[test]
    fn unflatten_inverts_flatten(v in arb_object()) {
        let restored = unflatten_object(&flatten_object(&v)).unwrap();
        prop_assert!(is_equal(&restored, &v));
    }
}
