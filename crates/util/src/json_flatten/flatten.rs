use serde_json::{Map, Value};

use super::FlattenOptions;
use crate::kind::Plain;

/// Flattens a nested mapping into a single-level mapping keyed by dot-joined
/// paths.
///
/// A nested mapping with at least one key is descended into. Primitives,
/// sequences and empty mappings are emitted as leaves. A non-mapping input
/// yields an empty mapping.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use plainkit_util::json_flatten::flatten_object;
///
/// let flat = flatten_object(&json!({"a": {"b": {"c": 1}}, "d": [1, 2], "e": {}}));
///
/// assert_eq!(flat["a.b.c"], json!(1));
/// assert_eq!(flat["d"], json!([1, 2]));
/// assert_eq!(flat["e"], json!({}));
/// ```
pub fn flatten_object(obj: &Value) -> Map<String, Value> {
    flatten_with(obj, "", &FlattenOptions::default())
}

/// Like [`flatten_object`], with every path placed under `prefix`.
pub fn flatten_object_with_prefix(obj: &Value, prefix: &str) -> Map<String, Value> {
    flatten_with(obj, prefix, &FlattenOptions::default())
}

/// Flattens using a custom separator. An empty `prefix` means top level.
pub fn flatten_with(obj: &Value, prefix: &str, options: &FlattenOptions) -> Map<String, Value> {
    let mut acc = Map::new();
    if let Plain::Mapping(map) = Plain::of(obj) {
        flatten_into(map, prefix, &options.separator, &mut acc);
    }
    acc
}

fn flatten_into(map: &Map<String, Value>, prefix: &str, separator: &str, acc: &mut Map<String, Value>) {
    for (key, value) in map {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}{separator}{key}")
        };
        match Plain::of(value) {
            Plain::Mapping(nested) if !nested.is_empty() => {
                flatten_into(nested, &path, separator, acc);
            }
            _ => {
                acc.insert(path, value.clone());
            }
        }
    }
}
