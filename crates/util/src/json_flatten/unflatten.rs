use serde_json::{Map, Value};

use super::{FlattenError, FlattenOptions};
use crate::is_empty::is_empty_value;

/// Rebuilds a nested mapping from dot-joined paths. Inverse of
/// [`flatten_object`](super::flatten_object) for mappings whose nested
/// mappings are non-empty and whose keys do not contain the separator.
///
/// # Errors
///
/// - [`FlattenError::EmptySegment`] if a path has an empty segment.
/// - [`FlattenError::PathConflict`] if a path descends through a leaf, or a
///   leaf would replace a mapping that already holds other paths.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use plainkit_util::json_flatten::{flatten_object, unflatten_object};
///
/// let nested = json!({"a": {"b": 1, "c": [true]}, "d": "x"});
/// let flat = flatten_object(&nested);
///
/// assert_eq!(unflatten_object(&flat).unwrap(), nested);
/// ```
pub fn unflatten_object(flat: &Map<String, Value>) -> Result<Value, FlattenError> {
    unflatten_with(flat, &FlattenOptions::default())
}

/// Like [`unflatten_object`], splitting on a custom separator.
pub fn unflatten_with(flat: &Map<String, Value>, options: &FlattenOptions) -> Result<Value, FlattenError> {
    let mut root = Map::new();
    for (path, value) in flat {
        insert_path(&mut root, path, &options.separator, value)?;
    }
    Ok(Value::Object(root))
}

fn insert_path(root: &mut Map<String, Value>, path: &str, separator: &str, value: &Value) -> Result<(), FlattenError> {
    let segments: Vec<&str> = if separator.is_empty() {
        vec![path]
    } else {
        path.split(separator).collect()
    };
    if segments.iter().any(|s| s.is_empty()) {
        return Err(FlattenError::EmptySegment { path: path.to_string() });
    }
    let conflict = || FlattenError::PathConflict { path: path.to_string() };

    let (leaf, parents) = segments.split_last().ok_or_else(conflict)?;
    let mut cursor = root;
    for segment in parents {
        let entry = cursor
            .entry(segment.to_string())
            .or_insert_with(|| Value::Object(Map::new()));
        cursor = match entry {
            Value::Object(map) => map,
            _ => return Err(conflict()),
        };
    }
    if cursor.get(*leaf).is_some_and(|existing| !is_empty_value(existing)) {
        return Err(conflict());
    }
    cursor.insert(leaf.to_string(), value.clone());
    Ok(())
}
