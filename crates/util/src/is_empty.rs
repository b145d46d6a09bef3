use serde_json::{Map, Value};

/// Check if a mapping has no own keys.
///
/// # Examples
///
/// ```
/// use serde_json::Map;
/// use plainkit_util::is_empty::is_empty_map;
///
/// let mut map = Map::new();
/// assert!(is_empty_map(&map));
///
/// map.insert("foo".to_string(), serde_json::json!("bar"));
/// assert!(!is_empty_map(&map));
/// ```
pub fn is_empty_map(obj: &Map<String, Value>) -> bool {
    obj.is_empty()
}

/// Check if a value owns no keys.
///
/// Only a non-empty mapping returns `false`. Sequences and primitives have no
/// keys of their own, so a flatten walk treats them as leaves.
pub fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Object(map) => is_empty_map(map),
        _ => true,
    }
}
