use serde_json::{Map, Value};

use crate::kind::Plain;

/// Creates a deep clone of a plain value.
///
/// Every sequence and mapping node is freshly allocated; mappings are rebuilt
/// key by key in the input's iteration order. Primitives are copied by value.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use plainkit_util::json_clone::deep_clone;
///
/// let original = json!({"foo": [1, 2, {"bar": true}]});
/// let cloned = deep_clone(&original);
///
/// assert_eq!(original, cloned);
/// ```
pub fn deep_clone(value: &Value) -> Value {
    match Plain::of(value) {
        Plain::Primitive(primitive) => primitive.clone(),
        Plain::Sequence(arr) => Value::Array(arr.iter().map(deep_clone).collect()),
        Plain::Mapping(obj) => Value::Object(clone_map(obj)),
    }
}

/// Deep clone of a mapping node.
pub fn clone_map(obj: &Map<String, Value>) -> Map<String, Value> {
    let mut new_obj = Map::with_capacity(obj.len());
    for (key, val) in obj {
        new_obj.insert(key.clone(), deep_clone(val));
    }
    new_obj
}
