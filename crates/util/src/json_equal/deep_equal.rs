use serde_json::{Number, Value};

use crate::kind::Plain;

/// Performs a deep equality check between two plain values.
///
/// - Primitives of the same kind compare by value; numbers compare
///   numerically, so `1` equals `1.0`.
/// - Sequences need equal length and positionally equal elements.
/// - Mappings need the same key set with recursively equal values; key order
///   is not significant.
/// - Values of different kinds are never equal.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use plainkit_util::json_equal::is_equal;
///
/// let a = json!({"foo": [1, 2, 3], "bar": null});
/// let b = json!({"bar": null, "foo": [1, 2, 3]});
/// let c = json!({"foo": [1, 2, 4], "bar": null});
///
/// assert!(is_equal(&a, &b));
/// assert!(!is_equal(&a, &c));
/// ```
pub fn is_equal(a: &Value, b: &Value) -> bool {
    if std::ptr::eq(a, b) {
        return true;
    }
    match (Plain::of(a), Plain::of(b)) {
        (Plain::Primitive(a), Plain::Primitive(b)) => primitive_equal(a, b),

        (Plain::Sequence(arr_a), Plain::Sequence(arr_b)) => {
            if arr_a.len() != arr_b.len() {
                return false;
            }
            arr_a.iter().zip(arr_b).all(|(x, y)| is_equal(x, y))
        }

        (Plain::Mapping(obj_a), Plain::Mapping(obj_b)) => {
            if obj_a.len() != obj_b.len() {
                return false;
            }
            for (key, val_a) in obj_a {
                match obj_b.get(key) {
                    Some(val_b) => {
                        if !is_equal(val_a, val_b) {
                            return false;
                        }
                    }
                    None => return false,
                }
            }
            true
        }

        // Different kinds are never equal
        _ => false,
    }
}

fn primitive_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Number(a), Value::Number(b)) => number_equal(a, b),
        (Value::String(a), Value::String(b)) => a == b,
        _ => false,
    }
}

/// Integers compare exactly; anything involving a float compares as `f64`.
fn number_equal(a: &Number, b: &Number) -> bool {
    if let (Some(x), Some(y)) = (a.as_i64(), b.as_i64()) {
        return x == y;
    }
    if let (Some(x), Some(y)) = (a.as_u64(), b.as_u64()) {
        return x == y;
    }
    if a.is_f64() || b.is_f64() {
        return a.as_f64() == b.as_f64();
    }
    // one side above i64::MAX, the other negative
    false
}
