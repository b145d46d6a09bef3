use serde_json::{Map, Value};

/// Structural category of a plain value.
///
/// Every recursive operation in this crate dispatches on this tag (through
/// [`Plain`] or [`PlainOwned`]) rather than matching the six `Value` variants
/// ad hoc.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// `null`, booleans, numbers and strings.
    Primitive,
    /// Ordered sequence (JSON array).
    Sequence,
    /// String-keyed mapping (JSON object).
    Mapping,
}

/// Borrowed view of a value split along [`ValueKind`].
#[derive(Debug, Clone, Copy)]
pub enum Plain<'a> {
    Primitive(&'a Value),
    Sequence(&'a [Value]),
    Mapping(&'a Map<String, Value>),
}

impl<'a> Plain<'a> {
    pub fn of(value: &'a Value) -> Self {
        match value {
            Value::Array(arr) => Plain::Sequence(arr),
            Value::Object(obj) => Plain::Mapping(obj),
            _ => Plain::Primitive(value),
        }
    }

    pub fn kind(&self) -> ValueKind {
        match self {
            Plain::Primitive(_) => ValueKind::Primitive,
            Plain::Sequence(_) => ValueKind::Sequence,
            Plain::Mapping(_) => ValueKind::Mapping,
        }
    }
}

/// Owned counterpart of [`Plain`], used where branches are moved rather than
/// copied.
#[derive(Debug, Clone, PartialEq)]
pub enum PlainOwned {
    Primitive(Value),
    Sequence(Vec<Value>),
    Mapping(Map<String, Value>),
}

impl From<Value> for PlainOwned {
    fn from(value: Value) -> Self {
        match value {
            Value::Array(arr) => PlainOwned::Sequence(arr),
            Value::Object(obj) => PlainOwned::Mapping(obj),
            other => PlainOwned::Primitive(other),
        }
    }
}

impl From<PlainOwned> for Value {
    fn from(plain: PlainOwned) -> Self {
        match plain {
            PlainOwned::Primitive(value) => value,
            PlainOwned::Sequence(arr) => Value::Array(arr),
            PlainOwned::Mapping(obj) => Value::Object(obj),
        }
    }
}

/// Classifies a value into one of the three structural kinds.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use plainkit_util::kind::{classify, ValueKind};
///
/// assert_eq!(classify(&json!(null)), ValueKind::Primitive);
/// assert_eq!(classify(&json!([1, 2])), ValueKind::Sequence);
/// assert_eq!(classify(&json!({"a": 1})), ValueKind::Mapping);
/// ```
pub fn classify(value: &Value) -> ValueKind {
    Plain::of(value).kind()
}

/// Returns `true` only for mappings. Sequences and primitives are never plain
/// containers, so clone, merge and flatten treat them as leaves.
pub fn is_plain_container(value: &Value) -> bool {
    classify(value) == ValueKind::Mapping
}
