//! plainkit-util - Structural operations on plain JSON-like values
//!
//! Deep clone, deep merge, deep equality and key flattening over
//! `serde_json::Value` trees. Mappings keep insertion order.

pub mod is_empty;
pub mod json_clone;
pub mod json_equal;
pub mod json_flatten;
pub mod json_merge;
pub mod kind;

// Re-exports for convenience
pub use is_empty::{is_empty_map, is_empty_value};
pub use json_clone::{clone_map, deep_clone};
pub use json_equal::is_equal;
pub use json_flatten::{
    flatten_object, flatten_object_with_prefix, flatten_with, unflatten_object, unflatten_with, FlattenError,
    FlattenOptions,
};
pub use json_merge::{deep_merge, deep_merge_owned};
pub use kind::{classify, is_plain_container, Plain, PlainOwned, ValueKind};
