//! Flattening nested mappings into path-keyed mappings and back.

mod flatten;
mod options;
mod unflatten;

use thiserror::Error;

pub use flatten::{flatten_object, flatten_object_with_prefix, flatten_with};
pub use options::FlattenOptions;
pub use unflatten::{unflatten_object, unflatten_with};

/// Errors returned by [`unflatten_object`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FlattenError {
    #[error("path `{path}` conflicts with an existing entry")]
    PathConflict { path: String },
    #[error("path `{path}` has an empty segment")]
    EmptySegment { path: String },
}
