//! Deep merging of plain values.

mod merge;

pub use merge::{deep_merge, deep_merge_owned};
