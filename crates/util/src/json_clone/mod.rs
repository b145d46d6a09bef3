//! Deep cloning of plain values.

mod clone;

pub use clone::{clone_map, deep_clone};
