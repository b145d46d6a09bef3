//! Deep equality for plain values.

mod deep_equal;

pub use deep_equal::is_equal;
