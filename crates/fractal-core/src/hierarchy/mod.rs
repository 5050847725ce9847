//! Flattened fractal tree: per-level part arrays with implicit linkage.
//!
//! A part at index `j` of level `i` has its parent at index `j / 5` of
//! level `i - 1` and occupies sibling slot `j % 5`. No pointers or child
//! lists exist.

mod builder;
mod propagate;
mod types;


pub use builder::*;
pub use types::*;
