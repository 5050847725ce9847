//! Per-level instance buffers and the GPU seam they are drawn through.

mod backend;
mod manager;
mod types;

pub use backend::*;
pub use manager::*;
pub use types::*;
