//! Shared cube mesh used for fractal parts and graph points.

mod cube;
mod types;

pub use cube::*;
pub use types::*;
