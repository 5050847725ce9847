//! Instanced mesh drawing: pipeline, material resource, and the wgpu side
//! of the core's buffer and draw traits.

mod backend;
mod material;
mod pipeline;

pub use backend::*;
pub use material::*;
pub use pipeline::*;
