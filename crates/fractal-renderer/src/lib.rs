//! wgpu rendering for the fractal viewer: device setup, the instanced mesh
//! pipeline, and the wgpu side of the core's buffer and draw traits.

pub mod camera;
pub mod gpu;
pub mod instanced;
pub mod mesh;
pub mod perf;
pub mod render_state;

pub use camera::{Frustum, OrbitCamera};
pub use gpu::{GpuContext, RendererError};
pub use instanced::{InstancedPipeline, LevelPass, MeshMaterial, WgpuInstanceBackend};
pub use perf::FrameTimer;
pub use render_state::RenderState;
