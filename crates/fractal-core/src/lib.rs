//! Self-similar five-way hierarchy animated on the CPU and drawn with
//! one instanced draw per level.
//!
//! The crate is GPU-agnostic: buffer allocation and draw submission go
//! through the [`InstanceBackend`] and [`InstancedDraw`] traits, which the
//! renderer implements over wgpu.

pub mod graph;
pub mod hierarchy;
pub mod instancing;
pub mod lifecycle;
pub mod placement;

#[cfg(test)]
pub(crate) mod testing;

pub use graph::{GraphAnimator, GraphFunction, GraphVisualizer, TransitionMode};
pub use hierarchy::{Depth, Level, LevelTable, Part};
pub use instancing::{
    Bounds, DrawCall, DrawStats, InstanceBackend, InstanceBufferManager, InstanceTransform,
    InstancedDraw,
};
pub use lifecycle::FractalLifecycle;
pub use placement::Placement;
