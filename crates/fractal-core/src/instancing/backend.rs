//! Traits the renderer implements to own buffers and issue draws.

use fractal_common::InstanceError;

use super::types::{Bounds, InstanceTransform};

/// Device-side buffer management for instance transforms.
pub trait InstanceBackend {
    /// Handle to one GPU-resident instance buffer.
    type Buffer;

    /// Allocate a buffer holding `capacity` transforms.
    ///
    /// `slot` identifies the level (or 0 for single-buffer users) in errors.
    fn create_instance_buffer(
        &mut self,
        label: &str,
        slot: usize,
        capacity: usize,
    ) -> Result<Self::Buffer, InstanceError>;

    /// Overwrite the start of `buffer` with `instances`.
    fn write_instances(&mut self, buffer: &Self::Buffer, instances: &[InstanceTransform]);

    /// Give the buffer back. Called exactly once per created buffer.
    fn release_instance_buffer(&mut self, buffer: Self::Buffer);
}

/// One instanced draw request.
#[derive(Debug)]
pub struct DrawCall<'a, R, B> {
    /// Shared mesh + material, never inspected by the core.
    pub resource: &'a R,
    pub buffer: &'a B,
    pub instance_count: u32,
    pub bounds: Bounds,
    pub label: &'a str,
}

/// Render-pass side: accepts instanced draws.
pub trait InstancedDraw<R, B> {
    fn draw_instanced(&mut self, call: DrawCall<'_, R, B>);
}
