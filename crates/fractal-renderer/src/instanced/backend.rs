//! wgpu implementations of the core buffer and draw traits.

use fractal_common::InstanceError;
use fractal_core::{Bounds, DrawCall, InstanceBackend, InstanceTransform, InstancedDraw};

use super::material::MeshMaterial;
use crate::camera::Frustum;

/// Byte size of a buffer holding `capacity` transforms (never zero).
pub fn instance_buffer_size(capacity: usize) -> u64 {
    capacity.max(1) as u64 * InstanceTransform::SIZE
}

/// Reject buffers the device cannot create.
pub fn check_buffer_size(requested: u64, limit: u64) -> Result<(), InstanceError> {
    if requested > limit {
        return Err(InstanceError::TooLarge { requested, limit });
    }
    Ok(())
}

/// Allocates instance buffers on a device and writes them through its queue.
pub struct WgpuInstanceBackend<'a> {
    device: &'a wgpu::Device,
    queue: &'a wgpu::Queue,
}

impl<'a> WgpuInstanceBackend<'a> {
    pub fn new(device: &'a wgpu::Device, queue: &'a wgpu::Queue) -> Self {
        Self { device, queue }
    }
}

impl InstanceBackend for WgpuInstanceBackend<'_> {
    type Buffer = wgpu::Buffer;

    fn create_instance_buffer(
        &mut self,
        label: &str,
        slot: usize,
        capacity: usize,
    ) -> Result<wgpu::Buffer, InstanceError> {
        let size = instance_buffer_size(capacity);
        check_buffer_size(size, self.device.limits().max_buffer_size)?;

        self.device.push_error_scope(wgpu::ErrorFilter::OutOfMemory);
        let buffer = self.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(label),
            size,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        if let Some(err) = pollster::block_on(self.device.pop_error_scope()) {
            buffer.destroy();
            return Err(InstanceError::Allocation {
                level: slot,
                reason: err.to_string(),
            });
        }

        Ok(buffer)
    }

    fn write_instances(&mut self, buffer: &wgpu::Buffer, instances: &[InstanceTransform]) {
        if instances.is_empty() {
            return;
        }
        self.queue
            .write_buffer(buffer, 0, bytemuck::cast_slice(instances));
    }

    fn release_instance_buffer(&mut self, buffer: wgpu::Buffer) {
        buffer.destroy();
    }
}

/// Draw target over an open render pass, skipping draws outside the view.
pub struct LevelPass<'a, 'p> {
    pass: &'a mut wgpu::RenderPass<'p>,
    frustum: Frustum,
    drawn: u32,
    culled: u32,
}

impl<'a, 'p> LevelPass<'a, 'p> {
    /// Wrap a pass whose pipeline and camera are already bound.
    pub fn new(pass: &'a mut wgpu::RenderPass<'p>, frustum: Frustum) -> Self {
        Self {
            pass,
            frustum,
            drawn: 0,
            culled: 0,
        }
    }

    pub fn drawn(&self) -> u32 {
        self.drawn
    }

    pub fn culled(&self) -> u32 {
        self.culled
    }

    fn visible(&self, bounds: &Bounds) -> bool {
        self.frustum.intersects(bounds)
    }
}

impl InstancedDraw<MeshMaterial, wgpu::Buffer> for LevelPass<'_, '_> {
    fn draw_instanced(&mut self, call: DrawCall<'_, MeshMaterial, wgpu::Buffer>) {
        if call.instance_count == 0 || !self.visible(&call.bounds) {
            tracing::trace!(label = call.label, "draw culled");
            self.culled += 1;
            return;
        }

        call.resource.bind(self.pass);
        self.pass.set_vertex_buffer(1, call.buffer.slice(..));
        self.pass
            .draw_indexed(0..call.resource.index_count(), 0, 0..call.instance_count);
        self.drawn += 1;
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer_size_is_capacity_times_64() {
        assert_eq!(instance_buffer_size(1), 64);
        assert_eq!(instance_buffer_size(78_125), 78_125 * 64);
    }

    #[test]
    fn empty_buffer_still_gets_one_slot() {
        assert_eq!(instance_buffer_size(0), 64);
    }

    #[test]
    fn oversized_buffer_is_rejected() {
        let err = check_buffer_size(512, 256).unwrap_err();
        assert!(matches!(
            err,
            InstanceError::TooLarge {
                requested: 512,
                limit: 256
            }
        ));
        assert!(check_buffer_size(256, 256).is_ok());
    }

    #[test]
    fn deepest_level_fits_default_limit() {
        let deepest = 5usize.pow(7);
        let limit = wgpu::Limits::default().max_buffer_size;
        assert!(check_buffer_size(instance_buffer_size(deepest), limit).is_ok());
    }
}
