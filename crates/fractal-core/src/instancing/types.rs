//! Instance transform, culling bounds, and draw statistics.

use glam::{Mat4, Quat, Vec3};

/// Per-instance model matrix as uploaded to the GPU.
///
/// Layout: column-major `mat4x4<f32>` = 64 bytes, read by the vertex shader
/// as four `vec4<f32>` attributes.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceTransform {
    pub model: [[f32; 4]; 4],
}

impl InstanceTransform {
    pub const SIZE: u64 = std::mem::size_of::<InstanceTransform>() as u64;

    /// `translate(position) * rotate(rotation) * scale(scale)`.
    pub fn new(position: Vec3, rotation: Quat, scale: f32) -> Self {
        Self {
            model: Mat4::from_scale_rotation_translation(Vec3::splat(scale), rotation, position)
                .to_cols_array_2d(),
        }
    }

    pub fn matrix(&self) -> Mat4 {
        Mat4::from_cols_array_2d(&self.model)
    }

    pub fn translation(&self) -> Vec3 {
        Vec3::from_slice(&self.model[3][..3])
    }
}

/// Axis-aligned box handed to the draw target as a culling hint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub center: Vec3,
    pub half_extent: Vec3,
}

impl Bounds {
    /// Cube of half-size `half` around `center`.
    pub fn cube(center: Vec3, half: f32) -> Self {
        Self {
            center,
            half_extent: Vec3::splat(half),
        }
    }

    pub fn min(&self) -> Vec3 {
        self.center - self.half_extent
    }

    pub fn max(&self) -> Vec3 {
        self.center + self.half_extent
    }

    pub fn contains(&self, point: Vec3) -> bool {
        let d = (point - self.center).abs();
        d.cmple(self.half_extent).all()
    }
}

/// Counters for the most recent upload and draw.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DrawStats {
    pub draw_calls: u32,
    pub instances: u64,
    pub bytes_uploaded: u64,
}

impl DrawStats {
    /// Sum of two stat blocks, for reporting several structures together.
    pub fn combined(self, other: DrawStats) -> DrawStats {
        DrawStats {
            draw_calls: self.draw_calls + other.draw_calls,
            instances: self.instances + other.instances,
            bytes_uploaded: self.bytes_uploaded + other.bytes_uploaded,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
