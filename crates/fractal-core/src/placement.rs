//! Root placement of a structure in world space.

use glam::{EulerRot, Quat, Vec3};

/// World position and orientation of the root part, supplied each frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub position: Vec3,
    pub rotation: Quat,
}

impl Placement {
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        rotation: Quat::IDENTITY,
    };

    pub fn new(position: Vec3, rotation: Quat) -> Self {
        Self { position, rotation }
    }

    /// Build from a position and `[x, y, z]` Euler angles in degrees.
    ///
    /// Rotations apply about z first, then x, then y.
    pub fn from_euler_degrees(position: [f32; 3], degrees: [f32; 3]) -> Self {
        let [x, y, z] = degrees.map(f32::to_radians);
        Self {
            position: Vec3::from_array(position),
            rotation: Quat::from_euler(EulerRot::YXZ, y, x, z),
        }
    }
}

impl Default for Placement {
    fn default() -> Self {
        Self::IDENTITY
    }
}

// =============================================================================
// Tests
// =============================================================================
