//! Orbit camera and view-frustum culling.

use fractal_config::schema::CameraConfig;
use fractal_core::Bounds;
use glam::{Mat4, Vec3, Vec4};

use crate::instanced::CameraUniforms;

const NEAR: f32 = 0.05;
const FAR: f32 = 200.0;

/// Camera circling a target point at fixed distance and pitch.
#[derive(Debug, Clone)]
pub struct OrbitCamera {
    pub target: Vec3,
    pub distance: f32,
    pub fov_degrees: f32,
    pub pitch_degrees: f32,
    pub yaw_degrees: f32,
    /// Degrees of yaw per second.
    pub orbit_speed: f32,
    aspect: f32,
}

impl OrbitCamera {
    pub fn from_config(config: &CameraConfig, aspect: f32) -> Self {
        Self {
            target: Vec3::ZERO,
            distance: config.distance,
            fov_degrees: config.fov_degrees,
            pitch_degrees: config.pitch_degrees.clamp(-89.0, 89.0),
            yaw_degrees: config.yaw_degrees,
            orbit_speed: config.orbit_speed,
            aspect: aspect.max(f32::EPSILON),
        }
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = aspect.max(f32::EPSILON);
    }

    /// Advance the orbit by `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        self.yaw_degrees = (self.yaw_degrees + self.orbit_speed * dt).rem_euclid(360.0);
    }

    pub fn eye(&self) -> Vec3 {
        let (pitch, yaw) = (self.pitch_degrees.to_radians(), self.yaw_degrees.to_radians());
        self.target
            + self.distance * Vec3::new(pitch.cos() * yaw.sin(), pitch.sin(), pitch.cos() * yaw.cos())
    }

    pub fn view(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye(), self.target, Vec3::Y)
    }

    /// Right-handed perspective with wgpu's `[0, 1]` depth range.
    pub fn projection(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_degrees.to_radians(), self.aspect, NEAR, FAR)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection() * self.view()
    }

    pub fn frustum(&self) -> Frustum {
        Frustum::from_view_projection(&self.view_projection())
    }

    /// Uniform block with a key light shining down from over the camera.
    pub fn uniforms(&self) -> CameraUniforms {
        let eye = self.eye();
        let light = (self.target - eye + Vec3::new(0.0, -self.distance, 0.0)).normalize_or_zero();
        CameraUniforms {
            view_proj: self.view_projection().to_cols_array_2d(),
            eye: eye.extend(1.0).to_array(),
            light_dir: light.extend(0.0).to_array(),
        }
    }
}

/// Six inward-facing planes `(normal, d)` extracted from a view-projection.
#[derive(Debug, Clone, Copy)]
pub struct Frustum {
    planes: [Vec4; 6],
}

impl Frustum {
    /// Gribb-Hartmann extraction for a `[0, 1]` clip-space depth range.
    pub fn from_view_projection(m: &Mat4) -> Self {
        let (r0, r1, r2, r3) = (m.row(0), m.row(1), m.row(2), m.row(3));
        let planes = [r3 + r0, r3 - r0, r3 + r1, r3 - r1, r2, r3 - r2].map(|p| {
            let len = p.truncate().length();
            if len > 0.0 {
                p / len
            } else {
                p
            }
        });
        Self { planes }
    }

    /// False only when the box lies entirely outside one plane.
    pub fn intersects(&self, bounds: &Bounds) -> bool {
        self.planes.iter().all(|plane| {
            let normal = plane.truncate();
            // Corner furthest along the plane normal.
            let positive = bounds.center + bounds.half_extent * normal.signum();
            normal.dot(positive) + plane.w >= 0.0
        })
    }
}

// =============================================================================
// Tests
// =============================================================================
