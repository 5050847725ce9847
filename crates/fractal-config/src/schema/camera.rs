//! Orbit camera configuration types.

use serde::{Deserialize, Serialize};

/// Camera orbiting the world origin.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Distance from the origin (valid range: 0.5-100.0).
    pub distance: f32,
    /// Vertical field of view (valid range: 10-120).
    pub fov_degrees: f32,
    /// Elevation above the horizon (valid range: -89 to 89).
    pub pitch_degrees: f32,
    /// Initial azimuth.
    pub yaw_degrees: f32,
    /// Azimuth change per second (valid range: -360 to 360).
    pub orbit_speed: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            distance: 4.5,
            fov_degrees: 60.0,
            pitch_degrees: 20.0,
            yaw_degrees: 30.0,
            orbit_speed: 0.0,
        }
    }
}
