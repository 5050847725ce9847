//! Fractal structure configuration types.

use serde::{Deserialize, Serialize};

/// Shallowest supported hierarchy depth.
pub const MIN_DEPTH: u8 = 1;
/// Deepest supported hierarchy depth (97,656 parts).
pub const MAX_DEPTH: u8 = 8;

/// Fractal hierarchy settings.
///
/// Changing `depth` while the fractal is active rebuilds it from scratch.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FractalSectionConfig {
    pub enabled: bool,
    /// Number of levels (valid range: 1-8).
    pub depth: u8,
    /// Material color as `#rrggbb`.
    pub color: String,
    /// Root position in world space.
    pub position: [f32; 3],
    /// Root orientation as XYZ Euler angles in degrees.
    pub rotation_degrees: [f32; 3],
}

impl Default for FractalSectionConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            depth: 4,
            color: "#ffb347".into(),
            position: [0.0, 0.0, 0.0],
            rotation_degrees: [0.0, 0.0, 0.0],
        }
    }
}
