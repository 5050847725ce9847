//! Configuration schema types for the fractal viewer.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with the defaults shown in the config template.

mod camera;
mod fractal;
mod graph;
mod logging;
mod window;

pub use camera::*;
pub use fractal::*;
pub use graph::*;
pub use logging::*;
pub use window::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct FractalConfig {
    pub fractal: FractalSectionConfig,
    pub graph: GraphConfig,
    pub window: WindowConfig,
    pub camera: CameraConfig,
    pub background: BackgroundConfig,
    pub logging: LoggingConfig,
}

// =============================================================================
// Tests
// =============================================================================
