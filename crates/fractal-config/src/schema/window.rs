//! Window configuration types.

use serde::{Deserialize, Serialize};

/// Window appearance settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    /// Initial logical width (valid range: 320-7680).
    pub width: u32,
    /// Initial logical height (valid range: 240-4320).
    pub height: u32,
    /// Present with `Fifo` when true, `AutoNoVsync` otherwise.
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Fractal".into(),
            width: 1280,
            height: 800,
            vsync: true,
        }
    }
}

/// Clear color behind the scene.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BackgroundConfig {
    pub color: String,
}

impl Default for BackgroundConfig {
    fn default() -> Self {
        Self {
            color: "#101418".into(),
        }
    }
}
