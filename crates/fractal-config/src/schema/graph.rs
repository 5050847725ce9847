//! Function graph visualizer configuration types.

use serde::{Deserialize, Serialize};

/// Analytic surface sampled by the graph visualizer.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
#[derive(Default)]
pub enum GraphFunctionName {
    #[default]
    Wave,
    MorphingWave,
    Ripple,
    TwistedSphere,
    Torus,
}

/// How the next function is picked when the current one expires.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum TransitionMode {
    #[default]
    Cycle,
    Random,
}

/// Point-grid graph visualizer settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    pub enabled: bool,
    /// Points per grid side (valid range: 10-200).
    pub resolution: u32,
    pub function: GraphFunctionName,
    pub transition_mode: TransitionMode,
    /// Seconds each function is shown before morphing (>= 0).
    pub function_duration: f32,
    /// Seconds spent morphing between two functions (>= 0).
    pub transition_duration: f32,
    /// Grid center in world space.
    pub position: [f32; 3],
    pub color: String,
    /// Tint points by their sampled position instead of a flat color.
    pub color_by_position: bool,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            resolution: 50,
            function: GraphFunctionName::Wave,
            transition_mode: TransitionMode::Cycle,
            function_duration: 1.0,
            transition_duration: 1.0,
            position: [3.0, 0.0, 0.0],
            color: "#4fc3f7".into(),
            color_by_position: true,
        }
    }
}
