use fractal_common::Color;
use fractal_config::schema::{GraphFunctionName, TransitionMode as ConfigTransitionMode};
use fractal_core::{GraphFunction, TransitionMode};

use crate::gpu::RendererError;

/// Log the first frame presentation (once only).
pub(crate) fn log_first_frame(width: u32, height: u32, format: wgpu::TextureFormat) {
    static PRESENTED: std::sync::atomic::AtomicBool = std::sync::atomic::AtomicBool::new(false);
    if !PRESENTED.swap(true, std::sync::atomic::Ordering::Relaxed) {
        tracing::info!(
            "First frame presented ({}x{}, format={:?})",
            width,
            height,
            format,
        );
    }
}

/// Parse a config color, naming the offending field on failure.
pub(crate) fn parse_color(hex: &str, field: &str) -> Result<Color, RendererError> {
    Color::from_hex(hex)
        .ok_or_else(|| RendererError::InvalidSetting(format!("{field} = \"{hex}\" is not a hex color")))
}

/// Linear clear color for an sRGB surface.
pub(crate) fn clear_color(color: Color) -> wgpu::Color {
    let [r, g, b, a] = color.to_linear_rgba();
    wgpu::Color {
        r: r as f64,
        g: g as f64,
        b: b as f64,
        a: a as f64,
    }
}

pub fn graph_function(name: GraphFunctionName) -> GraphFunction {
    match name {
        GraphFunctionName::Wave => GraphFunction::Wave,
        GraphFunctionName::MorphingWave => GraphFunction::MorphingWave,
        GraphFunctionName::Ripple => GraphFunction::Ripple,
        GraphFunctionName::TwistedSphere => GraphFunction::TwistedSphere,
        GraphFunctionName::Torus => GraphFunction::Torus,
    }
}

pub fn transition_mode(mode: ConfigTransitionMode) -> TransitionMode {
    match mode {
        ConfigTransitionMode::Cycle => TransitionMode::Cycle,
        ConfigTransitionMode::Random => TransitionMode::Random,
    }
}

// =============================================================================
// Tests
// =============================================================================
