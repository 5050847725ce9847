//! Fractal section validation.

use crate::schema::{FractalConfig, MAX_DEPTH, MIN_DEPTH};

use super::helpers::{validate_color, validate_finite, validate_range};

pub(crate) fn validate_fractal(errors: &mut Vec<String>, config: &FractalConfig) {
    let fractal = &config.fractal;
    validate_range(
        errors,
        "fractal.depth",
        fractal.depth as u32,
        MIN_DEPTH as u32,
        MAX_DEPTH as u32,
    );
    validate_color(errors, "fractal.color", &fractal.color);
    validate_finite(errors, "fractal.position", &fractal.position);
    validate_finite(errors, "fractal.rotation_degrees", &fractal.rotation_degrees);
}
