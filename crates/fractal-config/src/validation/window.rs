//! Window, camera, and background validation.

use crate::schema::FractalConfig;

use super::helpers::{validate_color, validate_range, validate_range_f64};

pub(crate) fn validate_window(errors: &mut Vec<String>, config: &FractalConfig) {
    validate_range(errors, "window.width", config.window.width, 320, 7680);
    validate_range(errors, "window.height", config.window.height, 240, 4320);
    if config.window.title.trim().is_empty() {
        errors.push("window.title must not be empty".into());
    }
}

pub(crate) fn validate_camera(errors: &mut Vec<String>, config: &FractalConfig) {
    let camera = &config.camera;
    validate_range_f64(errors, "camera.distance", camera.distance as f64, 0.5, 100.0);
    validate_range_f64(
        errors,
        "camera.fov_degrees",
        camera.fov_degrees as f64,
        10.0,
        120.0,
    );
    validate_range_f64(
        errors,
        "camera.pitch_degrees",
        camera.pitch_degrees as f64,
        -89.0,
        89.0,
    );
    validate_range_f64(
        errors,
        "camera.orbit_speed",
        camera.orbit_speed as f64,
        -360.0,
        360.0,
    );
    if !camera.yaw_degrees.is_finite() {
        errors.push(format!(
            "camera.yaw_degrees = {} must be finite",
            camera.yaw_degrees
        ));
    }
}

pub(crate) fn validate_background(errors: &mut Vec<String>, config: &FractalConfig) {
    validate_color(errors, "background.color", &config.background.color);
}
