//! Shared range-validation helpers used by all domain validators.

use fractal_common::Color;

/// Push an error if `value` is outside `[min, max]` (integer).
pub(crate) fn validate_range(errors: &mut Vec<String>, name: &str, value: u32, min: u32, max: u32) {
    if value < min || value > max {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

/// Push an error if `value` is outside `[min, max]` (float).
///
/// NaN never satisfies the range and is always reported.
pub(crate) fn validate_range_f64(
    errors: &mut Vec<String>,
    name: &str,
    value: f64,
    min: f64,
    max: f64,
) {
    if !(value >= min && value <= max) {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

/// Push an error if `value` is not a `#rrggbb` / `#rrggbbaa` color.
pub(crate) fn validate_color(errors: &mut Vec<String>, name: &str, value: &str) {
    if Color::from_hex(value).is_none() {
        errors.push(format!("{name} = \"{value}\" is not a valid hex color"));
    }
}

/// Push an error if any component is NaN or infinite.
pub(crate) fn validate_finite(errors: &mut Vec<String>, name: &str, value: &[f32]) {
    if value.iter().any(|v| !v.is_finite()) {
        errors.push(format!("{name} = {value:?} must be finite"));
    }
}
