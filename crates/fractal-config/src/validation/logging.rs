//! Logging section validation.

use crate::schema::FractalConfig;

use super::helpers::validate_range;

pub(crate) fn validate_logging(errors: &mut Vec<String>, config: &FractalConfig) {
    validate_range(
        errors,
        "logging.fps_interval_secs",
        config.logging.fps_interval_secs,
        0,
        3600,
    );
}
