//! Full configuration validation.
//!
//! Validates numeric ranges, hex colors, and finite vectors. Each section
//! has its own submodule; this orchestrator calls them all and collects
//! errors into a single `ConfigError`.

mod fractal;
mod graph;
mod helpers;
mod logging;
mod window;


use crate::schema::FractalConfig;
use fractal_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &FractalConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    fractal::validate_fractal(&mut errors, config);
    graph::validate_graph(&mut errors, config);
    window::validate_window(&mut errors, config);
    window::validate_camera(&mut errors, config);
    window::validate_background(&mut errors, config);
    logging::validate_logging(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
