//! Function graph section validation.

use crate::schema::FractalConfig;

use super::helpers::{validate_color, validate_finite, validate_range, validate_range_f64};

/// Longest accepted function or transition duration, in seconds.
const MAX_DURATION_SECS: f64 = 3600.0;

pub(crate) fn validate_graph(errors: &mut Vec<String>, config: &FractalConfig) {
    let graph = &config.graph;
    validate_range(errors, "graph.resolution", graph.resolution, 10, 200);
    validate_range_f64(
        errors,
        "graph.function_duration",
        graph.function_duration as f64,
        0.0,
        MAX_DURATION_SECS,
    );
    validate_range_f64(
        errors,
        "graph.transition_duration",
        graph.transition_duration as f64,
        0.0,
        MAX_DURATION_SECS,
    );
    validate_finite(errors, "graph.position", &graph.position);
    validate_color(errors, "graph.color", &graph.color);
}
