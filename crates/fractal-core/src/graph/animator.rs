//! Timed switching and morphing between graph functions.

use glam::Vec3;
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::functions::{morph, GraphFunction};

/// How the next function is picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransitionMode {
    #[default]
    Cycle,
    Random,
}

/// Shows each function for `function_duration` seconds, then morphs to
/// the next one over `transition_duration` seconds.
#[derive(Debug, Clone)]
pub struct GraphAnimator {
    function: GraphFunction,
    transition_from: Option<GraphFunction>,
    mode: TransitionMode,
    function_duration: f32,
    transition_duration: f32,
    duration: f32,
    rng: StdRng,
}

impl GraphAnimator {
    /// Negative durations are treated as zero.
    pub fn new(
        function: GraphFunction,
        mode: TransitionMode,
        function_duration: f32,
        transition_duration: f32,
    ) -> Self {
        Self {
            function,
            transition_from: None,
            mode,
            function_duration: function_duration.max(0.0),
            transition_duration: transition_duration.max(0.0),
            duration: 0.0,
            rng: StdRng::from_entropy(),
        }
    }

    /// Replace the random source with a seeded one.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn advance(&mut self, dt: f32) {
        self.duration += dt;

        if self.transition_from.is_some() {
            if self.duration >= self.transition_duration {
                self.duration -= self.transition_duration;
                self.transition_from = None;
            }
        } else if self.duration >= self.function_duration {
            self.duration -= self.function_duration;
            let from = self.function;
            self.transition_from = Some(from);
            self.function = match self.mode {
                TransitionMode::Cycle => from.next(),
                TransitionMode::Random => from.random_other(&mut self.rng),
            };
            tracing::debug!("graph morphing {} -> {}", from.name(), self.function.name());
        }
    }

    /// The function being shown, or morphed towards.
    pub fn current(&self) -> GraphFunction {
        self.function
    }

    pub fn mode(&self) -> TransitionMode {
        self.mode
    }

    pub fn is_transitioning(&self) -> bool {
        self.transition_from.is_some()
    }

    /// Fraction of the running transition, 1 when it has zero length.
    pub fn progress(&self) -> f32 {
        if self.transition_duration > 0.0 {
            self.duration / self.transition_duration
        } else {
            1.0
        }
    }

    /// Position of grid point `(u, v)` at time `t`.
    pub fn sample(&self, u: f32, v: f32, t: f32) -> Vec3 {
        match self.transition_from {
            Some(from) => morph(u, v, t, from, self.function, self.progress()),
            None => self.function.evaluate(u, v, t),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
