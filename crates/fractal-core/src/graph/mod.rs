//! Point-grid graph of animated analytic surfaces.
//!
//! Samples one of five displacement functions over a square grid every
//! frame, morphing smoothly between functions on a timer, and draws the
//! points as a single instanced batch.

mod animator;
mod functions;
mod visualizer;

pub use animator::*;
pub use functions::*;
pub use visualizer::*;
