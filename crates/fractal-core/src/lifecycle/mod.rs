//! Enable/disable state machine owning the level table and its buffers.

mod controller;

#[cfg(test)]
mod tests;

pub use controller::*;
