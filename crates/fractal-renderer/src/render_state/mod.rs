mod helpers;
mod state;

pub use helpers::{graph_function, transition_mode};
pub use state::*;
