//! One-time construction of the level table.

use super::types::{sibling_slot, Depth, Level, LevelTable, Part, BRANCHING, SCALE_FALLOFF};

/// Uniform scale of level `level`: `0.5^level`.
pub fn level_scale(level: usize) -> f32 {
    SCALE_FALLOFF.powi(level as i32)
}

impl LevelTable {
    /// Allocate and seed every level for `depth`.
    ///
    /// Level `i` holds `5^i` parts with slot constants repeating every five
    /// indices. Parent state is not needed; the same depth always yields an
    /// identical table.
    pub fn build(depth: Depth) -> Self {
        let levels = (0..depth.levels())
            .map(|i| {
                let size = BRANCHING.pow(i as u32);
                Level {
                    parts: (0..size).map(|j| Part::for_slot(sibling_slot(j))).collect(),
                    scale: level_scale(i),
                }
            })
            .collect();

        Self { depth, levels }
    }
}
