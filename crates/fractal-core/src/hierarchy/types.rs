//! Level table, part state, and hierarchy constants.

use glam::{Quat, Vec3};
use std::f32::consts::FRAC_PI_2;

/// Children per part.
pub const BRANCHING: usize = 5;
/// Spin rate applied to every part, in degrees per second.
pub const SPIN_RATE_DEG: f32 = 22.5;
/// Child offset from its parent, in units of the child's level scale.
pub const CHILD_OFFSET: f32 = 1.5;
/// Scale ratio between a level and the one above it.
pub const SCALE_FALLOFF: f32 = 0.5;

/// Offset direction for each sibling slot: up, right, left, forward, back.
pub const SLOT_DIRECTIONS: [Vec3; BRANCHING] = [Vec3::Y, Vec3::X, Vec3::NEG_X, Vec3::Z, Vec3::NEG_Z];

/// Local orientation for a sibling slot.
///
/// Rotates local up onto the slot's direction, so the child grows away
/// from its parent.
pub fn slot_rotation(slot: usize) -> Quat {
    match slot % BRANCHING {
        0 => Quat::IDENTITY,
        1 => Quat::from_rotation_z(-FRAC_PI_2),
        2 => Quat::from_rotation_z(FRAC_PI_2),
        3 => Quat::from_rotation_x(FRAC_PI_2),
        _ => Quat::from_rotation_x(-FRAC_PI_2),
    }
}

/// Index of a part's parent in the level above.
#[inline]
pub fn parent_index(index: usize) -> usize {
    index / BRANCHING
}

/// Sibling slot (0-4) of a part within its group of five.
#[inline]
pub fn sibling_slot(index: usize) -> usize {
    index % BRANCHING
}

/// Validated hierarchy depth in `[1, 8]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Depth(u8);

impl Depth {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 8;

    /// Returns `None` when `value` is outside `[1, 8]`.
    pub fn new(value: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX).contains(&value).then_some(Self(value))
    }

    /// Clamps `value` into `[1, 8]`.
    pub fn clamped(value: u8) -> Self {
        Self(value.clamp(Self::MIN, Self::MAX))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Number of levels, equal to the depth.
    pub fn levels(self) -> usize {
        self.0 as usize
    }

    /// Total part count across all levels: `(5^depth - 1) / 4`.
    pub fn total_parts(self) -> usize {
        (BRANCHING.pow(self.0 as u32) - 1) / (BRANCHING - 1)
    }
}

impl Default for Depth {
    fn default() -> Self {
        Self(4)
    }
}

impl std::fmt::Display for Depth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One node of the fractal tree.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Part {
    /// Offset direction from the parent, fixed at build time.
    pub direction: Vec3,
    /// Orientation relative to the parent, fixed at build time.
    pub local_rotation: Quat,
    /// Accumulated spin about local up, in degrees.
    pub spin_angle: f32,
    pub world_rotation: Quat,
    pub world_position: Vec3,
}

impl Part {
    /// Fresh part carrying the constants of sibling slot `slot`.
    pub fn for_slot(slot: usize) -> Self {
        Self {
            direction: SLOT_DIRECTIONS[slot % BRANCHING],
            local_rotation: slot_rotation(slot),
            spin_angle: 0.0,
            world_rotation: Quat::IDENTITY,
            world_position: Vec3::ZERO,
        }
    }
}

/// All parts at one depth, sharing a uniform scale.
#[derive(Debug, Clone, PartialEq)]
pub struct Level {
    pub(crate) parts: Vec<Part>,
    pub(crate) scale: f32,
}

impl Level {
    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}

/// Ordered levels `0..depth`, root first.
#[derive(Debug, Clone, PartialEq)]
pub struct LevelTable {
    pub(crate) depth: Depth,
    pub(crate) levels: Vec<Level>,
}

impl LevelTable {
    pub fn depth(&self) -> Depth {
        self.depth
    }

    pub fn levels(&self) -> &[Level] {
        &self.levels
    }

    pub fn level(&self, index: usize) -> Option<&Level> {
        self.levels.get(index)
    }

    /// The single part at level 0.
    pub fn root(&self) -> &Part {
        &self.levels[0].parts[0]
    }

    /// Part counts per level, root first.
    pub fn level_sizes(&self) -> Vec<usize> {
        self.levels.iter().map(Level::len).collect()
    }

    pub fn total_parts(&self) -> usize {
        self.levels.iter().map(Level::len).sum()
    }
}
