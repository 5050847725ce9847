//! Per-frame top-down transform propagation.

use glam::Quat;

use super::types::{parent_index, LevelTable, Part, CHILD_OFFSET, SPIN_RATE_DEG};
use crate::placement::Placement;

/// Rotation of `degrees` about local up.
#[inline]
fn spin(degrees: f32) -> Quat {
    Quat::from_rotation_y(degrees.to_radians())
}

impl LevelTable {
    /// Advance every spin angle by `SPIN_RATE_DEG * dt` and recompute world
    /// transforms, root first, each level strictly after its parent level.
    ///
    /// Non-finite inputs propagate into the results unchecked.
    pub fn propagate(&mut self, dt: f32, placement: &Placement) {
        let delta = SPIN_RATE_DEG * dt;

        let Some((root_level, _)) = self.levels.split_first_mut() else {
            return;
        };
        for root in &mut root_level.parts {
            root.spin_angle += delta;
            root.world_rotation = placement.rotation * root.local_rotation * spin(root.spin_angle);
            root.world_position = placement.position;
        }

        for i in 1..self.levels.len() {
            let (above, below) = self.levels.split_at_mut(i);
            let parents: &[Part] = &above[i - 1].parts;
            let level = &mut below[0];
            let offset = CHILD_OFFSET * level.scale;

            for (j, part) in level.parts.iter_mut().enumerate() {
                let parent = &parents[parent_index(j)];
                part.spin_angle += delta;
                part.world_rotation =
                    parent.world_rotation * part.local_rotation * spin(part.spin_angle);
                part.world_position =
                    parent.world_position + parent.world_rotation * (offset * part.direction);
            }
        }
    }
}
