//! Owns one instance buffer per level and drives uploads and draws.

use fractal_common::InstanceError;
use tracing::debug;

use super::backend::{DrawCall, InstanceBackend, InstancedDraw};
use super::types::{Bounds, DrawStats, InstanceTransform};
use crate::hierarchy::LevelTable;

struct LevelBuffer<B> {
    buffer: B,
    label: String,
    capacity: usize,
}

/// Per-level GPU buffers for one level table.
///
/// Every frame each buffer is fully overwritten from its level's world
/// transforms, then drawn with a single instanced call.
pub struct InstanceBufferManager<B> {
    levels: Vec<LevelBuffer<B>>,
    scratch: Vec<InstanceTransform>,
    stats: DrawStats,
}

impl<B> InstanceBufferManager<B> {
    /// Allocate one buffer per level of `table`.
    ///
    /// If any allocation fails, every buffer created so far is released
    /// before the error is returned.
    pub fn allocate<K>(table: &LevelTable, backend: &mut K) -> Result<Self, InstanceError>
    where
        K: InstanceBackend<Buffer = B>,
    {
        let mut levels: Vec<LevelBuffer<B>> = Vec::with_capacity(table.levels().len());

        for (i, level) in table.levels().iter().enumerate() {
            let label = format!("fractal level {i} instances");
            match backend.create_instance_buffer(&label, i, level.len()) {
                Ok(buffer) => {
                    debug!(level = i, instances = level.len(), "allocated instance buffer");
                    levels.push(LevelBuffer {
                        buffer,
                        label,
                        capacity: level.len(),
                    });
                }
                Err(e) => {
                    for allocated in levels.drain(..).rev() {
                        backend.release_instance_buffer(allocated.buffer);
                    }
                    return Err(e);
                }
            }
        }

        let widest = table.levels().last().map_or(0, |l| l.len());
        Ok(Self {
            levels,
            scratch: Vec::with_capacity(widest),
            stats: DrawStats::default(),
        })
    }

    /// Rebuild every level's matrices and overwrite its buffer.
    pub fn upload<K>(&mut self, table: &LevelTable, backend: &mut K)
    where
        K: InstanceBackend<Buffer = B>,
    {
        let mut stats = DrawStats::default();

        for (level, slot) in table.levels().iter().zip(&self.levels) {
            self.scratch.clear();
            self.scratch.extend(level.parts().iter().map(|part| {
                InstanceTransform::new(part.world_position, part.world_rotation, level.scale())
            }));
            debug_assert!(self.scratch.len() <= slot.capacity);
            backend.write_instances(&slot.buffer, &self.scratch);

            stats.instances += self.scratch.len() as u64;
            stats.bytes_uploaded += self.scratch.len() as u64 * InstanceTransform::SIZE;
        }

        self.stats = stats;
    }

    /// Issue exactly one instanced draw per level.
    pub fn draw<R, D>(&mut self, table: &LevelTable, resource: &R, bounds: Bounds, target: &mut D)
    where
        D: InstancedDraw<R, B>,
    {
        let mut draw_calls = 0;
        for (level, slot) in table.levels().iter().zip(&self.levels) {
            target.draw_instanced(DrawCall {
                resource,
                buffer: &slot.buffer,
                instance_count: level.len() as u32,
                bounds,
                label: &slot.label,
            });
            draw_calls += 1;
        }
        self.stats.draw_calls = draw_calls;
    }

    /// Release every buffer back to the backend.
    pub fn release<K>(self, backend: &mut K)
    where
        K: InstanceBackend<Buffer = B>,
    {
        for slot in self.levels {
            backend.release_instance_buffer(slot.buffer);
        }
    }

    pub fn buffer_count(&self) -> usize {
        self.levels.len()
    }

    pub fn stats(&self) -> DrawStats {
        self.stats
    }
}

// =============================================================================
// Tests
// =============================================================================
