//! In-memory backend and draw target that record every call.

use std::collections::BTreeMap;

use fractal_common::InstanceError;

use crate::instancing::{Bounds, DrawCall, InstanceBackend, InstanceTransform, InstancedDraw};

/// Handle returned by [`RecordingBackend`]. Not `Clone`, like a real buffer.
#[derive(Debug, PartialEq, Eq)]
pub struct RecordedBuffer {
    pub id: u64,
    pub capacity: usize,
}

#[derive(Debug, Clone)]
pub struct RecordedWrite {
    pub buffer: u64,
    pub instances: Vec<InstanceTransform>,
}

#[derive(Debug, Default)]
pub struct RecordingBackend {
    next_id: u64,
    live: BTreeMap<u64, usize>,
    fail_at: Option<usize>,
    attempts: usize,
    pub created: usize,
    pub released: usize,
    pub writes: Vec<RecordedWrite>,
}

impl RecordingBackend {
    /// Backend whose `n`-th allocation attempt (0-based) fails once.
    pub fn failing_at(n: usize) -> Self {
        Self {
            fail_at: Some(n),
            ..Self::default()
        }
    }

    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    /// Capacities of live buffers in allocation order.
    pub fn live_capacities(&self) -> Vec<usize> {
        self.live.values().copied().collect()
    }
}

impl InstanceBackend for RecordingBackend {
    type Buffer = RecordedBuffer;

    fn create_instance_buffer(
        &mut self,
        _label: &str,
        slot: usize,
        capacity: usize,
    ) -> Result<RecordedBuffer, InstanceError> {
        let attempt = self.attempts;
        self.attempts += 1;
        if self.fail_at == Some(attempt) {
            return Err(InstanceError::Allocation {
                level: slot,
                reason: "simulated out of memory".into(),
            });
        }

        let id = self.next_id;
        self.next_id += 1;
        self.created += 1;
        self.live.insert(id, capacity);
        Ok(RecordedBuffer { id, capacity })
    }

    fn write_instances(&mut self, buffer: &RecordedBuffer, instances: &[InstanceTransform]) {
        assert!(self.live.contains_key(&buffer.id), "write to released buffer");
        assert!(instances.len() <= buffer.capacity, "write past capacity");
        self.writes.push(RecordedWrite {
            buffer: buffer.id,
            instances: instances.to_vec(),
        });
    }

    fn release_instance_buffer(&mut self, buffer: RecordedBuffer) {
        assert!(self.live.remove(&buffer.id).is_some(), "double release");
        self.released += 1;
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedDraw<R> {
    pub resource: R,
    pub buffer: u64,
    pub instance_count: u32,
    pub bounds: Bounds,
    pub label: String,
}

#[derive(Debug)]
pub struct RecordingTarget<R> {
    pub calls: Vec<RecordedDraw<R>>,
}

impl<R> Default for RecordingTarget<R> {
    fn default() -> Self {
        Self { calls: Vec::new() }
    }
}

impl<R: Clone> InstancedDraw<R, RecordedBuffer> for RecordingTarget<R> {
    fn draw_instanced(&mut self, call: DrawCall<'_, R, RecordedBuffer>) {
        self.calls.push(RecordedDraw {
            resource: call.resource.clone(),
            buffer: call.buffer.id,
            instance_count: call.instance_count,
            bounds: call.bounds,
            label: call.label.to_string(),
        });
    }
}
