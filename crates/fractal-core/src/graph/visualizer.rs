//! Graph point cloud drawn as one instanced batch.

use fractal_common::FractalError;
use glam::{Quat, Vec3};
use tracing::{error, info};

use super::animator::GraphAnimator;
use crate::instancing::{
    Bounds, DrawCall, DrawStats, InstanceBackend, InstanceTransform, InstancedDraw,
};

const BUFFER_LABEL: &str = "graph instances";

struct ActiveGraph<B> {
    buffer: B,
    points: Vec<InstanceTransform>,
}

/// `resolution x resolution` points sampled from the animator each frame.
pub struct GraphVisualizer<B, R> {
    resolution: u32,
    offset: Vec3,
    animator: GraphAnimator,
    resource: R,
    elapsed: f32,
    stats: DrawStats,
    active: Option<ActiveGraph<B>>,
}

impl<B, R> GraphVisualizer<B, R> {
    /// Create an inactive visualizer. `resolution` is raised to at least 1.
    pub fn new(resolution: u32, offset: Vec3, animator: GraphAnimator, resource: R) -> Self {
        Self {
            resolution: resolution.max(1),
            offset,
            animator,
            resource,
            elapsed: 0.0,
            stats: DrawStats::default(),
            active: None,
        }
    }

    pub fn enable<K>(&mut self, backend: &mut K) -> Result<(), FractalError>
    where
        K: InstanceBackend<Buffer = B>,
    {
        if self.active.is_some() {
            return Ok(());
        }

        let count = self.point_count();
        let buffer = backend
            .create_instance_buffer(BUFFER_LABEL, 0, count)
            .map_err(|e| {
                error!(resolution = self.resolution, "graph activation failed: {e}");
                FractalError::from(e)
            })?;

        info!(resolution = self.resolution, points = count, "graph enabled");
        self.active = Some(ActiveGraph {
            buffer,
            points: Vec::with_capacity(count),
        });
        Ok(())
    }

    pub fn disable<K>(&mut self, backend: &mut K)
    where
        K: InstanceBackend<Buffer = B>,
    {
        if let Some(active) = self.active.take() {
            backend.release_instance_buffer(active.buffer);
            self.stats = DrawStats::default();
            info!("graph disabled");
        }
    }

    /// Change grid resolution, rebuilding the buffer when active.
    pub fn set_resolution<K>(&mut self, resolution: u32, backend: &mut K) -> Result<(), FractalError>
    where
        K: InstanceBackend<Buffer = B>,
    {
        let resolution = resolution.max(1);
        if resolution == self.resolution {
            return Ok(());
        }
        self.resolution = resolution;
        if self.active.is_some() {
            self.disable(backend);
            self.enable(backend)?;
        }
        Ok(())
    }

    /// Advance the animation, resample every point, and upload.
    pub fn tick<K>(&mut self, dt: f32, backend: &mut K)
    where
        K: InstanceBackend<Buffer = B>,
    {
        let Some(active) = &mut self.active else {
            return;
        };

        self.animator.advance(dt);
        self.elapsed += dt;

        let res = self.resolution;
        let step = 2.0 / res as f32;
        let t = self.elapsed;

        active.points.clear();
        for z in 0..res {
            let v = (z as f32 + 0.5) * step - 1.0;
            for x in 0..res {
                let u = (x as f32 + 0.5) * step - 1.0;
                let p = self.animator.sample(u, v, t);
                active
                    .points
                    .push(InstanceTransform::new(self.offset + p, Quat::IDENTITY, step));
            }
        }

        backend.write_instances(&active.buffer, &active.points);
        self.stats.instances = active.points.len() as u64;
        self.stats.bytes_uploaded = active.points.len() as u64 * InstanceTransform::SIZE;
    }

    pub fn draw<D>(&mut self, target: &mut D)
    where
        D: InstancedDraw<R, B>,
    {
        let bounds = self.bounds();
        if let Some(active) = &self.active {
            target.draw_instanced(DrawCall {
                resource: &self.resource,
                buffer: &active.buffer,
                instance_count: self.resolution * self.resolution,
                bounds,
                label: BUFFER_LABEL,
            });
            self.stats.draw_calls = 1;
        }
    }

    /// Grid spacing and point scale: `2 / resolution`.
    pub fn step(&self) -> f32 {
        2.0 / self.resolution as f32
    }

    /// Box around the offset covering every function at any time.
    pub fn bounds(&self) -> Bounds {
        Bounds::cube(self.offset, 1.0 + self.step() * 0.5)
    }

    pub fn point_count(&self) -> usize {
        (self.resolution * self.resolution) as usize
    }

    pub fn resolution(&self) -> u32 {
        self.resolution
    }

    pub fn animator(&self) -> &GraphAnimator {
        &self.animator
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    pub fn stats(&self) -> DrawStats {
        self.stats
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{GraphFunction, TransitionMode};
    use crate::testing::{RecordedBuffer, RecordingBackend, RecordingTarget};

    fn visualizer(resolution: u32) -> GraphVisualizer<RecordedBuffer, &'static str> {
        let animator = GraphAnimator::new(GraphFunction::Wave, TransitionMode::Cycle, 1.0, 1.0)
            .with_seed(1);
        GraphVisualizer::new(resolution, Vec3::new(3.0, 0.0, 0.0), animator, "point")
    }

    #[test]
    fn enable_allocates_one_buffer_for_the_grid() {
        let mut backend = RecordingBackend::default();
        let mut graph = visualizer(10);
        graph.enable(&mut backend).unwrap();
        assert_eq!(backend.live_capacities(), vec![100]);

        graph.disable(&mut backend);
        assert_eq!(backend.live_count(), 0);
    }

    #[test]
    fn tick_samples_cell_centers() {
        let mut backend = RecordingBackend::default();
        let mut graph = visualizer(10);
        graph.enable(&mut backend).unwrap();
        graph.tick(0.0, &mut backend);

        let points = &backend.writes[0].instances;
        assert_eq!(points.len(), 100);

        let step = 0.2;
        let first = points[0].translation();
        assert!((first.x - (3.0 + 0.5 * step - 1.0)).abs() < 1e-5);
        assert!((first.z - (0.5 * step - 1.0)).abs() < 1e-5);
        // x varies fastest
        let second = points[1].translation();
        assert!((second.x - first.x - step).abs() < 1e-5);
        assert!((second.z - first.z).abs() < 1e-5);
        assert!((points[0].model[0][0] - step).abs() < 1e-6);
        graph.disable(&mut backend);
    }

    #[test]
    fn every_point_lies_inside_bounds() {
        let mut backend = RecordingBackend::default();
        let mut graph = visualizer(20);
        graph.enable(&mut backend).unwrap();

        for _ in 0..12 {
            graph.tick(0.45, &mut backend);
        }
        let bounds = graph.bounds();
        for write in &backend.writes {
            for p in &write.instances {
                assert!(bounds.contains(p.translation()));
            }
        }
        graph.disable(&mut backend);
    }

    #[test]
    fn draw_issues_single_call() {
        let mut backend = RecordingBackend::default();
        let mut target: RecordingTarget<&str> = RecordingTarget::default();
        let mut graph = visualizer(16);
        graph.enable(&mut backend).unwrap();
        graph.tick(0.016, &mut backend);
        graph.draw(&mut target);

        assert_eq!(target.calls.len(), 1);
        assert_eq!(target.calls[0].instance_count, 256);
        assert_eq!(target.calls[0].resource, "point");
        assert_eq!(target.calls[0].bounds.center, Vec3::new(3.0, 0.0, 0.0));
        assert_eq!(graph.stats().draw_calls, 1);
        graph.disable(&mut backend);
    }

    #[test]
    fn inactive_graph_does_nothing() {
        let mut backend = RecordingBackend::default();
        let mut target: RecordingTarget<&str> = RecordingTarget::default();
        let mut graph = visualizer(16);
        graph.tick(1.0, &mut backend);
        graph.draw(&mut target);
        assert!(backend.writes.is_empty());
        assert!(target.calls.is_empty());
        assert_eq!(graph.animator().current(), GraphFunction::Wave);
    }

    #[test]
    fn resolution_change_rebuilds_buffer() {
        let mut backend = RecordingBackend::default();
        let mut graph = visualizer(10);
        graph.enable(&mut backend).unwrap();

        graph.set_resolution(25, &mut backend).unwrap();

        assert!(graph.is_active());
        assert_eq!(backend.released, 1);
        assert_eq!(backend.live_capacities(), vec![625]);
        graph.disable(&mut backend);
    }

    #[test]
    fn failed_enable_stays_inactive() {
        let mut backend = RecordingBackend::failing_at(0);
        let mut graph = visualizer(10);
        assert!(graph.enable(&mut backend).is_err());
        assert!(!graph.is_active());
        assert_eq!(backend.live_count(), 0);
    }
}
