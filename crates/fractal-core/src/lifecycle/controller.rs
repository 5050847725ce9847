//! Fractal lifecycle: `Inactive` <-> `Active`, rebuilding on depth change.

use fractal_common::FractalError;
use tracing::{error, info};

use crate::hierarchy::{Depth, LevelTable, CHILD_OFFSET};
use crate::instancing::{Bounds, DrawStats, InstanceBackend, InstanceBufferManager, InstancedDraw};
use crate::placement::Placement;

struct ActiveFractal<B> {
    table: LevelTable,
    buffers: InstanceBufferManager<B>,
}

/// Owns a fractal's level table and per-level buffers while active.
///
/// All transitions are synchronous. While inactive, `tick` and `draw` do
/// nothing and no GPU buffers are held.
pub struct FractalLifecycle<B, R> {
    depth: Depth,
    resource: R,
    active: Option<ActiveFractal<B>>,
}

impl<B, R> FractalLifecycle<B, R> {
    /// Create an inactive controller.
    pub fn new(depth: Depth, resource: R) -> Self {
        Self {
            depth,
            resource,
            active: None,
        }
    }

    /// Build the level table and one buffer per level.
    ///
    /// No-op when already active. On allocation failure nothing is retained
    /// and the controller stays inactive.
    pub fn enable<K>(&mut self, backend: &mut K) -> Result<(), FractalError>
    where
        K: InstanceBackend<Buffer = B>,
    {
        if self.active.is_some() {
            return Ok(());
        }

        let table = LevelTable::build(self.depth);
        let buffers = InstanceBufferManager::allocate(&table, backend).map_err(|e| {
            error!(depth = %self.depth, "fractal activation failed: {e}");
            FractalError::from(e)
        })?;

        info!(
            depth = %self.depth,
            parts = table.total_parts(),
            "fractal enabled"
        );
        self.active = Some(ActiveFractal { table, buffers });
        Ok(())
    }

    /// Release every buffer and discard the level table. No-op when inactive.
    pub fn disable<K>(&mut self, backend: &mut K)
    where
        K: InstanceBackend<Buffer = B>,
    {
        if let Some(active) = self.active.take() {
            active.buffers.release(backend);
            info!("fractal disabled");
        }
    }

    /// Change depth. An active fractal is torn down and rebuilt.
    pub fn set_depth<K>(&mut self, depth: Depth, backend: &mut K) -> Result<(), FractalError>
    where
        K: InstanceBackend<Buffer = B>,
    {
        if depth == self.depth {
            return Ok(());
        }
        info!(from = %self.depth, to = %depth, "fractal depth changed");
        self.depth = depth;
        self.rebuild(backend)
    }

    /// Swap the mesh/material resource. An active fractal is rebuilt.
    pub fn set_resource<K>(&mut self, resource: R, backend: &mut K) -> Result<(), FractalError>
    where
        K: InstanceBackend<Buffer = B>,
    {
        self.resource = resource;
        self.rebuild(backend)
    }

    fn rebuild<K>(&mut self, backend: &mut K) -> Result<(), FractalError>
    where
        K: InstanceBackend<Buffer = B>,
    {
        if self.active.is_none() {
            return Ok(());
        }
        self.disable(backend);
        self.enable(backend)
    }

    /// Advance spin, propagate transforms from `placement`, and upload.
    pub fn tick<K>(&mut self, dt: f32, placement: &Placement, backend: &mut K)
    where
        K: InstanceBackend<Buffer = B>,
    {
        if let Some(active) = &mut self.active {
            active.table.propagate(dt, placement);
            active.buffers.upload(&active.table, backend);
        }
    }

    /// Issue one instanced draw per level.
    pub fn draw<D>(&mut self, target: &mut D)
    where
        D: InstancedDraw<R, B>,
    {
        if let Some(active) = &mut self.active {
            let bounds = Self::bounds_of(&active.table);
            active
                .buffers
                .draw(&active.table, &self.resource, bounds, target);
        }
    }

    /// Culling box: every part of any depth lies within `1.5` of the root.
    fn bounds_of(table: &LevelTable) -> Bounds {
        Bounds::cube(table.root().world_position, CHILD_OFFSET)
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    pub fn depth(&self) -> Depth {
        self.depth
    }

    pub fn resource(&self) -> &R {
        &self.resource
    }

    /// The live level table, if active.
    pub fn table(&self) -> Option<&LevelTable> {
        self.active.as_ref().map(|a| &a.table)
    }

    /// Culling bounds of the last propagated frame, if active.
    pub fn bounds(&self) -> Option<Bounds> {
        self.active.as_ref().map(|a| Self::bounds_of(&a.table))
    }

    pub fn stats(&self) -> DrawStats {
        self.active
            .as_ref()
            .map(|a| a.buffers.stats())
            .unwrap_or_default()
    }
}
