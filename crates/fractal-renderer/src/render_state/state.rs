use std::sync::Arc;
use winit::window::Window;

use fractal_common::FractalError;
use fractal_config::FractalConfig;
use fractal_core::{
    Depth, DrawStats, FractalLifecycle, GraphAnimator, GraphVisualizer, Placement,
};
use glam::Vec3;

use super::helpers::{clear_color, graph_function, log_first_frame, parse_color, transition_mode};
use crate::camera::OrbitCamera;
use crate::gpu::{GpuContext, RendererError};
use crate::instanced::{
    InstancedPipeline, LevelPass, MaterialUniforms, MeshBuffers, MeshMaterial, WgpuInstanceBackend,
};
use crate::mesh::cube_mesh;

pub type FractalState = FractalLifecycle<wgpu::Buffer, MeshMaterial>;
pub type GraphState = GraphVisualizer<wgpu::Buffer, MeshMaterial>;

/// GPU context, instanced pipeline, camera, and the two animated structures.
///
/// The `*_wanted` flags remember what the user asked for, so a suspend
/// (occluded or minimized window) can release every buffer and a resume
/// restores exactly what was running.
pub struct RenderState {
    pub gpu: GpuContext,
    pipeline: InstancedPipeline,
    camera: OrbitCamera,
    fractal: FractalState,
    graph: GraphState,
    placement: Placement,
    clear_color: wgpu::Color,
    fractal_wanted: bool,
    graph_wanted: bool,
}

impl RenderState {
    /// Create a fully initialized render state from a window.
    ///
    /// Structures enabled in `config` are activated immediately; an
    /// activation failure is logged and the structure stays off.
    pub async fn new(window: Arc<Window>, config: &FractalConfig) -> Result<Self, RendererError> {
        let gpu = GpuContext::new(window, config.window.vsync).await?;
        let pipeline = InstancedPipeline::new(&gpu.device, gpu.format());
        let camera = OrbitCamera::from_config(&config.camera, gpu.size.aspect());

        let cube = Arc::new(MeshBuffers::new(&gpu.device, &cube_mesh(), "cube"));

        let fractal_color = parse_color(&config.fractal.color, "fractal.color")?;
        let fractal_material = MeshMaterial::new(
            &gpu.device,
            &pipeline,
            Arc::clone(&cube),
            &MaterialUniforms::flat(fractal_color.to_linear_rgba()),
            "fractal",
        );

        let graph_uniforms = if config.graph.color_by_position {
            MaterialUniforms::by_position(1.0, config.graph.position)
        } else {
            let color = parse_color(&config.graph.color, "graph.color")?;
            MaterialUniforms::flat(color.to_linear_rgba())
        };
        let graph_material = MeshMaterial::new(&gpu.device, &pipeline, cube, &graph_uniforms, "graph");

        let background = parse_color(&config.background.color, "background.color")?;

        let fractal = FractalLifecycle::new(Depth::clamped(config.fractal.depth), fractal_material);
        let animator = GraphAnimator::new(
            graph_function(config.graph.function),
            transition_mode(config.graph.transition_mode),
            config.graph.function_duration,
            config.graph.transition_duration,
        );
        let graph = GraphVisualizer::new(
            config.graph.resolution,
            Vec3::from_array(config.graph.position),
            animator,
            graph_material,
        );

        let mut state = Self {
            gpu,
            pipeline,
            camera,
            fractal,
            graph,
            placement: Placement::from_euler_degrees(
                config.fractal.position,
                config.fractal.rotation_degrees,
            ),
            clear_color: clear_color(background),
            fractal_wanted: config.fractal.enabled,
            graph_wanted: config.graph.enabled,
        };
        state.resume();

        Ok(state)
    }

    /// Handle a window resize by reconfiguring the surface.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.gpu.resize(width, height);
        self.camera.set_aspect(self.gpu.size.aspect());
    }

    pub fn set_fractal_enabled(&mut self, enabled: bool) -> Result<(), FractalError> {
        self.fractal_wanted = enabled;
        let mut backend = WgpuInstanceBackend::new(&self.gpu.device, &self.gpu.queue);
        if enabled {
            self.fractal.enable(&mut backend)
        } else {
            self.fractal.disable(&mut backend);
            Ok(())
        }
    }

    pub fn set_graph_enabled(&mut self, enabled: bool) -> Result<(), FractalError> {
        self.graph_wanted = enabled;
        let mut backend = WgpuInstanceBackend::new(&self.gpu.device, &self.gpu.queue);
        if enabled {
            self.graph.enable(&mut backend)
        } else {
            self.graph.disable(&mut backend);
            Ok(())
        }
    }

    pub fn fractal_wanted(&self) -> bool {
        self.fractal_wanted
    }

    pub fn graph_wanted(&self) -> bool {
        self.graph_wanted
    }

    /// Change fractal depth, rebuilding it if active.
    pub fn set_depth(&mut self, depth: Depth) -> Result<(), FractalError> {
        let mut backend = WgpuInstanceBackend::new(&self.gpu.device, &self.gpu.queue);
        self.fractal.set_depth(depth, &mut backend)
    }

    /// Release every instance buffer, keeping what was enabled.
    pub fn suspend(&mut self) {
        let mut backend = WgpuInstanceBackend::new(&self.gpu.device, &self.gpu.queue);
        self.fractal.disable(&mut backend);
        self.graph.disable(&mut backend);
    }

    /// Re-activate whatever was enabled before [`suspend`](Self::suspend).
    pub fn resume(&mut self) {
        let mut backend = WgpuInstanceBackend::new(&self.gpu.device, &self.gpu.queue);
        if self.fractal_wanted {
            if let Err(e) = self.fractal.enable(&mut backend) {
                tracing::error!("Continuing without fractal: {e}");
            }
        }
        if self.graph_wanted {
            if let Err(e) = self.graph.enable(&mut backend) {
                tracing::error!("Continuing without graph: {e}");
            }
        }
    }

    /// Animate by `dt` seconds, upload instances, and present one frame.
    pub fn render_frame(&mut self, dt: f32) -> Result<(), RendererError> {
        self.camera.update(dt);
        self.pipeline
            .update_camera(&self.gpu.queue, &self.camera.uniforms());

        {
            let mut backend = WgpuInstanceBackend::new(&self.gpu.device, &self.gpu.queue);
            self.fractal.tick(dt, &self.placement, &mut backend);
            self.graph.tick(dt, &mut backend);
        }

        let output = match self.gpu.current_texture() {
            Ok(t) => t,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                tracing::warn!("Surface lost or outdated, reconfiguring");
                self.gpu.reconfigure();
                return Ok(());
            }
            Err(e) => {
                tracing::error!("Failed to get surface texture: {e}");
                return Err(e.into());
            }
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("fractal frame encoder"),
            });

        let frustum = self.camera.frustum();
        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("fractal scene pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: self.gpu.depth_view(),
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            self.pipeline.bind(&mut pass);
            let mut target = LevelPass::new(&mut pass, frustum);
            self.fractal.draw(&mut target);
            self.graph.draw(&mut target);
            tracing::trace!(drawn = target.drawn(), culled = target.culled(), "scene drawn");
        }

        self.gpu.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        log_first_frame(self.gpu.size.width, self.gpu.size.height, self.gpu.format());

        Ok(())
    }

    /// Upload and draw counters for the last frame, both structures combined.
    pub fn stats(&self) -> DrawStats {
        self.fractal.stats().combined(self.graph.stats())
    }

    pub fn fractal(&self) -> &FractalState {
        &self.fractal
    }

    pub fn graph(&self) -> &GraphState {
        &self.graph
    }
}
