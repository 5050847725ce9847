//! Mesh + material resource handed to the core as an opaque handle.

use std::sync::Arc;

use wgpu::util::DeviceExt;

use super::pipeline::{InstancedPipeline, MaterialUniforms};
use crate::mesh::MeshData;

/// Vertex and index buffers for one mesh.
pub struct MeshBuffers {
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
}

impl MeshBuffers {
    pub fn new(device: &wgpu::Device, mesh: &MeshData, label: &str) -> Self {
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{label} vertices")),
            contents: bytemuck::cast_slice(&mesh.vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{label} indices")),
            contents: bytemuck::cast_slice(&mesh.indices),
            usage: wgpu::BufferUsages::INDEX,
        });

        Self {
            vertex_buffer,
            index_buffer,
            index_count: mesh.indices.len() as u32,
        }
    }

    pub fn index_count(&self) -> u32 {
        self.index_count
    }
}

/// Shared mesh plus a material uniform. Cloning shares the GPU objects.
///
/// The uniform is fixed at creation; the bind group keeps its buffer alive.
#[derive(Clone)]
pub struct MeshMaterial {
    mesh: Arc<MeshBuffers>,
    bind_group: Arc<wgpu::BindGroup>,
}

impl MeshMaterial {
    pub fn new(
        device: &wgpu::Device,
        pipeline: &InstancedPipeline,
        mesh: Arc<MeshBuffers>,
        uniforms: &MaterialUniforms,
        label: &str,
    ) -> Self {
        let uniform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{label} material")),
            contents: bytemuck::bytes_of(uniforms),
            usage: wgpu::BufferUsages::UNIFORM,
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(&format!("{label} material bind group")),
            layout: pipeline.material_layout(),
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        Self {
            mesh,
            bind_group: Arc::new(bind_group),
        }
    }

    /// Bind material (group 1), mesh vertices (slot 0), and indices.
    pub(crate) fn bind(&self, pass: &mut wgpu::RenderPass<'_>) {
        pass.set_bind_group(1, self.bind_group.as_ref(), &[]);
        pass.set_vertex_buffer(0, self.mesh.vertex_buffer.slice(..));
        pass.set_index_buffer(self.mesh.index_buffer.slice(..), wgpu::IndexFormat::Uint16);
    }

    pub fn index_count(&self) -> u32 {
        self.mesh.index_count()
    }
}
