use super::helpers::{self, uniform_layout_entry, MeshPassStyle};
use crate::core::model::ModelMesh;
use crate::core::slot::Release;
use crate::core::{box_edges, box_mesh, MeshVertex, WorldBox};
use glam::{Mat4, Vec3};
use wgpu;
use wgpu::util::DeviceExt;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct SceneUniforms {
    pub(crate) view_proj: [[f32; 4]; 4],
    pub(crate) eye_fog: [f32; 4],
    pub(crate) fog_color: [f32; 4],
    pub(crate) light_dir: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct ObjectUniforms {
    pub(crate) model: [[f32; 4]; 4],
    pub(crate) color: [f32; 4],
    pub(crate) params: [f32; 4],
}

impl ObjectUniforms {
    pub(crate) fn new(model: Mat4, color: [f32; 3], opacity: f32, lit: bool, emissive: f32) -> Self {
        Self {
            model: model.to_cols_array_2d(),
            color: [color[0], color[1], color[2], opacity],
            params: [if lit { 1.0 } else { 0.0 }, emissive, 0.0, 0.0],
        }
    }
}

/// Uniform buffer + bind group for one drawable.
pub(crate) struct ObjectBinding {
    pub(crate) buffer: wgpu::Buffer,
    pub(crate) bind_group: wgpu::BindGroup,
}

impl ObjectBinding {
    fn new(device: &wgpu::Device, layout: &wgpu::BindGroupLayout, label: &str) -> Self {
        let buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(label),
            size: std::mem::size_of::<ObjectUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(label),
            layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: buffer.as_entire_binding(),
            }],
        });
        Self { buffer, bind_group }
    }

    #[inline]
    pub(crate) fn write(&self, queue: &wgpu::Queue, u: &ObjectUniforms) {
        queue.write_buffer(&self.buffer, 0, bytemuck::bytes_of(u));
    }
}

/// Pipelines and per-object bindings of the main scene pass.
pub(crate) struct SceneResources {
    pub(crate) camera_buffer: wgpu::Buffer,
    pub(crate) camera_bind_group: wgpu::BindGroup,
    pub(crate) opaque_pipeline: wgpu::RenderPipeline,
    pub(crate) translucent_pipeline: wgpu::RenderPipeline,
    pub(crate) line_pipeline: wgpu::RenderPipeline,
    pub(crate) truck: ObjectBinding,
    pub(crate) cargo: ObjectBinding,
    pub(crate) edges: ObjectBinding,
}

pub(crate) fn create_scene_resources(
    device: &wgpu::Device,
    color_format: wgpu::TextureFormat,
) -> SceneResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("scene_shader"),
        source: wgpu::ShaderSource::Wgsl(crate::core::SCENE_WGSL.into()),
    });
    let camera_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("scene_camera_bgl"),
        entries: &[uniform_layout_entry(
            0,
            wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
        )],
    });
    let object_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("scene_object_bgl"),
        entries: &[uniform_layout_entry(
            0,
            wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
        )],
    });
    let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("scene_pl"),
        bind_group_layouts: &[&camera_bgl, &object_bgl],
        push_constant_ranges: &[],
    });

    let opaque_pipeline = helpers::make_mesh_pipeline(
        device,
        "scene_opaque",
        &layout,
        &shader,
        color_format,
        MeshPassStyle {
            topology: wgpu::PrimitiveTopology::TriangleList,
            depth_write: true,
            blend: wgpu::BlendState::REPLACE,
        },
    );
    let translucent_pipeline = helpers::make_mesh_pipeline(
        device,
        "scene_translucent",
        &layout,
        &shader,
        color_format,
        MeshPassStyle {
            topology: wgpu::PrimitiveTopology::TriangleList,
            depth_write: false,
            blend: wgpu::BlendState::ALPHA_BLENDING,
        },
    );
    let line_pipeline = helpers::make_mesh_pipeline(
        device,
        "scene_lines",
        &layout,
        &shader,
        color_format,
        MeshPassStyle {
            topology: wgpu::PrimitiveTopology::LineList,
            depth_write: false,
            blend: wgpu::BlendState::ALPHA_BLENDING,
        },
    );

    let camera_buffer = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("scene_camera"),
        size: std::mem::size_of::<SceneUniforms>() as u64,
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });
    let camera_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("scene_camera_bg"),
        layout: &camera_bgl,
        entries: &[wgpu::BindGroupEntry {
            binding: 0,
            resource: camera_buffer.as_entire_binding(),
        }],
    });

    SceneResources {
        camera_buffer,
        camera_bind_group,
        opaque_pipeline,
        translucent_pipeline,
        line_pipeline,
        truck: ObjectBinding::new(device, &object_bgl, "truck_object"),
        cargo: ObjectBinding::new(device, &object_bgl, "cargo_object"),
        edges: ObjectBinding::new(device, &object_bgl, "edges_object"),
    }
}

pub(crate) fn scene_uniforms(
    view_proj: Mat4,
    eye: Vec3,
    fog_density: f32,
    fog_color: [f32; 3],
    ambient: f32,
    light_dir: Vec3,
    light_intensity: f32,
) -> SceneUniforms {
    SceneUniforms {
        view_proj: view_proj.to_cols_array_2d(),
        eye_fog: [eye.x, eye.y, eye.z, fog_density],
        fog_color: [fog_color[0], fog_color[1], fog_color[2], ambient],
        light_dir: [light_dir.x, light_dir.y, light_dir.z, light_intensity],
    }
}

/// Vertex/index buffers of the cargo box and its outline for one set of dimensions.
pub(crate) struct CargoBuffers {
    pub(crate) vertices: wgpu::Buffer,
    pub(crate) indices: wgpu::Buffer,
    pub(crate) index_count: u32,
    pub(crate) edges: wgpu::Buffer,
    pub(crate) edge_vertex_count: u32,
}

impl CargoBuffers {
    pub(crate) fn new(device: &wgpu::Device, world_box: &WorldBox) -> Self {
        let (verts, idx) = box_mesh(world_box);
        let lines = box_edges(world_box);
        log::debug!(
            "[render] cargo box rebuilt half=({:.3},{:.3},{:.3})",
            world_box.half_width,
            world_box.half_height,
            world_box.half_length
        );
        Self {
            vertices: device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("cargo_vertices"),
                contents: bytemuck::cast_slice(&verts),
                usage: wgpu::BufferUsages::VERTEX,
            }),
            indices: device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("cargo_indices"),
                contents: bytemuck::cast_slice(&idx),
                usage: wgpu::BufferUsages::INDEX,
            }),
            index_count: idx.len() as u32,
            edges: device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("cargo_edges"),
                contents: bytemuck::cast_slice(&lines),
                usage: wgpu::BufferUsages::VERTEX,
            }),
            edge_vertex_count: lines.len() as u32,
        }
    }
}

impl Release for CargoBuffers {
    fn release(&mut self) {
        self.vertices.destroy();
        self.indices.destroy();
        self.edges.destroy();
    }
}

/// Flattened truck triangles, uploaded once.
pub(crate) struct TruckBuffers {
    pub(crate) vertices: wgpu::Buffer,
    pub(crate) vertex_count: u32,
}

impl TruckBuffers {
    pub(crate) fn new(device: &wgpu::Device, mesh: &ModelMesh) -> Self {
        let verts: &[MeshVertex] = &mesh.vertices;
        Self {
            vertices: device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("truck_vertices"),
                contents: bytemuck::cast_slice(verts),
                usage: wgpu::BufferUsages::VERTEX,
            }),
            vertex_count: verts.len() as u32,
        }
    }
}

impl Release for TruckBuffers {
    fn release(&mut self) {
        self.vertices.destroy();
    }
}
