use crate::constants::*;
use crate::core::color::hex_to_linear;
use crate::core::model::ModelMesh;
use crate::core::slot::{Release, ResourceSlot};
use crate::core::WorldBox;
use glam::{Mat4, Vec3};
use web_sys as web;

mod grid;
mod helpers;
mod post;
mod scene;
mod targets;

use grid::{create_grid_resources, GridResources, GridUniforms};
use post::PostBindGroups;
use scene::{CargoBuffers, ObjectUniforms, SceneResources, TruckBuffers};
use targets::{RenderTargets, HDR_FORMAT};

/// Everything the renderer needs from the frame loop for one frame.
pub struct FrameParams {
    pub view_proj: Mat4,
    pub eye: Vec3,
    pub cargo_model: Mat4,
    pub cargo_color: [f32; 3],
    pub truck_model: Mat4,
    pub grid_rotation: f32,
}

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,

    scene: SceneResources,
    grid: GridResources,
    // Post-processing resources
    targets: RenderTargets,
    linear_sampler: wgpu::Sampler,
    post: post::PostResources,
    post_groups: PostBindGroups,

    // Geometry; the cargo buffers follow the selected trailer
    cargo: ResourceSlot<WorldBox, CargoBuffers>,
    truck: Option<TruckBuffers>,

    width: u32,
    height: u32,
    clear_color: wgpu::Color,
    time_accum: f32,
}

impl<'a> GpuState<'a> {
    pub async fn new(canvas: &'a web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Use default limits on web to avoid passing unknown fields to older WebGPU impls
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let targets = RenderTargets::new(&device, width, height);
        let scene = scene::create_scene_resources(&device, HDR_FORMAT);
        let grid = create_grid_resources(&device, HDR_FORMAT);

        let post_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("post_shader"),
            source: wgpu::ShaderSource::Wgsl(crate::core::POST_WGSL.into()),
        });
        let linear_sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("linear_sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });
        let post = post::create_post_resources(&device, &post_shader, HDR_FORMAT, format);
        let post_groups = post::create_bind_groups(
            &device,
            &post,
            &linear_sampler,
            &targets.hdr_view,
            &targets.bloom_a_view,
            &targets.bloom_b_view,
        );

        let bg = hex_to_linear(BACKGROUND_HEX);
        log::info!("[render] WebGPU ready {}x{} format={:?}", width, height, format);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            scene,
            grid,
            targets,
            linear_sampler,
            post,
            post_groups,
            cargo: ResourceSlot::empty(),
            truck: None,
            width,
            height,
            clear_color: wgpu::Color {
                r: bg[0] as f64,
                g: bg[1] as f64,
                b: bg[2] as f64,
                a: 1.0,
            },
            time_accum: 0.0,
        })
    }

    /// Make sure the cargo buffers match `world_box`; stale buffers are destroyed first.
    pub fn set_cargo_box(&mut self, world_box: WorldBox) {
        let device = &self.device;
        self.cargo
            .ensure(world_box, |b| CargoBuffers::new(device, &b));
    }

    pub fn set_truck_mesh(&mut self, mesh: &ModelMesh) {
        if let Some(mut old) = self.truck.take() {
            old.release();
        }
        self.truck = Some(TruckBuffers::new(&self.device, mesh));
        log::info!("[render] truck uploaded: {} triangles", mesh.triangle_count());
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);

            // Recreate offscreen render targets and dependent bind groups
            self.targets.recreate(&self.device, width, height);
            self.post_groups = post::create_bind_groups(
                &self.device,
                &self.post,
                &self.linear_sampler,
                &self.targets.hdr_view,
                &self.targets.bloom_a_view,
                &self.targets.bloom_b_view,
            );
        }
    }

    fn write_frame_uniforms(&self, p: &FrameParams) {
        let light_dir = Vec3::from_array(DIRECTIONAL_POSITION).normalize();
        let u = scene::scene_uniforms(
            p.view_proj,
            p.eye,
            FOG_DENSITY,
            hex_to_linear(FOG_HEX),
            AMBIENT_INTENSITY,
            light_dir,
            DIRECTIONAL_INTENSITY,
        );
        self.queue
            .write_buffer(&self.scene.camera_buffer, 0, bytemuck::bytes_of(&u));

        // truck colours live in its vertices
        self.scene.truck.write(
            &self.queue,
            &ObjectUniforms::new(p.truck_model, [1.0; 3], 1.0, true, 0.0),
        );
        self.scene.cargo.write(
            &self.queue,
            &ObjectUniforms::new(p.cargo_model, p.cargo_color, BOX_OPACITY, true, 0.0),
        );
        self.scene.edges.write(
            &self.queue,
            &ObjectUniforms::new(p.cargo_model, p.cargo_color, 1.0, false, EDGE_EMISSIVE),
        );

        let cell = hex_to_linear(GRID_CELL_HEX);
        let section = hex_to_linear(GRID_SECTION_HEX);
        let g = GridUniforms {
            view_proj: p.view_proj.to_cols_array_2d(),
            eye: [p.eye.x, p.eye.y, p.eye.z, p.grid_rotation],
            cell_color: [cell[0], cell[1], cell[2], GRID_CELL_SIZE],
            section_color: [section[0], section[1], section[2], GRID_SECTION_SIZE],
            params: [
                GRID_FADE_DISTANCE,
                GRID_FADE_DISTANCE,
                GRID_CELL_THICKNESS,
                GRID_SECTION_THICKNESS,
            ],
        };
        self.queue
            .write_buffer(&self.grid.uniform_buffer, 0, bytemuck::bytes_of(&g));

        post::write_post_uniforms(
            &self.queue,
            &self.post,
            [self.width as f32 / 2.0, self.height as f32 / 2.0],
            self.time_accum,
        );
    }

    pub fn render(&mut self, dt_sec: f32, params: &FrameParams) -> Result<(), wgpu::SurfaceError> {
        self.time_accum += dt_sec.max(0.0);
        self.write_frame_uniforms(params);

        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &self.targets.hdr_view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.targets.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            // Opaque truck first so it occludes the grid and the translucent box
            rpass.set_bind_group(0, &self.scene.camera_bind_group, &[]);
            if let Some(truck) = &self.truck {
                rpass.set_pipeline(&self.scene.opaque_pipeline);
                rpass.set_bind_group(1, &self.scene.truck.bind_group, &[]);
                rpass.set_vertex_buffer(0, truck.vertices.slice(..));
                rpass.draw(0..truck.vertex_count, 0..1);
            }

            rpass.set_pipeline(&self.grid.pipeline);
            rpass.set_bind_group(0, &self.grid.bind_group, &[]);
            rpass.draw(0..6, 0..1);

            if let Some(cargo) = self.cargo.get() {
                rpass.set_bind_group(0, &self.scene.camera_bind_group, &[]);
                rpass.set_pipeline(&self.scene.translucent_pipeline);
                rpass.set_bind_group(1, &self.scene.cargo.bind_group, &[]);
                rpass.set_vertex_buffer(0, cargo.vertices.slice(..));
                rpass.set_index_buffer(cargo.indices.slice(..), wgpu::IndexFormat::Uint16);
                rpass.draw_indexed(0..cargo.index_count, 0, 0..1);

                rpass.set_pipeline(&self.scene.line_pipeline);
                rpass.set_bind_group(1, &self.scene.edges.bind_group, &[]);
                rpass.set_vertex_buffer(0, cargo.edges.slice(..));
                rpass.draw(0..cargo.edge_vertex_count, 0..1);
            }
        }

        // Bright pass -> bloom_a, blur h -> bloom_b, blur v -> bloom_a
        post::blit(
            &mut encoder,
            "bright_pass",
            &self.targets.bloom_a_view,
            wgpu::Color::BLACK,
            &self.post.bright_pipeline,
            &self.post_groups.from_hdr,
            None,
        );
        post::blit(
            &mut encoder,
            "blur_h",
            &self.targets.bloom_b_view,
            wgpu::Color::BLACK,
            &self.post.blur_pipeline,
            &self.post_groups.from_bloom_a,
            None,
        );
        post::blit(
            &mut encoder,
            "blur_v",
            &self.targets.bloom_a_view,
            wgpu::Color::BLACK,
            &self.post.blur_pipeline,
            &self.post_groups.from_bloom_b,
            None,
        );
        // Composite to swapchain
        post::blit(
            &mut encoder,
            "composite",
            &view,
            self.clear_color,
            &self.post.composite_pipeline,
            &self.post_groups.from_hdr,
            Some(&self.post_groups.bloom_a_only),
        );

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}

impl<'a> Drop for GpuState<'a> {
    fn drop(&mut self) {
        self.cargo.clear();
        if let Some(mut truck) = self.truck.take() {
            truck.release();
        }
        self.targets.destroy();
        log::debug!("[render] GPU resources released");
    }
}
