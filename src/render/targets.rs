use super::helpers;
use wgpu;

pub const HDR_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba16Float;

/// Offscreen targets for the scene and the bloom chain.
///
/// - `hdr_*` hold the scene colour in Rgba16Float for post-processing.
/// - `depth_*` back the scene pass at full resolution.
/// - `bloom_*` are half-res ping-pong buffers used for bright-pass and blur.
///
/// Old textures are destroyed as soon as their replacements exist.
pub(crate) struct RenderTargets {
    pub(crate) hdr_tex: wgpu::Texture,
    pub(crate) hdr_view: wgpu::TextureView,
    pub(crate) depth_tex: wgpu::Texture,
    pub(crate) depth_view: wgpu::TextureView,
    pub(crate) bloom_a: wgpu::Texture,
    pub(crate) bloom_a_view: wgpu::TextureView,
    pub(crate) bloom_b: wgpu::Texture,
    pub(crate) bloom_b_view: wgpu::TextureView,
}

#[inline]
fn bloom_size(width: u32, height: u32) -> (u32, u32) {
    ((width.max(1) / 2).max(1), (height.max(1) / 2).max(1))
}

fn sampled_target(
    device: &wgpu::Device,
    label: &str,
    width: u32,
    height: u32,
) -> (wgpu::Texture, wgpu::TextureView) {
    helpers::create_color_texture(
        device,
        label,
        width,
        height,
        HDR_FORMAT,
        wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::TEXTURE_BINDING,
    )
}

impl RenderTargets {
    pub(crate) fn new(device: &wgpu::Device, width: u32, height: u32) -> Self {
        let (hdr_tex, hdr_view) = sampled_target(device, "hdr_tex", width, height);
        let (depth_tex, depth_view) = helpers::create_depth_texture(device, width, height);
        let (bw, bh) = bloom_size(width, height);
        let (bloom_a, bloom_a_view) = sampled_target(device, "bloom_a", bw, bh);
        let (bloom_b, bloom_b_view) = sampled_target(device, "bloom_b", bw, bh);
        Self {
            hdr_tex,
            hdr_view,
            depth_tex,
            depth_view,
            bloom_a,
            bloom_a_view,
            bloom_b,
            bloom_b_view,
        }
    }

    pub(crate) fn recreate(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        let fresh = Self::new(device, width, height);
        let old = std::mem::replace(self, fresh);
        old.destroy();
    }

    pub(crate) fn destroy(&self) {
        self.hdr_tex.destroy();
        self.depth_tex.destroy();
        self.bloom_a.destroy();
        self.bloom_b.destroy();
    }
}
