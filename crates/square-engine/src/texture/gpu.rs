use wgpu::util::{DeviceExt, TextureDataOrder};

use super::RgbaImage;

/// Sampling state for a 2D texture.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct SamplerSettings {
    pub address_mode: wgpu::AddressMode,
    pub filter: wgpu::FilterMode,
}

impl Default for SamplerSettings {
    /// Clamp-to-edge wrapping, linear min/mag filtering.
    fn default() -> Self {
        Self {
            address_mode: wgpu::AddressMode::ClampToEdge,
            filter: wgpu::FilterMode::Linear,
        }
    }
}

/// Immutable RGBA8 texture with its view and sampler.
pub struct Texture2d {
    texture: wgpu::Texture,
    view: wgpu::TextureView,
    sampler: wgpu::Sampler,
}

impl Texture2d {
    /// Uploads `image` once; the texture is never written again.
    pub fn upload(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        image: &RgbaImage,
        sampler: SamplerSettings,
        label: &str,
    ) -> Self {
        let texture = device.create_texture_with_data(
            queue,
            &wgpu::TextureDescriptor {
                label: Some(label),
                size: wgpu::Extent3d {
                    width: image.width,
                    height: image.height,
                    depth_or_array_layers: 1,
                },
                mip_level_count: 1,
                sample_count: 1,
                dimension: wgpu::TextureDimension::D2,
                format: wgpu::TextureFormat::Rgba8Unorm,
                usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
                view_formats: &[],
            },
            TextureDataOrder::LayerMajor,
            &image.pixels,
        );

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some(label),
            address_mode_u: sampler.address_mode,
            address_mode_v: sampler.address_mode,
            address_mode_w: sampler.address_mode,
            mag_filter: sampler.filter,
            min_filter: sampler.filter,
            ..Default::default()
        });

        log::debug!("uploaded texture '{label}' ({}x{})", image.width, image.height);

        Self {
            texture,
            view,
            sampler,
        }
    }

    pub fn view(&self) -> &wgpu::TextureView {
        &self.view
    }

    pub fn sampler(&self) -> &wgpu::Sampler {
        &self.sampler
    }

    /// Frees the GPU memory now instead of when the last reference drops.
    pub fn destroy(self) {
        self.texture.destroy();
    }
}
