use winit::dpi::PhysicalSize;

/// Multisampled color attachment that resolves into the surface texture.
///
/// Recreated whenever the surface is resized; its extent always matches the
/// surface configuration.
pub(crate) struct MsaaTarget {
    texture: wgpu::Texture,
    view: wgpu::TextureView,
}

impl MsaaTarget {
    pub(crate) fn new(
        device: &wgpu::Device,
        format: wgpu::TextureFormat,
        size: PhysicalSize<u32>,
        sample_count: u32,
    ) -> Self {
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("square msaa color target"),
            size: wgpu::Extent3d {
                width: size.width.max(1),
                height: size.height.max(1),
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count,
            dimension: wgpu::TextureDimension::D2,
            format,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());

        Self { texture, view }
    }

    pub(crate) fn view(&self) -> &wgpu::TextureView {
        &self.view
    }

    pub(crate) fn destroy(self) {
        self.texture.destroy();
    }
}
