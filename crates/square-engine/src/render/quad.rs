use wgpu::util::DeviceExt;

use crate::coords::Viewport;
use crate::shader::ShaderProgram;
use crate::texture::Texture2d;

use super::transform::MvpUniform;
use super::{RenderCtx, Vertex};

/// Bind group slots shared with the GLSL source.
const MVP_BINDING: u32 = 0;
const TEXTURE_BINDING: u32 = 1;
const SAMPLER_BINDING: u32 = 2;

/// Static vertex + index buffers, uploaded once.
pub struct QuadGeometry {
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
}

impl QuadGeometry {
    pub fn upload(device: &wgpu::Device, vertices: &[Vertex], indices: &[u32]) -> Self {
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("square quad vbo"),
            contents: bytemuck::cast_slice(vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("square quad ibo"),
            contents: bytemuck::cast_slice(indices),
            usage: wgpu::BufferUsages::INDEX,
        });

        log::debug!(
            "uploaded {} vertices ({} byte stride), {} indices",
            vertices.len(),
            Vertex::STRIDE,
            indices.len()
        );

        Self {
            vertex_buffer,
            index_buffer,
            index_count: indices.len() as u32,
        }
    }

    fn destroy(self) {
        self.vertex_buffer.destroy();
        self.index_buffer.destroy();
    }
}

/// Draws one textured quad with a per-frame MVP matrix.
///
/// Owns every GPU resource it touches. [`QuadRenderer::release`] frees them
/// in a fixed order; since it consumes `self`, each handle is released once.
pub struct QuadRenderer {
    geometry: QuadGeometry,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    pipeline: wgpu::RenderPipeline,
    program: ShaderProgram,
    texture: Texture2d,
}

impl QuadRenderer {
    pub fn new(
        ctx: &RenderCtx<'_>,
        geometry: QuadGeometry,
        program: ShaderProgram,
        texture: Texture2d,
    ) -> Self {
        if let Some(mvp) = program.report().mvp {
            if (mvp.group, mvp.binding) != (0, MVP_BINDING) {
                log::warn!(
                    "u_mvp declared at set {} binding {}; expected set 0 binding {MVP_BINDING}",
                    mvp.group,
                    mvp.binding
                );
            }
        }

        let uniform_buffer = ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("square mvp ubo"),
            contents: bytemuck::bytes_of(&MvpUniform::default()),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let bind_group_layout =
            ctx.device
                .create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                    label: Some("square quad bgl"),
                    entries: &[
                        wgpu::BindGroupLayoutEntry {
                            binding: MVP_BINDING,
                            visibility: wgpu::ShaderStages::VERTEX,
                            ty: wgpu::BindingType::Buffer {
                                ty: wgpu::BufferBindingType::Uniform,
                                has_dynamic_offset: false,
                                min_binding_size: wgpu::BufferSize::new(
                                    std::mem::size_of::<MvpUniform>() as u64,
                                ),
                            },
                            count: None,
                        },
                        wgpu::BindGroupLayoutEntry {
                            binding: TEXTURE_BINDING,
                            visibility: wgpu::ShaderStages::FRAGMENT,
                            ty: wgpu::BindingType::Texture {
                                sample_type: wgpu::TextureSampleType::Float { filterable: true },
                                view_dimension: wgpu::TextureViewDimension::D2,
                                multisampled: false,
                            },
                            count: None,
                        },
                        wgpu::BindGroupLayoutEntry {
                            binding: SAMPLER_BINDING,
                            visibility: wgpu::ShaderStages::FRAGMENT,
                            ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                            count: None,
                        },
                    ],
                });

        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("square quad bind group"),
            layout: &bind_group_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: MVP_BINDING,
                    resource: uniform_buffer.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: TEXTURE_BINDING,
                    resource: wgpu::BindingResource::TextureView(texture.view()),
                },
                wgpu::BindGroupEntry {
                    binding: SAMPLER_BINDING,
                    resource: wgpu::BindingResource::Sampler(texture.sampler()),
                },
            ],
        });

        let pipeline_layout =
            ctx.device
                .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                    label: Some("square quad pipeline layout"),
                    bind_group_layouts: &[&bind_group_layout],
                    immediate_size: 0,
                });

        let pipeline = ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("square quad pipeline"),
            layout: Some(&pipeline_layout),

            vertex: wgpu::VertexState {
                module: program.vertex(),
                entry_point: Some(ShaderProgram::ENTRY_POINT),
                compilation_options: Default::default(),
                buffers: &[Vertex::layout()],
            },

            fragment: Some(wgpu::FragmentState {
                module: program.fragment(),
                entry_point: Some(ShaderProgram::ENTRY_POINT),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctx.surface_format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),

            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },

            depth_stencil: None,
            multisample: wgpu::MultisampleState {
                count: ctx.sample_count,
                mask: !0,
                alpha_to_coverage_enabled: false,
            },

            multiview_mask: None,
            cache: None,
        });

        log::info!(
            "quad pipeline ready ({} indices, {}x msaa)",
            geometry.index_count,
            ctx.sample_count
        );

        Self {
            geometry,
            uniform_buffer,
            bind_group,
            pipeline,
            program,
            texture,
        }
    }

    /// Uploads this frame's MVP matrix.
    pub fn prepare(&self, queue: &wgpu::Queue, mvp: glam::Mat4) {
        queue.write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&MvpUniform::new(mvp)));
    }

    /// Records the indexed draw into `pass`. An empty viewport draws nothing.
    pub fn draw(&self, pass: &mut wgpu::RenderPass<'_>, viewport: Viewport) {
        if viewport.is_empty() {
            return;
        }

        let (x, y, w, h, min_depth, max_depth) = viewport.to_pass_args();
        pass.set_viewport(x, y, w, h, min_depth, max_depth);

        pass.set_pipeline(&self.pipeline);
        pass.set_bind_group(0, &self.bind_group, &[]);
        pass.set_vertex_buffer(0, self.geometry.vertex_buffer.slice(..));
        pass.set_index_buffer(self.geometry.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
        pass.draw_indexed(0..self.geometry.index_count, 0, 0..1);
    }

    /// Frees GPU resources: buffers, then the program, then the texture.
    pub fn release(self) {
        let Self {
            geometry,
            uniform_buffer,
            bind_group,
            pipeline,
            program,
            texture,
        } = self;

        geometry.destroy();
        uniform_buffer.destroy();
        log::debug!("released vertex, index and uniform buffers");

        drop(bind_group);
        drop(pipeline);
        drop(program);
        log::debug!("released shader program");

        texture.destroy();
        log::debug!("released texture");
    }
}
