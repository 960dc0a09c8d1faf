use bytemuck::{Pod, Zeroable};

/// Interleaved quad vertex: position, color, texture coordinate.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 3],
    pub uv: [f32; 2],
}

impl Vertex {
    pub const ATTRS: [wgpu::VertexAttribute; 3] = wgpu::vertex_attr_array![
        0 => Float32x2, // position
        1 => Float32x3, // color
        2 => Float32x2  // uv
    ];

    pub const STRIDE: wgpu::BufferAddress = std::mem::size_of::<Vertex>() as wgpu::BufferAddress;

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: Self::STRIDE,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }

    /// Shader locations fed by [`Vertex::layout`].
    pub fn locations() -> [u32; 3] {
        Self::ATTRS.map(|a| a.shader_location)
    }
}

const fn v(position: [f32; 2], color: [f32; 3], uv: [f32; 2]) -> Vertex {
    Vertex { position, color, uv }
}

pub const QUAD_VERTICES: [Vertex; 4] = [
    v([-0.5, -0.5], [1.0, 0.2, 0.2], [0.0, 0.0]),
    v([-0.5, 0.5], [0.2, 1.0, 0.2], [0.0, 1.0]),
    v([0.5, 0.5], [0.2, 0.2, 1.0], [1.0, 1.0]),
    v([0.5, -0.5], [1.0, 1.0, 1.0], [1.0, 0.0]),
];

pub const QUAD_INDICES: [u32; 6] = [0, 1, 2, 3, 0, 2];
