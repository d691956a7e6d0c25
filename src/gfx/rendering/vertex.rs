//! Vertex buffer layouts for the figure pipelines
//!
//! Positions and colors live in separate buffers, one per attribute slot,
//! each a tightly packed `[f32; 3]` stream.

use crate::gfx::context::{ATTRIB_COLOR, ATTRIB_POSITION};

const POSITION_ATTRIBUTES: [wgpu::VertexAttribute; 1] =
    wgpu::vertex_attr_array![ATTRIB_POSITION => Float32x3];
const COLOR_ATTRIBUTES: [wgpu::VertexAttribute; 1] =
    wgpu::vertex_attr_array![ATTRIB_COLOR => Float32x3];

const STRIDE: wgpu::BufferAddress = std::mem::size_of::<[f32; 3]>() as wgpu::BufferAddress;

pub fn position_layout() -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: STRIDE,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &POSITION_ATTRIBUTES,
    }
}

pub fn color_layout() -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: STRIDE,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &COLOR_ATTRIBUTES,
    }
}

/// Layouts in attribute-slot order.
pub fn buffer_layouts() -> [wgpu::VertexBufferLayout<'static>; 2] {
    [position_layout(), color_layout()]
}
