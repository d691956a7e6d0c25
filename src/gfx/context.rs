//! # Graphics Context Abstraction
//!
//! The narrow interface the scene renderer consumes from a GPU backend. It
//! mirrors the small immediate-mode vocabulary the renderer needs: create
//! buffers once, look up uniform slots once, and per frame set matrices,
//! bind geometry and draw.
//!
//! The wgpu implementation lives in [`RenderEngine`]; tests use a recording
//! implementation that captures every call.
//!
//! [`RenderEngine`]: crate::gfx::rendering::render_engine::RenderEngine

use cgmath::Matrix4;

use crate::error::InitError;

/// Attribute slot the position buffer is bound to.
pub const ATTRIB_POSITION: u32 = 0;
/// Attribute slot the color buffer is bound to.
pub const ATTRIB_COLOR: u32 = 1;

/// Uniform names the shading program must expose.
pub const UNIFORM_MODEL: &str = "model";
pub const UNIFORM_VIEW: &str = "view";
pub const UNIFORM_PROJECTION: &str = "projection";

/// Opaque handle to a buffer owned by a [`GraphicsContext`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BufferHandle(pub usize);

/// Opaque handle to a matrix uniform of the shading program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UniformLocation(pub u32);

/// How vertex data is assembled into triangles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DrawMode {
    /// Sequential vertices as a triangle strip.
    Strip,
    /// Triangle list through the bound index buffer.
    ListIndexed,
    /// Sequential vertices as a triangle list.
    ListNonIndexed,
}

impl DrawMode {
    pub fn is_indexed(self) -> bool {
        matches!(self, DrawMode::ListIndexed)
    }
}

/// GPU collaborator consumed by the scene renderer.
///
/// Buffer creation and uniform lookup happen during initialization and are
/// the only fallible operations. Everything else is called once per frame
/// and cannot fail.
pub trait GraphicsContext {
    /// Uploads per-vertex `[f32; 3]` data (positions or colors).
    fn create_vertex_buffer(
        &mut self,
        label: &str,
        data: &[[f32; 3]],
    ) -> Result<BufferHandle, InitError>;

    /// Uploads triangle indices.
    fn create_index_buffer(&mut self, label: &str, data: &[u32])
        -> Result<BufferHandle, InitError>;

    /// Looks up a matrix uniform by name.
    fn uniform_location(&self, name: &str) -> Option<UniformLocation>;

    fn set_uniform_matrix(&mut self, location: UniformLocation, matrix: &Matrix4<f32>);

    fn set_clear_color(&mut self, color: [f32; 4]);

    fn enable_depth_test(&mut self);

    /// Clears color and depth for a new frame.
    fn clear(&mut self);

    fn bind_vertex_buffer(&mut self, slot: u32, buffer: BufferHandle);

    fn bind_index_buffer(&mut self, buffer: BufferHandle);

    /// Draws `count` vertices (or indices, for [`DrawMode::ListIndexed`])
    /// with the currently bound buffers and uniforms.
    fn draw(&mut self, mode: DrawMode, count: u32);

    /// Finishes the frame and shows it.
    fn present(&mut self);
}
