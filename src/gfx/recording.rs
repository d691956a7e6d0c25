//! In-memory [`GraphicsContext`] that records every call, for tests that
//! exercise the draw loop without a GPU.

use cgmath::Matrix4;

use super::context::{
    BufferHandle, DrawMode, GraphicsContext, UniformLocation, UNIFORM_MODEL, UNIFORM_PROJECTION,
    UNIFORM_VIEW,
};
use crate::error::InitError;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    CreateVertexBuffer { label: String, len: usize },
    CreateIndexBuffer { label: String, len: usize },
    SetUniform { location: UniformLocation, matrix: [[f32; 4]; 4] },
    SetClearColor([f32; 4]),
    EnableDepthTest,
    Clear,
    BindVertexBuffer { slot: u32, buffer: BufferHandle },
    BindIndexBuffer(BufferHandle),
    Draw { mode: DrawMode, count: u32 },
    Present,
}

pub struct RecordingContext {
    pub commands: Vec<Command>,
    uniforms: Vec<&'static str>,
    buffers_created: usize,
    buffer_limit: Option<usize>,
}

impl RecordingContext {
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
            uniforms: vec![UNIFORM_MODEL, UNIFORM_VIEW, UNIFORM_PROJECTION],
            buffers_created: 0,
            buffer_limit: None,
        }
    }

    /// Pretends the shading program lacks `name`.
    pub fn without_uniform(mut self, name: &str) -> Self {
        self.uniforms.retain(|u| *u != name);
        self
    }

    /// Fails every buffer allocation after the first `limit`.
    pub fn with_buffer_limit(mut self, limit: usize) -> Self {
        self.buffer_limit = Some(limit);
        self
    }

    /// Drains everything recorded so far.
    pub fn take_commands(&mut self) -> Vec<Command> {
        std::mem::take(&mut self.commands)
    }

    fn allocate(&mut self, label: &str) -> Result<BufferHandle, InitError> {
        if let Some(limit) = self.buffer_limit {
            if self.buffers_created >= limit {
                return Err(InitError::BufferCreationFailed {
                    label: label.to_string(),
                    reason: "out of buffer objects".to_string(),
                });
            }
        }
        let handle = BufferHandle(self.buffers_created);
        self.buffers_created += 1;
        Ok(handle)
    }
}

impl GraphicsContext for RecordingContext {
    fn create_vertex_buffer(
        &mut self,
        label: &str,
        data: &[[f32; 3]],
    ) -> Result<BufferHandle, InitError> {
        let handle = self.allocate(label)?;
        self.commands.push(Command::CreateVertexBuffer {
            label: label.to_string(),
            len: data.len(),
        });
        Ok(handle)
    }

    fn create_index_buffer(
        &mut self,
        label: &str,
        data: &[u32],
    ) -> Result<BufferHandle, InitError> {
        let handle = self.allocate(label)?;
        self.commands.push(Command::CreateIndexBuffer {
            label: label.to_string(),
            len: data.len(),
        });
        Ok(handle)
    }

    fn uniform_location(&self, name: &str) -> Option<UniformLocation> {
        self.uniforms
            .iter()
            .position(|u| *u == name)
            .map(|i| UniformLocation(i as u32))
    }

    fn set_uniform_matrix(&mut self, location: UniformLocation, matrix: &Matrix4<f32>) {
        self.commands.push(Command::SetUniform {
            location,
            matrix: (*matrix).into(),
        });
    }

    fn set_clear_color(&mut self, color: [f32; 4]) {
        self.commands.push(Command::SetClearColor(color));
    }

    fn enable_depth_test(&mut self) {
        self.commands.push(Command::EnableDepthTest);
    }

    fn clear(&mut self) {
        self.commands.push(Command::Clear);
    }

    fn bind_vertex_buffer(&mut self, slot: u32, buffer: BufferHandle) {
        self.commands.push(Command::BindVertexBuffer { slot, buffer });
    }

    fn bind_index_buffer(&mut self, buffer: BufferHandle) {
        self.commands.push(Command::BindIndexBuffer(buffer));
    }

    fn draw(&mut self, mode: DrawMode, count: u32) {
        self.commands.push(Command::Draw { mode, count });
    }

    fn present(&mut self) {
        self.commands.push(Command::Present);
    }
}
