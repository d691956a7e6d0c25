// src/gfx/rendering/mod.rs
//! wgpu backend
//!
//! Pipelines, vertex layouts and the [`RenderEngine`] that implements
//! [`GraphicsContext`](crate::gfx::context::GraphicsContext) on the GPU.

pub mod pipeline_manager;
pub mod render_engine;
pub mod vertex;

// Re-export main types
pub use pipeline_manager::{PipelineConfig, PipelineKey, PipelineManager};
pub use render_engine::RenderEngine;
