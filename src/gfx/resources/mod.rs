// src/gfx/resources/mod.rs
//! GPU resource management
//!
//! Render targets owned by the render engine.

pub mod texture_resource;

// Re-export main types
pub use texture_resource::TextureResource;
