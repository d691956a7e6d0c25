//! # Graphics Module
//!
//! Everything needed to turn the figure description into pixels.
//!
//! ## Architecture Overview
//!
//! - **Geometry** ([`geometry`]) - procedural meshes and their GPU buffers
//! - **Transforms** ([`transform`]) - ordered recipes composed into model matrices
//! - **Camera** ([`camera`]) - view state, derived matrices and the control surface
//! - **Scene** ([`scene`]) - the declarative figure and the per-frame draw loop
//! - **Context** ([`context`]) - the GPU interface the draw loop is written against
//! - **Rendering** ([`rendering`]) - the wgpu implementation of that interface
//!
//! ## Usage
//!
//! ```no_run
//! use figurine::gfx::{camera::ViewState, scene::{figure, SceneRenderer, SKY}};
//!
//! // let mut engine = pollster::block_on(RenderEngine::new(window, w, h))?;
//! // let scene = figure().upload(&mut engine)?;
//! // let renderer = SceneRenderer::new(&mut engine, SKY)?;
//! // renderer.render_frame(&mut engine, &scene, &ViewState::default());
//! ```

pub mod camera;
pub mod context;
pub mod geometry;
#[cfg(test)]
pub(crate) mod recording;
pub mod rendering;
pub mod resources;
pub mod scene;
pub mod transform;

// Re-export commonly used types
pub use context::GraphicsContext;
pub use rendering::render_engine::RenderEngine;
