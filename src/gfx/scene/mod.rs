//! # Scene Management Module
//!
//! A scene is described declaratively by a [`SceneDescription`]: the meshes to
//! generate once, and an ordered list of [`Instance`]s that place a mesh with
//! a transform [`Recipe`](crate::gfx::transform::Recipe). Uploading the
//! description to a [`GraphicsContext`](crate::gfx::context::GraphicsContext)
//! yields a [`Scene`], which [`SceneRenderer`] replays every frame.
//!
//! ## Usage
//!
//! ```no_run
//! use figurine::gfx::scene::{figure, SceneRenderer};
//! use figurine::gfx::camera::ViewState;
//!
//! // let scene = figure().upload(&mut engine)?;
//! // let renderer = SceneRenderer::new(&mut engine, figurine::gfx::scene::SKY)?;
//! // renderer.render_frame(&mut engine, &scene, &ViewState::default());
//! ```

pub mod figure;
pub mod renderer;
pub mod scene;

pub use figure::{figure, SKY};
pub use renderer::SceneRenderer;
pub use scene::{GeometryId, Instance, MeshEntry, Scene, SceneDescription};
