// src/lib.rs
//! Figurine
//!
//! A procedurally built 3D figure on a ground plane, rendered with wgpu under
//! a camera adjusted through discrete controls.

pub mod app;
pub mod config;
pub mod error;
pub mod gfx;
pub mod ui;
pub mod wgpu_utils;

// Re-export main types for convenience
pub use app::FigureApp;
pub use config::AppConfig;
pub use error::InitError;

/// Creates the application with the default configuration
pub fn default() -> FigureApp {
    FigureApp::new(AppConfig::default())
}
