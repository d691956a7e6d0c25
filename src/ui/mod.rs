//! # User Interface Module
//!
//! Two ways to fire camera controls: a Dear ImGui panel with a button per
//! control and the current value of every field, and keyboard shortcuts.
//! Both produce control ids; [`FigureApp`] applies them to the view state
//! and redraws.
//!
//! ## Key Components
//!
//! - [`UiManager`] - ImGui integration with winit and wgpu
//! - [`camera_controls_panel`] - the control panel
//! - [`control_for_key`] - keyboard bindings
//!
//! ## Input Handling
//!
//! Events go to ImGui first. Keyboard shortcuts are ignored while an ImGui
//! widget has keyboard focus.
//!
//! [`FigureApp`]: crate::app::FigureApp

pub mod keymap;
pub mod manager;
pub mod panel;

// Re-export main types
pub use keymap::control_for_key;
pub use manager::UiManager;
pub use panel::{camera_controls_panel, control_rows, ControlRow};
