//! # Camera & Projection
//!
//! The camera is a plain [`ViewState`] value: eye, target and up vector plus
//! the perspective parameters. View and projection matrices are derived from
//! it every frame by [`derive_view_matrix`] and [`derive_projection_matrix`];
//! the only way it changes is through the [`ControlSurface`] and window
//! resizes.

pub mod camera_utils;
pub mod controls;
pub mod view_state;

pub use camera_utils::{derive_projection_matrix, derive_view_matrix};
pub use controls::{Bound, Control, ControlSurface, CONTROLS};
pub use view_state::{CameraState, Field, ProjectionState, ViewState};
