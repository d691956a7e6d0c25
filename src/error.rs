//! # Initialization Errors
//!
//! Every failure the renderer can report happens while the GPU context, the
//! shading program and the scene geometry are being set up. Once the first
//! frame has been drawn nothing in the frame path is fallible, so these
//! errors are only ever returned from constructors.

use thiserror::Error;

/// Fatal errors raised while preparing the renderer.
///
/// None of these are retried: each one means the environment cannot serve
/// the workload at all, so initialization is aborted and the error is
/// reported to the host.
#[derive(Debug, Error)]
pub enum InitError {
    /// No adapter, device or surface could be obtained.
    #[error("GPU context unavailable: {0}")]
    ContextUnavailable(String),

    /// The WGSL program failed validation or pipeline creation.
    #[error("shader program failed to compile or link: {0}")]
    ShaderCompileOrLinkFailed(String),

    /// A vertex, color or index buffer could not be allocated.
    #[error("failed to create buffer `{label}`: {reason}")]
    BufferCreationFailed { label: String, reason: String },

    /// The shading program does not expose a uniform the renderer needs.
    #[error("uniform `{0}` not found in shading program")]
    UniformLocationMissing(String),
}
