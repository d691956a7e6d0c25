//! GPU-resident mesh data.

use crate::{
    error::InitError,
    gfx::context::{BufferHandle, DrawMode, GraphicsContext, ATTRIB_COLOR, ATTRIB_POSITION},
};

use super::Mesh;

/// A mesh uploaded to a [`GraphicsContext`].
///
/// Holds the position, color and optional index buffers together with the
/// count used for drawing. Never mutated after upload; the buffers live as
/// long as the context that owns them.
#[derive(Debug, Clone)]
pub struct GeometryBuffer {
    pub label: String,
    positions: BufferHandle,
    colors: BufferHandle,
    indices: Option<BufferHandle>,
    count: u32,
    draw_mode: DrawMode,
}

impl GeometryBuffer {
    /// Validates `mesh` and uploads its data.
    ///
    /// # Errors
    /// [`InitError::BufferCreationFailed`] if the mesh is malformed or the
    /// context cannot allocate one of the buffers.
    pub fn upload<C: GraphicsContext + ?Sized>(
        ctx: &mut C,
        label: &str,
        mesh: &Mesh,
    ) -> Result<Self, InitError> {
        mesh.validate()
            .map_err(|err| InitError::BufferCreationFailed {
                label: label.to_string(),
                reason: err.to_string(),
            })?;

        let positions = ctx.create_vertex_buffer(&format!("{label} positions"), &mesh.positions)?;
        let colors = ctx.create_vertex_buffer(&format!("{label} colors"), &mesh.colors)?;
        let indices = match &mesh.indices {
            Some(indices) => Some(ctx.create_index_buffer(&format!("{label} indices"), indices)?),
            None => None,
        };

        log::debug!(
            "Uploaded geometry '{}' ({} vertices, count {})",
            label,
            mesh.vertex_count(),
            mesh.count()
        );

        Ok(Self {
            label: label.to_string(),
            positions,
            colors,
            indices,
            count: mesh.count() as u32,
            draw_mode: mesh.draw_mode,
        })
    }

    /// Rebinds this geometry's buffers to the shader's attribute slots.
    pub fn bind<C: GraphicsContext + ?Sized>(&self, ctx: &mut C) {
        ctx.bind_vertex_buffer(ATTRIB_POSITION, self.positions);
        ctx.bind_vertex_buffer(ATTRIB_COLOR, self.colors);
        if let Some(indices) = self.indices {
            ctx.bind_index_buffer(indices);
        }
    }

    /// Vertices (or indices, when indexed) consumed by one draw
    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn draw_mode(&self) -> DrawMode {
        self.draw_mode
    }

    pub fn is_indexed(&self) -> bool {
        self.indices.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::{
        geometry::{generate_plane, generate_sphere},
        recording::{Command, RecordingContext},
    };

    #[test]
    fn test_upload_indexed_mesh() {
        let mut ctx = RecordingContext::new();
        let sphere = generate_sphere(20, 20, [0.0, 0.0, 1.0]);
        let buffer = GeometryBuffer::upload(&mut ctx, "sphere", &sphere).unwrap();

        assert_eq!(buffer.count(), 2400);
        assert!(buffer.is_indexed());
        assert_eq!(
            ctx.commands,
            vec![
                Command::CreateVertexBuffer {
                    label: "sphere positions".into(),
                    len: 441
                },
                Command::CreateVertexBuffer {
                    label: "sphere colors".into(),
                    len: 441
                },
                Command::CreateIndexBuffer {
                    label: "sphere indices".into(),
                    len: 2400
                },
            ]
        );
    }

    #[test]
    fn test_bind_uses_fixed_slots() {
        let mut ctx = RecordingContext::new();
        let plane = GeometryBuffer::upload(&mut ctx, "plane", &generate_plane([0.0, 0.3, 0.0]))
            .unwrap();
        ctx.take_commands();

        plane.bind(&mut ctx);
        assert_eq!(
            ctx.take_commands(),
            vec![
                Command::BindVertexBuffer {
                    slot: ATTRIB_POSITION,
                    buffer: BufferHandle(0)
                },
                Command::BindVertexBuffer {
                    slot: ATTRIB_COLOR,
                    buffer: BufferHandle(1)
                },
            ]
        );
        assert_eq!(plane.draw_mode(), DrawMode::Strip);
    }

    #[test]
    fn test_upload_reports_allocation_failure() {
        let mut ctx = RecordingContext::new().with_buffer_limit(2);
        let sphere = generate_sphere(4, 4, [1.0, 1.0, 1.0]);
        let err = GeometryBuffer::upload(&mut ctx, "sphere", &sphere).unwrap_err();
        assert!(matches!(
            err,
            InitError::BufferCreationFailed { ref label, .. } if label == "sphere indices"
        ));
    }

    #[test]
    fn test_upload_rejects_malformed_mesh() {
        let mut ctx = RecordingContext::new();
        let mut mesh = generate_plane([0.0, 0.3, 0.0]);
        mesh.colors.clear();
        assert!(GeometryBuffer::upload(&mut ctx, "plane", &mesh).is_err());
        assert!(ctx.commands.is_empty());
    }
}
