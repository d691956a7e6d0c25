//! # Procedural Geometry Generation
//!
//! This module generates the primitive shapes the figure is built from,
//! without any external model files.
//!
//! ## Supported Primitives
//!
//! - **Plane**: fixed ground rectangle in the X-Z plane, drawn as a strip
//! - **Triangle**: small flat triangle, drawn as a plain list
//! - **Sphere**: UV sphere with configurable latitude/longitude bands
//! - **Cylinder**: open tube with configurable slice count
//! - **Pyramid**: triangular pyramid (apex plus three base corners)
//!
//! ## Usage
//!
//! ```rust
//! use figurine::gfx::geometry::{generate_sphere, generate_cylinder};
//!
//! let sphere = generate_sphere(20, 20, [1.0, 0.0, 0.0]);
//! assert_eq!(sphere.count(), 6 * 20 * 20);
//!
//! let tube = generate_cylinder(20, 0.5, 1.0, [0.5, 0.3, 0.1]);
//! assert_eq!(tube.vertex_count(), 42);
//! ```
//!
//! Generated meshes are uploaded once through [`GeometryBuffer::upload`].

pub mod buffer;
pub mod primitives;

pub use buffer::GeometryBuffer;
pub use primitives::*;

use thiserror::Error;

use super::context::DrawMode;

/// Violations of the [`Mesh`] invariants.
#[derive(Debug, Error, PartialEq)]
pub enum MeshError {
    #[error("{positions} positions but {colors} colors")]
    ColorCountMismatch { positions: usize, colors: usize },

    #[error("index {index} out of range for {vertices} vertices")]
    IndexOutOfRange { index: u32, vertices: usize },

    #[error("draw mode {mode:?} does not match the mesh's index data")]
    DrawModeMismatch { mode: DrawMode },

    #[error("mesh has no vertices")]
    Empty,
}

/// Generated geometry ready for GPU upload.
#[derive(Debug, Clone)]
pub struct Mesh {
    /// Vertex positions (x, y, z)
    pub positions: Vec<[f32; 3]>,
    /// Per-vertex colors (r, g, b)
    pub colors: Vec<[f32; 3]>,
    /// Triangle indices, for indexed meshes only
    pub indices: Option<Vec<u32>>,
    /// How the vertices are assembled into triangles
    pub draw_mode: DrawMode,
}

impl Mesh {
    /// Create an empty non-indexed triangle list
    pub fn new() -> Self {
        Self {
            positions: Vec::new(),
            colors: Vec::new(),
            indices: None,
            draw_mode: DrawMode::ListNonIndexed,
        }
    }

    /// Number of vertices in this mesh
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of vertices or indices consumed by one draw call
    pub fn count(&self) -> usize {
        match &self.indices {
            Some(indices) => indices.len(),
            None => self.positions.len(),
        }
    }

    /// Number of triangles this mesh draws
    pub fn triangle_count(&self) -> usize {
        match self.draw_mode {
            DrawMode::Strip => self.count().saturating_sub(2),
            DrawMode::ListIndexed | DrawMode::ListNonIndexed => self.count() / 3,
        }
    }

    /// Checks the structural invariants every generated mesh upholds.
    pub fn validate(&self) -> Result<(), MeshError> {
        if self.positions.is_empty() {
            return Err(MeshError::Empty);
        }
        if self.positions.len() != self.colors.len() {
            return Err(MeshError::ColorCountMismatch {
                positions: self.positions.len(),
                colors: self.colors.len(),
            });
        }
        if self.draw_mode.is_indexed() != self.indices.is_some() {
            return Err(MeshError::DrawModeMismatch {
                mode: self.draw_mode,
            });
        }
        if let Some(indices) = &self.indices {
            if let Some(&index) = indices
                .iter()
                .find(|&&i| i as usize >= self.positions.len())
            {
                return Err(MeshError::IndexOutOfRange {
                    index,
                    vertices: self.positions.len(),
                });
            }
        }
        Ok(())
    }
}

impl Default for Mesh {
    fn default() -> Self {
        Self::new()
    }
}

/// The primitive kinds the figure is assembled from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Plane,
    Triangle,
    Sphere,
    Cylinder,
    Pyramid,
}

impl Shape {
    /// How meshes of this shape are drawn.
    pub fn draw_mode(self) -> DrawMode {
        match self {
            Shape::Plane => DrawMode::Strip,
            Shape::Triangle => DrawMode::ListNonIndexed,
            Shape::Sphere | Shape::Cylinder | Shape::Pyramid => DrawMode::ListIndexed,
        }
    }

    /// Generates this shape with its default parameters in a single color.
    pub fn generate(self, color: [f32; 3]) -> Mesh {
        match self {
            Shape::Plane => generate_plane(color),
            Shape::Triangle => generate_triangle(color),
            Shape::Sphere => generate_sphere(SPHERE_BANDS, SPHERE_BANDS, color),
            Shape::Cylinder => {
                generate_cylinder(CYLINDER_SLICES, CYLINDER_RADIUS, CYLINDER_HEIGHT, color)
            }
            Shape::Pyramid => generate_pyramid(color),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_catches_color_mismatch() {
        let mut mesh = generate_triangle([1.0, 0.0, 0.0]);
        mesh.colors.pop();
        assert_eq!(
            mesh.validate(),
            Err(MeshError::ColorCountMismatch {
                positions: 3,
                colors: 2
            })
        );
    }

    #[test]
    fn test_validate_catches_out_of_range_index() {
        let mut mesh = generate_pyramid([1.0, 1.0, 0.0]);
        mesh.indices.as_mut().unwrap()[5] = 4;
        assert_eq!(
            mesh.validate(),
            Err(MeshError::IndexOutOfRange {
                index: 4,
                vertices: 4
            })
        );
    }

    #[test]
    fn test_validate_catches_mode_mismatch() {
        let mut mesh = generate_plane([0.0, 0.3, 0.0]);
        mesh.draw_mode = DrawMode::ListIndexed;
        assert!(matches!(
            mesh.validate(),
            Err(MeshError::DrawModeMismatch { .. })
        ));
    }

    #[test]
    fn test_every_shape_generates_valid_mesh() {
        for shape in [
            Shape::Plane,
            Shape::Triangle,
            Shape::Sphere,
            Shape::Cylinder,
            Shape::Pyramid,
        ] {
            let mesh = shape.generate([0.2, 0.4, 0.6]);
            assert_eq!(mesh.validate(), Ok(()), "{shape:?}");
            assert_eq!(mesh.draw_mode, shape.draw_mode());
            assert!(mesh.colors.iter().all(|c| *c == [0.2, 0.4, 0.6]));
        }
    }
}
