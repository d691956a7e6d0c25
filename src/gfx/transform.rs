//! # Transform Recipes
//!
//! A [`Recipe`] is the ordered list of operations that places one instance
//! of a primitive into the figure. Operations are applied left to right by
//! post-multiplying the running matrix, so the first operation listed is the
//! last one applied to the geometry:
//!
//! ```rust
//! use cgmath::{Point3, Transform};
//! use figurine::gfx::transform::Recipe;
//!
//! // scale about the origin, then move to x = 1
//! let placed = Recipe::new().translate(1.0, 0.0, 0.0).scale(2.0, 2.0, 2.0);
//! assert_eq!(placed.compose().transform_point(Point3::new(0.0, 0.0, 0.0)).x, 1.0);
//! ```
//!
//! Reordering operations changes the result, and the figure relies on each
//! recipe keeping the order it was authored in. Some recipes rotate before
//! translating to swing a part around the world origin.

use cgmath::{Deg, InnerSpace, Matrix4, SquareMatrix, Vector3};

/// One step of a [`Recipe`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TransformOp {
    /// Discards everything composed so far.
    SetIdentity,
    Translate(f32, f32, f32),
    Scale(f32, f32, f32),
    /// Angle in degrees around the axis (x, y, z).
    Rotate(f32, f32, f32, f32),
}

impl TransformOp {
    /// The matrix this operation multiplies onto the right.
    pub fn matrix(&self) -> Matrix4<f32> {
        match *self {
            TransformOp::SetIdentity => Matrix4::identity(),
            TransformOp::Translate(x, y, z) => Matrix4::from_translation(Vector3::new(x, y, z)),
            TransformOp::Scale(x, y, z) => Matrix4::from_nonuniform_scale(x, y, z),
            TransformOp::Rotate(angle, x, y, z) => {
                let axis = Vector3::new(x, y, z);
                if axis.magnitude2() == 0.0 {
                    Matrix4::identity()
                } else {
                    Matrix4::from_axis_angle(axis.normalize(), Deg(angle))
                }
            }
        }
    }
}

/// Ordered transform operations producing a model matrix.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Recipe {
    ops: Vec<TransformOp>,
}

impl Recipe {
    /// An empty recipe, which composes to the identity.
    pub fn new() -> Self {
        Self::default()
    }

    /// A recipe seeded with a rotation, for pivot-style placement.
    pub fn rotated(angle: f32, x: f32, y: f32, z: f32) -> Self {
        Self::new().rotate(angle, x, y, z)
    }

    pub fn from_ops(ops: Vec<TransformOp>) -> Self {
        Self { ops }
    }

    pub fn set_identity(self) -> Self {
        self.push(TransformOp::SetIdentity)
    }

    pub fn translate(self, x: f32, y: f32, z: f32) -> Self {
        self.push(TransformOp::Translate(x, y, z))
    }

    pub fn scale(self, x: f32, y: f32, z: f32) -> Self {
        self.push(TransformOp::Scale(x, y, z))
    }

    pub fn rotate(self, angle: f32, x: f32, y: f32, z: f32) -> Self {
        self.push(TransformOp::Rotate(angle, x, y, z))
    }

    pub fn ops(&self) -> &[TransformOp] {
        &self.ops
    }

    /// Composes the model matrix: identity, then each operation multiplied
    /// on the right in declaration order.
    pub fn compose(&self) -> Matrix4<f32> {
        self.ops.iter().fold(Matrix4::identity(), |matrix, op| match op {
            TransformOp::SetIdentity => Matrix4::identity(),
            op => matrix * op.matrix(),
        })
    }

    fn push(mut self, op: TransformOp) -> Self {
        self.ops.push(op);
        self
    }
}
