use crate::{
    error::InitError,
    gfx::{
        context::{DrawMode, GraphicsContext},
        geometry::{GeometryBuffer, Shape},
        transform::Recipe,
    },
};

/// Index of a mesh within a [`SceneDescription`] and of its uploaded
/// [`GeometryBuffer`] within the resulting [`Scene`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GeometryId(pub usize);

/// A distinct (shape, color) pair to generate and upload once.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshEntry {
    pub label: &'static str,
    pub shape: Shape,
    pub color: [f32; 3],
}

/// One placed occurrence of a mesh.
#[derive(Debug, Clone, PartialEq)]
pub struct Instance {
    pub name: &'static str,
    pub geometry: GeometryId,
    pub recipe: Recipe,
    pub draw_mode: DrawMode,
}

/// Declarative scene: the meshes to build and the instances placing them.
///
/// Kept apart from GPU state so the same description can be uploaded to any
/// [`GraphicsContext`].
#[derive(Debug, Clone, Default)]
pub struct SceneDescription {
    meshes: Vec<MeshEntry>,
    instances: Vec<Instance>,
}

impl SceneDescription {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a mesh and returns the id instances refer to it by.
    pub fn add_mesh(&mut self, label: &'static str, shape: Shape, color: [f32; 3]) -> GeometryId {
        self.meshes.push(MeshEntry {
            label,
            shape,
            color,
        });
        GeometryId(self.meshes.len() - 1)
    }

    /// Places `geometry` with `recipe`, drawn the way its shape is drawn.
    ///
    /// # Panics
    /// Panics if `geometry` was not returned by [`add_mesh`](Self::add_mesh)
    /// on this description.
    pub fn add_instance(&mut self, name: &'static str, geometry: GeometryId, recipe: Recipe) {
        let draw_mode = self.meshes[geometry.0].shape.draw_mode();
        self.instances.push(Instance {
            name,
            geometry,
            recipe,
            draw_mode,
        });
    }

    pub fn meshes(&self) -> &[MeshEntry] {
        &self.meshes
    }

    pub fn instances(&self) -> &[Instance] {
        &self.instances
    }

    /// Generates every mesh, uploads it, and returns the drawable scene.
    ///
    /// # Errors
    /// Propagates the first [`InitError::BufferCreationFailed`].
    pub fn upload<C: GraphicsContext + ?Sized>(&self, ctx: &mut C) -> Result<Scene, InitError> {
        let geometries = self
            .meshes
            .iter()
            .map(|entry| GeometryBuffer::upload(ctx, entry.label, &entry.shape.generate(entry.color)))
            .collect::<Result<Vec<_>, _>>()?;

        log::info!(
            "Scene uploaded: {} meshes, {} instances",
            geometries.len(),
            self.instances.len()
        );

        Ok(Scene {
            geometries,
            instances: self.instances.clone(),
        })
    }
}

/// Uploaded geometry plus the ordered instance list drawn every frame.
#[derive(Debug, Clone)]
pub struct Scene {
    geometries: Vec<GeometryBuffer>,
    instances: Vec<Instance>,
}

impl Scene {
    pub fn geometry(&self, id: GeometryId) -> &GeometryBuffer {
        &self.geometries[id.0]
    }

    pub fn geometries(&self) -> &[GeometryBuffer] {
        &self.geometries
    }

    pub fn instances(&self) -> &[Instance] {
        &self.instances
    }

    /// Instances paired with the geometry they draw, in draw order.
    pub fn iter(&self) -> impl Iterator<Item = (&Instance, &GeometryBuffer)> {
        self.instances
            .iter()
            .map(|instance| (instance, self.geometry(instance.geometry)))
    }
}
