use cgmath::{Point3, Vector3};

/// Where the camera is, what it looks at, and which way is up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraState {
    pub eye: Point3<f32>,
    pub look_at: Point3<f32>,
    pub up: Vector3<f32>,
}

impl Default for CameraState {
    fn default() -> Self {
        Self {
            eye: Point3::new(0.0, 2.0, 12.0),
            look_at: Point3::new(0.0, 0.0, 0.0),
            up: Vector3::unit_y(),
        }
    }
}

/// Perspective parameters. `fov` is the vertical field of view in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionState {
    pub fov: f32,
    pub near: f32,
    pub far: f32,
    pub aspect: f32,
}

impl ProjectionState {
    pub const MIN_FOV: f32 = 5.0;
    pub const MAX_FOV: f32 = 200.0;
    pub const MIN_NEAR: f32 = 0.1;
    /// Smallest gap kept between the near and far planes.
    pub const PLANE_GAP: f32 = 1.0;

    /// Updates the aspect ratio from a surface size, ignoring zero sizes
    /// (minimized windows).
    pub fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }

    /// `0 < near < far` and the field of view within its bounds.
    pub fn is_valid(&self) -> bool {
        self.near > 0.0
            && self.near < self.far
            && (Self::MIN_FOV..=Self::MAX_FOV).contains(&self.fov)
    }
}

impl Default for ProjectionState {
    fn default() -> Self {
        Self {
            fov: 90.0,
            near: 1.0,
            far: 100.0,
            aspect: 1.0,
        }
    }
}

/// Everything the frame renderer reads to build the view and projection
/// matrices. Owned by the application and mutated only through controls
/// and window resizes.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ViewState {
    pub camera: CameraState,
    pub projection: ProjectionState,
}

/// One adjustable scalar of the [`ViewState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Fov,
    Near,
    Far,
    EyeX,
    EyeY,
    EyeZ,
    AtX,
    AtY,
    AtZ,
    UpX,
    UpY,
    UpZ,
}

impl Field {
    pub const ALL: [Field; 12] = [
        Field::Fov,
        Field::Near,
        Field::Far,
        Field::EyeX,
        Field::EyeY,
        Field::EyeZ,
        Field::AtX,
        Field::AtY,
        Field::AtZ,
        Field::UpX,
        Field::UpY,
        Field::UpZ,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Field::Fov => "fov",
            Field::Near => "near",
            Field::Far => "far",
            Field::EyeX => "eyeX",
            Field::EyeY => "eyeY",
            Field::EyeZ => "eyeZ",
            Field::AtX => "atX",
            Field::AtY => "atY",
            Field::AtZ => "atZ",
            Field::UpX => "upX",
            Field::UpY => "upY",
            Field::UpZ => "upZ",
        }
    }
}

impl ViewState {
    pub fn get(&self, field: Field) -> f32 {
        match field {
            Field::Fov => self.projection.fov,
            Field::Near => self.projection.near,
            Field::Far => self.projection.far,
            Field::EyeX => self.camera.eye.x,
            Field::EyeY => self.camera.eye.y,
            Field::EyeZ => self.camera.eye.z,
            Field::AtX => self.camera.look_at.x,
            Field::AtY => self.camera.look_at.y,
            Field::AtZ => self.camera.look_at.z,
            Field::UpX => self.camera.up.x,
            Field::UpY => self.camera.up.y,
            Field::UpZ => self.camera.up.z,
        }
    }

    pub fn field_mut(&mut self, field: Field) -> &mut f32 {
        match field {
            Field::Fov => &mut self.projection.fov,
            Field::Near => &mut self.projection.near,
            Field::Far => &mut self.projection.far,
            Field::EyeX => &mut self.camera.eye.x,
            Field::EyeY => &mut self.camera.eye.y,
            Field::EyeZ => &mut self.camera.eye.z,
            Field::AtX => &mut self.camera.look_at.x,
            Field::AtY => &mut self.camera.look_at.y,
            Field::AtZ => &mut self.camera.look_at.z,
            Field::UpX => &mut self.camera.up.x,
            Field::UpY => &mut self.camera.up.y,
            Field::UpZ => &mut self.camera.up.z,
        }
    }
}
