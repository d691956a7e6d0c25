use cgmath::{Angle, Deg, Matrix4, Rad};

use super::view_state::{CameraState, ProjectionState};

/// Builds the right-handed look-at view matrix.
///
/// The result is degenerate (NaN) when `up` is parallel to the eye → target
/// direction or eye and target coincide.
pub fn derive_view_matrix(camera: &CameraState) -> Matrix4<f32> {
    Matrix4::look_at_rh(camera.eye, camera.look_at, camera.up)
}

/// Builds a symmetric perspective matrix in OpenGL clip space (z in [-1, 1]).
///
/// Written out from the closed form instead of `cgmath::perspective`, which
/// asserts a field of view below 180°; the control surface allows up to 200°.
pub fn derive_projection_matrix(projection: &ProjectionState) -> Matrix4<f32> {
    let ProjectionState {
        fov,
        near,
        far,
        aspect,
    } = *projection;

    let half_fov: Rad<f32> = Deg(fov * 0.5).into();
    let f = half_fov.cot();
    let depth = 1.0 / (near - far);

    #[rustfmt::skip]
    let matrix = Matrix4::new(
        f / aspect, 0.0, 0.0,                         0.0,
        0.0,        f,   0.0,                         0.0,
        0.0,        0.0, (far + near) * depth,       -1.0,
        0.0,        0.0, 2.0 * far * near * depth,    0.0,
    );
    matrix
}

pub fn convert_matrix4_to_array(matrix4: Matrix4<f32>) -> [[f32; 4]; 4] {
    matrix4.into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::{Point3, Transform, Vector3, Vector4};

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn test_view_matrix_moves_eye_to_origin() {
        let camera = CameraState::default();
        let view = derive_view_matrix(&camera);
        let eye = view.transform_point(camera.eye);
        assert!(close(eye.x, 0.0) && close(eye.y, 0.0) && close(eye.z, 0.0));

        // the target lies straight ahead on -Z
        let target = view.transform_point(camera.look_at);
        assert!(close(target.x, 0.0) && close(target.y, 0.0));
        assert!(target.z < 0.0);
    }

    #[test]
    fn test_projection_matches_cgmath_below_half_turn() {
        let projection = ProjectionState {
            fov: 60.0,
            near: 1.0,
            far: 100.0,
            aspect: 1.5,
        };
        let ours = derive_projection_matrix(&projection);
        let reference = cgmath::perspective(Deg(60.0), 1.5, 1.0, 100.0);
        let (a, b): ([[f32; 4]; 4], [[f32; 4]; 4]) = (ours.into(), reference.into());
        for c in 0..4 {
            for r in 0..4 {
                assert!(close(a[c][r], b[c][r]), "[{c}][{r}] {} != {}", a[c][r], b[c][r]);
            }
        }
    }

    #[test]
    fn test_projection_maps_near_and_far_to_clip_bounds() {
        let projection = ProjectionState::default();
        let m = derive_projection_matrix(&projection);

        let near = m * Vector4::new(0.0, 0.0, -projection.near, 1.0);
        let far = m * Vector4::new(0.0, 0.0, -projection.far, 1.0);
        assert!(close(near.z / near.w, -1.0));
        assert!(close(far.z / far.w, 1.0));
    }

    #[test]
    fn test_wide_fov_does_not_panic() {
        let projection = ProjectionState {
            fov: 200.0,
            ..ProjectionState::default()
        };
        let m = derive_projection_matrix(&projection);
        let cols: [[f32; 4]; 4] = m.into();
        assert!(cols.iter().flatten().all(|v| v.is_finite()));
    }

    #[test]
    fn test_collinear_up_is_degenerate() {
        let camera = CameraState {
            eye: Point3::new(0.0, 5.0, 0.0),
            look_at: Point3::new(0.0, 0.0, 0.0),
            up: Vector3::unit_y(),
        };
        let cols: [[f32; 4]; 4] = derive_view_matrix(&camera).into();
        assert!(cols.iter().flatten().any(|v| v.is_nan()));
    }
}
