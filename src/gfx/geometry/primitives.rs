//! # Primitive Shape Generation
//!
//! This module contains functions to generate the primitive shapes of the figure.
//! Every vertex of a generated shape carries the same color.

use super::Mesh;
use crate::gfx::context::DrawMode;
use std::f32::consts::PI;

/// Default latitude and longitude band count for spheres
pub const SPHERE_BANDS: u32 = 20;
/// Default slice count for cylinders
pub const CYLINDER_SLICES: u32 = 20;
pub const CYLINDER_RADIUS: f32 = 0.5;
pub const CYLINDER_HEIGHT: f32 = 1.0;

/// Generate the ground plane
///
/// A 10 × 18 rectangle lying in the X-Z plane at y = 0, ordered for a
/// triangle strip.
pub fn generate_plane(color: [f32; 3]) -> Mesh {
    let positions = vec![
        [-5.0, 0.0, 9.0],
        [5.0, 0.0, 9.0],
        [-5.0, 0.0, -9.0],
        [5.0, 0.0, -9.0],
    ];

    Mesh {
        colors: vec![color; positions.len()],
        positions,
        indices: None,
        draw_mode: DrawMode::Strip,
    }
}

/// Generate a single flat triangle in the XY plane
///
/// The triangle sits left of the origin with its tip at (-0.5, 0.5); scene
/// recipes rely on that offset when they scale and rotate it.
pub fn generate_triangle(color: [f32; 3]) -> Mesh {
    let positions = vec![[-0.5, 0.5, 0.0], [-0.75, 0.0, 0.0], [-0.25, 0.0, 0.0]];

    Mesh {
        colors: vec![color; positions.len()],
        positions,
        indices: None,
        draw_mode: DrawMode::ListNonIndexed,
    }
}

/// Generate a UV sphere with specified resolution
///
/// # Arguments
/// * `lat_bands` - Number of horizontal bands (pole to pole)
/// * `long_bands` - Number of vertical bands (around the Y axis)
/// * `color` - Color of every vertex
///
/// Returns a sphere of radius 1.0 centered at the origin. The seam column
/// is duplicated, so there are `(lat_bands + 1) * (long_bands + 1)` vertices
/// and `6 * lat_bands * long_bands` indices.
pub fn generate_sphere(lat_bands: u32, long_bands: u32, color: [f32; 3]) -> Mesh {
    let lat_bands = lat_bands.max(2);
    let long_bands = long_bands.max(3);

    let mut positions = Vec::with_capacity(((lat_bands + 1) * (long_bands + 1)) as usize);
    let mut indices = Vec::with_capacity((6 * lat_bands * long_bands) as usize);

    for lat in 0..=lat_bands {
        let theta = lat as f32 * PI / lat_bands as f32; // 0 to PI
        let sin_theta = theta.sin();
        let cos_theta = theta.cos();

        for lon in 0..=long_bands {
            let phi = lon as f32 * 2.0 * PI / long_bands as f32; // 0 to 2*PI
            let sin_phi = phi.sin();
            let cos_phi = phi.cos();

            positions.push([cos_phi * sin_theta, cos_theta, sin_phi * sin_theta]);

            if lat < lat_bands && lon < long_bands {
                let first = lat * (long_bands + 1) + lon;
                let second = first + long_bands + 1;

                indices.extend_from_slice(&[first, second, first + 1]);
                indices.extend_from_slice(&[second, second + 1, first + 1]);
            }
        }
    }

    Mesh {
        colors: vec![color; positions.len()],
        positions,
        indices: Some(indices),
        draw_mode: DrawMode::ListIndexed,
    }
}

/// Generate an open cylinder (no caps)
///
/// # Arguments
/// * `slices` - Number of segments around the circumference
/// * `radius` - Radius of the tube
/// * `height` - Height of the tube along the Y axis
/// * `color` - Color of every vertex
///
/// Vertices come in (top, bottom) pairs, one pair per slice boundary with
/// the first pair repeated at the end to close the seam.
pub fn generate_cylinder(slices: u32, radius: f32, height: f32, color: [f32; 3]) -> Mesh {
    let slices = slices.max(3);
    let half_height = height * 0.5;

    let mut positions = Vec::with_capacity(2 * (slices as usize + 1));
    let mut indices = Vec::with_capacity(6 * slices as usize);

    for i in 0..=slices {
        let angle = i as f32 * 2.0 * PI / slices as f32;
        let x = radius * angle.cos();
        let z = radius * angle.sin();

        positions.push([x, half_height, z]);
        positions.push([x, -half_height, z]);

        if i < slices {
            let top = i * 2;
            let bottom = top + 1;
            let next_top = (i + 1) * 2;
            let next_bottom = next_top + 1;

            indices.extend_from_slice(&[top, next_top, bottom]);
            indices.extend_from_slice(&[bottom, next_top, next_bottom]);
        }
    }

    Mesh {
        colors: vec![color; positions.len()],
        positions,
        indices: Some(indices),
        draw_mode: DrawMode::ListIndexed,
    }
}

/// Generate a triangular pyramid
///
/// Apex at (0, 1, 0) over a three-corner base at y = 0: three side faces
/// plus the base, 12 indices.
pub fn generate_pyramid(color: [f32; 3]) -> Mesh {
    let positions = vec![
        [0.0, 1.0, 0.0],   // apex
        [-0.5, 0.0, -0.5], // base
        [0.5, 0.0, -0.5],
        [0.0, 0.0, 0.5],
    ];

    #[rustfmt::skip]
    let indices = vec![
        0, 1, 2,
        0, 2, 3,
        0, 3, 1,
        1, 2, 3,
    ];

    Mesh {
        colors: vec![color; positions.len()],
        positions,
        indices: Some(indices),
        draw_mode: DrawMode::ListIndexed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: [f32; 3] = [1.0, 0.0, 0.0];

    #[test]
    fn test_sphere_generation() {
        let sphere = generate_sphere(20, 20, RED);
        assert_eq!(sphere.vertex_count(), 21 * 21);
        assert_eq!(sphere.count(), 6 * 20 * 20);
        assert_eq!(sphere.triangle_count(), 2 * 20 * 20);
        assert_eq!(sphere.positions.len(), sphere.colors.len());
    }

    #[test]
    fn test_sphere_vertices_on_unit_sphere() {
        let sphere = generate_sphere(8, 6, RED);
        for [x, y, z] in &sphere.positions {
            let length = (x * x + y * y + z * z).sqrt();
            assert!((length - 1.0).abs() < 1e-5);
        }
        // poles first and last
        assert_eq!(sphere.positions[0][1], 1.0);
        assert!((sphere.positions.last().unwrap()[1] + 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_sphere_indices_in_range() {
        let sphere = generate_sphere(20, 20, RED);
        let indices = sphere.indices.as_ref().unwrap();
        assert!(indices.iter().all(|&i| (i as usize) < sphere.vertex_count()));
        assert_eq!(&indices[..6], &[0, 21, 1, 21, 22, 1]);
    }

    #[test]
    fn test_cylinder_generation() {
        let cylinder = generate_cylinder(20, 0.5, 1.0, RED);
        assert_eq!(cylinder.vertex_count(), 2 * 21);
        assert_eq!(cylinder.triangle_count(), 2 * 20);
        assert_eq!(&cylinder.indices.as_ref().unwrap()[..6], &[0, 2, 1, 1, 2, 3]);
        assert_eq!(cylinder.positions[0], [0.5, 0.5, 0.0]);
        assert_eq!(cylinder.positions[1], [0.5, -0.5, 0.0]);
    }

    #[test]
    fn test_cylinder_has_no_caps() {
        let cylinder = generate_cylinder(12, 0.5, 1.0, RED);
        for [x, _, z] in &cylinder.positions {
            assert!(((x * x + z * z).sqrt() - 0.5).abs() < 1e-5);
        }
    }

    #[test]
    fn test_degenerate_parameters_are_raised() {
        assert_eq!(generate_sphere(0, 0, RED).vertex_count(), 3 * 4);
        assert_eq!(generate_cylinder(1, 0.5, 1.0, RED).vertex_count(), 2 * 4);
    }

    #[test]
    fn test_fixed_shapes() {
        let plane = generate_plane([0.0, 0.3, 0.0]);
        assert_eq!(plane.count(), 4);
        assert_eq!(plane.draw_mode, DrawMode::Strip);
        assert!(plane.positions.iter().all(|p| p[1] == 0.0));

        let triangle = generate_triangle(RED);
        assert_eq!(triangle.count(), 3);
        assert_eq!(triangle.draw_mode, DrawMode::ListNonIndexed);

        let pyramid = generate_pyramid(RED);
        assert_eq!(pyramid.vertex_count(), 4);
        assert_eq!(pyramid.count(), 12);
        assert_eq!(pyramid.triangle_count(), 4);
    }
}
