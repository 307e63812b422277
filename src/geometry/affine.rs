// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Affine transform algebra
//!
//! Vectors and points are plain `nalgebra` values, so add, subtract and scale
//! always produce new values. Matrices are 4x4 and act on column points
//! (`result = M · [p, 1]`).

use nalgebra::{Matrix4, Rotation3, Vector3};

/// 2D vector alias
pub type Vec2 = nalgebra::Vector2<f64>;
/// 3D vector alias
pub type Vec3 = nalgebra::Vector3<f64>;
/// 2D point alias
pub type Point2 = nalgebra::Point2<f64>;
/// 3D point alias
pub type Point3 = nalgebra::Point3<f64>;

pub fn identity() -> Matrix4<f64> {
    Matrix4::identity()
}

pub fn translation(dx: f64, dy: f64, dz: f64) -> Matrix4<f64> {
    Matrix4::new_translation(&Vector3::new(dx, dy, dz))
}

/// Axis-aligned, possibly non-uniform scale
pub fn scaling(sx: f64, sy: f64, sz: f64) -> Matrix4<f64> {
    Matrix4::new_nonuniform_scaling(&Vector3::new(sx, sy, sz))
}

/// Right-handed rotation about +X (counter-clockwise looking down +X at the origin)
pub fn rotation_x(radians: f64) -> Matrix4<f64> {
    Rotation3::from_axis_angle(&Vector3::x_axis(), radians).to_homogeneous()
}

/// Right-handed rotation about +Y
pub fn rotation_y(radians: f64) -> Matrix4<f64> {
    Rotation3::from_axis_angle(&Vector3::y_axis(), radians).to_homogeneous()
}

/// Right-handed rotation about +Z
pub fn rotation_z(radians: f64) -> Matrix4<f64> {
    Rotation3::from_axis_angle(&Vector3::z_axis(), radians).to_homogeneous()
}

/// Compose two transforms as `a · b`, so `b` acts on a point before `a`.
pub fn compose(a: &Matrix4<f64>, b: &Matrix4<f64>) -> Matrix4<f64> {
    a * b
}

/// Apply `m` to `p` with an implicit homogeneous 1, keeping only xyz.
///
/// Unlike `Matrix4::transform_point` this never divides by w, so a matrix
/// with a non-affine bottom row is truncated rather than projected.
pub fn transform_point(m: &Matrix4<f64>, p: &Point3) -> Point3 {
    let h = m * p.to_homogeneous();
    Point3::new(h.x, h.y, h.z)
}

/// Flatten a matrix into row-major order.
pub fn to_row_major(m: &Matrix4<f64>) -> [f64; 16] {
    let mut out = [0.0; 16];
    for row in 0..4 {
        for col in 0..4 {
            out[row * 4 + col] = m[(row, col)];
        }
    }
    out
}

/// Build a matrix from row-major elements.
pub fn from_row_major(elements: &[f64; 16]) -> Matrix4<f64> {
    Matrix4::from_row_slice(elements)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_vector_arithmetic_returns_new_values() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);

        assert_eq!(a + b, Vec3::new(5.0, 7.0, 9.0));
        assert_eq!(b - a, Vec3::new(3.0, 3.0, 3.0));
        assert_eq!(a * 2.0, Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(a.component_mul(&b), Vec3::new(4.0, 10.0, 18.0));
        // Operands are untouched
        assert_eq!(a, Vec3::new(1.0, 2.0, 3.0));

        let p = Vec2::new(1.0, -1.0);
        assert_eq!(p * 3.0, Vec2::new(3.0, -3.0));
    }

    #[test]
    fn test_translation_and_scale() {
        let p = Point3::new(1.0, 2.0, 3.0);
        assert_eq!(
            transform_point(&translation(1.0, -2.0, 0.5), &p),
            Point3::new(2.0, 0.0, 3.5)
        );
        assert_eq!(
            transform_point(&scaling(2.0, 3.0, -1.0), &p),
            Point3::new(2.0, 6.0, -3.0)
        );
    }

    #[test]
    fn test_rotations_are_right_handed() {
        let x = Point3::new(1.0, 0.0, 0.0);
        let y = Point3::new(0.0, 1.0, 0.0);
        let z = Point3::new(0.0, 0.0, 1.0);

        let r = transform_point(&rotation_z(FRAC_PI_2), &x);
        assert_relative_eq!(r, y, epsilon = 1e-12);

        let r = transform_point(&rotation_x(FRAC_PI_2), &y);
        assert_relative_eq!(r, z, epsilon = 1e-12);

        let r = transform_point(&rotation_y(FRAC_PI_2), &z);
        assert_relative_eq!(r, x, epsilon = 1e-12);
    }

    #[test]
    fn test_rotation_matches_textbook_matrix() {
        let angle: f64 = 0.3;
        let (s, c) = angle.sin_cos();
        let expected = [
            c, -s, 0.0, 0.0, //
            s, c, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ];
        let actual = to_row_major(&rotation_z(angle));
        for (a, e) in actual.iter().zip(expected.iter()) {
            assert_relative_eq!(a, e, epsilon = 1e-15);
        }
    }

    #[test]
    fn test_compose_applies_right_operand_first() {
        let t = translation(1.0, 0.0, 0.0);
        let r = rotation_z(FRAC_PI_2);
        let origin = Point3::origin();

        // rotate, then translate
        let p = transform_point(&compose(&t, &r), &origin);
        assert_relative_eq!(p, Point3::new(1.0, 0.0, 0.0), epsilon = 1e-12);

        // translate, then rotate
        let p = transform_point(&compose(&r, &t), &origin);
        assert_relative_eq!(p, Point3::new(0.0, 1.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn test_compose_is_associative() {
        let a = rotation_x(0.4);
        let b = translation(3.0, -1.0, 2.0);
        let c = scaling(2.0, 0.5, 1.5);
        let left = compose(&compose(&a, &b), &c);
        let right = compose(&a, &compose(&b, &c));
        assert_relative_eq!(left, right, epsilon = 1e-12);
    }

    #[test]
    fn test_row_major_layout() {
        let m = translation(7.0, 8.0, 9.0);
        let elements = to_row_major(&m);
        assert_eq!(elements[3], 7.0);
        assert_eq!(elements[7], 8.0);
        assert_eq!(elements[11], 9.0);
        assert_eq!(&elements[12..], &[0.0, 0.0, 0.0, 1.0]);
        assert_eq!(from_row_major(&elements), m);
    }

    #[test]
    fn test_transform_point_truncates_without_divide() {
        let mut m = identity();
        m[(3, 3)] = 2.0;
        let p = transform_point(&m, &Point3::new(1.0, 2.0, 3.0));
        assert_eq!(p, Point3::new(1.0, 2.0, 3.0));
    }
}
