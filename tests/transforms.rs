// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Transform stack behavior as seen through tessellation

use approx::assert_relative_eq;
use polyshape::geometry::{affine, Point3, TransformStack};
use polyshape::{cuboid, rectangle, sphere};
use std::f64::consts::FRAC_PI_2;

#[test]
fn test_translate_then_rotate_differs_from_rotate_then_translate() {
    let a = cuboid(1.0, 1.0, 1.0).translate(1.0, 0.0, 0.0).rotate_z(FRAC_PI_2);
    let b = cuboid(1.0, 1.0, 1.0).rotate_z(FRAC_PI_2).translate(1.0, 0.0, 0.0);
    assert_ne!(a.to_mesh(), b.to_mesh());
}

#[test]
fn test_last_transform_touches_local_geometry_first() {
    // Collapsed as T · S: the scale acts on the local vertex, then the translation.
    let mesh = cuboid(2.0, 2.0, 2.0)
        .translate(10.0, 0.0, 0.0)
        .scale(3.0, 3.0, 3.0)
        .to_mesh();
    let bbox = mesh.bounding_box();
    assert_relative_eq!(bbox.min, Point3::new(7.0, -3.0, -3.0), epsilon = 1e-12);
    assert_relative_eq!(bbox.max, Point3::new(13.0, 3.0, 3.0), epsilon = 1e-12);
}

#[test]
fn test_collapse_is_associative() {
    let t = affine::translation(1.0, 2.0, 3.0);
    let r = affine::rotation_y(0.7);
    let s = affine::scaling(2.0, 0.5, 1.5);

    let mut stack = TransformStack::new();
    stack.push(t);
    stack.push(r);
    stack.push(s);

    let left = affine::compose(&affine::compose(&t, &r), &s);
    let right = affine::compose(&t, &affine::compose(&r, &s));
    assert_relative_eq!(stack.collapse(), left, epsilon = 1e-12);
    assert_relative_eq!(stack.collapse(), right, epsilon = 1e-12);
}

#[test]
fn test_2d_rotation_about_z() {
    let path = rectangle(2.0, 2.0).rotate(FRAC_PI_2).to_path();
    // (1,1) corner lands on (-1,1)
    assert_relative_eq!(path[2].x, -1.0, epsilon = 1e-12);
    assert_relative_eq!(path[2].y, 1.0, epsilon = 1e-12);
}

#[test]
fn test_meshes_are_snapshots() {
    let mut shape = sphere(1.0);
    let before = shape.to_mesh_with(6);
    shape.push_transform(affine::translation(0.0, 0.0, 5.0));
    let after = shape.to_mesh_with(6);

    assert_relative_eq!(before.bounding_box().center().z, 0.0, epsilon = 1e-12);
    assert_relative_eq!(after.bounding_box().center().z, 5.0, epsilon = 1e-12);
}
