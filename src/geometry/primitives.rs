// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Primitive tessellators
//!
//! Each function works in the shape's local frame and knows nothing about
//! transforms. Inputs are not validated: zero or negative sizes and tiny
//! segment counts simply produce whatever the arithmetic gives.

use super::affine::{Point2, Point3};
use super::{Face, Mesh};
use std::f64::consts::{FRAC_PI_2, PI, TAU};

/// Default resolution for 2D paths
pub const DEFAULT_PATH_SEGMENTS: u32 = 32;

/// Default resolution for 3D meshes
pub const DEFAULT_MESH_SEGMENTS: u32 = 16;

/// Four corners, counter-clockwise from the bottom-left, centered on the origin
pub fn rectangle_path(width: f64, height: f64) -> Vec<Point2> {
    let hx = width / 2.0;
    let hy = height / 2.0;
    vec![
        Point2::new(-hx, -hy),
        Point2::new(hx, -hy),
        Point2::new(hx, hy),
        Point2::new(-hx, hy),
    ]
}

/// `segments` points at angles `2π·i/segments`, starting on +X
pub fn circle_path(radius: f64, segments: u32) -> Vec<Point2> {
    ellipse_path(radius, radius, segments)
}

pub fn ellipse_path(radius_x: f64, radius_y: f64, segments: u32) -> Vec<Point2> {
    (0..segments)
        .map(|i| {
            let theta = TAU * i as f64 / segments as f64;
            Point2::new(theta.cos() * radius_x, theta.sin() * radius_y)
        })
        .collect()
}

/// Vertices verbatim, order preserved
pub fn polygon_path(points: &[[f64; 2]]) -> Vec<Point2> {
    points.iter().map(|p| Point2::new(p[0], p[1])).collect()
}

/// Rectangle whose corners are quarter-circle arcs of `radius`.
///
/// Each corner gets `max(segments / 4, 1)` steps, so `steps + 1` points, and
/// the path runs counter-clockwise from the bottom edge of the bottom-right
/// corner. A radius larger than half the shorter side self-overlaps.
pub fn rounded_rectangle_path(width: f64, height: f64, radius: f64, segments: u32) -> Vec<Point2> {
    let hx = width / 2.0 - radius;
    let hy = height / 2.0 - radius;
    let steps = (segments / 4).max(1);
    let corners = [
        (hx, -hy, -FRAC_PI_2),
        (hx, hy, 0.0),
        (-hx, hy, FRAC_PI_2),
        (-hx, -hy, PI),
    ];

    let mut points = Vec::with_capacity(4 * (steps as usize + 1));
    for (cx, cy, start) in corners {
        for step in 0..=steps {
            let theta = start + FRAC_PI_2 * step as f64 / steps as f64;
            points.push(Point2::new(cx + theta.cos() * radius, cy + theta.sin() * radius));
        }
    }
    points
}

/// `2·points` vertices alternating outer and inner radius, first one on +X
pub fn star_path(points: u32, outer_radius: f64, inner_radius: f64) -> Vec<Point2> {
    let count = points * 2;
    (0..count)
        .map(|k| {
            let theta = PI * k as f64 / points as f64;
            let r = if k % 2 == 0 { outer_radius } else { inner_radius };
            Point2::new(theta.cos() * r, theta.sin() * r)
        })
        .collect()
}

/// Axis-aligned cuboid centered on the origin: 8 corners, 6 outward quads
pub fn box_mesh(width: f64, height: f64, depth: f64) -> Mesh {
    let hx = width / 2.0;
    let hy = height / 2.0;
    let hz = depth / 2.0;

    let mut mesh = Mesh::with_capacity(8, 6);
    for (x, y, z) in [
        (-hx, -hy, -hz),
        (hx, -hy, -hz),
        (hx, hy, -hz),
        (-hx, hy, -hz),
        (-hx, -hy, hz),
        (hx, -hy, hz),
        (hx, hy, hz),
        (-hx, hy, hz),
    ] {
        mesh.add_vertex(Point3::new(x, y, z));
    }

    // -z, +z, -y, +y, +x, -x
    mesh.add_face(Face::quad(0, 3, 2, 1));
    mesh.add_face(Face::quad(4, 5, 6, 7));
    mesh.add_face(Face::quad(0, 1, 5, 4));
    mesh.add_face(Face::quad(2, 3, 7, 6));
    mesh.add_face(Face::quad(1, 2, 6, 5));
    mesh.add_face(Face::quad(0, 4, 7, 3));
    mesh
}

/// UV sphere around +Z.
///
/// `segments + 1` latitude rings from the +Z pole to the -Z pole, each with
/// `segments + 1` longitude samples. The last column repeats the first (an
/// explicit seam) instead of wrapping indices, and the pole rings collapse to
/// a point, so pole quads are degenerate.
pub fn sphere_mesh(radius: f64, segments: u32) -> Mesh {
    let ring = segments as usize + 1;
    let mut mesh = Mesh::with_capacity(ring * ring, (ring - 1) * (ring - 1));

    for lat in 0..=segments {
        let theta = lat as f64 * PI / segments as f64;
        let (sin_theta, cos_theta) = theta.sin_cos();
        for lon in 0..=segments {
            let phi = lon as f64 * TAU / segments as f64;
            let (sin_phi, cos_phi) = phi.sin_cos();
            mesh.add_vertex(Point3::new(
                radius * cos_phi * sin_theta,
                radius * sin_phi * sin_theta,
                radius * cos_theta,
            ));
        }
    }

    for lat in 0..segments as usize {
        for lon in 0..segments as usize {
            let first = lat * ring + lon;
            let second = first + ring;
            mesh.add_face(Face::quad(first, second, second + 1, first + 1));
        }
    }
    mesh
}

/// Cylinder along Z between `±height/2`.
///
/// Ring vertices are interleaved (bottom at `2i`, top at `2i + 1`), followed
/// by the top cap center and the bottom cap center. Each segment emits a side
/// quad, a top fan triangle and a bottom fan triangle, in that order.
pub fn cylinder_mesh(radius: f64, height: f64, segments: u32) -> Mesh {
    let half = height / 2.0;
    let n = segments as usize;
    let mut mesh = Mesh::with_capacity(2 * n + 2, 3 * n);

    for i in 0..segments {
        let theta = TAU * i as f64 / segments as f64;
        let (x, y) = (theta.cos() * radius, theta.sin() * radius);
        mesh.add_vertex(Point3::new(x, y, -half));
        mesh.add_vertex(Point3::new(x, y, half));
    }
    let top_center = mesh.add_vertex(Point3::new(0.0, 0.0, half));
    let bottom_center = mesh.add_vertex(Point3::new(0.0, 0.0, -half));

    for i in 0..n {
        let next = (i + 1) % n;
        mesh.add_face(Face::quad(i * 2, next * 2, next * 2 + 1, i * 2 + 1));
        mesh.add_face(Face::triangle(top_center, i * 2 + 1, next * 2 + 1));
        mesh.add_face(Face::triangle(bottom_center, next * 2, i * 2));
    }
    mesh
}

/// Cone along Z: base ring at `-height/2`, apex at `+height/2`.
///
/// Vertices are the ring, then the apex, then the base center.
pub fn cone_mesh(radius: f64, height: f64, segments: u32) -> Mesh {
    let half = height / 2.0;
    let n = segments as usize;
    let mut mesh = Mesh::with_capacity(n + 2, 2 * n);

    for i in 0..segments {
        let theta = TAU * i as f64 / segments as f64;
        mesh.add_vertex(Point3::new(theta.cos() * radius, theta.sin() * radius, -half));
    }
    let apex = mesh.add_vertex(Point3::new(0.0, 0.0, half));
    let base_center = mesh.add_vertex(Point3::new(0.0, 0.0, -half));

    for i in 0..n {
        let next = (i + 1) % n;
        mesh.add_face(Face::triangle(i, next, apex));
        mesh.add_face(Face::triangle(base_center, next, i));
    }
    mesh
}

/// Sweep a closed 2D path along Z between `±height/2`.
///
/// Emits the bottom copy of the path, then the top copy, and one quad per
/// path edge. No caps are generated: the result is an open tube.
pub fn extrude_mesh(path: &[Point2], height: f64) -> Mesh {
    let half = height / 2.0;
    let count = path.len();
    let mut mesh = Mesh::with_capacity(2 * count, count);

    for z in [-half, half] {
        for point in path {
            mesh.add_vertex(Point3::new(point.x, point.y, z));
        }
    }
    for i in 0..count {
        let next = (i + 1) % count;
        mesh.add_face(Face::quad(i, next, count + next, count + i));
    }
    mesh
}
