// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Mesh representation and utilities

use super::affine::{self, Point3};
use super::BoundingBox;
use nalgebra::{Matrix4, Vector3};
use serde::{Deserialize, Serialize};

/// Polygon face given as indices into the mesh's vertex list.
///
/// Winding is meaningful: counter-clockwise seen from outside.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Face {
    pub indices: Vec<usize>,
}

impl Face {
    pub fn new(indices: Vec<usize>) -> Self {
        Self { indices }
    }

    pub fn triangle(a: usize, b: usize, c: usize) -> Self {
        Self::new(vec![a, b, c])
    }

    pub fn quad(a: usize, b: usize, c: usize, d: usize) -> Self {
        Self::new(vec![a, b, c, d])
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Fan-triangulate from the first index.
    ///
    /// Triangles pass through unchanged; an n-gon becomes
    /// `(v0, vi, vi+1)` for `i` in `1..n-1`. Only correct for convex, planar
    /// faces (every face the tessellators emit is one); concave input
    /// produces overlapping triangles. Faces with fewer than three indices
    /// yield nothing.
    pub fn fan_triangles(&self) -> impl Iterator<Item = Triangle> + '_ {
        let first = self.indices.first().copied().unwrap_or_default();
        self.indices
            .windows(2)
            .skip(1)
            .map(move |pair| Triangle::new([first, pair[0], pair[1]]))
    }
}

/// Triangle defined by three vertex indices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Triangle {
    pub indices: [usize; 3],
}

impl Triangle {
    pub fn new(indices: [usize; 3]) -> Self {
        Self { indices }
    }

    /// Geometric normal from the winding (unnormalized)
    pub fn cross(&self, vertices: &[Point3]) -> Vector3<f64> {
        let v0 = vertices[self.indices[0]];
        let v1 = vertices[self.indices[1]];
        let v2 = vertices[self.indices[2]];
        (v1 - v0).cross(&(v2 - v0))
    }
}

/// Polygon mesh: world-space vertices plus n-gon faces.
///
/// Produced fresh by every tessellation call and owned by the caller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Mesh {
    pub vertices: Vec<Point3>,
    pub faces: Vec<Face>,
}

impl Mesh {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(vertex_count: usize, face_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            faces: Vec::with_capacity(face_count),
        }
    }

    /// Add a vertex and return its index
    pub fn add_vertex(&mut self, position: Point3) -> usize {
        let index = self.vertices.len();
        self.vertices.push(position);
        index
    }

    pub fn add_face(&mut self, face: Face) {
        self.faces.push(face);
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Transform all vertices by a matrix
    pub fn transform(&mut self, matrix: &Matrix4<f64>) {
        for vertex in &mut self.vertices {
            *vertex = affine::transform_point(matrix, vertex);
        }
    }

    /// Fan-triangulate every face, preserving face order
    pub fn triangulate(&self) -> Vec<Triangle> {
        self.faces.iter().flat_map(Face::fan_triangles).collect()
    }

    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::from_points(&self.vertices)
    }
}
