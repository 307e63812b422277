// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! 3D shapes and their mesh tessellation

use super::affine;
use super::primitives::{self, DEFAULT_MESH_SEGMENTS};
use super::{Mesh, Shape2D, TransformStack};
use crate::io::{write_document, StepOptions};
use nalgebra::Matrix4;

/// 3D primitive kinds and their parameters
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive3D {
    Box { width: f64, height: f64, depth: f64 },
    Sphere { radius: f64 },
    Cylinder { radius: f64, height: f64 },
    Cone { radius: f64, height: f64 },
    /// Owns a complete 2D shape, transforms included
    Extrude { shape: Shape2D, height: f64 },
}

impl Primitive3D {
    /// Kind name used in descriptions
    pub fn name(&self) -> &'static str {
        match self {
            Primitive3D::Box { .. } => "box",
            Primitive3D::Sphere { .. } => "sphere",
            Primitive3D::Cylinder { .. } => "cylinder",
            Primitive3D::Cone { .. } => "cone",
            Primitive3D::Extrude { .. } => "extrude",
        }
    }

    /// Local-frame mesh. An extruded profile is tessellated with the same
    /// segment count, its own transforms applied.
    pub fn tessellate(&self, segments: u32) -> Mesh {
        match self {
            Primitive3D::Box {
                width,
                height,
                depth,
            } => primitives::box_mesh(*width, *height, *depth),
            Primitive3D::Sphere { radius } => primitives::sphere_mesh(*radius, segments),
            Primitive3D::Cylinder { radius, height } => {
                primitives::cylinder_mesh(*radius, *height, segments)
            }
            Primitive3D::Cone { radius, height } => primitives::cone_mesh(*radius, *height, segments),
            Primitive3D::Extrude { shape, height } => {
                primitives::extrude_mesh(&shape.to_path_with(segments), *height)
            }
        }
    }
}

/// A 3D primitive plus its transform stack.
///
/// `cuboid(..).translate(..).rotate_z(..)` collapses to `T · R`, so the
/// rotation acts on the local box first. See [`TransformStack`].
#[derive(Debug, Clone, PartialEq)]
pub struct Shape3D {
    pub kind: Primitive3D,
    pub transforms: TransformStack,
}

impl Shape3D {
    pub fn new(kind: Primitive3D) -> Self {
        Self {
            kind,
            transforms: TransformStack::new(),
        }
    }

    pub fn translate(mut self, x: f64, y: f64, z: f64) -> Self {
        self.push_transform(affine::translation(x, y, z));
        self
    }

    pub fn rotate_x(mut self, radians: f64) -> Self {
        self.push_transform(affine::rotation_x(radians));
        self
    }

    pub fn rotate_y(mut self, radians: f64) -> Self {
        self.push_transform(affine::rotation_y(radians));
        self
    }

    pub fn rotate_z(mut self, radians: f64) -> Self {
        self.push_transform(affine::rotation_z(radians));
        self
    }

    pub fn scale(mut self, x: f64, y: f64, z: f64) -> Self {
        self.push_transform(affine::scaling(x, y, z));
        self
    }

    pub fn scale_uniform(self, factor: f64) -> Self {
        self.scale(factor, factor, factor)
    }

    pub fn transform(mut self, matrix: Matrix4<f64>) -> Self {
        self.push_transform(matrix);
        self
    }

    pub fn push_transform(&mut self, matrix: Matrix4<f64>) {
        self.transforms.push(matrix);
    }

    /// Mesh at the default resolution
    pub fn to_mesh(&self) -> Mesh {
        self.to_mesh_with(DEFAULT_MESH_SEGMENTS)
    }

    /// Tessellate in the local frame, then move every vertex by the freshly
    /// collapsed transform stack.
    pub fn to_mesh_with(&self, segments: u32) -> Mesh {
        let mut mesh = self.kind.tessellate(segments);
        mesh.transform(&self.transforms.collapse());

        tracing::trace!(
            kind = self.kind.name(),
            segments,
            vertices = mesh.vertex_count(),
            faces = mesh.face_count(),
            "tessellated 3D shape"
        );
        mesh
    }

    /// Exchange document for this shape alone
    pub fn to_step(&self, options: &StepOptions) -> String {
        write_document(&[self.to_mesh()], options)
    }
}

/// Axis-aligned box; `box` is a keyword, hence the name
pub fn cuboid(width: f64, height: f64, depth: f64) -> Shape3D {
    Shape3D::new(Primitive3D::Box {
        width,
        height,
        depth,
    })
}

pub fn sphere(radius: f64) -> Shape3D {
    Shape3D::new(Primitive3D::Sphere { radius })
}

pub fn cylinder(radius: f64, height: f64) -> Shape3D {
    Shape3D::new(Primitive3D::Cylinder { radius, height })
}

pub fn cone(radius: f64, height: f64) -> Shape3D {
    Shape3D::new(Primitive3D::Cone { radius, height })
}

pub fn extrude(shape: Shape2D, height: f64) -> Shape3D {
    Shape3D::new(Primitive3D::Extrude { shape, height })
}
