// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Geometry module - transforms, shapes, tessellation and meshes

pub mod affine;
mod bbox;
mod boolean;
mod mesh;
pub mod primitives;
mod shape2d;
mod shape3d;
mod transform;

pub use affine::{Point2, Point3, Vec2, Vec3};
pub use bbox::BoundingBox;
pub use boolean::{
    intersect, intersect2d, subtract, subtract2d, union, union2d, BooleanOp, Composite,
    CompositeShape2D, CompositeShape3D, Item, Item2D, Item3D,
};
pub use mesh::{Face, Mesh, Triangle};
pub use primitives::{DEFAULT_MESH_SEGMENTS, DEFAULT_PATH_SEGMENTS};
pub use shape2d::{circle, ellipse, polygon, rectangle, rounded_rectangle, star, Primitive2D, Shape2D};
pub use shape3d::{cone, cuboid, cylinder, extrude, sphere, Primitive3D, Shape3D};
pub use transform::TransformStack;
