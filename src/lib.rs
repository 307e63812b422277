// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Polyshape Modeling Kernel
//!
//! Procedural solid modeling: parametric 2D and 3D primitives carrying affine
//! transform stacks, tessellated into polygon meshes and written out as
//! ISO 10303-21 (STEP) exchange documents or binary STL.
//!
//! Boolean composites are recorded as description nodes only; nothing in the
//! kernel evaluates them geometrically.

pub mod cli;
pub mod config;
pub mod error;
pub mod geometry;
pub mod io;
pub mod scene;

pub use config::{ExportConfig, ExportFormat};
pub use error::{KernelError, Result};
pub use geometry::{
    circle, cone, cuboid, cylinder, ellipse, extrude, intersect, polygon, rectangle,
    rounded_rectangle, sphere, star, subtract, union, BooleanOp, BoundingBox, Face, Item2D,
    Item3D, Mesh, Shape2D, Shape3D,
};
pub use io::{import_scene_file, parse_scene, write_document, Describe, StepOptions};
pub use scene::{Scene2D, Scene3D};

/// Tessellate every shape and render one exchange document
pub fn render_step(shapes: &[Shape3D], options: &StepOptions) -> String {
    let meshes: Vec<Mesh> = shapes.iter().map(Shape3D::to_mesh).collect();
    write_document(&meshes, options)
}
