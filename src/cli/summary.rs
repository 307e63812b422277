// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Per-item scene summaries

use crate::geometry::{BooleanOp, BoundingBox, Item, Item3D};
use crate::scene::Scene3D;

/// What `describe` reports for one scene item
#[derive(Debug, Clone, PartialEq)]
pub enum ItemSummary {
    Shape {
        kind: &'static str,
        transforms: usize,
        vertices: usize,
        faces: usize,
        bounds: BoundingBox,
    },
    /// Composites are listed but never tessellated
    Composite {
        operation: BooleanOp,
        operands: usize,
    },
}

impl ItemSummary {
    pub fn of(item: &Item3D, segments: u32) -> Self {
        match item {
            Item::Shape(shape) => {
                let mesh = shape.to_mesh_with(segments);
                ItemSummary::Shape {
                    kind: shape.kind.name(),
                    transforms: shape.transforms.len(),
                    vertices: mesh.vertex_count(),
                    faces: mesh.face_count(),
                    bounds: mesh.bounding_box(),
                }
            }
            Item::Composite(composite) => ItemSummary::Composite {
                operation: composite.operation,
                operands: composite.shapes.len(),
            },
        }
    }
}

pub fn summarize_scene(scene: &Scene3D, segments: u32) -> Vec<ItemSummary> {
    scene
        .items()
        .iter()
        .map(|item| ItemSummary::of(item, segments))
        .collect()
}
