// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! 2D shapes and their path tessellation

use super::affine::{self, Point2, Point3};
use super::primitives::{self, DEFAULT_PATH_SEGMENTS};
use super::TransformStack;
use nalgebra::Matrix4;

/// 2D primitive kinds and their parameters
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive2D {
    Rectangle { width: f64, height: f64 },
    Circle { radius: f64 },
    Polygon { points: Vec<[f64; 2]> },
    Ellipse { radius_x: f64, radius_y: f64 },
    RoundedRectangle { width: f64, height: f64, radius: f64 },
    Star { points: u32, outer_radius: f64, inner_radius: f64 },
}

impl Primitive2D {
    /// Kind name used in descriptions
    pub fn name(&self) -> &'static str {
        match self {
            Primitive2D::Rectangle { .. } => "rectangle",
            Primitive2D::Circle { .. } => "circle",
            Primitive2D::Polygon { .. } => "polygon",
            Primitive2D::Ellipse { .. } => "ellipse",
            Primitive2D::RoundedRectangle { .. } => "rounded_rectangle",
            Primitive2D::Star { .. } => "star",
        }
    }

    /// Local-frame boundary path
    pub fn tessellate(&self, segments: u32) -> Vec<Point2> {
        match self {
            Primitive2D::Rectangle { width, height } => primitives::rectangle_path(*width, *height),
            Primitive2D::Circle { radius } => primitives::circle_path(*radius, segments),
            Primitive2D::Polygon { points } => primitives::polygon_path(points),
            Primitive2D::Ellipse { radius_x, radius_y } => {
                primitives::ellipse_path(*radius_x, *radius_y, segments)
            }
            Primitive2D::RoundedRectangle {
                width,
                height,
                radius,
            } => primitives::rounded_rectangle_path(*width, *height, *radius, segments),
            Primitive2D::Star {
                points,
                outer_radius,
                inner_radius,
            } => primitives::star_path(*points, *outer_radius, *inner_radius),
        }
    }
}

/// A 2D primitive plus its transform stack.
///
/// Builder calls consume and return the shape; see [`TransformStack`] for
/// how the accumulated transforms combine.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape2D {
    pub kind: Primitive2D,
    pub transforms: TransformStack,
}

impl Shape2D {
    pub fn new(kind: Primitive2D) -> Self {
        Self {
            kind,
            transforms: TransformStack::new(),
        }
    }

    pub fn translate(mut self, x: f64, y: f64) -> Self {
        self.push_transform(affine::translation(x, y, 0.0));
        self
    }

    /// Rotate about the Z axis
    pub fn rotate(mut self, radians: f64) -> Self {
        self.push_transform(affine::rotation_z(radians));
        self
    }

    pub fn scale(mut self, x: f64, y: f64) -> Self {
        self.push_transform(affine::scaling(x, y, 1.0));
        self
    }

    pub fn scale_uniform(self, factor: f64) -> Self {
        self.scale(factor, factor)
    }

    /// Append an arbitrary matrix
    pub fn transform(mut self, matrix: Matrix4<f64>) -> Self {
        self.push_transform(matrix);
        self
    }

    /// In-place variant for shapes held by reference
    pub fn push_transform(&mut self, matrix: Matrix4<f64>) {
        self.transforms.push(matrix);
    }

    /// Boundary path at the default resolution
    pub fn to_path(&self) -> Vec<Point2> {
        self.to_path_with(DEFAULT_PATH_SEGMENTS)
    }

    /// Boundary path in world space.
    ///
    /// Points are lifted to `z = 0`, pushed through the collapsed transform
    /// and projected back onto XY.
    pub fn to_path_with(&self, segments: u32) -> Vec<Point2> {
        let mut lifted: Vec<Point3> = self
            .kind
            .tessellate(segments)
            .into_iter()
            .map(|p| Point3::new(p.x, p.y, 0.0))
            .collect();
        self.transforms.apply(&mut lifted);
        let path: Vec<Point2> = lifted.iter().map(|p| Point2::new(p.x, p.y)).collect();

        tracing::trace!(
            kind = self.kind.name(),
            segments,
            points = path.len(),
            "tessellated 2D path"
        );
        path
    }
}

pub fn rectangle(width: f64, height: f64) -> Shape2D {
    Shape2D::new(Primitive2D::Rectangle { width, height })
}

pub fn circle(radius: f64) -> Shape2D {
    Shape2D::new(Primitive2D::Circle { radius })
}

pub fn polygon(points: Vec<[f64; 2]>) -> Shape2D {
    Shape2D::new(Primitive2D::Polygon { points })
}

pub fn ellipse(radius_x: f64, radius_y: f64) -> Shape2D {
    Shape2D::new(Primitive2D::Ellipse { radius_x, radius_y })
}

pub fn rounded_rectangle(width: f64, height: f64, radius: f64) -> Shape2D {
    Shape2D::new(Primitive2D::RoundedRectangle {
        width,
        height,
        radius,
    })
}

pub fn star(points: u32, outer_radius: f64, inner_radius: f64) -> Shape2D {
    Shape2D::new(Primitive2D::Star {
        points,
        outer_radius,
        inner_radius,
    })
}
