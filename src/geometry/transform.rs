// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Per-shape transform stack

use super::affine::{self, Point3};
use nalgebra::Matrix4;

/// Ordered list of affine matrices attached to a shape.
///
/// Matrices are kept uncollapsed. [`TransformStack::collapse`] folds them
/// left to right from identity (`acc = acc · next`), so the first pushed
/// matrix sits next to the identity and the product reads
/// `M1 · M2 · ... · Mn`. Acting on a column point, `Mn` touches the local
/// geometry first and `M1` is the outermost, world-space step, the same
/// nesting as writing `translate(..) rotate(..) shape` in a scene tree.
/// Order matters: pushing `translate` then `rotate` is not the same as
/// pushing `rotate` then `translate`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransformStack {
    matrices: Vec<Matrix4<f64>>,
}

impl TransformStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a transform
    pub fn push(&mut self, matrix: Matrix4<f64>) {
        self.matrices.push(matrix);
    }

    pub fn len(&self) -> usize {
        self.matrices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matrices.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Matrix4<f64>> {
        self.matrices.iter()
    }

    /// Collapse the stack into one matrix, starting from identity.
    ///
    /// Recomputed on every call; nothing is cached.
    pub fn collapse(&self) -> Matrix4<f64> {
        self.matrices
            .iter()
            .fold(affine::identity(), |acc, next| affine::compose(&acc, next))
    }

    /// Apply the collapsed transform to every point
    pub fn apply(&self, points: &mut [Point3]) {
        let matrix = self.collapse();
        for point in points.iter_mut() {
            *point = affine::transform_point(&matrix, point);
        }
    }

    /// Raw row-major elements of each uncollapsed matrix
    pub fn to_row_major(&self) -> Vec<[f64; 16]> {
        self.matrices.iter().map(affine::to_row_major).collect()
    }

    pub fn from_row_major(elements: &[[f64; 16]]) -> Self {
        Self {
            matrices: elements.iter().map(affine::from_row_major).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::affine::{rotation_z, scaling, translation};
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_empty_stack_collapses_to_identity() {
        let stack = TransformStack::new();
        assert!(stack.is_empty());
        assert_eq!(stack.collapse(), Matrix4::identity());
    }

    #[test]
    fn test_first_pushed_is_outermost() {
        let mut stack = TransformStack::new();
        stack.push(translation(1.0, 0.0, 0.0));
        stack.push(rotation_z(FRAC_PI_2));

        let mut points = [Point3::new(1.0, 0.0, 0.0)];
        stack.apply(&mut points);

        // T · R: the point is rotated onto +Y, then shifted along +X
        assert_relative_eq!(points[0], Point3::new(1.0, 1.0, 0.0), epsilon = 1e-12);
        assert_eq!(stack.collapse(), translation(1.0, 0.0, 0.0) * rotation_z(FRAC_PI_2));
    }

    #[test]
    fn test_collapse_is_recomputed_after_push() {
        let mut stack = TransformStack::new();
        stack.push(scaling(2.0, 2.0, 2.0));
        let before = stack.collapse();

        stack.push(translation(0.0, 0.0, 5.0));
        let after = stack.collapse();

        assert_ne!(before, after);
        assert_eq!(stack.len(), 2);
    }

    #[test]
    fn test_row_major_round_trip() {
        let mut stack = TransformStack::new();
        stack.push(translation(1.0, 2.0, 3.0));
        stack.push(rotation_z(0.25));

        let raw = stack.to_row_major();
        assert_eq!(raw.len(), 2);
        assert_eq!(raw[0][3], 1.0);
        assert_eq!(TransformStack::from_row_major(&raw), stack);
    }
}
