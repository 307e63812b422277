// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Scene containers
//!
//! A scene is an ordered list of items. Tessellation walks the items in order
//! and stops at the first composite, since composites carry no geometry.

use crate::error::{KernelError, Result};
use crate::geometry::{
    BooleanOp, Composite, Item, Mesh, Point2, Shape2D, Shape3D, DEFAULT_MESH_SEGMENTS,
    DEFAULT_PATH_SEGMENTS,
};
use crate::io::{write_document, Describe, SceneDescription, ShapeDescription, StepOptions};
use rayon::prelude::*;

/// Shape types a scene can hold
pub trait SceneShape:
    Describe<Description = ShapeDescription> + TryFrom<ShapeDescription, Error = KernelError>
{
    /// Document type tag in scene descriptions
    const SCENE_KIND: &'static str;
}

impl SceneShape for Shape2D {
    const SCENE_KIND: &'static str = "scene2d";
}

impl SceneShape for Shape3D {
    const SCENE_KIND: &'static str = "scene3d";
}

#[derive(Debug, Clone, PartialEq)]
pub struct Scene<S> {
    items: Vec<Item<S>>,
}

pub type Scene2D = Scene<Shape2D>;
pub type Scene3D = Scene<Shape3D>;

impl<S> Default for Scene<S> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<S> Scene<S> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a shape or composite
    pub fn add(&mut self, item: impl Into<Item<S>>) -> &mut Self {
        self.items.push(item.into());
        self
    }

    /// Build a union composite. The scene itself is left untouched; pass the
    /// result to [`Scene::add`] to keep it.
    pub fn union(&self, shapes: Vec<Item<S>>) -> Composite<Item<S>> {
        Composite::new(BooleanOp::Union, shapes)
    }

    /// `base` minus every cut, in order. Not added to the scene.
    pub fn subtract(&self, base: impl Into<Item<S>>, cuts: Vec<Item<S>>) -> Composite<Item<S>> {
        let mut shapes = Vec::with_capacity(cuts.len() + 1);
        shapes.push(base.into());
        shapes.extend(cuts);
        Composite::new(BooleanOp::Subtract, shapes)
    }

    pub fn intersect(&self, shapes: Vec<Item<S>>) -> Composite<Item<S>> {
        Composite::new(BooleanOp::Intersect, shapes)
    }

    pub fn items(&self) -> &[Item<S>] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Every item as a plain shape, or the first composite's position
    fn shapes(&self) -> Result<Vec<&S>> {
        self.items
            .iter()
            .enumerate()
            .map(|(index, item)| match item {
                Item::Shape(shape) => Ok(shape),
                Item::Composite(composite) => Err(KernelError::NonTessellableItem {
                    index,
                    operation: composite.operation,
                }),
            })
            .collect()
    }
}

impl Scene3D {
    /// One mesh per item at the default resolution
    pub fn to_meshes(&self) -> Result<Vec<Mesh>> {
        self.to_meshes_with(DEFAULT_MESH_SEGMENTS)
    }

    pub fn to_meshes_with(&self, segments: u32) -> Result<Vec<Mesh>> {
        let shapes = self.shapes()?;
        tracing::debug!(items = shapes.len(), segments, "tessellating scene");
        Ok(shapes
            .into_iter()
            .map(|shape| shape.to_mesh_with(segments))
            .collect())
    }

    pub fn to_meshes_parallel(&self) -> Result<Vec<Mesh>> {
        self.to_meshes_parallel_with(DEFAULT_MESH_SEGMENTS)
    }

    /// Same output as [`Scene3D::to_meshes_with`], items tessellated on the
    /// rayon pool. Mesh order follows item order.
    pub fn to_meshes_parallel_with(&self, segments: u32) -> Result<Vec<Mesh>> {
        let shapes = self.shapes()?;
        tracing::debug!(
            items = shapes.len(),
            segments,
            threads = rayon::current_num_threads(),
            "tessellating scene in parallel"
        );
        Ok(shapes
            .par_iter()
            .map(|shape| shape.to_mesh_with(segments))
            .collect())
    }

    /// Exchange document holding every item of the scene
    pub fn export_step(&self, options: &StepOptions) -> Result<String> {
        Ok(write_document(&self.to_meshes()?, options))
    }
}

impl Scene2D {
    pub fn to_paths(&self) -> Result<Vec<Vec<Point2>>> {
        self.to_paths_with(DEFAULT_PATH_SEGMENTS)
    }

    pub fn to_paths_with(&self, segments: u32) -> Result<Vec<Vec<Point2>>> {
        let shapes = self.shapes()?;
        tracing::debug!(items = shapes.len(), segments, "tessellating 2D scene");
        Ok(shapes
            .into_iter()
            .map(|shape| shape.to_path_with(segments))
            .collect())
    }
}

impl<S: SceneShape> Describe for Scene<S> {
    type Description = SceneDescription;

    fn describe(&self) -> SceneDescription {
        SceneDescription {
            kind: S::SCENE_KIND.to_string(),
            items: self.items.iter().map(Describe::describe).collect(),
        }
    }
}

impl<S: SceneShape> TryFrom<SceneDescription> for Scene<S> {
    type Error = KernelError;

    fn try_from(description: SceneDescription) -> Result<Self> {
        if description.kind != S::SCENE_KIND {
            return Err(KernelError::UnexpectedDocument {
                expected: S::SCENE_KIND.to_string(),
                found: description.kind,
            });
        }
        let items = description
            .items
            .into_iter()
            .map(Item::try_from)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { items })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{circle, cone, cuboid, rectangle, sphere, Item3D};

    fn sample_scene() -> Scene3D {
        let mut scene = Scene3D::new();
        scene
            .add(cuboid(2.0, 2.0, 2.0))
            .add(sphere(1.0).translate(4.0, 0.0, 0.0))
            .add(cone(1.0, 3.0).rotate_x(0.4));
        scene
    }

    #[test]
    fn test_meshes_follow_item_order() {
        let meshes = sample_scene().to_meshes().unwrap();
        assert_eq!(meshes.len(), 3);
        assert_eq!(meshes[0].vertex_count(), 8);
        assert_eq!(meshes[1].vertex_count(), 17 * 17);
        assert_eq!(meshes[2].vertex_count(), 18);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let scene = sample_scene();
        assert_eq!(
            scene.to_meshes_parallel_with(24).unwrap(),
            scene.to_meshes_with(24).unwrap()
        );
    }

    #[test]
    fn test_composite_item_is_not_tessellable() {
        let mut scene = sample_scene();
        let cut = scene.subtract(cuboid(4.0, 4.0, 4.0), vec![Item3D::from(sphere(2.5))]);
        scene.add(cut);

        match scene.to_meshes() {
            Err(KernelError::NonTessellableItem { index, operation }) => {
                assert_eq!(index, 3);
                assert_eq!(operation, BooleanOp::Subtract);
            }
            other => panic!("unexpected result: {:?}", other),
        }
        assert!(scene.to_meshes_parallel().is_err());
        assert!(scene.export_step(&StepOptions::default()).is_err());
    }

    #[test]
    fn test_boolean_helpers_leave_items_alone() {
        let mut scene = Scene3D::new();
        scene.add(cuboid(1.0, 1.0, 1.0));

        let composite = scene.union(vec![sphere(1.0).into(), cuboid(1.0, 1.0, 1.0).into()]);
        assert_eq!(composite.operation, BooleanOp::Union);
        assert_eq!(composite.shapes.len(), 2);
        assert_eq!(
            scene.subtract(cuboid(2.0, 2.0, 2.0), vec![sphere(1.0).into()]).shapes.len(),
            2
        );
        scene.intersect(vec![sphere(1.0).into()]);

        assert_eq!(scene.len(), 1);
        assert_eq!(scene.to_meshes().unwrap().len(), 1);
        assert!(scene.export_step(&StepOptions::default()).is_ok());
    }

    #[test]
    fn test_2d_paths() {
        let mut scene = Scene2D::new();
        scene.add(rectangle(1.0, 1.0)).add(circle(1.0));
        let paths = scene.to_paths().unwrap();
        assert_eq!(paths[0].len(), 4);
        assert_eq!(paths[1].len(), DEFAULT_PATH_SEGMENTS as usize);

        let merged = scene.union(vec![rectangle(1.0, 1.0).into(), circle(1.0).into()]);
        scene.add(merged);
        assert!(scene.to_paths().is_err());
    }

    #[test]
    fn test_describe_round_trip() {
        let mut scene = sample_scene();
        let overlap = scene.intersect(vec![cuboid(1.0, 1.0, 1.0).into(), sphere(0.7).into()]);
        scene.add(overlap);

        let description = scene.describe();
        assert_eq!(description.kind, "scene3d");
        assert_eq!(Scene3D::try_from(description).unwrap(), scene);
    }

    #[test]
    fn test_scene_kind_mismatch() {
        let mut scene = Scene2D::new();
        scene.add(circle(1.0));
        let result = Scene3D::try_from(scene.describe());
        assert!(matches!(
            result,
            Err(KernelError::UnexpectedDocument { ref found, .. }) if found == "scene2d"
        ));
    }
}
