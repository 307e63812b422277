// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Boolean composite description nodes
//!
//! A composite only records the operation and its operands. Nothing here
//! clips, intersects or merges geometry, and composites have no mesh.

use super::{Shape2D, Shape3D};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BooleanOp {
    Union,
    Subtract,
    Intersect,
}

impl BooleanOp {
    pub fn as_str(&self) -> &'static str {
        match self {
            BooleanOp::Union => "union",
            BooleanOp::Subtract => "subtract",
            BooleanOp::Intersect => "intersect",
        }
    }
}

impl fmt::Display for BooleanOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unevaluated boolean node over an ordered operand list
#[derive(Debug, Clone, PartialEq)]
pub struct Composite<T> {
    pub operation: BooleanOp,
    pub shapes: Vec<T>,
}

impl<T> Composite<T> {
    pub fn new(operation: BooleanOp, shapes: Vec<T>) -> Self {
        Self { operation, shapes }
    }
}

/// Anything a scene can hold: a primitive shape or a composite of items
#[derive(Debug, Clone, PartialEq)]
pub enum Item<S> {
    Shape(S),
    Composite(Composite<Item<S>>),
}

impl<S> Item<S> {
    pub fn as_shape(&self) -> Option<&S> {
        match self {
            Item::Shape(shape) => Some(shape),
            Item::Composite(_) => None,
        }
    }

    pub fn is_composite(&self) -> bool {
        matches!(self, Item::Composite(_))
    }
}

pub type Item2D = Item<Shape2D>;
pub type Item3D = Item<Shape3D>;
pub type CompositeShape2D = Composite<Item2D>;
pub type CompositeShape3D = Composite<Item3D>;

impl From<Shape2D> for Item2D {
    fn from(shape: Shape2D) -> Self {
        Item::Shape(shape)
    }
}

impl From<CompositeShape2D> for Item2D {
    fn from(composite: CompositeShape2D) -> Self {
        Item::Composite(composite)
    }
}

impl From<Shape3D> for Item3D {
    fn from(shape: Shape3D) -> Self {
        Item::Shape(shape)
    }
}

impl From<CompositeShape3D> for Item3D {
    fn from(composite: CompositeShape3D) -> Self {
        Item::Composite(composite)
    }
}

fn with_base<S>(base: Item<S>, cuts: Vec<Item<S>>) -> Vec<Item<S>> {
    let mut shapes = Vec::with_capacity(cuts.len() + 1);
    shapes.push(base);
    shapes.extend(cuts);
    shapes
}

pub fn union(shapes: Vec<Item3D>) -> CompositeShape3D {
    Composite::new(BooleanOp::Union, shapes)
}

/// `base` minus every cut, in order
pub fn subtract(base: impl Into<Item3D>, cuts: Vec<Item3D>) -> CompositeShape3D {
    Composite::new(BooleanOp::Subtract, with_base(base.into(), cuts))
}

pub fn intersect(shapes: Vec<Item3D>) -> CompositeShape3D {
    Composite::new(BooleanOp::Intersect, shapes)
}

pub fn union2d(shapes: Vec<Item2D>) -> CompositeShape2D {
    Composite::new(BooleanOp::Union, shapes)
}

pub fn subtract2d(base: impl Into<Item2D>, cuts: Vec<Item2D>) -> CompositeShape2D {
    Composite::new(BooleanOp::Subtract, with_base(base.into(), cuts))
}

pub fn intersect2d(shapes: Vec<Item2D>) -> CompositeShape2D {
    Composite::new(BooleanOp::Intersect, shapes)
}
