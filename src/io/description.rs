// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Structural self-description of shapes, composites and scenes
//!
//! Descriptions expose each shape's kind, parameters and *uncollapsed*
//! transform list (row-major matrix elements). They exist for inspection and
//! reconstruction, never for tessellation.

use crate::error::{KernelError, Result};
use crate::geometry::{
    BooleanOp, Composite, Item, Primitive2D, Primitive3D, Shape2D, Shape3D, TransformStack,
};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeDescription {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub params: Value,
    #[serde(default)]
    pub transforms: Vec<[f64; 16]>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompositeDescription {
    pub operation: BooleanOp,
    pub shapes: Vec<ItemDescription>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemDescription {
    Shape(ShapeDescription),
    Composite(CompositeDescription),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneDescription {
    /// `scene2d` or `scene3d`
    #[serde(rename = "type")]
    pub kind: String,
    pub items: Vec<ItemDescription>,
}

/// Produce a structural description of a value
pub trait Describe {
    type Description;

    fn describe(&self) -> Self::Description;
}

impl Describe for Shape2D {
    type Description = ShapeDescription;

    fn describe(&self) -> ShapeDescription {
        let params = match &self.kind {
            Primitive2D::Rectangle { width, height } => json!({ "width": width, "height": height }),
            Primitive2D::Circle { radius } => json!({ "radius": radius }),
            Primitive2D::Polygon { points } => json!({ "points": points }),
            Primitive2D::Ellipse { radius_x, radius_y } => {
                json!({ "radius_x": radius_x, "radius_y": radius_y })
            }
            Primitive2D::RoundedRectangle {
                width,
                height,
                radius,
            } => json!({ "width": width, "height": height, "radius": radius }),
            Primitive2D::Star {
                points,
                outer_radius,
                inner_radius,
            } => json!({
                "points": points,
                "outer_radius": outer_radius,
                "inner_radius": inner_radius,
            }),
        };
        ShapeDescription {
            kind: self.kind.name().to_string(),
            params,
            transforms: self.transforms.to_row_major(),
        }
    }
}

impl Describe for Shape3D {
    type Description = ShapeDescription;

    fn describe(&self) -> ShapeDescription {
        let params = match &self.kind {
            Primitive3D::Box {
                width,
                height,
                depth,
            } => json!({ "width": width, "height": height, "depth": depth }),
            Primitive3D::Sphere { radius } => json!({ "radius": radius }),
            Primitive3D::Cylinder { radius, height } | Primitive3D::Cone { radius, height } => {
                json!({ "radius": radius, "height": height })
            }
            Primitive3D::Extrude { shape, height } => {
                json!({ "shape": shape.describe(), "height": height })
            }
        };
        ShapeDescription {
            kind: self.kind.name().to_string(),
            params,
            transforms: self.transforms.to_row_major(),
        }
    }
}

impl<S> Describe for Item<S>
where
    S: Describe<Description = ShapeDescription>,
{
    type Description = ItemDescription;

    fn describe(&self) -> ItemDescription {
        match self {
            Item::Shape(shape) => ItemDescription::Shape(shape.describe()),
            Item::Composite(composite) => ItemDescription::Composite(composite.describe()),
        }
    }
}

impl<S> Describe for Composite<Item<S>>
where
    S: Describe<Description = ShapeDescription>,
{
    type Description = CompositeDescription;

    fn describe(&self) -> CompositeDescription {
        CompositeDescription {
            operation: self.operation,
            shapes: self.shapes.iter().map(Describe::describe).collect(),
        }
    }
}

#[derive(Deserialize)]
struct RectParams {
    width: f64,
    height: f64,
}

#[derive(Deserialize)]
struct RadiusParams {
    radius: f64,
}

#[derive(Deserialize)]
struct PolygonParams {
    points: Vec<[f64; 2]>,
}

#[derive(Deserialize)]
struct EllipseParams {
    radius_x: f64,
    radius_y: f64,
}

#[derive(Deserialize)]
struct RoundedRectParams {
    width: f64,
    height: f64,
    radius: f64,
}

#[derive(Deserialize)]
struct StarParams {
    points: u32,
    outer_radius: f64,
    inner_radius: f64,
}

#[derive(Deserialize)]
struct BoxParams {
    width: f64,
    height: f64,
    depth: f64,
}

#[derive(Deserialize)]
struct RoundParams {
    radius: f64,
    height: f64,
}

#[derive(Deserialize)]
struct ExtrudeParams {
    shape: ShapeDescription,
    height: f64,
}

fn parse_params<T: DeserializeOwned>(kind: &str, params: Value) -> Result<T> {
    serde_json::from_value(params).map_err(|source| KernelError::InvalidParameters {
        kind: kind.to_string(),
        source,
    })
}

impl TryFrom<ShapeDescription> for Shape2D {
    type Error = KernelError;

    fn try_from(description: ShapeDescription) -> Result<Self> {
        let ShapeDescription {
            kind,
            params,
            transforms,
        } = description;

        let primitive = match kind.as_str() {
            "rectangle" => {
                let p: RectParams = parse_params(&kind, params)?;
                Primitive2D::Rectangle {
                    width: p.width,
                    height: p.height,
                }
            }
            "circle" => {
                let p: RadiusParams = parse_params(&kind, params)?;
                Primitive2D::Circle { radius: p.radius }
            }
            "polygon" => {
                let p: PolygonParams = parse_params(&kind, params)?;
                Primitive2D::Polygon { points: p.points }
            }
            "ellipse" => {
                let p: EllipseParams = parse_params(&kind, params)?;
                Primitive2D::Ellipse {
                    radius_x: p.radius_x,
                    radius_y: p.radius_y,
                }
            }
            "rounded_rectangle" => {
                let p: RoundedRectParams = parse_params(&kind, params)?;
                Primitive2D::RoundedRectangle {
                    width: p.width,
                    height: p.height,
                    radius: p.radius,
                }
            }
            "star" => {
                let p: StarParams = parse_params(&kind, params)?;
                Primitive2D::Star {
                    points: p.points,
                    outer_radius: p.outer_radius,
                    inner_radius: p.inner_radius,
                }
            }
            _ => return Err(KernelError::UnsupportedPrimitive(kind)),
        };

        Ok(Shape2D {
            kind: primitive,
            transforms: TransformStack::from_row_major(&transforms),
        })
    }
}

impl TryFrom<ShapeDescription> for Shape3D {
    type Error = KernelError;

    fn try_from(description: ShapeDescription) -> Result<Self> {
        let ShapeDescription {
            kind,
            params,
            transforms,
        } = description;

        let primitive = match kind.as_str() {
            "box" => {
                let p: BoxParams = parse_params(&kind, params)?;
                Primitive3D::Box {
                    width: p.width,
                    height: p.height,
                    depth: p.depth,
                }
            }
            "sphere" => {
                let p: RadiusParams = parse_params(&kind, params)?;
                Primitive3D::Sphere { radius: p.radius }
            }
            "cylinder" => {
                let p: RoundParams = parse_params(&kind, params)?;
                Primitive3D::Cylinder {
                    radius: p.radius,
                    height: p.height,
                }
            }
            "cone" => {
                let p: RoundParams = parse_params(&kind, params)?;
                Primitive3D::Cone {
                    radius: p.radius,
                    height: p.height,
                }
            }
            "extrude" => {
                let p: ExtrudeParams = parse_params(&kind, params)?;
                Primitive3D::Extrude {
                    shape: Shape2D::try_from(p.shape)?,
                    height: p.height,
                }
            }
            _ => return Err(KernelError::UnsupportedPrimitive(kind)),
        };

        Ok(Shape3D {
            kind: primitive,
            transforms: TransformStack::from_row_major(&transforms),
        })
    }
}

impl<S> TryFrom<ItemDescription> for Item<S>
where
    S: TryFrom<ShapeDescription, Error = KernelError>,
{
    type Error = KernelError;

    fn try_from(description: ItemDescription) -> Result<Self> {
        match description {
            ItemDescription::Shape(shape) => Ok(Item::Shape(S::try_from(shape)?)),
            ItemDescription::Composite(composite) => {
                Ok(Item::Composite(Composite::try_from(composite)?))
            }
        }
    }
}

impl<S> TryFrom<CompositeDescription> for Composite<Item<S>>
where
    S: TryFrom<ShapeDescription, Error = KernelError>,
{
    type Error = KernelError;

    fn try_from(description: CompositeDescription) -> Result<Self> {
        let shapes = description
            .shapes
            .into_iter()
            .map(Item::try_from)
            .collect::<Result<Vec<_>>>()?;
        Ok(Composite::new(description.operation, shapes))
    }
}
