// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! STEP (ISO 10303-21) exporter for tessellated shells
//!
//! The document carries only tessellated geometry: one point per vertex, one
//! triangulated face per triangle and one shell per mesh, hung off a minimal
//! product and units chain. Entity ids are allocated sequentially from 1 and
//! every reference points at an earlier id, so allocation order is also a
//! valid topological order.

use crate::geometry::Mesh;
use anyhow::{Context, Result};
use chrono::{DateTime, SecondsFormat, Utc};
use std::fmt;
use std::path::Path;

/// Document name used when the caller does not supply one
pub const DEFAULT_MODEL_NAME: &str = "polyframe-model";

const ORIGINATING_SYSTEM: &str = "polyshape";

/// Caller-supplied header fields
#[derive(Debug, Clone, PartialEq)]
pub struct StepOptions {
    pub name: String,
    /// `None` stamps the document with the current time
    pub timestamp: Option<DateTime<Utc>>,
}

impl Default for StepOptions {
    fn default() -> Self {
        Self {
            name: DEFAULT_MODEL_NAME.to_string(),
            timestamp: None,
        }
    }
}

impl StepOptions {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            timestamp: None,
        }
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }
}

/// One numbered record of the DATA section
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    pub id: usize,
    pub definition: String,
}

impl Entity {
    /// Leading keyword, e.g. `CARTESIAN_POINT`; empty for complex entities
    pub fn keyword(&self) -> &str {
        self.definition
            .split('(')
            .next()
            .unwrap_or_default()
    }

    /// Ids referenced as `#<id>` inside the definition
    pub fn references(&self) -> Vec<usize> {
        self.definition
            .split('#')
            .skip(1)
            .filter_map(|rest| {
                let digits: String = rest.chars().take_while(char::is_ascii_digit).collect();
                digits.parse().ok()
            })
            .collect()
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}={};", self.id, self.definition)
    }
}

/// Header, entity list and footer of an exchange document
#[derive(Debug, Clone)]
pub struct StepDocument {
    header: Vec<String>,
    entities: Vec<Entity>,
}

const FOOTER: [&str; 2] = ["ENDSEC;", "END-ISO-10303-21;"];

impl StepDocument {
    /// Entities in allocation order
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn entities_of<'a>(&'a self, keyword: &'a str) -> impl Iterator<Item = &'a Entity> + 'a {
        self.entities.iter().filter(move |e| e.keyword() == keyword)
    }
}

impl fmt::Display for StepDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        let entity_lines = self.entities.iter().map(ToString::to_string);
        let lines = self
            .header
            .iter()
            .cloned()
            .chain(entity_lines)
            .chain(FOOTER.iter().map(|s| s.to_string()));
        for line in lines {
            if !first {
                f.write_str("\n")?;
            }
            f.write_str(&line)?;
            first = false;
        }
        Ok(())
    }
}

/// Sequential id allocator; each added entity takes the next id
#[derive(Default)]
struct EntityWriter {
    entities: Vec<Entity>,
}

impl EntityWriter {
    fn add(&mut self, definition: String) -> usize {
        let id = self.entities.len() + 1;
        self.entities.push(Entity { id, definition });
        id
    }
}

/// Build the document for `meshes`, in the given order.
///
/// Faces are fan-triangulated from their first vertex, which is only correct
/// for convex planar faces. Inputs are not validated: an empty slice gives a
/// geometry-free document and a mesh without faces gives an empty shell.
///
/// # Panics
///
/// Panics if a face refers to a vertex index outside its mesh.
pub fn build_document(meshes: &[Mesh], options: &StepOptions) -> StepDocument {
    let name = step_string(&options.name);
    let mut writer = EntityWriter::default();

    let product = writer.add(format!("PRODUCT('{name}','','',())"));
    let app_context = writer.add("APPLICATION_CONTEXT('design')".to_string());
    let def_context = writer.add(format!(
        "PRODUCT_DEFINITION_CONTEXT('part definition',#{app_context},'design')"
    ));
    let product_def = writer.add(format!("PRODUCT_DEFINITION('','',#{product},#{def_context})"));

    let unit = writer.add("(LENGTH_UNIT() NAMED_UNIT(*) SI_UNIT(.MILLI.,.METRE.))".to_string());
    let uncertainty = writer.add(format!(
        "UNCERTAINTY_MEASURE_WITH_UNIT(LENGTH_MEASURE(1.E-6),#{unit},'','')"
    ));
    let geom_context = writer.add("GEOMETRIC_REPRESENTATION_CONTEXT(3)".to_string());
    writer.add(format!(
        "GLOBAL_UNCERTAINTY_ASSIGNED_CONTEXT((#{uncertainty}),#{geom_context})"
    ));

    let mut shell_ids = Vec::with_capacity(meshes.len());
    for mesh in meshes {
        let point_ids: Vec<usize> = mesh
            .vertices
            .iter()
            .map(|v| {
                writer.add(format!(
                    "CARTESIAN_POINT('',({},{},{}))",
                    format_coordinate(v.x),
                    format_coordinate(v.y),
                    format_coordinate(v.z)
                ))
            })
            .collect();

        let face_ids: Vec<usize> = mesh
            .triangulate()
            .iter()
            .map(|triangle| {
                let [a, b, c] = triangle.indices.map(|i| point_ids[i]);
                writer.add(format!("TRIANGULATED_FACE('',(#{a},#{b},#{c}),.T.)"))
            })
            .collect();

        shell_ids.push(writer.add(format!("TESSELLATED_SHELL('',({}))", references(&face_ids))));
    }

    let shape_rep = writer.add(format!(
        "TESSELLATED_SHAPE_REPRESENTATION('{name}',({}),#{geom_context})",
        references(&shell_ids)
    ));
    writer.add(format!("SHAPE_DEFINITION_REPRESENTATION(#{product_def},#{shape_rep})"));

    let timestamp = options
        .timestamp
        .unwrap_or_else(Utc::now)
        .to_rfc3339_opts(SecondsFormat::Millis, true);
    let header = vec![
        "ISO-10303-21;".to_string(),
        "HEADER;".to_string(),
        "FILE_DESCRIPTION(('AP242'),'1');".to_string(),
        format!(
            "FILE_NAME('{name}.stp','{timestamp}',('{ORIGINATING_SYSTEM}'),(''),'{ORIGINATING_SYSTEM}','','');"
        ),
        "FILE_SCHEMA(('AP242'));".to_string(),
        "ENDSEC;".to_string(),
        "DATA;".to_string(),
    ];

    tracing::debug!(
        meshes = meshes.len(),
        entities = writer.entities.len(),
        "built STEP document"
    );

    StepDocument {
        header,
        entities: writer.entities,
    }
}

/// Serialize `meshes` into STEP text, one line per entity
pub fn write_document(meshes: &[Mesh], options: &StepOptions) -> String {
    build_document(meshes, options).to_string()
}

/// Write a STEP document to `path`
pub fn export(meshes: &[Mesh], path: impl AsRef<Path>, options: &StepOptions) -> Result<()> {
    let path = path.as_ref();
    let content = write_document(meshes, options);
    std::fs::write(path, content)
        .with_context(|| format!("Failed to write STEP file: {}", path.display()))?;
    Ok(())
}

/// Fixed six fractional digits, never scientific.
///
/// Only an exact zero drops its sign; a tiny negative such as `-1e-12` still
/// prints as `-0.000000`.
fn format_coordinate(value: f64) -> String {
    if value == 0.0 {
        "0.000000".to_string()
    } else {
        format!("{value:.6}")
    }
}

fn references(ids: &[usize]) -> String {
    ids.iter()
        .map(|id| format!("#{id}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Escape a value for a STEP string literal
fn step_string(value: &str) -> String {
    value.replace('\\', "\\\\").replace('\'', "''")
}
