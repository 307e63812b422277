// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Binary STL exporter

use crate::geometry::Mesh;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use stl_io::{Normal, Triangle as StlTriangle, Vertex as StlVertex};

/// Write every mesh as one binary STL solid.
///
/// Faces are fan-triangulated; each facet normal comes from the triangle's
/// winding, so degenerate triangles get a zero normal.
pub fn write_stl<W: Write>(meshes: &[Mesh], writer: &mut W) -> Result<()> {
    let triangles: Vec<StlTriangle> = meshes
        .iter()
        .flat_map(|mesh| {
            mesh.triangulate().into_iter().map(move |tri| {
                let normal = tri.cross(&mesh.vertices);
                let normal = if normal.norm() > 0.0 {
                    normal.normalize()
                } else {
                    normal
                };
                let [v0, v1, v2] = tri.indices.map(|i| {
                    let p = mesh.vertices[i];
                    StlVertex::new([p.x as f32, p.y as f32, p.z as f32])
                });
                StlTriangle {
                    normal: Normal::new([normal.x as f32, normal.y as f32, normal.z as f32]),
                    vertices: [v0, v1, v2],
                }
            })
        })
        .collect();

    tracing::debug!(triangles = triangles.len(), "writing STL");
    stl_io::write_stl(writer, triangles.iter()).context("Failed to write STL data")?;
    Ok(())
}

/// Export meshes to a binary STL file
pub fn export_stl(meshes: &[Mesh], path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)
        .with_context(|| format!("Failed to create STL file: {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    write_stl(meshes, &mut writer)?;
    writer.flush().context("Failed to flush STL file")?;
    Ok(())
}
