// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Scene description importer

use crate::io::SceneDescription;
use crate::scene::Scene3D;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Parse a JSON scene description into a 3D scene
pub fn parse_scene(source: &str) -> Result<Scene3D> {
    let description: SceneDescription =
        serde_json::from_str(source).context("Malformed scene description")?;
    let scene = Scene3D::try_from(description)?;
    tracing::debug!(items = scene.items().len(), "parsed scene description");
    Ok(scene)
}

/// Import a `.json` scene file
pub fn import_scene_file(path: impl AsRef<Path>) -> Result<Scene3D> {
    let path = path.as_ref();
    let source = fs::read_to_string(path)
        .with_context(|| format!("Failed to read scene file: {}", path.display()))?;

    parse_scene(&source).with_context(|| format!("Failed to load scene file: {}", path.display()))
}
