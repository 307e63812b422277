// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Scene tessellation, description round trips and file export

use anyhow::Result;
use polyshape::io::{export_stl, import_scene_file, Describe};
use polyshape::{
    cone, cuboid, extrude, rounded_rectangle, sphere, BooleanOp, Item3D, KernelError, Scene3D,
    StepOptions,
};
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

fn bracket_scene() -> Scene3D {
    let mut scene = Scene3D::new();
    scene
        .add(cuboid(40.0, 10.0, 4.0))
        .add(extrude(rounded_rectangle(12.0, 8.0, 2.0), 6.0).translate(0.0, 0.0, 5.0))
        .add(cone(3.0, 8.0).rotate_x(0.5).translate(15.0, 0.0, 0.0))
        .add(sphere(2.0).scale(1.0, 1.0, 2.0));
    scene
}

#[test]
fn test_parallel_tessellation_matches_sequential() -> Result<()> {
    let scene = bracket_scene();
    assert_eq!(scene.to_meshes_parallel()?, scene.to_meshes()?);
    Ok(())
}

#[test]
fn test_composite_blocks_export() {
    let mut scene = bracket_scene();
    let hollow = scene.subtract(
        cuboid(10.0, 10.0, 10.0),
        vec![Item3D::from(sphere(6.0)), Item3D::from(cuboid(1.0, 1.0, 20.0))],
    );
    assert_eq!(scene.len(), 4);
    assert!(scene.export_step(&StepOptions::default()).is_ok());

    scene.add(hollow);

    let err = scene.export_step(&StepOptions::default()).unwrap_err();
    assert!(matches!(
        err,
        KernelError::NonTessellableItem {
            index: 4,
            operation: BooleanOp::Subtract
        }
    ));
}

#[test]
fn test_description_survives_a_file_round_trip() -> Result<()> {
    let scene = bracket_scene();
    let mut file = NamedTempFile::with_suffix(".json")?;
    write!(file, "{}", serde_json::to_string_pretty(&scene.describe())?)?;

    let loaded = import_scene_file(file.path())?;
    assert_eq!(loaded, scene);
    assert_eq!(loaded.to_meshes()?, scene.to_meshes()?);
    Ok(())
}

#[test]
fn test_scene_step_and_stl_exports() -> Result<()> {
    let dir = TempDir::new()?;
    let scene = bracket_scene();
    let meshes = scene.to_meshes()?;

    let step = scene.export_step(&StepOptions::new("bracket"))?;
    assert_eq!(step.matches("TESSELLATED_SHELL(").count(), meshes.len());

    let stl_path = dir.path().join("bracket.stl");
    export_stl(&meshes, &stl_path)?;
    let triangles: usize = meshes.iter().map(|mesh| mesh.triangulate().len()).sum();
    assert_eq!(std::fs::metadata(&stl_path)?.len(), 84 + 50 * triangles as u64);
    Ok(())
}
