// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! I/O module - descriptions, scene import, and exporting

pub mod description;
mod export_step;
mod export_stl;
mod importer;

pub use description::{
    CompositeDescription, Describe, ItemDescription, SceneDescription, ShapeDescription,
};
pub use export_step::{
    build_document, export as export_step, write_document, Entity, StepDocument, StepOptions,
    DEFAULT_MODEL_NAME,
};
pub use export_stl::{export_stl, write_stl};
pub use importer::{import_scene_file, parse_scene};
