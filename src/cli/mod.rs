// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! CLI support for the polyshape binary

pub mod reporter;
mod summary;

pub use reporter::Reporter;
pub use summary::{summarize_scene, ItemSummary};
