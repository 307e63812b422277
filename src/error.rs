// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Error types for the geometry kernel

use crate::geometry::BooleanOp;
use thiserror::Error;

/// Result type alias using the kernel's error type
pub type Result<T> = std::result::Result<T, KernelError>;

/// Errors surfaced by the kernel.
///
/// Tessellation itself is total arithmetic; these only arise at the edges where
/// shapes are reconstructed from descriptions or where a scene is asked for
/// geometry it cannot produce.
#[derive(Error, Debug)]
pub enum KernelError {
    /// A shape description names a primitive kind the tessellators do not know
    #[error("unsupported primitive kind: {0}")]
    UnsupportedPrimitive(String),

    /// A scene item has no tessellation (composites are never evaluated)
    #[error("scene item {index} is a `{operation}` composite and cannot be tessellated")]
    NonTessellableItem { index: usize, operation: BooleanOp },

    /// Parameters in a description do not match the primitive kind
    #[error("invalid parameters for `{kind}`: {source}")]
    InvalidParameters {
        kind: String,
        #[source]
        source: serde_json::Error,
    },

    /// A description document has the wrong top-level type
    #[error("expected a `{expected}` document, found `{found}`")]
    UnexpectedDocument { expected: String, found: String },
}
