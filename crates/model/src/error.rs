// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error type shared by the record and list modules.

use thiserror::Error;

/// Errors produced by record and list operations
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("type mismatch: expected record with fields [{expected}], got [{found}]")]
    TypeMismatch { expected: String, found: String },

    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to parse CSV: {0}")]
    Csv(String),

    #[error("record did not serialize to a JSON object")]
    NotAnObject,
}

impl ModelError {
    /// Build a `TypeMismatch` from two field-name schemas.
    pub(crate) fn schema_mismatch(expected: &[String], found: &[String]) -> Self {
        Self::TypeMismatch {
            expected: expected.join(", "),
            found: found.join(", "),
        }
    }
}
