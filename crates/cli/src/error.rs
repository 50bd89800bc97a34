// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI error type.

use rowkit_model::ModelError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced to the user by the binary
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Model(#[from] ModelError),

    #[error("failed to read {}: {}", path.display(), source)]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {}: {}", path.display(), source)]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot infer format of {}; pass --from/--to", path.display())]
    UnknownFormat { path: PathBuf },

    #[error(transparent)]
    Io(#[from] io::Error),
}
