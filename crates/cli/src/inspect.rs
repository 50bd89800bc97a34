// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The `inspect` command: record count and schema summary.

use crate::cli::Format;
use crate::convert::{load_list, resolve_format};
use crate::error::CliError;
use std::path::Path;

pub fn run(input: &Path, format: Option<Format>) -> Result<(), CliError> {
    let format = resolve_format(input, format)?;
    let text = std::fs::read_to_string(input).map_err(|source| CliError::Read {
        path: input.to_path_buf(),
        source,
    })?;
    let list = load_list(&text, format)?;

    print!("{}", summary(&list));
    Ok(())
}

fn summary(list: &rowkit_model::DynList) -> String {
    let fields = match list.schema() {
        Some(names) => names.join(", "),
        None => "(none)".to_string(),
    };
    format!("records: {}\nfields: {}\n", list.len(), fields)
}

#[cfg(test)]
#[path = "inspect_tests.rs"]
mod tests;
