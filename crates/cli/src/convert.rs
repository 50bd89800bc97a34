// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The `convert` command: record file conversion between JSON and CSV.

use crate::cli::Format;
use crate::error::CliError;
use crate::output::print_warning;
use rowkit_model::{DynList, DynRecord, ModelError};
use serde_json::Value;
use std::path::Path;

/// Run the conversion.
pub fn run(
    input: &Path,
    output: &Path,
    from: Option<Format>,
    to: Option<Format>,
    verbose: bool,
) -> Result<(), CliError> {
    let from = resolve_format(input, from)?;
    let to = resolve_format(output, to)?;
    if let Some(inferred) = Format::from_path(output) {
        if inferred != to {
            print_warning(format_args!(
                "output format {:?} does not match extension of {}",
                to,
                output.display()
            ));
        }
    }

    let text = std::fs::read_to_string(input).map_err(|source| CliError::Read {
        path: input.to_path_buf(),
        source,
    })?;
    let list = load_list(&text, from)?;
    if verbose {
        eprintln!("read {} records from {}", list.len(), input.display());
    }

    let rendered = render_list(&list, to)?;
    std::fs::write(output, rendered).map_err(|source| CliError::Write {
        path: output.to_path_buf(),
        source,
    })?;
    if verbose {
        eprintln!("wrote {} records to {}", list.len(), output.display());
    }
    Ok(())
}

/// Pick the explicit format, falling back to the file extension.
pub(crate) fn resolve_format(path: &Path, explicit: Option<Format>) -> Result<Format, CliError> {
    explicit
        .or_else(|| Format::from_path(path))
        .ok_or_else(|| CliError::UnknownFormat {
            path: path.to_path_buf(),
        })
}

/// Parse record file text. A top-level JSON object is treated as a
/// single-record file.
pub(crate) fn load_list(text: &str, format: Format) -> Result<DynList, ModelError> {
    let mut list = DynList::new();
    match format {
        Format::Json => match serde_json::from_str::<Value>(text).map_err(ModelError::Json)? {
            Value::Object(fields) => list.push(DynRecord::from_dict(fields))?,
            other => list.deserialize(&other)?,
        },
        Format::Csv => list.load_csv(text)?,
    }
    Ok(list)
}

/// Render a record list in the requested format.
pub(crate) fn render_list(list: &DynList, format: Format) -> Result<String, ModelError> {
    match format {
        Format::Json => list.to_json(),
        Format::Csv => Ok(list.to_csv()),
    }
}

#[cfg(test)]
#[path = "convert_tests.rs"]
mod tests;
