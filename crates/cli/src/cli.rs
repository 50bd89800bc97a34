// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};

/// Record file toolkit
#[derive(Parser, Clone, Debug)]
#[command(name = "rowkit", version, about = "Convert and inspect JSON/CSV record files")]
pub struct Cli {
    /// Show an interactive menu when no command is given
    #[arg(long, env = "ROWKIT_MENU")]
    pub menu: bool,

    /// Print per-step diagnostics to stderr
    #[arg(long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Clone, Debug)]
pub enum Command {
    /// Convert a record file between JSON and CSV
    Convert {
        /// Input record file
        input: PathBuf,

        /// Output file to write
        output: PathBuf,

        /// Input format (inferred from the file extension when omitted)
        #[arg(long, value_enum)]
        from: Option<Format>,

        /// Output format (inferred from the file extension when omitted)
        #[arg(long, value_enum)]
        to: Option<Format>,
    },

    /// Print record count and schema of a record file
    Inspect {
        /// Input record file
        input: PathBuf,

        /// Input format (inferred from the file extension when omitted)
        #[arg(long, value_enum)]
        format: Option<Format>,
    },
}

/// Record file format
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    Json,
    Csv,
}

impl Format {
    /// Infer a format from a file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        if ext.eq_ignore_ascii_case("json") {
            Some(Self::Json)
        } else if ext.eq_ignore_ascii_case("csv") {
            Some(Self::Csv)
        } else {
            None
        }
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
