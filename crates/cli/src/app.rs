// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Command dispatch.

use crate::cli::{Cli, Command};
use crate::error::CliError;
use crate::{convert, inspect, menu};
use clap::CommandFactory;

/// Run the parsed CLI to completion.
pub fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Some(Command::Convert {
            input,
            output,
            from,
            to,
        }) => convert::run(&input, &output, from, to, cli.verbose),
        Some(Command::Inspect { input, format }) => inspect::run(&input, format),
        None if cli.menu => Ok(menu::run()?),
        None => {
            Cli::command().print_long_help()?;
            Ok(())
        }
    }
}
