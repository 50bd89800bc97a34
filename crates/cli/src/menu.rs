// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Interactive menu shown with `--menu` and no subcommand.
//!
//! Lists the available commands, reads a single choice from stdin, and
//! prints the chosen command's help. Invalid input and EOF exit cleanly.

use crate::cli::Cli;
use clap::CommandFactory;
use std::io::{self, BufRead, Write};

pub fn run() -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run_with(&mut stdin.lock(), &mut stdout)
}

/// Menu loop with injected reader/writer.
fn run_with<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> io::Result<()> {
    writeln!(out, "rowkit")?;
    writeln!(out, "  1) convert  convert a record file between JSON and CSV")?;
    writeln!(out, "  2) inspect  print record count and schema")?;
    writeln!(out, "  q) quit")?;
    write!(out, "> ")?;
    out.flush()?;

    let mut choice = String::new();
    if input.read_line(&mut choice)? == 0 {
        return Ok(());
    }
    match choice.trim() {
        "1" | "convert" => print_command_help(out, "convert"),
        "2" | "inspect" => print_command_help(out, "inspect"),
        _ => Ok(()),
    }
}

fn print_command_help<W: Write>(out: &mut W, name: &str) -> io::Result<()> {
    let mut root = Cli::command();
    if let Some(sub) = root.find_subcommand_mut(name) {
        writeln!(out, "{}", sub.render_long_help())?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "menu_tests.rs"]
mod tests;
