// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Diagnostic output helpers for consistent error/warning formatting.
//!
//! ANSI color is applied only when stderr is a terminal.

use std::io::{self, IsTerminal, Write};

#[derive(Clone, Copy)]
enum Severity {
    Error,
    Warning,
}

impl Severity {
    fn label(self) -> &'static str {
        match self {
            Self::Error => "Error",
            Self::Warning => "Warning",
        }
    }

    fn color(self) -> &'static str {
        match self {
            Self::Error => "\x1b[31m",
            Self::Warning => "\x1b[33m",
        }
    }
}

/// Print an error message to stderr, red when stderr is a terminal.
pub fn print_error(msg: impl std::fmt::Display) {
    let is_tty = io::stderr().is_terminal();
    emit(&mut io::stderr(), Severity::Error, msg, is_tty);
}

/// Print a warning message to stderr, yellow when stderr is a terminal.
pub fn print_warning(msg: impl std::fmt::Display) {
    let is_tty = io::stderr().is_terminal();
    emit(&mut io::stderr(), Severity::Warning, msg, is_tty);
}

fn emit<W: Write>(writer: &mut W, severity: Severity, msg: impl std::fmt::Display, is_terminal: bool) {
    if is_terminal {
        let _ = writeln!(writer, "{}{}: {}\x1b[0m", severity.color(), severity.label(), msg);
    } else {
        let _ = writeln!(writer, "{}: {}", severity.label(), msg);
    }
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
