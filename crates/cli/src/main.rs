// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! rowkit binary entry point.

use clap::Parser;

use rowkit::cli::Cli;
use rowkit::output::print_error;

fn main() {
    let cli = Cli::parse();
    if let Err(e) = rowkit::app::run(cli) {
        print_error(e);
        std::process::exit(1);
    }
}
