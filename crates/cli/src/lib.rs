// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Command-line front end for JSON/CSV record files.
//!
//! Thin wrapper over the `rowkit-model` crate: converts record files between
//! JSON and CSV, inspects their schema, and optionally shows an interactive
//! menu when invoked without a command.

pub mod app;
pub mod cli;
pub mod convert;
pub mod error;
pub mod inspect;
pub mod menu;
pub mod output;
