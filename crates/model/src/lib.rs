// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Record model with JSON/CSV import-export and typed collections.
//!
//! This crate provides a small data-record model: a [`Record`] trait for
//! statically declared record structs, a [`TypedList`] container that is
//! homogeneous by construction, and a schema-driven [`DynRecord`]/[`DynList`]
//! pair for data whose field layout is only known at runtime.

mod csv;
mod dynamic;
mod error;
mod list;
mod record;

pub use dynamic::{DynList, DynRecord};
pub use error::ModelError;
pub use list::TypedList;
pub use record::Record;
