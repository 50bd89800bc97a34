// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The [`Record`] trait: JSON/CSV import-export and a field-mapping view
//! for any serde-declared record struct.

use crate::csv;
use crate::error::ModelError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

/// A structured value with named fields.
///
/// All methods have default bodies driven by the struct's serde
/// representation, so implementing the trait is a one-liner:
///
/// ```
/// use rowkit_model::Record;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
/// struct Person {
///     first_name: String,
///     last_name: String,
/// }
///
/// impl Record for Person {}
/// ```
///
/// Field order in the dict view and in CSV output follows declaration order.
pub trait Record: Serialize + DeserializeOwned + PartialEq + Clone + Default {
    /// Field mapping in declaration order.
    fn get_dict(&self) -> Result<Map<String, Value>, ModelError> {
        match serde_json::to_value(self)? {
            Value::Object(map) => Ok(map),
            _ => Err(ModelError::NotAnObject),
        }
    }

    /// Bulk-assign the given fields, keeping any not named in the map.
    fn set_dict(&mut self, fields: &Map<String, Value>) -> Result<(), ModelError> {
        let mut merged = self.get_dict()?;
        for (name, value) in fields {
            merged.insert(name.clone(), value.clone());
        }
        *self = serde_json::from_value(Value::Object(merged))?;
        Ok(())
    }

    /// JSON object string of the field mapping.
    fn to_json(&self) -> Result<String, ModelError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Overwrite all fields from a JSON object string.
    fn load_json(&mut self, text: &str) -> Result<(), ModelError> {
        *self = serde_json::from_str(text)?;
        Ok(())
    }

    /// One CSV row of field values, optionally preceded by a header row
    /// of field names.
    fn to_csv(&self, header: bool) -> Result<String, ModelError> {
        let fields = self.get_dict()?;
        let mut out = String::new();
        if header {
            out.push_str(&csv::write_row(fields.keys().cloned()));
        }
        out.push_str(&csv::write_row(fields.values().map(csv::render_value)));
        Ok(out)
    }

    /// Parse one CSV record into the record.
    ///
    /// Two rows are treated as header plus row with columns matched by
    /// name; a single row is matched positionally against the declared
    /// field order. More than one data row is an error.
    fn load_csv(&mut self, text: &str) -> Result<(), ModelError> {
        let mut rows = csv::split_rows(text)?.into_iter();
        let first = rows
            .next()
            .ok_or_else(|| ModelError::Csv("empty CSV input".to_string()))?;
        let declared = self.get_dict()?;
        let (names, cells) = match rows.next() {
            Some(row) => (first, row),
            None => (declared.keys().cloned().collect(), first),
        };
        if rows.next().is_some() {
            return Err(ModelError::Csv(
                "expected a single record, got extra rows".to_string(),
            ));
        }
        let fields = row_to_dict(&declared, &names, cells)?;
        self.set_dict(&fields)
    }
}

/// Zip header names with row cells into a field mapping, coercing each cell
/// against the declared field's JSON kind.
pub(crate) fn row_to_dict(
    declared: &Map<String, Value>,
    names: &[String],
    cells: Vec<String>,
) -> Result<Map<String, Value>, ModelError> {
    if names.len() != cells.len() {
        return Err(ModelError::Csv(format!(
            "expected {} fields, got {}",
            names.len(),
            cells.len()
        )));
    }
    let mut fields = Map::new();
    for (name, cell) in names.iter().zip(cells) {
        fields.insert(name.clone(), csv::coerce_cell(declared.get(name), cell));
    }
    Ok(fields)
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod tests;
