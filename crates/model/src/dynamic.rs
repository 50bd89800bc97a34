// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Schema-driven records for data whose field layout is only known at
//! runtime, e.g. arbitrary JSON or CSV files.
//!
//! A [`DynRecord`]'s type identity is its ordered field-name list (schema).
//! A [`DynList`] is homogeneous by the schema of its first inserted element;
//! violations surface as [`ModelError::TypeMismatch`].

use crate::csv;
use crate::error::ModelError;
use crate::record::row_to_dict;
use serde_json::{Map, Value};

/// A record whose fields are declared at runtime.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DynRecord {
    fields: Map<String, Value>,
}

impl DynRecord {
    /// Create a record with no fields.
    pub fn new() -> Self {
        Self { fields: Map::new() }
    }

    /// Create a record from a field mapping.
    pub fn from_dict(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// Assign one field, appending it to the schema if new.
    pub fn set(&mut self, name: impl Into<String>, value: Value) {
        self.fields.insert(name.into(), value);
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Field names in declaration order.
    pub fn schema(&self) -> Vec<String> {
        self.fields.keys().cloned().collect()
    }

    /// The field mapping.
    pub fn get_dict(&self) -> Map<String, Value> {
        self.fields.clone()
    }

    /// Bulk-assign the given fields, keeping any not named in the map.
    pub fn set_dict(&mut self, fields: &Map<String, Value>) {
        for (name, value) in fields {
            self.fields.insert(name.clone(), value.clone());
        }
    }

    /// JSON object string of the field mapping.
    pub fn to_json(&self) -> Result<String, ModelError> {
        Ok(serde_json::to_string(&self.fields)?)
    }

    /// Replace all fields from a JSON object string.
    pub fn load_json(&mut self, text: &str) -> Result<(), ModelError> {
        match serde_json::from_str::<Value>(text)? {
            Value::Object(fields) => {
                self.fields = fields;
                Ok(())
            }
            _ => Err(ModelError::NotAnObject),
        }
    }

    /// One CSV row of field values, optionally preceded by a header row.
    pub fn to_csv(&self, header: bool) -> String {
        let mut out = String::new();
        if header {
            out.push_str(&csv::write_row(self.fields.keys().cloned()));
        }
        out.push_str(&csv::write_row(self.fields.values().map(csv::render_value)));
        out
    }

    /// Parse one CSV record into the record.
    ///
    /// Two rows are treated as header plus row; the header replaces the
    /// schema. A single headerless row is matched positionally against the
    /// existing schema and requires one. More than one data row is an error.
    pub fn load_csv(&mut self, text: &str) -> Result<(), ModelError> {
        let mut rows = csv::split_rows(text)?.into_iter();
        let first = rows
            .next()
            .ok_or_else(|| ModelError::Csv("empty CSV input".to_string()))?;
        let (names, cells) = match rows.next() {
            Some(row) => (first, row),
            None if self.fields.is_empty() => {
                return Err(ModelError::Csv(
                    "cannot match a headerless row against an empty record".to_string(),
                ));
            }
            None => (self.schema(), first),
        };
        if rows.next().is_some() {
            return Err(ModelError::Csv(
                "expected a single record, got extra rows".to_string(),
            ));
        }
        self.fields = row_to_dict(&self.fields, &names, cells)?;
        Ok(())
    }
}

/// An ordered sequence of [`DynRecord`], homogeneous by schema.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DynList {
    schema: Option<Vec<String>>,
    items: Vec<DynRecord>,
}

impl DynList {
    /// Create an empty list. The first push fixes the schema.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record, rejecting one whose schema differs from the
    /// list's. On rejection the list is left unmodified.
    pub fn push(&mut self, record: DynRecord) -> Result<(), ModelError> {
        let found = record.schema();
        match &self.schema {
            Some(expected) if *expected != found => {
                Err(ModelError::schema_mismatch(expected, &found))
            }
            Some(_) => {
                self.items.push(record);
                Ok(())
            }
            None => {
                self.schema = Some(found);
                self.items.push(record);
                Ok(())
            }
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&DynRecord> {
        self.items.get(index)
    }

    /// Remove all records and the inferred schema.
    pub fn clear(&mut self) {
        self.schema = None;
        self.items.clear();
    }

    /// The list's schema, fixed by the first inserted record.
    pub fn schema(&self) -> Option<&[String]> {
        self.schema.as_deref()
    }

    /// Iterate in insertion order. Restartable.
    pub fn iter(&self) -> std::slice::Iter<'_, DynRecord> {
        self.items.iter()
    }

    /// Structured transport form: a JSON array of field mappings.
    pub fn serialize(&self) -> Value {
        Value::Array(
            self.items
                .iter()
                .map(|r| Value::Object(r.get_dict()))
                .collect(),
        )
    }

    /// Replace the contents from a transport value. Fails with
    /// [`ModelError::TypeMismatch`] on ragged input, leaving the list
    /// unmodified.
    pub fn deserialize(&mut self, value: &Value) -> Result<(), ModelError> {
        let dicts: Vec<Map<String, Value>> = serde_json::from_value(value.clone())?;
        *self = Self::from_dicts(dicts)?;
        Ok(())
    }

    /// JSON array text of record field mappings.
    pub fn to_json(&self) -> Result<String, ModelError> {
        Ok(serde_json::to_string(&self.serialize())?)
    }

    /// Replace the contents from a JSON array string.
    pub fn load_json(&mut self, text: &str) -> Result<(), ModelError> {
        let dicts: Vec<Map<String, Value>> = serde_json::from_str(text)?;
        *self = Self::from_dicts(dicts)?;
        Ok(())
    }

    /// Header row plus one row per record. Empty string for an empty list.
    pub fn to_csv(&self) -> String {
        let mut out = String::new();
        for (i, item) in self.items.iter().enumerate() {
            out.push_str(&item.to_csv(i == 0));
        }
        out
    }

    /// Replace the contents from CSV text. The first row must be a header
    /// row; cells are kept as JSON scalars when they parse as such, strings
    /// otherwise.
    pub fn load_csv(&mut self, text: &str) -> Result<(), ModelError> {
        let mut rows = csv::split_rows(text)?.into_iter();
        let names = rows
            .next()
            .ok_or_else(|| ModelError::Csv("missing header row".to_string()))?;

        let empty = Map::new();
        let mut next = Self::new();
        for row in rows {
            let fields = row_to_dict(&empty, &names, row)?;
            next.push(DynRecord::from_dict(fields))?;
        }
        *self = next;
        Ok(())
    }

    /// Field mappings of all records, empty for an empty list.
    pub fn get_dict(&self) -> Vec<Map<String, Value>> {
        self.items.iter().map(DynRecord::get_dict).collect()
    }

    fn from_dicts(dicts: Vec<Map<String, Value>>) -> Result<Self, ModelError> {
        let mut list = Self::new();
        for dict in dicts {
            list.push(DynRecord::from_dict(dict))?;
        }
        Ok(list)
    }
}

impl IntoIterator for DynList {
    type Item = DynRecord;
    type IntoIter = std::vec::IntoIter<DynRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a DynList {
    type Item = &'a DynRecord;
    type IntoIter = std::slice::Iter<'a, DynRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
#[path = "dynamic_tests.rs"]
mod tests;
