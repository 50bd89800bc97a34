// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Homogeneous record collection, typed at compile time.

use crate::csv;
use crate::error::ModelError;
use crate::record::{row_to_dict, Record};
use serde_json::{Map, Value};

/// An ordered collection of one record type.
///
/// Homogeneity holds by construction: the element type is the type
/// parameter, so pushing a foreign type is a compile-time error.
#[derive(Clone, Debug, PartialEq)]
pub struct TypedList<T: Record> {
    items: Vec<T>,
}

impl<T: Record> TypedList<T> {
    /// Create an empty list.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Append a record. Insertion order is preserved.
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Iterate in insertion order. Restartable: each call yields a fresh
    /// iterator over the same elements.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Structured transport form: a JSON value holding one object per
    /// record. Consumable by [`TypedList::deserialize`] on another instance.
    pub fn serialize(&self) -> Result<Value, ModelError> {
        Ok(serde_json::to_value(&self.items)?)
    }

    /// Replace the contents from a transport value.
    pub fn deserialize(&mut self, value: &Value) -> Result<(), ModelError> {
        self.items = serde_json::from_value(value.clone())?;
        Ok(())
    }

    /// JSON array text of record field mappings.
    pub fn to_json(&self) -> Result<String, ModelError> {
        Ok(serde_json::to_string(&self.items)?)
    }

    /// Replace the contents from a JSON array string.
    pub fn load_json(&mut self, text: &str) -> Result<(), ModelError> {
        self.items = serde_json::from_str(text)?;
        Ok(())
    }

    /// Header row plus one row per record. Empty string for an empty list.
    pub fn to_csv(&self) -> Result<String, ModelError> {
        let mut out = String::new();
        for (i, item) in self.items.iter().enumerate() {
            out.push_str(&item.to_csv(i == 0)?);
        }
        Ok(out)
    }

    /// Replace the contents from CSV text. The first row must be a header
    /// row; cells are coerced against the record's declared field kinds.
    pub fn load_csv(&mut self, text: &str) -> Result<(), ModelError> {
        let mut rows = csv::split_rows(text)?.into_iter();
        let names = rows
            .next()
            .ok_or_else(|| ModelError::Csv("missing header row".to_string()))?;
        let declared = T::default().get_dict()?;

        let mut items = Vec::new();
        for row in rows {
            let fields = row_to_dict(&declared, &names, row)?;
            let mut item = T::default();
            item.set_dict(&fields)?;
            items.push(item);
        }
        self.items = items;
        Ok(())
    }

    /// Field mappings of all records, empty for an empty list.
    pub fn get_dict(&self) -> Result<Vec<Map<String, Value>>, ModelError> {
        self.items.iter().map(Record::get_dict).collect()
    }
}

impl<T: Record> Default for TypedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Record> From<Vec<T>> for TypedList<T> {
    fn from(items: Vec<T>) -> Self {
        Self { items }
    }
}

impl<T: Record> FromIterator<T> for TypedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T: Record> IntoIterator for TypedList<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T: Record> IntoIterator for &'a TypedList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
#[path = "list_tests.rs"]
mod tests;
