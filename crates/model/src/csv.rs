// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Minimal quoted-CSV row codec.
//!
//! Fields containing a comma, quote, or line break are quoted and embedded
//! quotes are doubled, per the usual CSV conventions. Parsing tracks quote
//! state across line breaks, so quoted fields may contain them.

use crate::error::ModelError;
use serde_json::Value;

/// Render one row, terminated with a newline.
pub(crate) fn write_row<I>(cells: I) -> String
where
    I: IntoIterator<Item = String>,
{
    let mut out = String::new();
    for (i, cell) in cells.into_iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        out.push_str(&quote(&cell));
    }
    out.push('\n');
    out
}

/// Split CSV text into rows of cells, honoring quoted fields and doubled
/// quotes. A row terminator inside quotes belongs to the cell; blank rows
/// are skipped.
pub(crate) fn split_rows(text: &str) -> Result<Vec<Vec<String>>, ModelError> {
    let mut rows = Vec::new();
    let mut cells = Vec::new();
    let mut cell = String::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '"' if chars.peek() == Some(&'"') => {
                    cell.push('"');
                    chars.next();
                }
                '"' => in_quotes = false,
                _ => cell.push(c),
            }
        } else {
            match c {
                '"' => in_quotes = true,
                ',' => cells.push(std::mem::take(&mut cell)),
                // CRLF terminator: the CR is consumed with the LF.
                '\r' if chars.peek() == Some(&'\n') => {}
                '\n' | '\r' => {
                    cells.push(std::mem::take(&mut cell));
                    flush_row(&mut rows, &mut cells);
                }
                _ => cell.push(c),
            }
        }
    }

    if in_quotes {
        return Err(ModelError::Csv("unterminated quote in CSV input".to_string()));
    }
    if !cells.is_empty() || !cell.is_empty() {
        cells.push(cell);
        flush_row(&mut rows, &mut cells);
    }
    Ok(rows)
}

/// Commit a finished row, dropping blank ones.
fn flush_row(rows: &mut Vec<Vec<String>>, cells: &mut Vec<String>) {
    let row = std::mem::take(cells);
    if row.len() == 1 && row[0].trim().is_empty() {
        return;
    }
    rows.push(row);
}

/// Render a JSON scalar as CSV cell text. Strings are written verbatim;
/// everything else uses its JSON text.
pub(crate) fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Parse cell text back into a JSON scalar, falling back to a string.
pub(crate) fn parse_scalar(cell: &str) -> Value {
    match serde_json::from_str::<Value>(cell) {
        Ok(value) if !value.is_array() && !value.is_object() => value,
        _ => Value::String(cell.to_string()),
    }
}

/// Coerce cell text against a declared field value: string fields take the
/// cell verbatim, everything else parses as a JSON scalar.
pub(crate) fn coerce_cell(declared: Option<&Value>, cell: String) -> Value {
    match declared {
        Some(Value::String(_)) => Value::String(cell),
        Some(_) => serde_json::from_str(&cell).unwrap_or(Value::String(cell)),
        None => parse_scalar(&cell),
    }
}

fn quote(cell: &str) -> String {
    if cell.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}

#[cfg(test)]
#[path = "csv_tests.rs"]
mod tests;
