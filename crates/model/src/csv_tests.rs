// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;
use proptest::prelude::*;
use serde_json::json;

#[test]
fn test_write_row_plain() {
    let row = write_row(["a".to_string(), "b".to_string(), "c".to_string()]);
    assert_eq!(row, "a,b,c\n");
}

#[test]
fn test_write_row_quotes_special_cells() {
    let row = write_row(["a,b".to_string(), "say \"hi\"".to_string()]);
    assert_eq!(row, "\"a,b\",\"say \"\"hi\"\"\"\n");
}

#[test]
fn test_split_rows_single_row() {
    assert_eq!(split_rows("a,b,c").unwrap(), vec![vec!["a", "b", "c"]]);
}

#[test]
fn test_split_rows_multiple_rows() {
    assert_eq!(
        split_rows("a,b\nc,d\n").unwrap(),
        vec![vec!["a", "b"], vec!["c", "d"]]
    );
}

#[test]
fn test_split_rows_empty_cells() {
    assert_eq!(split_rows("a,,c\n").unwrap(), vec![vec!["a", "", "c"]]);
}

#[test]
fn test_split_rows_skips_blank_rows() {
    assert!(split_rows("").unwrap().is_empty());
    assert_eq!(
        split_rows("a,b\n\n  \nc,d\n").unwrap(),
        vec![vec!["a", "b"], vec!["c", "d"]]
    );
}

#[test]
fn test_split_rows_quoted() {
    assert_eq!(
        split_rows("\"a,b\",\"say \"\"hi\"\"\"").unwrap(),
        vec![vec!["a,b", "say \"hi\""]]
    );
}

#[test]
fn test_split_rows_quoted_line_break_stays_in_cell() {
    assert_eq!(
        split_rows("\"a\nb\",c\nd,e\n").unwrap(),
        vec![vec!["a\nb", "c"], vec!["d", "e"]]
    );
}

#[test]
fn test_split_rows_crlf_terminators() {
    assert_eq!(
        split_rows("a,b\r\nc,d\r\n").unwrap(),
        vec![vec!["a", "b"], vec!["c", "d"]]
    );
}

#[test]
fn test_split_rows_unterminated_quote() {
    let err = split_rows("\"oops").unwrap_err();
    assert!(matches!(err, ModelError::Csv(_)));
    assert!(err.to_string().contains("unterminated quote"));
}

#[test]
fn test_render_value() {
    assert_eq!(render_value(&json!("plain")), "plain");
    assert_eq!(render_value(&json!(42)), "42");
    assert_eq!(render_value(&json!(true)), "true");
    assert_eq!(render_value(&json!(null)), "null");
}

#[test]
fn test_parse_scalar() {
    assert_eq!(parse_scalar("42"), json!(42));
    assert_eq!(parse_scalar("true"), json!(true));
    assert_eq!(parse_scalar("null"), json!(null));
    assert_eq!(parse_scalar("John1"), json!("John1"));
    // Composite JSON stays textual.
    assert_eq!(parse_scalar("[1,2]"), json!("[1,2]"));
}

#[test]
fn test_coerce_cell_string_field_is_verbatim() {
    let declared = json!("existing");
    assert_eq!(coerce_cell(Some(&declared), "42".to_string()), json!("42"));
}

#[test]
fn test_coerce_cell_typed_field_parses() {
    let declared = json!(0);
    assert_eq!(coerce_cell(Some(&declared), "42".to_string()), json!(42));
}

proptest! {
    #[test]
    fn row_roundtrip(cells in proptest::collection::vec("[ -~\n\r]{0,40}", 2..8)) {
        let text = write_row(cells.clone());
        let parsed = split_rows(&text).unwrap();
        prop_assert_eq!(parsed, vec![cells]);
    }
}
