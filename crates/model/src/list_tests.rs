// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;
use proptest::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
struct Person {
    first_name: String,
    last_name: String,
}

impl Record for Person {}

fn person(first: &str, last: &str) -> Person {
    Person {
        first_name: first.to_string(),
        last_name: last.to_string(),
    }
}

fn sample_list() -> TypedList<Person> {
    TypedList::from(vec![person("John1", "Doe1"), person("John2", "Doe2")])
}

#[test]
fn test_push_preserves_order() {
    let mut list = TypedList::new();
    list.push(person("John1", "Doe1"));
    list.push(person("John2", "Doe2"));

    assert_eq!(list.len(), 2);
    assert_eq!(list.get(0), Some(&person("John1", "Doe1")));
    assert_eq!(list.get(1), Some(&person("John2", "Doe2")));
}

#[test]
fn test_equality_element_wise() {
    let both = sample_list();
    let first_only: TypedList<Person> = vec![person("John1", "Doe1")].into_iter().collect();

    assert_eq!(both, sample_list());
    assert_ne!(both, first_only);
}

#[test]
fn test_iteration_restartable() {
    let list = sample_list();

    let first_pass: Vec<&Person> = list.iter().collect();
    let second_pass: Vec<&Person> = list.iter().collect();
    assert_eq!(first_pass, second_pass);
    assert_eq!(first_pass.len(), 2);

    let mut names = Vec::new();
    for p in &list {
        names.push(p.first_name.clone());
    }
    assert_eq!(names, vec!["John1", "John2"]);
}

#[test]
fn test_transport_roundtrip() {
    let list = sample_list();
    let mut other: TypedList<Person> = TypedList::new();

    other.deserialize(&list.serialize().unwrap()).unwrap();
    assert_eq!(other, list);
}

#[test]
fn test_to_json_shape() {
    let list = sample_list();
    assert_eq!(
        list.to_json().unwrap(),
        r#"[{"first_name":"John1","last_name":"Doe1"},{"first_name":"John2","last_name":"Doe2"}]"#
    );
}

#[test]
fn test_load_json_replaces_contents() {
    let mut list: TypedList<Person> = vec![person("John2", "Doe2")].into();
    list.load_json(&sample_list().to_json().unwrap()).unwrap();
    assert_eq!(list, sample_list());
}

#[test]
fn test_load_json_malformed() {
    let mut list: TypedList<Person> = TypedList::new();
    assert!(matches!(list.load_json("[{"), Err(ModelError::Json(_))));
}

#[test]
fn test_to_csv_single_header() {
    let csv = sample_list().to_csv().unwrap();
    assert_eq!(csv, "first_name,last_name\nJohn1,Doe1\nJohn2,Doe2\n");
}

#[test]
fn test_csv_roundtrip() {
    let mut other: TypedList<Person> = TypedList::new();
    other.load_csv(&sample_list().to_csv().unwrap()).unwrap();
    assert_eq!(other, sample_list());
}

#[test]
fn test_csv_roundtrip_multiline_values() {
    let list = TypedList::from(vec![person("a\nb", "Doe1"), person("John2", "c,d")]);
    let mut other: TypedList<Person> = TypedList::new();

    other.load_csv(&list.to_csv().unwrap()).unwrap();
    assert_eq!(other, list);
}

#[test]
fn test_load_csv_requires_header() {
    let mut list: TypedList<Person> = TypedList::new();
    let err = list.load_csv("").unwrap_err();
    assert!(matches!(err, ModelError::Csv(_)));
    assert!(err.to_string().contains("missing header row"));
}

#[test]
fn test_empty_list() {
    let list: TypedList<Person> = TypedList::new();

    assert!(list.is_empty());
    assert_eq!(list.to_csv().unwrap(), "");
    assert!(list.get_dict().unwrap().is_empty());
    assert_eq!(list.to_json().unwrap(), "[]");
}

#[test]
fn test_get_dict_per_record() {
    let dicts = sample_list().get_dict().unwrap();
    assert_eq!(dicts.len(), 2);
    assert_eq!(dicts[0]["first_name"], "John1");
    assert_eq!(dicts[1]["first_name"], "John2");
}

#[test]
fn test_clear() {
    let mut list = sample_list();
    list.clear();
    assert!(list.is_empty());
    assert_eq!(list, TypedList::new());
}

proptest! {
    #[test]
    fn json_roundtrip(names in proptest::collection::vec(("[a-zA-Z0-9 ]{0,20}", "[a-zA-Z0-9 ]{0,20}"), 0..10)) {
        let list: TypedList<Person> = names
            .iter()
            .map(|(f, l)| person(f, l))
            .collect();
        let mut other: TypedList<Person> = TypedList::new();

        other.load_json(&list.to_json().unwrap()).unwrap();
        prop_assert_eq!(other, list);
    }

    #[test]
    fn transport_roundtrip_any_length(count in 0usize..20) {
        let list: TypedList<Person> = (0..count)
            .map(|i| person(&format!("John{i}"), &format!("Doe{i}")))
            .collect();
        let mut other: TypedList<Person> = TypedList::new();

        other.deserialize(&list.serialize().unwrap()).unwrap();
        prop_assert_eq!(other, list);
    }
}
