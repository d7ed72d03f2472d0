//! Integration tests for field accessors
//!
//! Tests the default accessor on maps and records, and custom accessors.

use skein_foundation::{Accessor, FieldAccessor, Record, Value};

#[test]
fn field_accessor_reads_map_keys() {
    let element = Value::map([("id", 1)]);
    assert_eq!(FieldAccessor.get(&element, "id"), Some(Value::Int(1)));
    assert_eq!(FieldAccessor.get(&element, "missing"), None);
}

#[test]
fn field_accessor_reads_record_fields() {
    let element = Value::from(Record::new("Entity", [("name", "a")]));
    assert_eq!(FieldAccessor.get(&element, "name"), Some(Value::from("a")));
}

#[test]
fn field_accessor_ignores_scalars() {
    assert_eq!(FieldAccessor.get(&Value::Int(1), "id"), None);
    assert_eq!(FieldAccessor.get_or(&Value::Int(1), "id", Value::Nil), Value::Nil);
}

#[test]
fn require_reports_missing_key() {
    let err = FieldAccessor.require(&Value::map([("a", 1)]), "b").unwrap_err();
    assert!(err.is_key_not_found());
    assert!(err.to_string().contains('b'));
}

#[test]
fn closures_are_accessors() {
    let upper = |element: &Value, key: &str| {
        FieldAccessor
            .get(element, key)
            .and_then(|v| v.as_str().map(|s| Value::from(s.to_uppercase())))
    };
    let element = Value::map([("name", "abc")]);
    assert_eq!(upper.require(&element, "name").unwrap(), Value::from("ABC"));
}

#[test]
fn accessors_work_behind_trait_objects() {
    let accessors: Vec<Box<dyn Accessor>> = vec![
        Box::new(FieldAccessor),
        Box::new(|_: &Value, _: &str| Some(Value::Int(0))),
    ];
    let element = Value::map([("id", 7)]);
    let found: Vec<Value> = accessors
        .iter()
        .filter_map(|a| a.get(&element, "id"))
        .collect();
    assert_eq!(found, vec![Value::Int(7), Value::Int(0)]);
}
