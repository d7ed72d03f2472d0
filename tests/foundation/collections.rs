//! Integration tests for persistent collections
//!
//! Tests SkVec and SkMap with structural sharing and immutability.

use skein_foundation::{SkMap, SkVec, Value};

// =============================================================================
// SkVec
// =============================================================================

#[test]
fn nested_vector_clone_is_equal() {
    let v: SkVec<Value> = (0..100).map(Value::Int).collect();
    let nested = Value::Vec(v.clone());

    assert_eq!(nested.clone(), nested);
    assert_eq!(v.len(), 100);
    assert_eq!(v.get(99), Some(&Value::Int(99)));
}

#[test]
fn vector_first_last() {
    let v: SkVec<Value> = (1..=3).map(Value::Int).collect();
    assert_eq!(v.first(), Some(&Value::Int(1)));
    assert_eq!(v.last(), Some(&Value::Int(3)));
    assert_eq!(SkVec::<Value>::new().first(), None);
}

#[test]
fn vector_round_trips_through_std() {
    let items = vec![Value::Int(1), Value::from("a")];
    let v = SkVec::from(items.clone());
    assert_eq!(v.to_vec(), items);
    assert_eq!(v.into_iter().collect::<Vec<_>>(), items);
}

// =============================================================================
// SkMap
// =============================================================================

#[test]
fn map_lookup() {
    let m: SkMap<Value, Value> = [(Value::from("a"), Value::Int(1)), (Value::from("b"), Value::Int(2))]
        .into_iter()
        .collect();

    assert_eq!(m.len(), 2);
    assert!(m.contains_key(&Value::from("a")));
    assert!(!m.contains_key(&Value::from("c")));
    assert_eq!(m.get(&Value::from("b")), Some(&Value::Int(2)));
    assert!(SkMap::<Value, Value>::new().is_empty());
}

#[test]
fn map_equality_ignores_insertion_order() {
    let forward: SkMap<Value, Value> = (0..20).map(|i| (Value::Int(i), Value::Int(i))).collect();
    let backward: SkMap<Value, Value> =
        (0..20).rev().map(|i| (Value::Int(i), Value::Int(i))).collect();
    assert_eq!(forward, backward);
    assert_eq!(Value::Map(forward), Value::Map(backward));
}

#[test]
fn map_entries_and_values() {
    let m: SkMap<Value, Value> = [(Value::Int(1), Value::from("x"))].into_iter().collect();
    assert_eq!(m.iter().collect::<Vec<_>>(), vec![(&Value::Int(1), &Value::from("x"))]);
    assert_eq!(m.values().collect::<Vec<_>>(), vec![&Value::from("x")]);
}
