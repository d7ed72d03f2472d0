//! In-place mutation of a collection.

use proptest::prelude::*;
use skein::{Collection, Value};

fn ints(values: &[i64]) -> Vec<Value> {
    values.iter().copied().map(Value::Int).collect()
}

#[test]
fn append_then_prepend() {
    let mut items = Collection::new(ints(&[1, 2, 3, 4]));
    items.append(5).prepend(0);
    assert_eq!(items.to_list(), ints(&[0, 1, 2, 3, 4, 5]));
}

#[test]
fn append_accepts_any_value() {
    let mut items = Collection::empty();
    items.append("a").append(1.5).append(Value::Nil).append(vec![1, 2]);
    assert_eq!(items.count(), 4);
    assert_eq!(items.last().unwrap(), Value::from(vec![1, 2]));
}

#[test]
fn pop_from_front_middle_and_back() {
    let mut items = Collection::new(ints(&[1, 2, 3, 4, 5]));
    assert_eq!(items.pop(Some(0)).unwrap(), Value::Int(1));
    assert_eq!(items.pop(Some(1)).unwrap(), Value::Int(3));
    assert_eq!(items.pop(None).unwrap(), Value::Int(5));
    assert_eq!(items.to_list(), ints(&[2, 4]));
}

#[test]
fn pop_until_empty_then_fail() {
    let mut items = Collection::new(ints(&[1, 2]));
    assert!(items.pop(None).is_ok());
    assert!(items.pop(None).is_ok());
    let err = items.pop(None).unwrap_err();
    assert!(err.is_index_out_of_bounds());
}

#[test]
fn extend_merges_in_order() {
    let mut items = Collection::new(ints(&[0, 1, 2, 3]));
    items.extend(&[ints(&[4, 5, 6]), ints(&[0, 1, 2, 3]), ints(&[1, 2, 3])]);
    assert_eq!(items.to_list(), ints(&[0, 1, 2, 3, 4, 5, 6, 0, 1, 2, 3, 1, 2, 3]));
}

#[test]
fn transforms_do_not_mutate() {
    let items = Collection::new(ints(&[3, 1, 2]));
    let _ = items.sort(skein::stdlib::SortOrder::Ascending);
    let _ = items.chunk(2);
    assert_eq!(items.to_list(), ints(&[3, 1, 2]));
}

#[test]
fn to_list_is_a_snapshot() {
    let mut items = Collection::new(ints(&[1]));
    let snapshot = items.to_list();
    items.append(2);
    assert_eq!(snapshot, ints(&[1]));
    assert_eq!(items.into_vec(), ints(&[1, 2]));
}

proptest! {
    #[test]
    fn appends_then_pops_are_lifo(xs in prop::collection::vec(any::<i64>(), 0..30)) {
        let mut items = Collection::empty();
        for &x in &xs {
            items.append(x);
        }
        prop_assert_eq!(items.count(), xs.len());
        for &x in xs.iter().rev() {
            prop_assert_eq!(items.pop(None).unwrap(), Value::Int(x));
        }
        prop_assert!(items.is_empty());
    }

    #[test]
    fn prepends_reverse_order(xs in prop::collection::vec(any::<i64>(), 0..30)) {
        let mut items = Collection::empty();
        for &x in &xs {
            items.prepend(x);
        }
        let reversed: Vec<Value> = xs.iter().rev().copied().map(Value::Int).collect();
        prop_assert_eq!(items.to_list(), reversed);
    }
}
