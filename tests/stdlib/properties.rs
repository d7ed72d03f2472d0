//! Algebraic properties of the sequence algorithms.

use std::collections::HashMap;

use proptest::prelude::*;
use skein_foundation::Value;
use skein_stdlib::{
    GroupBy, SortOrder, chunk, collapse, filter, group_by, map, reduce, reject, sort, sort_by,
};

fn int_seq() -> impl Strategy<Value = Vec<Value>> {
    prop::collection::vec(-1_000i64..1_000, 0..50)
        .prop_map(|xs| xs.into_iter().map(Value::Int).collect())
}

fn keyed_seq() -> impl Strategy<Value = Vec<Value>> {
    prop::collection::vec((0i64..5, any::<i64>()), 0..40).prop_map(|pairs| {
        pairs
            .into_iter()
            .map(|(k, v)| Value::map([("k", k), ("v", v)]))
            .collect()
    })
}

fn add_one(v: &Value) -> Value {
    Value::Int(v.as_int().unwrap_or(0) + 1)
}

fn double(v: &Value) -> Value {
    Value::Int(v.as_int().unwrap_or(0) * 2)
}

fn is_even(v: &Value) -> bool {
    v.as_int().is_some_and(|n| n % 2 == 0)
}

proptest! {
    #[test]
    fn map_composes(seq in int_seq()) {
        let stepwise = map(&map(&seq, add_one), double);
        let fused = map(&seq, |v| double(&add_one(v)));
        prop_assert_eq!(stepwise, fused);
    }

    #[test]
    fn map_identity_is_a_copy(seq in int_seq()) {
        prop_assert_eq!(map(&seq, Value::clone), seq);
    }

    #[test]
    fn reduce_of_singleton_is_the_element(x in any::<i64>()) {
        let seq = vec![Value::Int(x)];
        let reduced = reduce(&seq, |_, _| Value::Nil, None).unwrap();
        prop_assert_eq!(reduced, Value::Int(x));
    }

    #[test]
    fn filter_and_reject_partition(seq in int_seq()) {
        let kept = filter(&seq, is_even);
        let dropped = reject(&seq, is_even);
        prop_assert_eq!(kept.len() + dropped.len(), seq.len());
        prop_assert!(kept.iter().all(is_even));
        prop_assert!(!dropped.iter().any(is_even));
    }

    #[test]
    fn chunk_then_collapse_round_trips(seq in int_seq(), size in 1usize..10) {
        let chunks = chunk(&seq, size);
        prop_assert_eq!(chunks.len(), seq.len().div_ceil(size));
        prop_assert_eq!(collapse(&chunks).unwrap(), seq);
    }

    #[test]
    fn sorting_is_idempotent_in_the_final_direction(seq in int_seq()) {
        let descending = sort(&sort(&seq, SortOrder::Ascending), SortOrder::Descending);
        prop_assert_eq!(sort(&seq, SortOrder::Descending), descending.clone());
        prop_assert!(descending.windows(2).all(|w| w[0].total_cmp(&w[1]).is_ge()));
    }

    #[test]
    fn sort_by_is_stable(seq in keyed_seq()) {
        let sorted = sort_by(&seq, "k", SortOrder::Ascending).unwrap();
        for k in 0i64..5 {
            let key = Value::Int(k);
            let pick = |s: &[Value]| -> Vec<Value> {
                s.iter()
                    .filter(|e| e.as_map().and_then(|m| m.get(&Value::from("k"))) == Some(&key))
                    .cloned()
                    .collect()
            };
            prop_assert_eq!(pick(&sorted), pick(&seq));
        }
    }

    #[test]
    fn group_by_preserves_the_multiset(seq in keyed_seq()) {
        let grouped = group_by(&seq, "k", GroupBy::new()).unwrap();

        let mut total = 0;
        for (key, group) in grouped.iter() {
            let members = group.as_vec().unwrap();
            total += members.len();
            for member in members {
                prop_assert_eq!(member.as_map().unwrap().get(&Value::from("k")), Some(key));
            }
        }
        prop_assert_eq!(total, seq.len());

        let mut expected: HashMap<Value, usize> = HashMap::new();
        for item in &seq {
            *expected.entry(item.clone()).or_default() += 1;
        }
        let mut actual: HashMap<Value, usize> = HashMap::new();
        for member in grouped.values().flat_map(|g| g.as_vec().unwrap().to_vec()) {
            *actual.entry(member).or_default() += 1;
        }
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn unique_group_by_has_one_entry_per_key(seq in keyed_seq()) {
        let grouped = group_by(&seq, "k", GroupBy::new().unique(true)).unwrap();
        let distinct: std::collections::HashSet<Value> = seq
            .iter()
            .filter_map(|e| e.as_map().and_then(|m| m.get(&Value::from("k"))).cloned())
            .collect();
        prop_assert_eq!(grouped.len(), distinct.len());
    }
}
