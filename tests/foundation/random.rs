//! Integration tests for random sources
//!
//! Tests seeded determinism and exclusion-aware index selection.

use std::collections::HashSet;

use skein_foundation::{ErrorKind, RandomSource, SeededRandom, ThreadRandom, random_index};

#[test]
fn seeded_source_is_deterministic() {
    let draw = |seed| {
        let mut source = SeededRandom::new(seed);
        (0..10).map(|_| source.uniform_int(0, 9)).collect::<Vec<_>>()
    };
    assert_eq!(draw(11), draw(11));
}

#[test]
fn random_index_avoids_exclusions() {
    let excluding: HashSet<usize> = (0..9).collect();
    let mut source = ThreadRandom;
    for _ in 0..20 {
        assert_eq!(random_index(&mut source, 0, 9, &excluding).unwrap(), 9);
    }
}

#[test]
fn random_index_fails_when_everything_is_excluded() {
    let excluding: HashSet<usize> = (0..=3).collect();
    let err = random_index(&mut SeededRandom::new(1), 0, 3, &excluding).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::ExhaustedRange { min: 0, max: 3 }));
}

#[test]
fn random_index_rejects_inverted_range() {
    let err = random_index(&mut SeededRandom::new(1), 5, 2, &HashSet::new()).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::ExhaustedRange { .. }));
}
