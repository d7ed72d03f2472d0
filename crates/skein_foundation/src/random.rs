//! Uniform random index generation.
//!
//! Sampling needs a source of uniformly distributed integers in an inclusive
//! range. [`ThreadRandom`] draws from the thread-local generator;
//! [`SeededRandom`] is deterministic from a `u64` seed and is what tests use.

use std::collections::HashSet;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::error::{Error, ErrorKind};
use crate::Result;

/// Number of draws [`random_index`] makes before it stops retrying and picks
/// directly from the remaining candidates.
pub const MAX_RANDOM_ATTEMPTS: usize = 32;

/// A source of uniformly distributed integers.
pub trait RandomSource {
    /// Returns an integer in `min..=max`.
    ///
    /// Callers guarantee `min <= max`.
    fn uniform_int(&mut self, min: usize, max: usize) -> usize;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn uniform_int(&mut self, min: usize, max: usize) -> usize {
        (**self).uniform_int(min, max)
    }
}

/// Random source backed by the thread-local generator.
#[derive(Clone, Copy, Debug, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn uniform_int(&mut self, min: usize, max: usize) -> usize {
        rand::thread_rng().gen_range(min..=max)
    }
}

/// Deterministic random source.
///
/// Two sources built from the same seed produce the same sequence.
#[derive(Clone, Debug)]
pub struct SeededRandom {
    rng: ChaCha8Rng,
}

impl SeededRandom {
    /// Creates a source seeded with `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn uniform_int(&mut self, min: usize, max: usize) -> usize {
        self.rng.gen_range(min..=max)
    }
}

/// Draws an index in `min..=max` that is not in `excluding`.
///
/// Re-draws on collision up to [`MAX_RANDOM_ATTEMPTS`] times, then picks
/// uniformly among the candidates that remain.
///
/// # Errors
///
/// Returns [`ErrorKind::ExhaustedRange`] if `min > max` or every index in the
/// range is excluded.
pub fn random_index<R>(
    source: &mut R,
    min: usize,
    max: usize,
    excluding: &HashSet<usize>,
) -> Result<usize>
where
    R: RandomSource + ?Sized,
{
    let exhausted = || Error::new(ErrorKind::ExhaustedRange { min, max });
    if min > max {
        return Err(exhausted());
    }

    let span = (max - min).saturating_add(1);
    let excluded_in_range = excluding.iter().filter(|i| (min..=max).contains(*i)).count();
    if excluded_in_range >= span {
        return Err(exhausted());
    }

    for _ in 0..MAX_RANDOM_ATTEMPTS {
        let index = source.uniform_int(min, max);
        if !excluding.contains(&index) {
            return Ok(index);
        }
    }

    debug!(
        min,
        max,
        excluded = excluded_in_range,
        "random retries exhausted, picking from remaining candidates"
    );
    let remaining: Vec<usize> = (min..=max).filter(|i| !excluding.contains(i)).collect();
    let pick = source.uniform_int(0, remaining.len() - 1);
    Ok(remaining[pick])
}
