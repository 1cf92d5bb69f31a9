//! Random source abstraction
//!
//! Tool selection is random on purpose. The [`RandomSource`] trait keeps that
//! randomness injectable so a matcher can be made fully deterministic.

use std::fmt::Debug;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniformly distributed indices.
pub trait RandomSource: Send + Sync + Debug {
    /// Returns an index in `0..len`.
    ///
    /// Returns 0 when `len` is 0; callers index with `get` and treat that as "nothing to pick".
    fn pick(&self, len: usize) -> usize;
}

/// Thread-local OS-seeded generator. The production default.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn pick(&self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        rand::thread_rng().gen_range(0..len)
    }
}

/// Reproducible generator seeded from a fixed value.
#[derive(Debug)]
pub struct SeededRandom {
    rng: Mutex<StdRng>,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl RandomSource for SeededRandom {
    fn pick(&self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        self.rng
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .gen_range(0..len)
    }
}

/// Scripted source that replays a fixed sequence of indices, cycling when exhausted.
///
/// Each scripted value is reduced modulo the requested length, so
/// `FixedRandom::new([0])` always picks the first element.
#[derive(Debug)]
pub struct FixedRandom {
    script: Vec<usize>,
    cursor: AtomicUsize,
}

impl FixedRandom {
    pub fn new(script: impl Into<Vec<usize>>) -> Self {
        Self {
            script: script.into(),
            cursor: AtomicUsize::new(0),
        }
    }

    /// Always picks the same index.
    pub fn always(index: usize) -> Self {
        Self::new(vec![index])
    }
}

impl RandomSource for FixedRandom {
    fn pick(&self, len: usize) -> usize {
        if len == 0 || self.script.is_empty() {
            return 0;
        }
        let step = self.cursor.fetch_add(1, Ordering::Relaxed);
        self.script[step % self.script.len()] % len
    }
}
