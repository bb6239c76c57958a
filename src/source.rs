use core::hash::Hash;
use core::hash::Hasher as _;
use std::sync::LazyLock;
use std::sync::Mutex;

use rand::Rng as _;
use rand::SeedableRng as _;
use rand::rngs::StdRng;
use rapidhash::RapidHasher;

/// Uniform collaborator behind every generator: a seedable stream of reals
/// in [0, 1). Any conforming implementation may be substituted, including a
/// scripted double for deterministic tests.
pub trait UniformSource {
    fn reseed(&mut self, seed: u64);

    fn next_f64(&mut self) -> f64;
}

/// Independent stream owned by a single generator instance. Reseeding one
/// instance never affects another.
#[derive(Debug)]
pub struct Owned(StdRng);

impl Owned {
    #[inline]
    pub fn new() -> Self {
        Self(StdRng::from_os_rng())
    }

    #[inline]
    pub fn from_seed(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl Default for Owned {
    fn default() -> Self {
        Self::new()
    }
}

impl UniformSource for Owned {
    #[inline]
    fn reseed(&mut self, seed: u64) {
        tracing::trace!(seed, "reseed owned stream");
        self.0 = StdRng::seed_from_u64(seed);
    }

    #[inline]
    fn next_f64(&mut self) -> f64 {
        self.0.random()
    }
}

static GLOBAL: LazyLock<Mutex<StdRng>> = LazyLock::new(|| Mutex::new(StdRng::from_os_rng()));

/// Handle onto the one process-wide stream.
///
/// Every `Shared` handle draws from and reseeds the *same* state: seeding a
/// generator backed by `Shared` repoints the sequence consumed by every
/// other `Shared`-backed generator in the process, and their interleaved
/// draws are globally ordered. Opt in only where that coupling is wanted;
/// [`Owned`] is the default for a reason.
#[derive(Clone, Copy, Debug, Default)]
pub struct Shared;

impl UniformSource for Shared {
    fn reseed(&mut self, seed: u64) {
        tracing::trace!(seed, "reseed shared stream");
        *GLOBAL.lock().unwrap() = StdRng::seed_from_u64(seed);
    }

    fn next_f64(&mut self) -> f64 {
        GLOBAL.lock().unwrap().random()
    }
}

/// Replays a fixed script of draws, cycling; reseeding rewinds to the
/// start. Deterministic stand-in for tests.
#[derive(Clone, Debug)]
pub struct Scripted {
    values: Vec<f64>,
    cursor: usize,
}

impl Scripted {
    pub fn new(values: Vec<f64>) -> Self {
        assert!(!values.is_empty(), "script must contain at least one draw");
        Self { values, cursor: 0 }
    }
}

impl UniformSource for Scripted {
    fn reseed(&mut self, _seed: u64) {
        self.cursor = 0;
    }

    fn next_f64(&mut self) -> f64 {
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }
}

/// Folds arbitrary hashable seed material (labels, tuples) into a stream
/// seed.
#[inline]
pub fn derive_seed<M: Hash>(material: M) -> u64 {
    let mut hasher = RapidHasher::default();
    material.hash(&mut hasher);
    hasher.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn owned_reseed_restarts_the_stream() {
        let mut source = Owned::from_seed(7);
        let first: Vec<f64> = (0..5).map(|_| source.next_f64()).collect();
        source.reseed(7);
        let second: Vec<f64> = (0..5).map(|_| source.next_f64()).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn owned_streams_are_independent() {
        let mut left = Owned::from_seed(1);
        let mut right = Owned::from_seed(1);
        left.reseed(99);
        let _ = left.next_f64();
        right.reseed(1);
        let replay: Vec<f64> = (0..3).map(|_| right.next_f64()).collect();
        let mut reference = Owned::from_seed(1);
        reference.reseed(1);
        let expected: Vec<f64> = (0..3).map(|_| reference.next_f64()).collect();
        assert_eq!(replay, expected);
    }

    #[test]
    fn scripted_cycles_and_rewinds() {
        let mut source = Scripted::new(vec![0.25, 0.75]);
        assert_eq!(source.next_f64(), 0.25);
        assert_eq!(source.next_f64(), 0.75);
        assert_eq!(source.next_f64(), 0.25);
        source.reseed(0);
        assert_eq!(source.next_f64(), 0.25);
    }

    #[test]
    fn derive_seed_is_stable_per_material() {
        assert_eq!(derive_seed("run-a"), derive_seed("run-a"));
        assert_ne!(derive_seed("run-a"), derive_seed("run-b"));
    }
}
