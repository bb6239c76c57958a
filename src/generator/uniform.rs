use crate::Error;
use crate::source::Owned;
use crate::source::Shared;
use crate::source::UniformSource;

use super::Generator;

/// Supported bound shapes for the uniform generators.
///
/// `Unit` is the no-argument form; `High` keeps 0 as the other bound
/// without sorting; `Range` sorts, so the pair may arrive in either order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Bounds {
    Unit,
    High(f64),
    Range(f64, f64),
}

impl Bounds {
    /// Real bounds, half-open `[low, high)`.
    fn resolve(self) -> (f64, f64) {
        match self {
            Self::Unit => (0.0, 1.0),
            Self::High(high) => (0.0, high),
            Self::Range(a, b) if a <= b => (a, b),
            Self::Range(a, b) => (b, a),
        }
    }

    /// Integer bounds, inclusive `[low, high]`; real inputs are truncated
    /// toward zero before the mode rule applies. `High` stays unsorted, so
    /// a negative bound yields a negative-oriented range rather than an
    /// error.
    fn resolve_int(self) -> (i64, i64) {
        match self {
            Self::Unit => (0, 1),
            Self::High(high) => (0, high.trunc() as i64),
            Self::Range(a, b) => {
                let a = a.trunc() as i64;
                let b = b.trunc() as i64;
                if a <= b { (a, b) } else { (b, a) }
            }
        }
    }
}

/// Uniform reals over `[low, high)`; the degenerate `low == high` always
/// returns `low`.
#[derive(Debug)]
pub struct Uniform<S = Owned> {
    low: f64,
    high: f64,
    source: S,
}

impl Uniform {
    #[inline]
    pub fn new() -> Self {
        Self::from_bounds(Bounds::Unit)
    }

    #[inline]
    pub fn up_to(high: f64) -> Self {
        Self::from_bounds(Bounds::High(high))
    }

    #[inline]
    pub fn range(a: f64, b: f64) -> Self {
        Self::from_bounds(Bounds::Range(a, b))
    }

    #[inline]
    pub fn from_bounds(bounds: Bounds) -> Self {
        Self::with_source(bounds, Owned::new())
    }
}

impl Default for Uniform {
    fn default() -> Self {
        Self::new()
    }
}

impl Uniform<Shared> {
    /// Bound to the process-wide stream; see [`Shared`].
    #[inline]
    pub fn shared(bounds: Bounds) -> Self {
        Self::with_source(bounds, Shared)
    }
}

impl<S: UniformSource> Uniform<S> {
    #[inline]
    pub fn with_source(bounds: Bounds, source: S) -> Self {
        let (low, high) = bounds.resolve();
        Self { low, high, source }
    }

    #[inline]
    pub fn bounds(&self) -> (f64, f64) {
        (self.low, self.high)
    }
}

impl<S: UniformSource> Generator for Uniform<S> {
    type Item = f64;

    fn seed(&mut self, seeds: &[u64]) -> Result<(), Error> {
        self.source.reseed(super::first_seed(seeds)?);
        Ok(())
    }

    #[inline]
    fn next(&mut self) -> Result<f64, Error> {
        let u = self.source.next_f64();
        Ok(self.low + u * (self.high - self.low))
    }
}

/// Uniform integers over `[low, high]`, both endpoints inclusive.
#[derive(Debug)]
pub struct UniformInt<S = Owned> {
    low: i64,
    high: i64,
    source: S,
}

impl UniformInt {
    #[inline]
    pub fn new() -> Self {
        Self::from_bounds(Bounds::Unit)
    }

    #[inline]
    pub fn up_to(high: f64) -> Self {
        Self::from_bounds(Bounds::High(high))
    }

    #[inline]
    pub fn range(a: f64, b: f64) -> Self {
        Self::from_bounds(Bounds::Range(a, b))
    }

    #[inline]
    pub fn from_bounds(bounds: Bounds) -> Self {
        Self::with_source(bounds, Owned::new())
    }
}

impl Default for UniformInt {
    fn default() -> Self {
        Self::new()
    }
}

impl UniformInt<Shared> {
    /// Bound to the process-wide stream; see [`Shared`].
    #[inline]
    pub fn shared(bounds: Bounds) -> Self {
        Self::with_source(bounds, Shared)
    }
}

impl<S: UniformSource> UniformInt<S> {
    #[inline]
    pub fn with_source(bounds: Bounds, source: S) -> Self {
        let (low, high) = bounds.resolve_int();
        Self { low, high, source }
    }

    #[inline]
    pub fn bounds(&self) -> (i64, i64) {
        (self.low, self.high)
    }
}

impl<S: UniformSource> Generator for UniformInt<S> {
    type Item = i64;

    fn seed(&mut self, seeds: &[u64]) -> Result<(), Error> {
        self.source.reseed(super::first_seed(seeds)?);
        Ok(())
    }

    #[inline]
    fn next(&mut self) -> Result<i64, Error> {
        let u = self.source.next_f64();
        let span = self.high as f64 - self.low as f64 + 1.0;
        Ok(self.low + (u * span).floor() as i64)
    }
}
