use crate::Error;
use crate::source::Owned;
use crate::source::Shared;
use crate::source::UniformSource;

use super::Generator;

/// Resamples, with replacement, from a dataset captured by value at
/// construction. Later changes to the caller's collection cannot reach the
/// generator.
#[derive(Debug)]
pub struct Bootstrap<T, S = Owned> {
    data: Vec<T>,
    source: S,
}

impl<T: Clone> Bootstrap<T> {
    /// Builds from individually supplied items.
    pub fn from_values<I>(values: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = T>,
    {
        Self::with_source(values.into_iter().collect(), Owned::new())
    }

    /// Builds from an already-collected dataset. The whole vector is the
    /// dataset; to resample a lone sequence-valued item, wrap it in an
    /// enclosing collection first.
    pub fn from_sequence(data: Vec<T>) -> Result<Self, Error> {
        Self::with_source(data, Owned::new())
    }
}

impl<T: Clone> Bootstrap<T, Shared> {
    /// Bound to the process-wide stream; see [`Shared`].
    pub fn shared(data: Vec<T>) -> Result<Self, Error> {
        Self::with_source(data, Shared)
    }
}

impl<T: Clone, S: UniformSource> Bootstrap<T, S> {
    pub fn with_source(data: Vec<T>, source: S) -> Result<Self, Error> {
        if data.is_empty() {
            return Err(Error::EmptyDataset);
        }
        Ok(Self { data, source })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always false: construction rejects empty datasets.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    #[inline]
    pub fn data(&self) -> &[T] {
        &self.data
    }
}

impl<T: Clone, S: UniformSource> Generator for Bootstrap<T, S> {
    type Item = T;

    fn seed(&mut self, seeds: &[u64]) -> Result<(), Error> {
        self.source.reseed(super::first_seed(seeds)?);
        Ok(())
    }

    #[inline]
    fn next(&mut self) -> Result<T, Error> {
        let u = self.source.next_f64();
        let index = ((u * self.data.len() as f64) as usize).min(self.data.len() - 1);
        Ok(self.data[index].clone())
    }
}
