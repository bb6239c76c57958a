//! Pseudo-random variate generation behind one small contract: seed a
//! generator, then pull variates one draw at a time. Normal variates go
//! through a rational approximation of the inverse standard-normal CDF;
//! everything else is an arithmetic remap of a single uniform draw.

mod error;
pub mod generator;
pub mod source;

pub use error::Error;
pub use generator::Bootstrap;
pub use generator::Bounds;
pub use generator::Generator;
pub use generator::Normal;
pub use generator::Uniform;
pub use generator::UniformInt;

/// Distribution description: the data needed to build one [`Sampler`].
///
/// `Uniform`/`UniformInt` bounds are sorted at build time, so the pair may
/// arrive in either order; integer bounds are truncated toward zero.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "distribution", rename_all = "snake_case"))]
pub enum Distribution {
    Uniform {
        #[cfg_attr(feature = "serde", serde(default))]
        low: f64,
        #[cfg_attr(feature = "serde", serde(default = "default::high"))]
        high: f64,
    },
    UniformInt {
        #[cfg_attr(feature = "serde", serde(default))]
        low: f64,
        #[cfg_attr(feature = "serde", serde(default = "default::high"))]
        high: f64,
    },
    Normal {
        #[cfg_attr(feature = "serde", serde(default))]
        mean: f64,
        #[cfg_attr(feature = "serde", serde(default = "default::stdev"))]
        stdev: f64,
    },
    Bootstrap { data: Vec<f64> },
}

impl Distribution {
    /// Builds the described generator over a fresh owned stream.
    pub fn sampler(&self) -> Result<Sampler, Error> {
        tracing::debug!(?self, "build sampler");
        let sampler = match self {
            Self::Uniform { low, high } => Sampler::Uniform(Uniform::range(*low, *high)),
            Self::UniformInt { low, high } => Sampler::UniformInt(UniformInt::range(*low, *high)),
            Self::Normal { mean, stdev } => Sampler::Normal(Normal::new(*mean, *stdev)),
            Self::Bootstrap { data } => Sampler::Bootstrap(Bootstrap::from_sequence(data.clone())?),
        };
        Ok(sampler)
    }
}

/// Enum dispatch over the concrete generators, unified on `f64` output;
/// integer draws widen losslessly.
#[derive(Debug)]
pub enum Sampler {
    Uniform(Uniform),
    UniformInt(UniformInt),
    Normal(Normal),
    Bootstrap(Bootstrap<f64>),
}

impl Generator for Sampler {
    type Item = f64;

    fn seed(&mut self, seeds: &[u64]) -> Result<(), Error> {
        match self {
            Self::Uniform(inner) => inner.seed(seeds),
            Self::UniformInt(inner) => inner.seed(seeds),
            Self::Normal(inner) => inner.seed(seeds),
            Self::Bootstrap(inner) => inner.seed(seeds),
        }
    }

    fn next(&mut self) -> Result<f64, Error> {
        match self {
            Self::Uniform(inner) => inner.next(),
            Self::UniformInt(inner) => inner.next().map(|value| value as f64),
            Self::Normal(inner) => inner.next(),
            Self::Bootstrap(inner) => inner.next(),
        }
    }
}

#[cfg(feature = "serde")]
#[rustfmt::skip]
mod default {
    pub(super) fn high() -> f64 { 1.0 }
    pub(super) fn stdev() -> f64 { 1.0 }
}
