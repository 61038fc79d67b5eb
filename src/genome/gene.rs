//! Genes and their sampling domains
//!
//! A [`Gene`] is one scalar component of an individual. A [`GeneDomain`] is the
//! encoding resolved against the configured bounds: it is built once per run and
//! used by both initialization and mutation to draw fresh genes.

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::{Configuration, Encoding};
use crate::error::EvoResult;
use crate::genome::bounds::Bounds;

/// One scalar component of an individual
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Gene {
    Integer(i64),
    Float(f64),
}

impl Gene {
    /// Widen to real arithmetic
    pub fn to_f64(self) -> f64 {
        match self {
            Self::Integer(v) => v as f64,
            Self::Float(v) => v,
        }
    }

    /// Integer value, if this is an integer gene
    pub fn as_integer(self) -> Option<i64> {
        match self {
            Self::Integer(v) => Some(v),
            Self::Float(_) => None,
        }
    }

    /// Returns true for integer genes
    pub fn is_integer(self) -> bool {
        matches!(self, Self::Integer(_))
    }
}

impl fmt::Display for Gene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(v) => write!(f, "{}", v),
            Self::Float(v) => write!(f, "{}", v),
        }
    }
}

impl From<i64> for Gene {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<i32> for Gene {
    fn from(v: i32) -> Self {
        Self::Integer(v as i64)
    }
}

impl From<f64> for Gene {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

/// Sampling domain for genes of one run
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum GeneDomain {
    /// Integers in `[min, max)`
    Integer { min: i64, max: i64 },
    /// Reals in `[min, max]`
    Float(Bounds),
}

impl GeneDomain {
    /// Resolve the encoding of a configuration against its bounds
    ///
    /// Fails when the gene interval is empty.
    pub fn from_config(config: &Configuration) -> EvoResult<Self> {
        config.check_bounds()?;
        Ok(match config.encoding {
            Encoding::Integer => Self::Integer {
                min: config.gene_min,
                max: config.gene_max,
            },
            Encoding::Float => Self::Float(Bounds::from((config.gene_min, config.gene_max))),
        })
    }

    /// The encoding this domain samples
    pub fn encoding(&self) -> Encoding {
        match self {
            Self::Integer { .. } => Encoding::Integer,
            Self::Float(_) => Encoding::Float,
        }
    }

    /// Draw one gene uniformly from the domain
    ///
    /// Integer draws exclude the upper bound; real draws include it.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> Gene {
        match *self {
            Self::Integer { min, max } => Gene::Integer(rng.gen_range(min..max)),
            Self::Float(b) => Gene::Float(rng.gen_range(b.min..=b.max)),
        }
    }

    /// Check whether a gene belongs to this domain
    pub fn contains(&self, gene: Gene) -> bool {
        match (*self, gene) {
            (Self::Integer { min, max }, Gene::Integer(v)) => v >= min && v < max,
            (Self::Float(b), Gene::Float(v)) => b.contains(v),
            _ => false,
        }
    }

    /// Real-valued hull of the domain
    pub fn bounds(&self) -> Bounds {
        match *self {
            Self::Integer { min, max } => Bounds::from((min, max)),
            Self::Float(b) => b,
        }
    }
}
