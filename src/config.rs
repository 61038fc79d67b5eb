//! Run configuration
//!
//! This module provides the immutable [`Configuration`] consumed by the optimizer
//! and the raw-text [`FormInput`] surface a front end fills in.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{EvoResult, EvolutionError, ParseError};
use crate::operators::selection::TOURNAMENT_SIZE;

/// Representation domain of the genes
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Encoding {
    /// Integer genes drawn from `[gene_min, gene_max)`
    #[default]
    Integer,
    /// Real genes drawn from `[gene_min, gene_max]`
    Float,
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer => f.write_str("Integer"),
            Self::Float => f.write_str("Float"),
        }
    }
}

impl FromStr for Encoding {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "integer" | "int" => Ok(Self::Integer),
            "float" | "real" => Ok(Self::Float),
            _ => Err(ParseError::UnknownEncoding(s.to_string())),
        }
    }
}

/// Parent selection strategy
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SelectionMethod {
    /// Fitness-proportionate roulette wheel
    #[default]
    Roulette,
    /// Best of a random sample of three
    Tournament,
}

impl fmt::Display for SelectionMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Roulette => f.write_str("Roulette"),
            Self::Tournament => f.write_str("Tournament"),
        }
    }
}

impl FromStr for SelectionMethod {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "roulette" => Ok(Self::Roulette),
            "tournament" => Ok(Self::Tournament),
            _ => Err(ParseError::UnknownSelection(s.to_string())),
        }
    }
}

/// Configuration for a single optimizer run
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Configuration {
    /// Number of individuals per generation
    pub population_size: usize,
    /// Lower gene bound (inclusive)
    pub gene_min: i64,
    /// Upper gene bound (exclusive for integer genes, inclusive for real genes)
    pub gene_max: i64,
    /// Number of generations to evaluate
    pub generation_count: usize,
    /// Probability that a child has one of its genes redrawn
    pub mutation_rate: f64,
    /// Gene encoding
    pub encoding: Encoding,
    /// Parent selection strategy
    pub selection_method: SelectionMethod,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            population_size: 50,
            gene_min: -50,
            gene_max: 50,
            generation_count: 100,
            mutation_rate: 0.2,
            encoding: Encoding::Integer,
            selection_method: SelectionMethod::Roulette,
        }
    }
}

impl Configuration {
    /// Create a configuration with the default form values
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode a JSON configuration document and validate it
    pub fn from_json(document: &str) -> EvoResult<Self> {
        let config: Self = serde_json::from_str(document)
            .map_err(|e| ParseError::Document(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Set the population size
    pub fn with_population_size(mut self, size: usize) -> Self {
        self.population_size = size;
        self
    }

    /// Set the gene bounds
    pub fn with_bounds(mut self, gene_min: i64, gene_max: i64) -> Self {
        self.gene_min = gene_min;
        self.gene_max = gene_max;
        self
    }

    /// Set the number of generations
    pub fn with_generations(mut self, count: usize) -> Self {
        self.generation_count = count;
        self
    }

    /// Set the mutation rate as a probability in `[0, 1]`
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Set the mutation rate as a percentage, as entered on the form
    pub fn with_mutation_percent(mut self, percent: f64) -> Self {
        self.mutation_rate = percent / 100.0;
        self
    }

    /// Set the gene encoding
    pub fn with_encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Set the selection strategy
    pub fn with_selection(mut self, method: SelectionMethod) -> Self {
        self.selection_method = method;
        self
    }

    /// Check every field before a run starts
    pub fn validate(&self) -> EvoResult<()> {
        if self.population_size == 0 {
            return Err(EvolutionError::Configuration(
                "population_size must be positive".to_string(),
            ));
        }
        self.check_bounds()?;
        if self.generation_count == 0 {
            return Err(EvolutionError::Configuration(
                "generation_count must be at least 1".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(EvolutionError::Configuration(format!(
                "mutation_rate ({}) must be in [0, 1]",
                self.mutation_rate
            )));
        }
        if self.selection_method == SelectionMethod::Tournament
            && self.population_size < TOURNAMENT_SIZE
        {
            return Err(EvolutionError::Configuration(format!(
                "tournament selection needs at least {} individuals, got {}",
                TOURNAMENT_SIZE, self.population_size
            )));
        }
        Ok(())
    }

    /// Check that the gene interval is non-empty
    pub(crate) fn check_bounds(&self) -> EvoResult<()> {
        if self.gene_min >= self.gene_max {
            return Err(EvolutionError::Configuration(format!(
                "gene_min ({}) must be < gene_max ({})",
                self.gene_min, self.gene_max
            )));
        }
        Ok(())
    }
}

/// Raw text of the parameter form
///
/// Every field is kept as typed; [`FormInput::parse`] converts and validates.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormInput {
    pub chromosomes: String,
    pub gene_min: String,
    pub gene_max: String,
    pub generations: String,
    /// Mutation probability in percent
    pub mutation_percent: String,
    pub encoding: String,
    pub selection: String,
}

impl Default for FormInput {
    fn default() -> Self {
        Self {
            chromosomes: "50".to_string(),
            gene_min: "-50".to_string(),
            gene_max: "50".to_string(),
            generations: "100".to_string(),
            mutation_percent: "20".to_string(),
            encoding: Encoding::Integer.to_string(),
            selection: SelectionMethod::Roulette.to_string(),
        }
    }
}

impl FormInput {
    /// Convert the form into a validated configuration
    pub fn parse(&self) -> EvoResult<Configuration> {
        let config = Configuration {
            population_size: parse_count("chromosomes", &self.chromosomes)?,
            gene_min: parse_integer("gene_min", &self.gene_min)?,
            gene_max: parse_integer("gene_max", &self.gene_max)?,
            generation_count: parse_count("generations", &self.generations)?,
            mutation_rate: parse_number("mutation_percent", &self.mutation_percent)? / 100.0,
            encoding: self.encoding.parse()?,
            selection_method: self.selection.parse()?,
        };
        config.validate()?;
        Ok(config)
    }
}

fn parse_integer(field: &'static str, value: &str) -> Result<i64, ParseError> {
    value
        .trim()
        .parse::<i64>()
        .map_err(|_| ParseError::InvalidInteger {
            field,
            value: value.to_string(),
        })
}

// Negative counts are well-formed integers; they collapse to zero and fail validation.
fn parse_count(field: &'static str, value: &str) -> Result<usize, ParseError> {
    let n = parse_integer(field, value)?;
    Ok(usize::try_from(n).unwrap_or(0))
}

fn parse_number(field: &'static str, value: &str) -> Result<f64, ParseError> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| ParseError::InvalidNumber {
            field,
            value: value.to_string(),
        })
}
