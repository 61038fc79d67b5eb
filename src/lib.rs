//! # quartic-ga
//!
//! A basic genetic algorithm minimizing f(x, y) = (x - 2)^4 + (x - 2y)^2.
//!
//! A run takes a [`Configuration`](config::Configuration), evolves a population of
//! two-gene individuals with integer or real genes, hands every evaluated generation
//! to a [`GenerationObserver`](observer::GenerationObserver), and returns the best
//! individual seen across all generations.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use quartic_ga::prelude::*;
//! use rand::SeedableRng;
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(42);
//!
//! let config = Configuration::new()
//!     .with_population_size(50)
//!     .with_generations(100)
//!     .with_selection(SelectionMethod::Tournament);
//!
//! let result = run_with_rng(config, &mut rng, &mut |record: &GenerationRecord| {
//!     println!("generation {}: {:?}", record.generation, record.min_fitness());
//! })?;
//! println!("{}", result.summary());
//! ```

pub mod algorithms;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod fitness;
pub mod genome;
pub mod observer;
pub mod operators;
pub mod population;

pub use algorithms::simple_ga::{run, run_with_rng};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::algorithms::prelude::*;
    pub use crate::config::*;
    pub use crate::diagnostics::prelude::*;
    pub use crate::error::*;
    pub use crate::fitness::prelude::*;
    pub use crate::genome::prelude::*;
    pub use crate::observer::*;
    pub use crate::operators::prelude::*;
    pub use crate::population::prelude::*;
}
