//! Fitness evaluation
//!
//! This module provides the objective function minimized by the optimizer.

pub mod objective;

pub mod prelude {
    pub use super::objective::*;
}
