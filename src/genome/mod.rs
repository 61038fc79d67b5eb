//! Gene representations
//!
//! This module provides the gene value type, its per-run sampling domain, and bounds.

pub mod bounds;
pub mod gene;

pub mod prelude {
    pub use super::bounds::*;
    pub use super::gene::*;
}
