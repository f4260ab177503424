//! Domain model types for the TSP solver.
//!
//! Provides the core abstractions: node coordinates with the TSPLIB
//! distance formulas, and the cyclic tour with its cached total length.

mod point;
mod tour;

pub use point::Point;
pub use tour::Tour;
