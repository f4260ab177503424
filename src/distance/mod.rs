//! Distance model.
//!
//! Provides the dense integer distance matrix the solver runs against.

mod matrix;

pub use matrix::DistanceMatrix;
