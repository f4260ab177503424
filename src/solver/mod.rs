//! Two-phase TSP solve engine.
//!
//! - Phase 1: nearest-neighbor construction from every start node, keeping
//!   the shortest tour found
//! - Phase 2: 2-opt refinement of that tour to a local optimum

mod engine;

pub use engine::Solver;
