//! # tsp-approx
//!
//! Approximate Traveling Salesman Problem solver for symmetric TSPLIB
//! instances: multi-start nearest-neighbor construction followed by 2-opt
//! local-search refinement.
//!
//! ## Modules
//!
//! - [`models`] — Domain types (Point, Tour)
//! - [`distance`] — Dense integer distance matrix
//! - [`constructive`] — Nearest-neighbor tour construction
//! - [`local_search`] — 2-opt local search
//! - [`solver`] — Two-phase solve engine
//! - [`io`] — TSPLIB instance loading and tour file output

pub mod constructive;
pub mod distance;
pub mod io;
pub mod local_search;
pub mod models;
pub mod solver;
