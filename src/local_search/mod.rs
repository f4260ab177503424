//! Local search operators for improving tours.
//!
//! - [`two_opt`] — Pairwise edge exchange by segment reversal

mod two_opt;

pub use two_opt::two_opt;
