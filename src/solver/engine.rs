//! Multi-start construction plus 2-opt refinement.

use crate::constructive::nearest_neighbor_tour;
use crate::distance::DistanceMatrix;
use crate::local_search::two_opt;
use crate::models::Tour;

/// The solve engine.
///
/// Borrows a distance matrix for the duration of a solve and produces the
/// best tour found by running nearest-neighbor construction from every
/// start node and refining the winner with 2-opt. Entirely deterministic:
/// the same matrix always yields the same tour.
///
/// # Examples
///
/// ```
/// use tsp_approx::distance::DistanceMatrix;
/// use tsp_approx::solver::Solver;
///
/// // The only Hamiltonian cycle over three nodes: 10 + 20 + 15 = 45.
/// let dm = DistanceMatrix::from_data(3, vec![
///     0, 10, 15,
///     10, 0, 20,
///     15, 20, 0,
/// ]).unwrap();
/// let tour = Solver::new(&dm).solve();
/// assert_eq!(tour.total_distance(), 45);
/// ```
pub struct Solver<'a> {
    distances: &'a DistanceMatrix,
}

impl<'a> Solver<'a> {
    /// Creates a solver over the given distance matrix.
    pub fn new(distances: &'a DistanceMatrix) -> Self {
        Self { distances }
    }

    /// Runs both phases and returns the best tour found.
    ///
    /// Never fails: degenerate instances (zero or one node) yield the
    /// trivial tour with distance 0, and malformed matrices degrade to the
    /// best structurally valid partial tour the construction phase can
    /// produce.
    pub fn solve(&self) -> Tour {
        let n = self.distances.size();
        if n <= 1 {
            return nearest_neighbor_tour(self.distances, 0);
        }

        // Phase 1: fold over start nodes, keeping the shortest tour.
        let mut best = nearest_neighbor_tour(self.distances, 0);
        for start in 1..n {
            let candidate = nearest_neighbor_tour(self.distances, start);
            if candidate.total_distance() < best.total_distance() {
                best = candidate;
            }
        }

        // Phase 2: refine to a 2-opt local optimum.
        two_opt(&best, self.distances)
    }
}
