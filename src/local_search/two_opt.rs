//! 2-opt tour refinement.
//!
//! # Algorithm
//!
//! For every pair of non-adjacent tour edges `(a, b)` and `(c, d)`, compute
//! the change in cycle length from replacing them with `(a, c)` and
//! `(b, d)`:
//!
//! ```text
//! delta = d(a, c) + d(b, d) - d(a, b) - d(c, d)
//! ```
//!
//! A negative delta means reversing the segment between `b` and `c` shortens
//! the cycle. Moves are tried first-improvement: a candidate mutates a copy
//! of the incumbent, recomputes its length from scratch and replaces the
//! incumbent only when strictly shorter. Passes repeat until one completes
//! with no accepted move, leaving a 2-opt local optimum.
//!
//! # Complexity
//!
//! O(n²) per pass, O(n³) worst case for convergence.
//!
//! # Reference
//!
//! Croes, G.A. (1958). "A method for solving traveling salesman problems",
//! *Operations Research* 6(6), 791-812.

use crate::distance::DistanceMatrix;
use crate::models::Tour;

/// Refines a tour by 2-opt edge exchanges until no improving move remains.
///
/// Never returns a tour longer than the input. Trial moves always mutate a
/// copy; the recompute-then-compare acceptance guards against distance-table
/// inconsistencies, so a rejected candidate can never corrupt the incumbent.
///
/// Tours of fewer than three nodes have no exchangeable edge pair and are
/// returned unchanged.
///
/// # Examples
///
/// ```
/// use tsp_approx::distance::DistanceMatrix;
/// use tsp_approx::local_search::two_opt;
/// use tsp_approx::models::{Point, Tour};
///
/// // A 10x10 square; the crossing tour 0→2→1→3 is improvable.
/// let points = vec![
///     Point::new(0.0, 0.0),
///     Point::new(10.0, 0.0),
///     Point::new(10.0, 10.0),
///     Point::new(0.0, 10.0),
/// ];
/// let dm = DistanceMatrix::from_points(&points, Point::euc_2d);
/// let crossing = Tour::new(vec![0, 2, 1, 3], &dm);
///
/// let refined = two_opt(&crossing, &dm);
/// assert_eq!(refined.total_distance(), 40); // the perimeter
/// ```
pub fn two_opt(tour: &Tour, distances: &DistanceMatrix) -> Tour {
    let mut best = tour.clone();
    let n = best.len();
    if n < 3 {
        return best;
    }

    let mut improved = true;
    while improved {
        improved = false;
        for i in 0..n - 2 {
            // j >= i + 2 keeps the two edges distinct and non-adjacent;
            // the second edge wraps to node 0 when j is the last index.
            for j in (i + 2)..n {
                let nodes = best.nodes();
                let a = nodes[i];
                let b = nodes[i + 1];
                let c = nodes[j];
                let d = nodes[if j == n - 1 { 0 } else { j + 1 }];

                let delta = match exchange_delta(distances, a, b, c, d) {
                    Some(delta) => delta,
                    None => continue,
                };
                if delta < 0 {
                    let mut candidate = best.clone();
                    candidate.reverse_segment(i + 1, j);
                    candidate.recalculate(distances);
                    if candidate.total_distance() < best.total_distance() {
                        best = candidate;
                        improved = true;
                    }
                }
            }
        }
    }

    best
}

/// Length change from replacing edges `(a, b)` and `(c, d)` with `(a, c)`
/// and `(b, d)`.
///
/// `None` when any required distance is missing; such a move is skipped.
fn exchange_delta(
    distances: &DistanceMatrix,
    a: usize,
    b: usize,
    c: usize,
    d: usize,
) -> Option<i64> {
    Some(distances.get(a, c)? + distances.get(b, d)? - distances.get(a, b)? - distances.get(c, d)?)
}
