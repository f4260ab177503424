//! Cyclic tour with cached total length.

use crate::distance::DistanceMatrix;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A closed tour over node indices.
///
/// The sequence is implicitly cyclic: the last node connects back to the
/// first. `total_distance` is a cached value computed against the matrix the
/// tour was built (or last recalculated) against; after any structural edit
/// it is stale until [`Tour::recalculate`] is called. Tours are compared by
/// total distance only — two different orderings of equal length are equally
/// good candidates.
///
/// # Examples
///
/// ```
/// use tsp_approx::distance::DistanceMatrix;
/// use tsp_approx::models::Tour;
///
/// let dm = DistanceMatrix::from_data(3, vec![
///     0, 10, 15,
///     10, 0, 20,
///     15, 20, 0,
/// ]).unwrap();
/// let tour = Tour::new(vec![0, 1, 2], &dm);
/// // 0→1 + 1→2 + closing 2→0 = 10 + 20 + 15
/// assert_eq!(tour.total_distance(), 45);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tour {
    nodes: Vec<usize>,
    total_distance: i64,
}

impl Tour {
    /// Builds a tour and eagerly computes its total length, including the
    /// closing edge from the last node back to the first.
    ///
    /// Sequences of fewer than two nodes have length 0 and perform no
    /// matrix lookups.
    pub fn new(nodes: Vec<usize>, distances: &DistanceMatrix) -> Self {
        let total_distance = cycle_length(&nodes, distances);
        Self {
            nodes,
            total_distance,
        }
    }

    /// Returns the node sequence (0-indexed).
    pub fn nodes(&self) -> &[usize] {
        &self.nodes
    }

    /// Number of nodes in the tour.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the tour visits no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The cached total length of the cycle.
    ///
    /// Valid only if no structural edit happened since construction or the
    /// last [`Tour::recalculate`].
    pub fn total_distance(&self) -> i64 {
        self.total_distance
    }

    /// Reverses the closed index range `[start, end]` in place.
    ///
    /// This is the elementary 2-opt move: reversing the segment between two
    /// edge endpoints exchanges the two edges while keeping a single cycle.
    /// No-op when `start >= end` or `end` is out of range. Leaves the cached
    /// length stale; call [`Tour::recalculate`] before trusting it again.
    pub fn reverse_segment(&mut self, start: usize, end: usize) {
        if start >= end || end >= self.nodes.len() {
            return;
        }
        self.nodes[start..=end].reverse();
    }

    /// Recomputes the cached total length from scratch against `distances`.
    pub fn recalculate(&mut self, distances: &DistanceMatrix) {
        self.total_distance = cycle_length(&self.nodes, distances);
    }
}

/// Sum of edge distances around the cycle, including the closing edge.
///
/// Missing lookups (out-of-range indices) contribute nothing to the sum;
/// they are "no edge", never a valid cost.
fn cycle_length(nodes: &[usize], distances: &DistanceMatrix) -> i64 {
    if nodes.len() < 2 {
        return 0;
    }
    let mut total = 0;
    for pair in nodes.windows(2) {
        if let Some(d) = distances.get(pair[0], pair[1]) {
            total += d;
        }
    }
    if let Some(d) = distances.get(nodes[nodes.len() - 1], nodes[0]) {
        total += d;
    }
    total
}

impl fmt::Display for Tour {
    /// Prints the 1-indexed node sequence and the total distance.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tour ({} nodes): ", self.nodes.len())?;
        for (i, node) in self.nodes.iter().enumerate() {
            if i > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "{}", node + 1)?;
        }
        writeln!(f)?;
        write!(f, "Total distance: {}", self.total_distance)
    }
}
