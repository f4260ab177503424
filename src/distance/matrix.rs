//! Dense distance matrix.

use crate::models::Point;
use std::fmt;

/// A dense n×n integer distance matrix stored in row-major order.
///
/// Built once from parsed data (explicit weights or node coordinates) and
/// immutable for the duration of a solve. Lookups are bounds-checked: an
/// out-of-range index yields `None`, which callers must treat as "no usable
/// edge" rather than a zero-or-positive cost.
///
/// # Examples
///
/// ```
/// use tsp_approx::distance::DistanceMatrix;
///
/// let dm = DistanceMatrix::from_data(2, vec![0, 5, 5, 0]).unwrap();
/// assert_eq!(dm.get(0, 1), Some(5));
/// assert_eq!(dm.get(0, 2), None);
/// assert_eq!(dm.size(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    data: Vec<i64>,
    size: usize,
}

impl DistanceMatrix {
    /// Creates a distance matrix of the given size, initialized to zero.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0; size * size],
            size,
        }
    }

    /// Creates a distance matrix from an explicit n×n grid in row-major
    /// order.
    ///
    /// Returns `None` if the data length doesn't match `size * size`.
    pub fn from_data(size: usize, data: Vec<i64>) -> Option<Self> {
        if data.len() != size * size {
            return None;
        }
        Some(Self { data, size })
    }

    /// Computes a distance matrix from node coordinates under the given
    /// metric.
    ///
    /// Both triangles are filled symmetrically and the diagonal stays zero,
    /// whichever coordinate-based weight type the metric implements.
    pub fn from_points<F>(points: &[Point], metric: F) -> Self
    where
        F: Fn(&Point, &Point) -> i64,
    {
        let n = points.len();
        let mut dm = Self::new(n);
        for i in 0..n {
            for j in (i + 1)..n {
                let d = metric(&points[i], &points[j]);
                dm.set(i, j, d);
                dm.set(j, i, d);
            }
        }
        dm
    }

    /// Returns the distance from node `from` to node `to`, or `None` if
    /// either index is out of range.
    pub fn get(&self, from: usize, to: usize) -> Option<i64> {
        if from >= self.size || to >= self.size {
            return None;
        }
        Some(self.data[from * self.size + to])
    }

    /// Sets the distance from node `from` to node `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn set(&mut self, from: usize, to: usize, distance: i64) {
        self.data[from * self.size + to] = distance;
    }

    /// Number of nodes in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the matrix is symmetric.
    pub fn is_symmetric(&self) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if self.data[i * self.size + j] != self.data[j * self.size + i] {
                    return false;
                }
            }
        }
        true
    }
}

impl fmt::Display for DistanceMatrix {
    /// Renders the matrix with aligned columns (the `--debug` view).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .data
            .iter()
            .map(|d| d.to_string().len())
            .max()
            .unwrap_or(1);
        writeln!(f, "Distance matrix ({}x{}):", self.size, self.size)?;
        for i in 0..self.size {
            for j in 0..self.size {
                write!(f, "{:>width$} ", self.data[i * self.size + j])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_points() -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(3.0, 4.0),
            Point::new(0.0, 8.0),
        ]
    }

    #[test]
    fn test_from_points_euc_2d() {
        let dm = DistanceMatrix::from_points(&sample_points(), Point::euc_2d);
        assert_eq!(dm.size(), 3);
        assert_eq!(dm.get(0, 1), Some(5));
        assert_eq!(dm.get(0, 2), Some(8));
        assert_eq!(dm.get(0, 0), Some(0));
    }

    #[test]
    fn test_from_points_att_populates_both_triangles() {
        let dm = DistanceMatrix::from_points(&sample_points(), Point::att);
        for i in 0..3 {
            for j in (i + 1)..3 {
                assert_eq!(dm.get(i, j), dm.get(j, i));
                assert!(dm.get(i, j).expect("in range") > 0);
            }
        }
        assert!(dm.is_symmetric());
    }

    #[test]
    fn test_from_data() {
        let dm = DistanceMatrix::from_data(2, vec![0, 5, 5, 0]).expect("valid");
        assert_eq!(dm.get(0, 1), Some(5));
        assert_eq!(dm.get(1, 0), Some(5));
    }

    #[test]
    fn test_from_data_invalid_size() {
        assert!(DistanceMatrix::from_data(2, vec![0, 1, 2]).is_none());
    }

    #[test]
    fn test_get_out_of_range() {
        let dm = DistanceMatrix::new(3);
        assert_eq!(dm.get(3, 0), None);
        assert_eq!(dm.get(0, 3), None);
        assert_eq!(dm.get(5, 5), None);
    }

    #[test]
    fn test_get_empty_matrix() {
        let dm = DistanceMatrix::new(0);
        assert_eq!(dm.size(), 0);
        assert_eq!(dm.get(0, 0), None);
    }

    #[test]
    fn test_set_get() {
        let mut dm = DistanceMatrix::new(3);
        dm.set(0, 1, 42);
        assert_eq!(dm.get(0, 1), Some(42));
        assert_eq!(dm.get(1, 0), Some(0));
    }

    #[test]
    fn test_asymmetric_detected() {
        let mut dm = DistanceMatrix::new(2);
        dm.set(0, 1, 10);
        dm.set(1, 0, 15);
        assert!(!dm.is_symmetric());
    }

    #[test]
    fn test_display_aligns_columns() {
        let dm = DistanceMatrix::from_data(2, vec![0, 100, 100, 0]).expect("valid");
        let text = dm.to_string();
        assert!(text.contains("Distance matrix (2x2):"));
        assert!(text.contains("100"));
    }

    #[test]
    fn test_att_rounding_matches_formula() {
        let points = vec![Point::new(0.0, 0.0), Point::new(10.0, 0.0)];
        let dm = DistanceMatrix::from_points(&points, Point::att);
        // sqrt(100 / 10) = 3.162... rounds to 3
        assert_eq!(dm.get(0, 1), Some(3));
    }
}
