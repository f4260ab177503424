//! Node coordinates and TSPLIB distance formulas.

use serde::{Deserialize, Serialize};

/// A 2-D node position from a TSPLIB `NODE_COORD_SECTION`.
///
/// Carries the two coordinate-based distance formulas the solver supports:
/// rounded Euclidean (`EUC_2D`) and pseudo-Euclidean (`ATT`). Both round to
/// the nearest integer, per the TSPLIB convention.
///
/// # Examples
///
/// ```
/// use tsp_approx::models::Point;
///
/// let a = Point::new(0.0, 0.0);
/// let b = Point::new(3.0, 4.0);
/// assert_eq!(a.euc_2d(&b), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
}

impl Point {
    /// Creates a point at the given coordinates.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Rounded Euclidean distance to `other` (`EDGE_WEIGHT_TYPE: EUC_2D`).
    pub fn euc_2d(&self, other: &Point) -> i64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt().round() as i64
    }

    /// Pseudo-Euclidean distance to `other` (`EDGE_WEIGHT_TYPE: ATT`).
    ///
    /// `round(sqrt((dx² + dy²) / 10))`, per the TSPLIB documentation.
    pub fn att(&self, other: &Point) -> i64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        ((dx * dx + dy * dy) / 10.0).sqrt().round() as i64
    }
}
