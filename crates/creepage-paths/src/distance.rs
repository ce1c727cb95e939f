use creepage_core::Point;

/// Cost of a horizontal or vertical step, in grid units.
pub const COST_STRAIGHT: f64 = 1.0;

/// Cost of a diagonal step, in grid units.
///
/// One fixed constant so that repeated searches never drift on the value.
pub const COST_DIAGONAL: f64 = std::f64::consts::SQRT_2;

/// Euclidean (L2) distance between two points.
///
/// Admissible and consistent as an A* heuristic for 8-way movement with
/// √2-cost diagonals.
#[inline]
pub fn euclidean(a: Point, b: Point) -> f64 {
    let dx = (a.x - b.x).abs() as f64;
    let dy = (a.y - b.y).abs() as f64;
    (dx * dx + dy * dy).sqrt()
}

/// Chebyshev (L∞) distance between two points.
#[inline]
pub fn chebyshev(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs().max((a.y - b.y).abs())
}

/// Physical cost of one step between adjacent cells.
///
/// Diagonal when both coordinate deltas have magnitude 1, straight
/// otherwise.
#[inline]
pub fn step_cost(a: Point, b: Point) -> f64 {
    if (a.x - b.x).abs() == 1 && (a.y - b.y).abs() == 1 {
        COST_DIAGONAL
    } else {
        COST_STRAIGHT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn euclidean_basics() {
        let a = Point::new(0, 0);
        assert_eq!(euclidean(a, Point::new(3, 4)), 5.0);
        assert_eq!(euclidean(a, a), 0.0);
        assert!((euclidean(a, Point::new(1, 1)) - COST_DIAGONAL).abs() < 1e-12);
    }

    #[test]
    fn chebyshev_basics() {
        let a = Point::new(2, 3);
        assert_eq!(chebyshev(a, Point::new(5, 4)), 3);
        assert_eq!(chebyshev(a, a), 0);
    }

    #[test]
    fn step_cost_diagonal_vs_straight() {
        let a = Point::new(4, 4);
        assert_eq!(step_cost(a, Point::new(5, 4)), COST_STRAIGHT);
        assert_eq!(step_cost(a, Point::new(4, 3)), COST_STRAIGHT);
        assert_eq!(step_cost(a, Point::new(5, 5)), COST_DIAGONAL);
        assert_eq!(step_cost(a, Point::new(3, 5)), COST_DIAGONAL);
    }
}
